use clap::Parser;
use line_rating_core::evaluation::linspace;
use line_rating_core::{
    ConductorParameters, ConvectionModel, EnvironmentalState, Evaluation, Evaluator, ModelConfig,
    SweepGrid,
};
use std::error::Error;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Overhead line thermal rating demo
#[derive(Parser, Debug)]
#[command(name = "line-rating-demo")]
#[command(about = "Steady-state conductor temperature and ampacity", long_about = None)]
struct Args {
    /// Air temperature in °C
    #[arg(short = 't', long, default_value_t = 25.0, allow_negative_numbers = true)]
    air_temperature: f64,

    /// Mean wind speed in m/s
    #[arg(short, long, default_value_t = 2.0)]
    wind: f64,

    /// Gust wind speed in m/s (defaults to the mean wind)
    #[arg(short, long)]
    gust: Option<f64>,

    /// Solar irradiance in W/m²
    #[arg(short, long, default_value_t = 800.0)]
    irradiance: f64,

    /// Line current in A
    #[arg(short, long, default_value_t = 600.0)]
    current: f64,

    /// Convection model (heuristic, split)
    #[arg(short, long, default_value_t = ConvectionModel::Heuristic)]
    model: ConvectionModel,

    /// Conductor preset (drake, linnet); overrides the config file conductor
    #[arg(short = 'p', long)]
    preset: Option<String>,

    /// TOML file with model constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    dump_config: bool,

    /// Sweep air temperature from this value (°C)
    #[arg(long, allow_negative_numbers = true)]
    sweep_from: Option<f64>,

    /// Sweep air temperature up to this value (°C)
    #[arg(long, default_value_t = 45.0, allow_negative_numbers = true)]
    sweep_to: f64,

    /// Number of sweep points
    #[arg(long, default_value_t = 12)]
    sweep_steps: usize,
}

fn main() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            info!(path = %path.display(), "loading model configuration");
            ModelConfig::load(path)?
        }
        None => ModelConfig::default(),
    };
    if let Some(preset) = &args.preset {
        config.conductor = match preset.to_lowercase().as_str() {
            "drake" => ConductorParameters::drake(),
            "linnet" => ConductorParameters::linnet(),
            other => return Err(format!("unknown conductor preset '{other}'").into()),
        };
    }

    if args.dump_config {
        print!("{}", config.to_toml_string()?);
        return Ok(());
    }

    let state = EnvironmentalState::validated(
        args.air_temperature,
        args.wind,
        args.gust.unwrap_or(args.wind),
        args.irradiance,
        args.current,
        args.model,
    )?;
    let evaluator = Evaluator::new(config)?;

    println!("=== Line Rating Demo ===\n");
    println!(
        "Conductor: {} (limit {:.0}°C), model: {}",
        evaluator.config().conductor.name,
        evaluator.config().conductor.temperature_limit,
        args.model
    );
    println!(
        "Reference ampacity: {} (heuristic), {} (split)\n",
        evaluator.reference_ampacity(ConvectionModel::Heuristic),
        evaluator.reference_ampacity(ConvectionModel::Split)
    );

    match args.sweep_from {
        Some(from) => print_sweep(&evaluator, state, from, args.sweep_to, args.sweep_steps),
        None => print_evaluation(&state, &evaluator.evaluate(&state)),
    }

    Ok(())
}

fn print_evaluation(state: &EnvironmentalState, eval: &Evaluation) {
    println!(
        "Ambient: {}, wind {} (gust {}), sun {}",
        state.air_temperature, state.mean_wind, state.gust_wind, state.irradiance
    );
    println!("Current: {}\n", state.current);
    println!("Effective wind:        {}", eval.effective_wind);
    println!(
        "Conductor temperature: {} ({:?}, {} iterations)",
        eval.conductor_temperature, eval.thermal.saturation, eval.thermal.iterations
    );
    println!(
        "Ampacity:              {} ({:?})",
        eval.ampacity, eval.ampacity_search.outcome
    );
    println!("Rating:                {:.1}%", eval.rating_percent);
    println!("Risk:                  {}", eval.risk);
    println!("Icing / snow:          {} / {}", eval.icing, eval.snow);
    println!("Sag indicator:         {:.2}", eval.sag);
}

fn print_sweep(evaluator: &Evaluator, base: EnvironmentalState, from: f64, to: f64, steps: usize) {
    let grid = SweepGrid::new(base).with_air_temperatures(linspace(from, to, steps));
    let states = grid.states();
    let results = grid.evaluate(evaluator);

    println!(
        "{:>8} {:>10} {:>12} {:>9} {:>10} {:>9}",
        "Air °C", "Tc °C", "Ampacity A", "Rating %", "Risk", "Icing"
    );
    println!("{}", "-".repeat(63));
    for (state, eval) in states.iter().zip(&results) {
        println!(
            "{:>8.1} {:>10.2} {:>12.1} {:>9.1} {:>10} {:>9}",
            *state.air_temperature,
            *eval.conductor_temperature,
            *eval.ampacity,
            eval.rating_percent,
            eval.risk.as_str(),
            eval.icing.as_str()
        );
    }
}
