//! Fixture scenarios for the full evaluation pipeline
//!
//! Default Drake conductor, 80 °C limit. Expected temperatures and ampacities
//! were computed independently from the same heat balance and solver rules.
//!
//! Run with: `cargo test --test rating_scenarios`

mod common;

use approx::assert_relative_eq;
use line_rating_core::assessment::{classify_icing_snow, rating_percent};
use line_rating_core::{
    Amperes, Celsius, ConvectionModel, EnvironmentalState, Evaluator, IcingLevel, MetersPerSecond,
    RiskLevel, Saturation, SnowLikelihood, WattsPerSquareMeter,
};

fn state(
    air: f64,
    mean: f64,
    gust: f64,
    irradiance: f64,
    current: f64,
    model: ConvectionModel,
) -> EnvironmentalState {
    EnvironmentalState::new(
        Celsius::new(air),
        MetersPerSecond::new(mean),
        MetersPerSecond::new(gust),
        WattsPerSquareMeter::new(irradiance),
        Amperes::new(current),
        model,
    )
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIO A: GUST BLENDING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_a_effective_wind_is_exact_for_both_models() {
    let evaluator = Evaluator::default();
    for model in ConvectionModel::ALL {
        let eval = evaluator.evaluate(&state(15.0, 2.0, 8.0, 300.0, 500.0, model));
        // 2 + 0.35 × (8 − 2)
        assert_eq!(*eval.effective_wind, 4.1, "{model}");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIO B: REFERENCE CONDITION
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_scenario_b_reference_ampacities() {
    let evaluator = Evaluator::default();
    let heuristic = *evaluator.reference_ampacity(ConvectionModel::Heuristic);
    let split = *evaluator.reference_ampacity(ConvectionModel::Split);

    assert_relative_eq!(heuristic, 777.3, epsilon = 1.0);
    assert_relative_eq!(split, 896.5, epsilon = 1.0);
}

#[test]
fn test_scenario_b_reference_is_reused_unchanged() {
    let evaluator = Evaluator::default();
    let others = [
        (0.0, 2.0, 8.0, 400.0, 600.0),
        (-12.0, 0.0, 0.0, 0.0, 0.0),
        (42.0, 0.3, 1.1, 1050.0, 900.0),
        (20.0, 7.0, 12.0, 150.0, 1500.0),
    ];
    for model in ConvectionModel::ALL {
        let reference = evaluator.evaluate(&evaluator.config().reference.state(model));
        assert_eq!(reference.rating_percent, 100.0);
        assert_eq!(reference.ampacity, reference.reference_ampacity);

        for (air, mean, gust, sun, amps) in others {
            let eval = evaluator.evaluate(&state(air, mean, gust, sun, amps, model));
            assert_eq!(
                eval.reference_ampacity.to_bits(),
                reference.ampacity.to_bits(),
                "{model} reference drifted at air {air}"
            );
            assert_eq!(
                eval.rating_percent,
                rating_percent(*eval.ampacity, *reference.ampacity)
            );
        }
    }
}

#[test]
fn test_scenario_b_hot_still_air_is_elevated() {
    let evaluator = Evaluator::default();
    let eval = evaluator.evaluate(&state(35.0, 0.6, 0.6, 800.0, 0.0, ConvectionModel::Heuristic));
    assert_eq!(eval.risk, RiskLevel::Elevated);
    assert_eq!(eval.icing, IcingLevel::Low);
    assert_eq!(eval.snow, SnowLikelihood::Unlikely);
}

// ═══════════════════════════════════════════════════════════════════════════════
// SCENARIO C: COLD, BREEZY, MODERATE LOAD
// ═══════════════════════════════════════════════════════════════════════════════

/// Air 0 °C, mean 2 / gust 8 m/s (effective 4.1), 400 W/m², 600 A
fn scenario_c(model: ConvectionModel) -> EnvironmentalState {
    state(0.0, 2.0, 8.0, 400.0, 600.0, model)
}

#[test]
fn test_scenario_c_conductor_temperatures() {
    let evaluator = Evaluator::default();
    let heuristic = evaluator.evaluate(&scenario_c(ConvectionModel::Heuristic));
    let split = evaluator.evaluate(&scenario_c(ConvectionModel::Split));

    // Fixture expectations: heuristic ≈ 15.47 °C, split ≈ 13.01 °C
    assert_relative_eq!(*heuristic.conductor_temperature, 15.47, epsilon = 0.05);
    assert_relative_eq!(*split.conductor_temperature, 13.01, epsilon = 0.05);

    for eval in [heuristic, split] {
        assert!(*eval.conductor_temperature < 80.0);
        assert_eq!(eval.thermal.saturation, Saturation::None);
        assert!(eval.thermal.iterations < 10);
    }
    assert!(
        (*heuristic.conductor_temperature - *split.conductor_temperature).abs() > 1.0,
        "models should disagree measurably"
    );
}

#[test]
fn test_scenario_c_wind_sensitivity_differs_between_models() {
    let evaluator = Evaluator::default();
    let spread = |model| {
        let calm = evaluator.evaluate(&state(0.0, 1.0, 1.0, 400.0, 600.0, model));
        let windy = evaluator.evaluate(&state(0.0, 8.0, 8.0, 400.0, 600.0, model));
        *calm.conductor_temperature - *windy.conductor_temperature
    };
    let heuristic = spread(ConvectionModel::Heuristic);
    let split = spread(ConvectionModel::Split);

    // 1 → 8 m/s cools the conductor by ≈ 10.6 °C (heuristic) vs ≈ 9.8 °C (split)
    assert_relative_eq!(heuristic, 10.6, epsilon = 0.1);
    assert_relative_eq!(split, 9.78, epsilon = 0.1);
    assert!((heuristic - split).abs() > 0.5);
}

#[test]
fn test_scenario_c_derived_assessments() {
    let evaluator = Evaluator::default();
    let heuristic = evaluator.evaluate(&scenario_c(ConvectionModel::Heuristic));
    let split = evaluator.evaluate(&scenario_c(ConvectionModel::Split));

    assert_relative_eq!(*heuristic.ampacity, 1418.9, epsilon = 1.0);
    assert_relative_eq!(*split.ampacity, 1882.8, epsilon = 1.0);
    assert_relative_eq!(heuristic.rating_percent, 182.5, epsilon = 0.3);
    assert_relative_eq!(split.rating_percent, 210.0, epsilon = 0.3);

    // Cold, windy and lightly loaded
    assert_eq!(heuristic.risk, RiskLevel::Optimal);
    assert_eq!(split.risk, RiskLevel::Optimal);

    // Too windy and sunny for ice, too sunny for wet snow
    let expected = classify_icing_snow(0.0, 4.1, 400.0);
    assert_eq!(heuristic.icing, expected.icing);
    assert_eq!(heuristic.icing, IcingLevel::Low);
    assert_eq!(split.snow, SnowLikelihood::Unlikely);

    // Warmer conductor sags further
    assert!(heuristic.sag > split.sag);
}

// ═══════════════════════════════════════════════════════════════════════════════
// NO THERMAL MARGIN
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_ambient_above_limit_yields_zero_ampacity_and_critical_risk() {
    let evaluator = Evaluator::default();
    for model in ConvectionModel::ALL {
        let eval = evaluator.evaluate(&state(85.0, 1.0, 1.0, 0.0, 0.0, model));
        assert_eq!(*eval.ampacity, 0.0);
        assert_eq!(eval.rating_percent, 0.0);
        assert_eq!(*eval.conductor_temperature, 80.0);
        assert_eq!(eval.thermal.saturation, Saturation::Limit);
        assert_eq!(eval.risk, RiskLevel::Critical);
    }
}

#[test]
fn test_icy_calm_night() {
    let evaluator = Evaluator::default();
    let eval = evaluator.evaluate(&state(-3.0, 0.5, 2.0, 0.0, 200.0, ConvectionModel::Split));
    assert_eq!(eval.icing, IcingLevel::High);
    assert_eq!(eval.snow, SnowLikelihood::Possible);
    assert!(*eval.conductor_temperature > -3.0);
}
