//! Conductor resistance as a function of its own temperature

use crate::core_types::conductor::ConductorParameters;

/// Lowest resistance the linear model may return, as a fraction of the
/// reference resistance. Only reached far below any supported temperature.
const MIN_RESISTANCE_FRACTION: f64 = 1.0e-3;

/// Linear resistance model R(Tc) = `R_ref` × (1 + `α_R` × (Tc − `T_ref`)) in Ω/m.
///
/// Always strictly positive for a positive reference resistance.
#[inline]
pub fn resistance_at(conductor: &ConductorParameters, conductor_temperature: f64) -> f64 {
    let r_ref = conductor.resistance_at_reference;
    let linear = r_ref
        * (1.0
            + conductor.resistance_coefficient
                * (conductor_temperature - conductor.reference_temperature));
    linear.max(r_ref * MIN_RESISTANCE_FRACTION)
}
