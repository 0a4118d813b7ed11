//! Effective cooling wind from mean and gust speeds
//!
//! Gusts raise convective cooling only partially: the blended speed adds a
//! fixed fraction of the gust excess to the mean. This approximates turbulence
//! enhancement without modelling turbulence.

use crate::core_types::units::MetersPerSecond;

/// Fraction of the gust excess (gust - mean) credited to cooling
pub const GUST_BLEND_FACTOR: f64 = 0.35;

/// Blend raw mean and gust speeds (m/s) into one effective speed.
///
/// Negative inputs are floored to zero. The result is never below the
/// (floored) mean wind.
#[inline]
pub(crate) fn blend_wind(mean: f64, gust: f64) -> f64 {
    let mean = mean.max(0.0);
    let gust = gust.max(0.0);
    if gust <= mean {
        return mean;
    }
    mean + GUST_BLEND_FACTOR * (gust - mean)
}

/// Effective wind speed used as the cooling input of the heat-flux model
///
/// # Examples
/// ```
/// use line_rating_core::core_types::MetersPerSecond;
/// use line_rating_core::physics::effective_wind_speed;
///
/// let v = effective_wind_speed(MetersPerSecond::new(2.0), MetersPerSecond::new(8.0));
/// assert!((*v - 4.1).abs() < 1e-12);
/// ```
pub fn effective_wind_speed(mean: MetersPerSecond, gust: MetersPerSecond) -> MetersPerSecond {
    MetersPerSecond::new(blend_wind(*mean, *gust))
}
