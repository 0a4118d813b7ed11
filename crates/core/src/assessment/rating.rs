//! Dynamic rating relative to a fixed reference condition

/// Upper clamp of the rating percentage
pub const MAX_RATING_PERCENT: f64 = 300.0;

/// Ampacity under current conditions as a percentage of the reference ampacity.
///
/// Clamped to `[0, MAX_RATING_PERCENT]` and always finite. A reference that is
/// not a positive finite number (the reference condition itself has no
/// margin) yields 0 %.
///
/// # Examples
/// ```
/// use line_rating_core::assessment::rating_percent;
///
/// assert_eq!(rating_percent(777.3, 777.3), 100.0);
/// assert_eq!(rating_percent(1500.0, 500.0), 300.0);
/// ```
pub fn rating_percent(ampacity: f64, reference_ampacity: f64) -> f64 {
    if !(reference_ampacity.is_finite() && reference_ampacity > 0.0) {
        return 0.0;
    }
    let percent = 100.0 * (ampacity / reference_ampacity);
    if percent.is_nan() {
        return 0.0;
    }
    percent.clamp(0.0, MAX_RATING_PERCENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_exactly_one_hundred() {
        for a in [0.5, 777.34375, 965.8203125, 1234.5678] {
            assert_eq!(rating_percent(a, a), 100.0);
        }
    }

    #[test]
    fn test_clamped() {
        assert_eq!(rating_percent(4000.0, 800.0), 300.0);
        assert_eq!(rating_percent(-10.0, 800.0), 0.0);
        assert_eq!(rating_percent(f64::INFINITY, 800.0), 300.0);
    }

    #[test]
    fn test_degenerate_reference() {
        assert_eq!(rating_percent(900.0, 0.0), 0.0);
        assert_eq!(rating_percent(0.0, 0.0), 0.0);
        assert_eq!(rating_percent(900.0, f64::NAN), 0.0);
        assert_eq!(rating_percent(f64::NAN, 900.0), 0.0);
    }

    #[test]
    fn test_proportional() {
        assert!((rating_percent(1200.0, 800.0) - 150.0).abs() < 1e-12);
    }
}
