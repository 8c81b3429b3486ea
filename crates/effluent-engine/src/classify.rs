//! Compliance classification of a measured value against a resolved limit

use effluent_types::LimitValue;

/// Classify a measured value against its resolved limit
///
/// An absent value or absent limit classifies as compliant: an unmeasured
/// or unbounded parameter cannot fail. Both scalar ceilings and range
/// bounds are inclusive, so a value exactly at the limit passes.
pub fn classify(measured: Option<f64>, limit: Option<&LimitValue>) -> bool {
    let (value, limit) = match (measured, limit) {
        (Some(v), Some(l)) => (v, l),
        _ => return true,
    };

    match *limit {
        LimitValue::Scalar(max) => value <= max,
        LimitValue::Range { min, max } => min <= value && value <= max,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CEILING: LimitValue = LimitValue::Scalar(0.01);
    const BAND: LimitValue = LimitValue::Range { min: 6.0, max: 9.0 };

    #[test]
    fn test_absent_value_is_compliant() {
        assert!(classify(None, Some(&CEILING)));
        assert!(classify(None, Some(&BAND)));
    }

    #[test]
    fn test_absent_limit_is_compliant() {
        assert!(classify(Some(99999.0), None));
        assert!(classify(None, None));
    }

    #[test]
    fn test_scalar_boundary_is_inclusive() {
        assert!(classify(Some(0.01), Some(&CEILING)));
        assert!(!classify(Some(0.01 + 1e-9), Some(&CEILING)));
        assert!(classify(Some(0.005), Some(&CEILING)));
    }

    #[test]
    fn test_range_boundaries_are_inclusive() {
        assert!(classify(Some(6.0), Some(&BAND)));
        assert!(classify(Some(9.0), Some(&BAND)));
        assert!(classify(Some(7.5), Some(&BAND)));
    }

    #[test]
    fn test_range_violations() {
        assert!(!classify(Some(5.5), Some(&BAND)));
        assert!(!classify(Some(9.1), Some(&BAND)));
    }
}
