//! Sludge metal limits (mg/kg dry weight)
//!
//! The guideline publishes no Progressive or Aspirational sludge data, so
//! every entry is Foundational-only. Sludge parameters are also excluded
//! from chart projection; see the evaluator.

use crate::resolve::{LimitSpec, TierLimits};
use effluent_types::{LimitValue, ParameterCategory};

use super::{scalar_param, ParameterEntry};

const UNIT: &str = "mg/kg dw";

fn foundational(value: f64) -> LimitSpec {
    LimitSpec::flat(TierLimits::foundational_only(LimitValue::Scalar(value)))
}

pub(super) fn entries() -> Vec<ParameterEntry> {
    let cat = ParameterCategory::Sludge;
    vec![
        scalar_param(
            "sludge_arsenic",
            "Arsenic in Sludge",
            UNIT,
            cat,
            foundational(41.0),
        ),
        scalar_param(
            "sludge_cadmium",
            "Cadmium in Sludge",
            UNIT,
            cat,
            foundational(39.0),
        ),
        scalar_param(
            "sludge_chromium",
            "Chromium in Sludge",
            UNIT,
            cat,
            foundational(1000.0),
        ),
        scalar_param(
            "sludge_copper",
            "Copper in Sludge",
            UNIT,
            cat,
            foundational(1500.0),
        ),
        scalar_param(
            "sludge_lead",
            "Lead in Sludge",
            UNIT,
            cat,
            foundational(300.0),
        ),
        scalar_param(
            "sludge_mercury",
            "Mercury in Sludge",
            UNIT,
            cat,
            foundational(17.0),
        ),
        scalar_param(
            "sludge_nickel",
            "Nickel in Sludge",
            UNIT,
            cat,
            foundational(420.0),
        ),
        scalar_param(
            "sludge_zinc",
            "Zinc in Sludge",
            UNIT,
            cat,
            foundational(2800.0),
        ),
    ]
}
