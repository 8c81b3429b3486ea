//! Heavy metal limits in wastewater (mg/L)
//!
//! Total chromium and chromium (VI) carry separate textile and leather
//! branches; tannery effluent has its own chromium ceilings. All other
//! metals share one set of limits across both industries.

use crate::resolve::{LimitSpec, TierLimits};
use effluent_types::{LimitValue, ParameterCategory};

use super::{scalar_param, ParameterEntry};

const UNIT: &str = "mg/L";

fn scalar(value: f64) -> LimitValue {
    LimitValue::Scalar(value)
}

fn tiers(foundational: f64, progressive: f64, aspirational: f64) -> TierLimits {
    TierLimits::per_tier(
        scalar(foundational),
        scalar(progressive),
        scalar(aspirational),
    )
}

fn flat(foundational: f64, progressive: f64, aspirational: f64) -> LimitSpec {
    LimitSpec::flat(tiers(foundational, progressive, aspirational))
}

pub(super) fn entries() -> Vec<ParameterEntry> {
    let cat = ParameterCategory::HeavyMetal;
    vec![
        scalar_param("antimony", "Antimony (Sb)", UNIT, cat, flat(0.1, 0.05, 0.02)),
        scalar_param("arsenic", "Arsenic (As)", UNIT, cat, flat(0.05, 0.01, 0.005)),
        scalar_param(
            "cadmium",
            "Cadmium (Cd)",
            UNIT,
            cat,
            flat(0.01, 0.005, 0.001),
        ),
        scalar_param(
            "chromium_total",
            "Chromium, Total (Cr)",
            UNIT,
            cat,
            LimitSpec::split(tiers(0.2, 0.1, 0.05), tiers(1.0, 0.5, 0.2)),
        ),
        scalar_param(
            "chromium_vi",
            "Chromium (VI)",
            UNIT,
            cat,
            LimitSpec::split(tiers(0.05, 0.02, 0.005), tiers(0.1, 0.05, 0.01)),
        ),
        scalar_param("cobalt", "Cobalt (Co)", UNIT, cat, flat(0.05, 0.02, 0.01)),
        scalar_param("copper", "Copper (Cu)", UNIT, cat, flat(0.25, 0.1, 0.05)),
        scalar_param("lead", "Lead (Pb)", UNIT, cat, flat(0.1, 0.05, 0.01)),
        scalar_param(
            "mercury",
            "Mercury (Hg)",
            UNIT,
            cat,
            flat(0.01, 0.005, 0.001),
        ),
        scalar_param("nickel", "Nickel (Ni)", UNIT, cat, flat(0.2, 0.1, 0.05)),
        scalar_param("zinc", "Zinc (Zn)", UNIT, cat, flat(1.0, 0.5, 0.2)),
    ]
}
