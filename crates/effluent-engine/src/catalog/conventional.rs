//! Conventional wastewater quality parameters
//!
//! pH is the one range parameter: an acceptance band rather than a ceiling,
//! identical at every tier.

use crate::resolve::{LimitSpec, TierLimits};
use effluent_types::{LimitValue, ParameterCategory};

use super::{range_param, scalar_param, ParameterEntry};

fn scalar(value: f64) -> LimitValue {
    LimitValue::Scalar(value)
}

fn flat(foundational: f64, progressive: f64, aspirational: f64) -> LimitSpec {
    LimitSpec::flat(TierLimits::per_tier(
        scalar(foundational),
        scalar(progressive),
        scalar(aspirational),
    ))
}

fn band(min: f64, max: f64) -> LimitSpec {
    let limit = LimitValue::Range { min, max };
    LimitSpec::flat(TierLimits::per_tier(limit, limit, limit))
}

pub(super) fn entries() -> Vec<ParameterEntry> {
    let cat = ParameterCategory::Conventional;
    vec![
        range_param("ph", "pH", "", cat, band(6.0, 9.0)),
        scalar_param(
            "temperature",
            "Temperature",
            "°C",
            cat,
            flat(40.0, 35.0, 30.0),
        ),
        scalar_param(
            "cod",
            "Chemical Oxygen Demand (COD)",
            "mg/L",
            cat,
            flat(150.0, 80.0, 40.0),
        ),
        scalar_param(
            "bod5",
            "Biochemical Oxygen Demand (BOD₅)",
            "mg/L",
            cat,
            flat(30.0, 15.0, 10.0),
        ),
        scalar_param(
            "tss",
            "Total Suspended Solids (TSS)",
            "mg/L",
            cat,
            flat(50.0, 15.0, 5.0),
        ),
        scalar_param(
            "ammonium_n",
            "Ammonium Nitrogen (NH₄-N)",
            "mg/L",
            cat,
            flat(10.0, 5.0, 1.0),
        ),
        scalar_param(
            "total_n",
            "Total Nitrogen",
            "mg/L",
            cat,
            flat(20.0, 10.0, 5.0),
        ),
        scalar_param(
            "total_p",
            "Total Phosphorus",
            "mg/L",
            cat,
            flat(3.0, 1.0, 0.5),
        ),
        scalar_param(
            "oil_grease",
            "Oil & Grease",
            "mg/L",
            cat,
            flat(10.0, 5.0, 2.0),
        ),
        scalar_param("aox", "AOX", "mg/L", cat, flat(5.0, 1.0, 0.5)),
        scalar_param("sulfide", "Sulfide", "mg/L", cat, flat(0.5, 0.2, 0.05)),
        scalar_param(
            "coliform",
            "Fecal Coliform",
            "CFU/100 mL",
            cat,
            flat(400.0, 200.0, 100.0),
        ),
    ]
}
