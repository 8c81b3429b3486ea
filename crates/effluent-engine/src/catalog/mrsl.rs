//! MRSL substance limits in wastewater
//!
//! The guideline defines a single detection-oriented limit for each
//! restricted substance group, so every entry is Foundational-only and the
//! tier fallback applies whenever Progressive or Aspirational is requested.

use crate::resolve::{LimitSpec, TierLimits};
use effluent_types::{LimitValue, ParameterCategory};

use super::{scalar_param, ParameterEntry};

const UNIT: &str = "µg/L";

fn foundational(value: f64) -> LimitSpec {
    LimitSpec::flat(TierLimits::foundational_only(LimitValue::Scalar(value)))
}

pub(super) fn entries() -> Vec<ParameterEntry> {
    let cat = ParameterCategory::Mrsl;
    vec![
        scalar_param(
            "alkylphenols",
            "Alkylphenols (AP)",
            UNIT,
            cat,
            foundational(5.0),
        ),
        scalar_param(
            "alkylphenol_ethoxylates",
            "Alkylphenol Ethoxylates (APEO)",
            UNIT,
            cat,
            foundational(5.0),
        ),
        scalar_param(
            "chlorobenzenes",
            "Chlorobenzenes & Chlorotoluenes",
            UNIT,
            cat,
            foundational(1.0),
        ),
        scalar_param(
            "chlorophenols",
            "Chlorophenols",
            UNIT,
            cat,
            foundational(0.5),
        ),
        scalar_param(
            "chlorinated_paraffins",
            "Chlorinated Paraffins (SCCP)",
            UNIT,
            cat,
            foundational(1.0),
        ),
        scalar_param(
            "azo_amines",
            "Azo Dyes (Cleavable Amines)",
            UNIT,
            cat,
            foundational(5.0),
        ),
        scalar_param(
            "flame_retardants",
            "Halogenated Flame Retardants",
            UNIT,
            cat,
            foundational(5.0),
        ),
        scalar_param(
            "organotins",
            "Organotin Compounds",
            UNIT,
            cat,
            foundational(1.0),
        ),
        scalar_param(
            "pfas",
            "Per- and Polyfluoroalkyl Substances (PFAS)",
            UNIT,
            cat,
            foundational(1.0),
        ),
        scalar_param("phthalates", "Phthalates", UNIT, cat, foundational(3.0)),
    ]
}
