//! Static parameter catalog: the guideline limit table
//!
//! One module per parameter category, assembled into a single ordered
//! catalog. Declaration order (MRSL, heavy metals, conventional, sludge)
//! is the evaluation and report order.

pub mod conventional;
pub mod metals;
pub mod mrsl;
pub mod sludge;

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::resolve::LimitSpec;
use effluent_types::ParameterCategory;

/// Immutable definition of a measurable parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterDef {
    pub id: &'static str,
    pub display_name: &'static str,
    pub unit: &'static str,
    pub category: ParameterCategory,
    pub is_range: bool,
}

/// A parameter together with its limit specification
#[derive(Debug, Clone)]
pub struct ParameterEntry {
    pub def: ParameterDef,
    pub limits: LimitSpec,
}

pub(crate) fn scalar_param(
    id: &'static str,
    display_name: &'static str,
    unit: &'static str,
    category: ParameterCategory,
    limits: LimitSpec,
) -> ParameterEntry {
    ParameterEntry {
        def: ParameterDef {
            id,
            display_name,
            unit,
            category,
            is_range: false,
        },
        limits,
    }
}

pub(crate) fn range_param(
    id: &'static str,
    display_name: &'static str,
    unit: &'static str,
    category: ParameterCategory,
    limits: LimitSpec,
) -> ParameterEntry {
    ParameterEntry {
        def: ParameterDef {
            id,
            display_name,
            unit,
            category,
            is_range: true,
        },
        limits,
    }
}

lazy_static! {
    static ref CATALOG: Vec<ParameterEntry> = {
        let mut entries = Vec::new();
        entries.extend(mrsl::entries());
        entries.extend(metals::entries());
        entries.extend(conventional::entries());
        entries.extend(sludge::entries());
        entries
    };
    static ref INDEX: HashMap<&'static str, usize> = CATALOG
        .iter()
        .enumerate()
        .map(|(i, entry)| (entry.def.id, i))
        .collect();
}

/// All parameters in evaluation order
pub fn parameters() -> &'static [ParameterEntry] {
    &CATALOG
}

/// Look up a parameter by id
pub fn lookup(id: &str) -> Option<&'static ParameterEntry> {
    INDEX.get(id).map(|&i| &CATALOG[i])
}
