//! Limit resolution: industry branch selection and tier fallback

use std::collections::BTreeMap;

use effluent_types::{ComplianceTier, Industry, LimitValue};

/// Limit values per compliance tier for one parameter
///
/// Foundational is mandatory; it doubles as the fallback when the requested
/// tier has no value of its own (MRSL substances and sludge metals only
/// define the Foundational tier).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierLimits {
    pub foundational: LimitValue,
    pub progressive: Option<LimitValue>,
    pub aspirational: Option<LimitValue>,
}

impl TierLimits {
    /// A limit defined at the Foundational tier only
    pub fn foundational_only(foundational: LimitValue) -> Self {
        Self {
            foundational,
            progressive: None,
            aspirational: None,
        }
    }

    /// A limit defined at all three tiers
    pub fn per_tier(
        foundational: LimitValue,
        progressive: LimitValue,
        aspirational: LimitValue,
    ) -> Self {
        Self {
            foundational,
            progressive: Some(progressive),
            aspirational: Some(aspirational),
        }
    }

    /// Value for the requested tier, silently relaxing to Foundational when
    /// that tier has no entry
    pub fn for_tier(&self, tier: ComplianceTier) -> LimitValue {
        match tier {
            ComplianceTier::Foundational => self.foundational,
            ComplianceTier::Progressive => self.progressive.unwrap_or(self.foundational),
            ComplianceTier::Aspirational => self.aspirational.unwrap_or(self.foundational),
        }
    }
}

/// Limit specification for one parameter: universal, or split by industry
#[derive(Debug, Clone, PartialEq)]
pub enum LimitSpec {
    Flat(TierLimits),
    ByIndustry(BTreeMap<Industry, TierLimits>),
}

impl LimitSpec {
    pub fn flat(limits: TierLimits) -> Self {
        LimitSpec::Flat(limits)
    }

    pub fn split(textile: TierLimits, leather: TierLimits) -> Self {
        let mut branches = BTreeMap::new();
        branches.insert(Industry::Textile, textile);
        branches.insert(Industry::Leather, leather);
        LimitSpec::ByIndustry(branches)
    }

    /// Resolve the applicable limit for an industry and tier
    ///
    /// An industry-scoped spec without a branch for the requested industry
    /// resolves to `None`; a flat spec always resolves (the tier fallback
    /// guarantees a value).
    pub fn resolve(&self, industry: Industry, tier: ComplianceTier) -> Option<LimitValue> {
        match self {
            LimitSpec::Flat(limits) => Some(limits.for_tier(tier)),
            LimitSpec::ByIndustry(branches) => {
                branches.get(&industry).map(|limits| limits.for_tier(tier))
            }
        }
    }
}
