//! Core types for wastewater guideline compliance checking
//!
//! Limits are organized along two axes:
//! - Industry (textile vs leather) where the guideline values diverge
//! - Compliance tier (Foundational / Progressive / Aspirational), with
//!   Foundational as the universal fallback when a tier has no value

use serde::{Deserialize, Serialize};

/// Industry branch of the limit table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Industry {
    Textile,
    Leather,
}

impl Industry {
    pub fn name(&self) -> &'static str {
        match self {
            Industry::Textile => "Textile",
            Industry::Leather => "Leather",
        }
    }

    /// Parse from code or name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "textile" => Some(Industry::Textile),
            "leather" => Some(Industry::Leather),
            _ => None,
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Guideline compliance tier, from baseline to most ambitious
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceTier {
    Foundational,
    Progressive,
    Aspirational,
}

impl ComplianceTier {
    pub fn name(&self) -> &'static str {
        match self {
            ComplianceTier::Foundational => "Foundational",
            ComplianceTier::Progressive => "Progressive",
            ComplianceTier::Aspirational => "Aspirational",
        }
    }

    /// Parse from name (case-insensitive)
    pub fn parse_code(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "foundational" => Some(ComplianceTier::Foundational),
            "progressive" => Some(ComplianceTier::Progressive),
            "aspirational" => Some(ComplianceTier::Aspirational),
            _ => None,
        }
    }
}

impl std::fmt::Display for ComplianceTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// How treated effluent leaves the facility
///
/// Captured with the form and persisted, but not consulted during limit
/// resolution: the guideline dataset does not distinguish discharge routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DischargeType {
    Direct,
    Indirect,
    ZeroLiquidDischarge,
}

impl DischargeType {
    pub fn name(&self) -> &'static str {
        match self {
            DischargeType::Direct => "Direct discharge",
            DischargeType::Indirect => "Indirect discharge",
            DischargeType::ZeroLiquidDischarge => "Zero liquid discharge",
        }
    }
}

impl std::fmt::Display for DischargeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Parameter grouping, in report order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParameterCategory {
    Mrsl,
    HeavyMetal,
    Conventional,
    Sludge,
}

impl ParameterCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ParameterCategory::Mrsl => "MRSL Substances",
            ParameterCategory::HeavyMetal => "Heavy Metals",
            ParameterCategory::Conventional => "Conventional Parameters",
            ParameterCategory::Sludge => "Sludge",
        }
    }
}

/// A resolved guideline limit: either a ceiling or an acceptance band
///
/// Untagged so a scalar limit serializes as a bare number and a range as
/// `{"min": .., "max": ..}`, the shape the stored documents use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LimitValue {
    Scalar(f64),
    Range { min: f64, max: f64 },
}

impl LimitValue {
    pub fn is_range(&self) -> bool {
        matches!(self, LimitValue::Range { .. })
    }

    /// The value plotted as the limit bar: the ceiling, or the upper bound
    /// of a band
    pub fn plot_value(&self) -> f64 {
        match self {
            LimitValue::Scalar(v) => *v,
            LimitValue::Range { max, .. } => *max,
        }
    }
}

/// Outcome for a single parameter, recomputed wholesale on every check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub param_id: String,
    pub display_name: String,
    pub unit: String,
    pub category: ParameterCategory,
    pub measured_value: Option<f64>,
    pub resolved_limit: Option<LimitValue>,
    pub compliant: bool,
}

/// One bar in the measured-vs-limit chart
///
/// Only parameters with both a measured value and a resolved limit appear;
/// for range parameters `limit` is the upper bound and `range_min` carries
/// the lower bound for reference-line rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPoint {
    pub param_id: String,
    pub display_name: String,
    pub unit: String,
    pub measured_value: f64,
    pub limit: f64,
    pub range_min: Option<f64>,
}

/// Full result of one check action
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationReport {
    pub results: Vec<EvaluationResult>,
    pub overall_compliant: bool,
    pub chart: Vec<ChartPoint>,
    pub checked_at: u64,
}
