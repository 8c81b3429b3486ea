//! Session-scoped form state and the JSON documents derived from it

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::{ComplianceTier, DischargeType, EvaluationResult, Industry};

/// Everything the user has entered: raw input text per parameter id plus
/// the three selectors
///
/// Inputs are raw text, possibly empty or non-numeric; parsing happens at
/// evaluation time. One value per parameter, no history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    #[serde(default)]
    pub inputs: BTreeMap<String, String>,
    pub industry: Industry,
    pub compliance_tier: ComplianceTier,
    pub discharge_type: DischargeType,
}

impl FormState {
    pub fn new(
        industry: Industry,
        compliance_tier: ComplianceTier,
        discharge_type: DischargeType,
    ) -> Self {
        Self {
            inputs: BTreeMap::new(),
            industry,
            compliance_tier,
            discharge_type,
        }
    }

    /// Set or replace the raw input for a parameter
    pub fn set_input(&mut self, param_id: impl Into<String>, raw: impl Into<String>) {
        self.inputs.insert(param_id.into(), raw.into());
    }

    pub fn input(&self, param_id: &str) -> Option<&str> {
        self.inputs.get(param_id).map(String::as_str)
    }
}

/// Payload of the per-user `"latest"` persistence slot (overwrite-only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDocument {
    #[serde(flatten)]
    pub form: FormState,
    pub saved_at: DateTime<Utc>,
}

/// Downloadable export of a check: the form state plus its results
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(flatten)]
    pub form: FormState,
    pub results: Vec<EvaluationResult>,
    pub overall_compliant: bool,
    pub exported_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_form() -> FormState {
        let mut form = FormState::new(
            Industry::Textile,
            ComplianceTier::Foundational,
            DischargeType::Direct,
        );
        form.set_input("cod", "120");
        form.set_input("ph", "7.2");
        form
    }

    #[test]
    fn test_form_document_round_trip() {
        let doc = FormDocument {
            form: sample_form(),
            saved_at: Utc::now(),
        };
        let json = serde_json::to_string(&doc).unwrap();
        let back: FormDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back.form, doc.form);
    }

    #[test]
    fn test_document_fields_are_flattened_camel_case() {
        let doc = FormDocument {
            form: sample_form(),
            saved_at: Utc::now(),
        };
        let value: serde_json::Value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["industry"], "textile");
        assert_eq!(value["complianceTier"], "foundational");
        assert_eq!(value["dischargeType"], "direct");
        assert_eq!(value["inputs"]["cod"], "120");
    }

    #[test]
    fn test_missing_inputs_default_to_empty() {
        let json = r#"{
            "industry": "leather",
            "complianceTier": "progressive",
            "dischargeType": "indirect",
            "savedAt": "2026-01-15T10:00:00Z"
        }"#;
        let doc: FormDocument = serde_json::from_str(json).unwrap();
        assert!(doc.form.inputs.is_empty());
        assert_eq!(doc.form.industry, Industry::Leather);
    }
}
