pub mod catalog;
pub mod classify;
pub mod evaluate;
pub mod export;
pub mod measure;
pub mod resolve;

use effluent_types::{EvaluationReport, FormState};

/// EffluentEngine entry point
pub struct EffluentEngine;

impl EffluentEngine {
    pub fn new() -> Self {
        Self
    }

    /// Run one check action over the current form state
    pub fn check_compliance(&self, form: &FormState) -> EvaluationReport {
        let (results, overall_compliant, chart) = evaluate::evaluate_all(form);

        EvaluationReport {
            results,
            overall_compliant,
            chart,
            checked_at: chrono::Utc::now().timestamp() as u64,
        }
    }
}

impl Default for EffluentEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use effluent_types::{ComplianceTier, DischargeType, Industry, LimitValue};

    fn form(industry: Industry, tier: ComplianceTier) -> FormState {
        FormState::new(industry, tier, DischargeType::Direct)
    }

    fn result_for<'a>(report: &'a EvaluationReport, id: &str) -> &'a effluent_types::EvaluationResult {
        report.results.iter().find(|r| r.param_id == id).unwrap()
    }

    #[test]
    fn test_cadmium_over_foundational_limit_fails() {
        let engine = EffluentEngine::new();
        let mut form = form(Industry::Textile, ComplianceTier::Foundational);
        form.set_input("cadmium", "0.02");

        let report = engine.check_compliance(&form);
        let cadmium = result_for(&report, "cadmium");
        assert_eq!(cadmium.resolved_limit, Some(LimitValue::Scalar(0.01)));
        assert!(!cadmium.compliant);
        assert!(!report.overall_compliant);
    }

    #[test]
    fn test_chromium_vi_at_leather_aspirational_limit_passes() {
        let engine = EffluentEngine::new();
        let mut form = form(Industry::Leather, ComplianceTier::Aspirational);
        form.set_input("chromium_vi", "0.01");

        let report = engine.check_compliance(&form);
        let chromium = result_for(&report, "chromium_vi");
        assert_eq!(chromium.resolved_limit, Some(LimitValue::Scalar(0.01)));
        assert!(chromium.compliant);
        assert!(report.overall_compliant);
    }

    #[test]
    fn test_ph_inside_band_passes() {
        let engine = EffluentEngine::new();
        let mut form = form(Industry::Textile, ComplianceTier::Progressive);
        form.set_input("ph", "7.5");

        let report = engine.check_compliance(&form);
        let ph = result_for(&report, "ph");
        assert_eq!(
            ph.resolved_limit,
            Some(LimitValue::Range { min: 6.0, max: 9.0 })
        );
        assert!(ph.compliant);
    }

    #[test]
    fn test_ph_below_band_fails() {
        let engine = EffluentEngine::new();
        let mut form = form(Industry::Textile, ComplianceTier::Progressive);
        form.set_input("ph", "5.5");

        let report = engine.check_compliance(&form);
        assert!(!result_for(&report, "ph").compliant);
        assert!(!report.overall_compliant);
    }

    #[test]
    fn test_mrsl_substance_resolves_foundational_at_any_tier() {
        let engine = EffluentEngine::new();
        let mut form = form(Industry::Leather, ComplianceTier::Aspirational);
        form.set_input("phthalates", "2.5");

        let report = engine.check_compliance(&form);
        let phthalates = result_for(&report, "phthalates");
        assert_eq!(phthalates.resolved_limit, Some(LimitValue::Scalar(3.0)));
        assert!(phthalates.compliant);
    }

    #[test]
    fn test_report_covers_every_catalog_parameter() {
        let engine = EffluentEngine::new();
        let report = engine.check_compliance(&form(
            Industry::Textile,
            ComplianceTier::Foundational,
        ));
        assert_eq!(report.results.len(), catalog::parameters().len());
    }
}
