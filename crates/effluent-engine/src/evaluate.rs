//! Evaluation orchestrator: one pass over the catalog per check action

use crate::{catalog, classify, measure};
use effluent_types::{ChartPoint, EvaluationResult, FormState, LimitValue, ParameterCategory};

/// Evaluate every catalog parameter against the current form state
///
/// Stateless and recomputed in full on every call. Parameters are visited
/// in catalog declaration order. The discharge type travels with the form
/// for persistence and display but plays no part in limit resolution.
pub fn evaluate_all(form: &FormState) -> (Vec<EvaluationResult>, bool, Vec<ChartPoint>) {
    let mut results = Vec::with_capacity(catalog::parameters().len());
    let mut chart = Vec::new();

    for entry in catalog::parameters() {
        let raw = form.input(entry.def.id).unwrap_or("");
        let measured = measure::parse_measured(raw);
        let limit = entry.limits.resolve(form.industry, form.compliance_tier);
        let compliant = classify::classify(measured, limit.as_ref());

        if entry.def.category != ParameterCategory::Sludge {
            if let (Some(value), Some(limit)) = (measured, limit) {
                chart.push(ChartPoint {
                    param_id: entry.def.id.to_string(),
                    display_name: entry.def.display_name.to_string(),
                    unit: entry.def.unit.to_string(),
                    measured_value: value,
                    limit: limit.plot_value(),
                    range_min: match limit {
                        LimitValue::Range { min, .. } => Some(min),
                        LimitValue::Scalar(_) => None,
                    },
                });
            }
        }

        results.push(EvaluationResult {
            param_id: entry.def.id.to_string(),
            display_name: entry.def.display_name.to_string(),
            unit: entry.def.unit.to_string(),
            category: entry.def.category,
            measured_value: measured,
            resolved_limit: limit,
            compliant,
        });
    }

    let overall_compliant = results.iter().all(|r| r.compliant);
    (results, overall_compliant, chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use effluent_types::{ComplianceTier, DischargeType, Industry};
    use pretty_assertions::assert_eq;

    fn empty_form() -> FormState {
        FormState::new(
            Industry::Textile,
            ComplianceTier::Foundational,
            DischargeType::Direct,
        )
    }

    #[test]
    fn test_empty_form_is_vacuously_compliant() {
        let (results, overall, chart) = evaluate_all(&empty_form());
        assert_eq!(results.len(), catalog::parameters().len());
        assert!(overall);
        assert!(results.iter().all(|r| r.compliant));
        assert!(chart.is_empty());
    }

    #[test]
    fn test_results_follow_catalog_order() {
        let (results, _, _) = evaluate_all(&empty_form());
        let expected: Vec<&str> = catalog::parameters().iter().map(|e| e.def.id).collect();
        let actual: Vec<&str> = results.iter().map(|r| r.param_id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_single_failure_flips_overall_flag() {
        let mut form = empty_form();
        form.set_input("cadmium", "0.02");
        let (results, overall, _) = evaluate_all(&form);
        assert!(!overall);
        let failing: Vec<_> = results.iter().filter(|r| !r.compliant).collect();
        assert_eq!(failing.len(), 1);
        assert_eq!(failing[0].param_id, "cadmium");
    }

    #[test]
    fn test_unparsable_input_stays_compliant() {
        let mut form = empty_form();
        form.set_input("cadmium", "not measured");
        let (results, overall, chart) = evaluate_all(&form);
        assert!(overall);
        let cadmium = results.iter().find(|r| r.param_id == "cadmium").unwrap();
        assert_eq!(cadmium.measured_value, None);
        assert!(cadmium.compliant);
        assert!(chart.is_empty());
    }

    #[test]
    fn test_chart_excludes_unmeasured_parameters() {
        let mut form = empty_form();
        form.set_input("cod", "120");
        let (_, _, chart) = evaluate_all(&form);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].param_id, "cod");
        assert_eq!(chart[0].measured_value, 120.0);
        assert_eq!(chart[0].limit, 150.0);
        assert_eq!(chart[0].range_min, None);
    }

    #[test]
    fn test_chart_excludes_sludge_even_when_measured() {
        let mut form = empty_form();
        form.set_input("sludge_zinc", "100");
        form.set_input("zinc", "0.5");
        let (results, _, chart) = evaluate_all(&form);
        // The sludge value is still evaluated, just not charted.
        let sludge = results
            .iter()
            .find(|r| r.param_id == "sludge_zinc")
            .unwrap();
        assert_eq!(sludge.measured_value, Some(100.0));
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].param_id, "zinc");
    }

    #[test]
    fn test_range_chart_point_carries_both_bounds() {
        let mut form = empty_form();
        form.set_input("ph", "7.5");
        let (_, _, chart) = evaluate_all(&form);
        assert_eq!(chart.len(), 1);
        assert_eq!(chart[0].param_id, "ph");
        assert_eq!(chart[0].limit, 9.0);
        assert_eq!(chart[0].range_min, Some(6.0));
    }

    #[test]
    fn test_discharge_type_does_not_affect_results() {
        let mut direct = empty_form();
        direct.set_input("cod", "120");
        let mut zld = direct.clone();
        zld.discharge_type = DischargeType::ZeroLiquidDischarge;

        let (results_a, overall_a, chart_a) = evaluate_all(&direct);
        let (results_b, overall_b, chart_b) = evaluate_all(&zld);
        assert_eq!(results_a, results_b);
        assert_eq!(overall_a, overall_b);
        assert_eq!(chart_a, chart_b);
    }
}
