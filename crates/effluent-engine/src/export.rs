//! JSON export of a check: pure serialization, no decision logic

use anyhow::Result;
use chrono::{DateTime, Utc};

use effluent_types::{EvaluationReport, ExportDocument, FormState};

/// Assemble the downloadable export document from a form and its report
pub fn build_export(
    form: &FormState,
    report: &EvaluationReport,
    exported_at: DateTime<Utc>,
) -> ExportDocument {
    ExportDocument {
        form: form.clone(),
        results: report.results.clone(),
        overall_compliant: report.overall_compliant,
        exported_at,
    }
}

/// Date-stamped download filename
pub fn export_filename(date: DateTime<Utc>) -> String {
    format!("effluent-compliance-{}.json", date.format("%Y-%m-%d"))
}

/// Serialize the export document for download
pub fn to_json(document: &ExportDocument) -> Result<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
