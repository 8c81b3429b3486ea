pub mod form;
pub mod types;

pub use form::{ExportDocument, FormDocument, FormState};
pub use types::{
    ChartPoint, ComplianceTier, DischargeType, EvaluationReport, EvaluationResult, Industry,
    LimitValue, ParameterCategory,
};
