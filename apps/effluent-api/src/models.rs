//! Data models for the Effluent API

use chrono::{DateTime, Utc};
use effluent_types::ExportDocument;
use serde::Serialize;

/// Response to an anonymous identity request
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityResponse {
    pub user_id: String,
}

/// Response after persisting a form into the "latest" slot
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveFormResponse {
    pub success: bool,
    pub saved_at: DateTime<Utc>,
}

/// Export payload: the document plus its date-stamped download filename
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportResponse {
    pub filename: String,
    pub document: ExportDocument,
}
