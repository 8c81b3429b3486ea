//! HTTP handlers for the Effluent API

use axum::{
    extract::{Path, State},
    Json,
};
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use effluent_engine::EffluentEngine;
use effluent_types::{EvaluationReport, FormDocument, FormState};

use crate::error::ApiError;
use crate::models::*;
use crate::state::AppState;

const SLOT: &str = "latest";
const MAX_USER_ID_LEN: usize = 128;

/// Health check endpoint
pub async fn health() -> &'static str {
    "OK"
}

/// Mint an anonymous user identity
pub async fn create_identity() -> Json<IdentityResponse> {
    let user_id = Uuid::new_v4().to_string();
    tracing::info!("Minted anonymous identity: {}", user_id);
    Json(IdentityResponse { user_id })
}

/// Evaluate the posted form state against the guideline limit table
pub async fn evaluate(Json(form): Json<FormState>) -> Json<EvaluationReport> {
    let report = EffluentEngine::new().check_compliance(&form);
    Json(report)
}

/// Persist the form into the user's "latest" slot (overwrite-only)
pub async fn save_form(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
    Json(form): Json<FormState>,
) -> Result<Json<SaveFormResponse>, ApiError> {
    validate_user_id(&user_id)?;

    let saved_at = Utc::now();
    let document = FormDocument { form, saved_at };
    let document_json =
        serde_json::to_string(&document).map_err(|e| ApiError::Internal(e.into()))?;

    sqlx::query(
        r#"
        INSERT OR REPLACE INTO form_documents (user_id, slot, document_json, saved_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&user_id)
    .bind(SLOT)
    .bind(&document_json)
    .bind(saved_at.to_rfc3339())
    .execute(&state.db)
    .await?;

    tracing::info!("Saved form for user: {}", user_id);

    Ok(Json(SaveFormResponse {
        success: true,
        saved_at,
    }))
}

/// Load the user's last-saved form, if any
pub async fn load_form(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<FormDocument>, ApiError> {
    validate_user_id(&user_id)?;

    let document_json: Option<String> = sqlx::query_scalar(
        r#"
        SELECT document_json FROM form_documents
        WHERE user_id = ? AND slot = ?
        "#,
    )
    .bind(&user_id)
    .bind(SLOT)
    .fetch_optional(&state.db)
    .await?;

    let document_json = document_json.ok_or_else(|| ApiError::FormNotFound(user_id.clone()))?;

    let document: FormDocument =
        serde_json::from_str(&document_json).map_err(|e| ApiError::Internal(e.into()))?;

    Ok(Json(document))
}

/// Evaluate and package the result as a downloadable JSON document
pub async fn export(Json(form): Json<FormState>) -> Result<Json<ExportResponse>, ApiError> {
    let report = EffluentEngine::new().check_compliance(&form);
    let exported_at = Utc::now();
    let document = effluent_engine::export::build_export(&form, &report, exported_at);
    let filename = effluent_engine::export::export_filename(exported_at);

    Ok(Json(ExportResponse { filename, document }))
}

fn validate_user_id(user_id: &str) -> Result<(), ApiError> {
    if user_id.trim().is_empty() {
        return Err(ApiError::InvalidRequest("user id is empty".to_string()));
    }
    if user_id.len() > MAX_USER_ID_LEN {
        return Err(ApiError::InvalidRequest("user id too long".to_string()));
    }
    Ok(())
}
