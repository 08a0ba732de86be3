//! Axum route handlers for the CV analysis API.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::decode::{decode, RawDocument};
use crate::analysis::models::{AnalysisResult, ExtractedRecord};
use crate::analysis::validate::{validate_record, ContentValidation};
use crate::analysis::{analyze, AnalysisError};
use crate::errors::AppError;
use crate::state::AppState;

const UPLOAD_FIELD: &str = "file";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub record: ExtractedRecord,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub file_name: String,
    pub file_size: usize,
    pub file_type: String,
    pub extracted_text: String,
    pub analysis: AnalysisResult,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/cv/analyze
///
/// Runs the analysis pipeline over pasted CV text.
pub async fn handle_analyze(
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    let result = tokio::task::spawn_blocking(move || analyze(&request.text))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in analysis: {e}")))??;

    Ok(Json(result))
}

/// POST /api/v1/cv/upload
///
/// Accepts a multipart upload (field `file`), decodes it to text and analyzes it.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut document: Option<RawDocument> = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        document = Some(RawDocument::new(
            file_name,
            content_type.as_deref(),
            bytes,
            state.config.max_upload_bytes,
        )?);
        break;
    }

    let document = document.ok_or_else(|| {
        AppError::Validation(format!("multipart field '{UPLOAD_FIELD}' is required"))
    })?;

    let file_name = document.filename.clone();
    let file_size = document.size();
    let file_type = document.media_type.as_str().to_string();

    let (extracted_text, analysis) = tokio::task::spawn_blocking(move || {
        let text = decode(&document).map_err(AppError::from)?;
        let analysis = analyze(&text).map_err(|e| match e {
            AnalysisError::InsufficientContent { found, .. } => {
                info!(file_type = %document.media_type.as_str(), found, "upload had too little text");
                AppError::from(e)
            }
        })?;
        Ok::<_, AppError>((text, analysis))
    })
    .await
    .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in upload analysis: {e}")))??;

    info!(
        file_type = %file_type,
        file_size,
        overall = analysis.score.overall,
        "cv upload analyzed"
    );

    Ok(Json(UploadResponse {
        file_name,
        file_size,
        file_type,
        extracted_text,
        analysis,
    }))
}

/// POST /api/v1/cv/validate
///
/// Rule-based content check over an extracted (possibly user-edited) record.
pub async fn handle_validate(Json(request): Json<ValidateRequest>) -> Json<ContentValidation> {
    Json(validate_record(&request.record))
}
