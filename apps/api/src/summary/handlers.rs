//! Axum route handlers for the Summary API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::analysis::models::{ExperienceEntry, ExtractedRecord};
use crate::errors::AppError;
use crate::state::AppState;
use crate::summary::generator::{GeneratedSummary, SkillInput, SummaryOptions, WriterStatus};

#[derive(Debug, Deserialize)]
pub struct GenerateSummaryRequest {
    pub record: ExtractedRecord,
    #[serde(default)]
    pub options: SummaryOptions,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillSummaryRequest {
    pub skills: Vec<SkillInput>,
    pub target_role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExperienceSummaryRequest {
    pub experience: Vec<ExperienceEntry>,
}

/// POST /api/v1/summary/generate
///
/// Writes a professional summary for an already-extracted record.
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    Json(request): Json<GenerateSummaryRequest>,
) -> Result<Json<GeneratedSummary>, AppError> {
    let record = &request.record;
    let has_content = record.personal_info.name.is_some()
        || record.personal_info.title.is_some()
        || !record.experience.is_empty()
        || !record.education.is_empty()
        || !record.skills.is_empty();
    if !has_content {
        return Err(AppError::Validation(
            "record has nothing to summarize".to_string(),
        ));
    }

    let summary = state
        .summary_writer
        .generate(record, &request.options)
        .await?;

    Ok(Json(summary))
}

/// POST /api/v1/summary/skills
pub async fn handle_skill_summary(
    State(state): State<AppState>,
    Json(request): Json<SkillSummaryRequest>,
) -> Result<Json<GeneratedSummary>, AppError> {
    let skills: Vec<SkillInput> = request
        .skills
        .into_iter()
        .filter(|s| !s.name().trim().is_empty())
        .collect();
    if skills.is_empty() {
        return Err(AppError::Validation("at least one skill is required".to_string()));
    }

    let summary = state
        .summary_writer
        .generate_from_skills(&skills, request.target_role.as_deref())
        .await?;

    Ok(Json(summary))
}

/// POST /api/v1/summary/experience
pub async fn handle_experience_summary(
    State(state): State<AppState>,
    Json(request): Json<ExperienceSummaryRequest>,
) -> Result<Json<GeneratedSummary>, AppError> {
    if request.experience.iter().all(|e| e.position.trim().is_empty()) {
        return Err(AppError::Validation(
            "at least one experience entry with a position is required".to_string(),
        ));
    }

    let summary = state
        .summary_writer
        .generate_from_experience(&request.experience)
        .await?;

    Ok(Json(summary))
}

/// GET /api/v1/summary/status
pub async fn handle_summary_status(State(state): State<AppState>) -> Json<WriterStatus> {
    Json(state.summary_writer.status())
}
