//! Axum route handlers for the Skills API. All lookups are static and synchronous.

use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::skills::catalog::{
    search_skills, skill_suggestions, trending_skills, DEFAULT_SEARCH_LIMIT,
    DEFAULT_SUGGESTION_LIMIT,
};
use crate::skills::validation::{validate_skill, SkillValidation};

const MAX_LIMIT: usize = 100;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    pub category: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateSkillRequest {
    pub skill: String,
    pub professional_title: Option<String>,
}

/// GET /api/v1/skills/search?q=&limit=
pub async fn handle_search_skills(Query(params): Query<SearchParams>) -> Json<Vec<String>> {
    let limit = params.limit.unwrap_or(DEFAULT_SEARCH_LIMIT).min(MAX_LIMIT);
    Json(search_skills(&params.q, limit))
}

/// GET /api/v1/skills/suggestions?category=&limit=
pub async fn handle_skill_suggestions(
    Query(params): Query<SuggestionParams>,
) -> Json<Vec<String>> {
    let limit = params.limit.unwrap_or(DEFAULT_SUGGESTION_LIMIT).min(MAX_LIMIT);
    Json(skill_suggestions(params.category.as_deref(), limit))
}

/// GET /api/v1/skills/trending
pub async fn handle_trending_skills() -> Json<Vec<String>> {
    Json(trending_skills())
}

/// POST /api/v1/skills/validate
pub async fn handle_validate_skill(
    Json(request): Json<ValidateSkillRequest>,
) -> Result<Json<SkillValidation>, AppError> {
    let skill = request.skill.trim();
    if skill.is_empty() {
        return Err(AppError::Validation("skill cannot be empty".to_string()));
    }
    Ok(Json(validate_skill(
        skill,
        request.professional_title.as_deref(),
    )))
}
