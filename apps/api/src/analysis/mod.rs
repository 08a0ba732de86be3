//! CV analysis pipeline: normalize → segment → extract → score.
//!
//! Everything in here is synchronous and side-effect free. Callers on the
//! async side run `analyze` inside `spawn_blocking`.

pub mod decode;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod normalize;
pub mod scoring;
pub mod segment;
pub mod validate;

use thiserror::Error;
use tracing::debug;

use models::AnalysisResult;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("insufficient content: found {found} characters, need at least {required}")]
    InsufficientContent { found: usize, required: usize },
}

/// Runs the full pipeline over raw CV text.
pub fn analyze(text: &str) -> Result<AnalysisResult, AnalysisError> {
    let normalized = normalize::normalize(text)?;
    let tagged = segment::segment(&normalized);
    let record = extract::extract_record(text, &tagged);
    let (suggestions, score) = scoring::evaluate(&record);

    debug!(
        lines = normalized.lines().len(),
        experience = record.experience.len(),
        education = record.education.len(),
        skills = record.skills.len(),
        suggestions = suggestions.len(),
        overall = score.overall,
        "cv analysis complete"
    );

    Ok(AnalysisResult {
        extracted_data: record,
        suggestions,
        score,
    })
}
