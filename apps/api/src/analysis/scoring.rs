//! Rule-based CV scoring and suggestion generation.
//!
//! Suggestions are emitted in a fixed order (personal → experience → skills →
//! education) and truncated to `MAX_SUGGESTIONS` without re-sorting by
//! priority. Scores are linear heuristics over presence and description
//! detail; nothing here reads the clock.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::{
    ExtractedRecord, Priority, ScoreCard, Suggestion, SuggestionType,
};

pub const MAX_SUGGESTIONS: usize = 6;

/// A number immediately followed by a unit of impact.
static QUANTIFIER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+(?:%|percent|million|thousand|users|revenue|sales|team|people)").unwrap()
});

static STRICT_EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

const COMPLETENESS_WEIGHTS: CompletenessWeights = CompletenessWeights {
    name: 20,
    email: 20,
    phone: 10,
    experience: 30,
    skills: 10,
    education: 10,
};

struct CompletenessWeights {
    name: u32,
    email: u32,
    phone: u32,
    experience: u32,
    skills: u32,
    education: u32,
}

const MIN_DESCRIPTION_CHARS: usize = 20;
const DETAILED_DESCRIPTION_CHARS: usize = 30;
const RECOMMENDED_MIN_SKILLS: usize = 5;

pub fn has_quantified_impact(description: &str) -> bool {
    QUANTIFIER_RE.is_match(description)
}

// ────────────────────────────────────────────────────────────────────────────
// Suggestions
// ────────────────────────────────────────────────────────────────────────────

fn suggestion(
    suggestion_type: SuggestionType,
    category: &str,
    message: impl Into<String>,
    priority: Priority,
) -> Suggestion {
    Suggestion {
        suggestion_type,
        category: category.to_string(),
        message: message.into(),
        priority,
    }
}

/// All applicable suggestions in generation order, before truncation.
pub fn collect_suggestions(record: &ExtractedRecord) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();
    let info = &record.personal_info;

    if info.name.is_none() {
        suggestions.push(suggestion(
            SuggestionType::Missing,
            "Personal Information",
            "Add your full name at the top of your CV.",
            Priority::High,
        ));
    }
    if info.email.is_none() {
        suggestions.push(suggestion(
            SuggestionType::Missing,
            "Contact Information",
            "Include a professional email address.",
            Priority::High,
        ));
    }
    if info.phone.is_none() {
        suggestions.push(suggestion(
            SuggestionType::Missing,
            "Contact Information",
            "Add your phone number.",
            Priority::Medium,
        ));
    }

    if record.experience.is_empty() {
        suggestions.push(suggestion(
            SuggestionType::Missing,
            "Work Experience",
            "Add your professional work experience.",
            Priority::High,
        ));
    }
    for (index, entry) in record.experience.iter().enumerate() {
        let label = if entry.position.is_empty() {
            format!("experience {}", index + 1)
        } else {
            entry.position.clone()
        };

        if entry.description.chars().count() < MIN_DESCRIPTION_CHARS {
            suggestions.push(suggestion(
                SuggestionType::Improvement,
                "Work Experience",
                format!("Add detailed description for {label}."),
                Priority::High,
            ));
        }
        if !entry.description.is_empty() && !has_quantified_impact(&entry.description) {
            suggestions.push(suggestion(
                SuggestionType::Optimization,
                "Work Experience",
                format!("Add quantifiable achievements for {label}."),
                Priority::Medium,
            ));
        }
    }

    match record.skills.len() {
        0 => suggestions.push(suggestion(
            SuggestionType::Missing,
            "Skills",
            "Add relevant technical and soft skills.",
            Priority::High,
        )),
        n if n < RECOMMENDED_MIN_SKILLS => suggestions.push(suggestion(
            SuggestionType::Improvement,
            "Skills",
            "Add more relevant skills (aim for 6-12 skills).",
            Priority::Medium,
        )),
        _ => {}
    }

    if record.education.is_empty() {
        suggestions.push(suggestion(
            SuggestionType::Missing,
            "Education",
            "Add your educational background.",
            Priority::Medium,
        ));
    }

    suggestions
}

// ────────────────────────────────────────────────────────────────────────────
// Scores
// ────────────────────────────────────────────────────────────────────────────

pub fn completeness_score(record: &ExtractedRecord) -> u32 {
    let w = &COMPLETENESS_WEIGHTS;
    let info = &record.personal_info;
    let parts = [
        (info.name.is_some(), w.name),
        (info.email.is_some(), w.email),
        (info.phone.is_some(), w.phone),
        (!record.experience.is_empty(), w.experience),
        (!record.skills.is_empty(), w.skills),
        (!record.education.is_empty(), w.education),
    ];
    let score: u32 = parts
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, weight)| weight)
        .sum();
    score.min(100)
}

/// Quality proxy: detailed descriptions, quantified impact, skill breadth.
pub fn relevance_score(record: &ExtractedRecord) -> u32 {
    let detailed = record
        .experience
        .iter()
        .filter(|e| e.description.chars().count() > DETAILED_DESCRIPTION_CHARS)
        .count() as u32;
    let quantified = record
        .experience
        .iter()
        .filter(|e| has_quantified_impact(&e.description))
        .count() as u32;
    let skills = record.skills.len() as u32;

    let score = (detailed.saturating_mul(25)).min(50)
        + (quantified.saturating_mul(25)).min(25)
        + (skills.saturating_mul(2)).min(25);
    score.min(100)
}

/// Presentation proxy: well-formed contact details and complete entries.
pub fn formatting_score(record: &ExtractedRecord) -> u32 {
    let info = &record.personal_info;
    let mut score = 60;

    if info
        .email
        .as_deref()
        .is_some_and(|email| STRICT_EMAIL_RE.is_match(email))
    {
        score += 15;
    }
    if info.name.is_some() && info.email.is_some() && info.phone.is_some() {
        score += 15;
    }
    if record
        .experience
        .iter()
        .all(|e| !e.company.is_empty() && !e.position.is_empty())
    {
        score += 10;
    }

    score.min(100)
}

pub fn score_record(record: &ExtractedRecord) -> ScoreCard {
    let completeness = completeness_score(record);
    let relevance = relevance_score(record);
    let formatting = formatting_score(record);
    let overall = (f64::from(completeness + relevance + formatting) / 3.0).round() as u32;

    ScoreCard {
        overall: overall.min(100),
        completeness,
        relevance,
        formatting,
    }
}

/// Suggestions (generation order, capped) and scores for a record.
pub fn evaluate(record: &ExtractedRecord) -> (Vec<Suggestion>, ScoreCard) {
    let mut suggestions = collect_suggestions(record);
    suggestions.truncate(MAX_SUGGESTIONS);
    (suggestions, score_record(record))
}
