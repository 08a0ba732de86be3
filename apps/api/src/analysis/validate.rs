//! Rule-based content check over an extracted record.
//!
//! Starts from 100 and deducts per missing or thin section. A record passes
//! at 70 or above.

use serde::{Deserialize, Serialize};

use crate::analysis::models::ExtractedRecord;

pub const PASSING_SCORE: u32 = 70;

const MIN_SUMMARY_CHARS: usize = 50;
const MIN_DESCRIPTION_CHARS: usize = 100;
const MIN_SKILLS: usize = 5;
const MAX_SKILLS: usize = 20;
const MIN_WORDS: usize = 100;
const MAX_WORDS: usize = 800;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentValidation {
    pub is_valid: bool,
    pub score: u32,
    pub suggestions: Vec<String>,
    pub warnings: Vec<String>,
    pub improvements: Vec<String>,
}

#[derive(Default)]
struct Findings {
    deducted: u32,
    suggestions: Vec<String>,
    warnings: Vec<String>,
    improvements: Vec<String>,
}

impl Findings {
    fn warn(&mut self, points: u32, message: &str) {
        self.deducted += points;
        self.warnings.push(message.to_string());
    }

    fn suggest(&mut self, points: u32, message: String) {
        self.deducted += points;
        self.suggestions.push(message);
    }

    fn improve(&mut self, points: u32, message: &str) {
        self.deducted += points;
        self.improvements.push(message.to_string());
    }
}

pub fn validate_record(record: &ExtractedRecord) -> ContentValidation {
    let info = &record.personal_info;
    let mut findings = Findings::default();

    if info.name.as_deref().map_or(true, |n| n.trim().is_empty()) {
        findings.warn(10, "Complete name is required for professional presentation");
    }
    if info.email.is_none() || info.phone.is_none() {
        findings.warn(15, "Contact information (email and phone) is essential");
    }
    let summary_chars = info.summary.as_deref().map_or(0, |s| s.chars().count());
    if summary_chars < MIN_SUMMARY_CHARS {
        findings.suggest(
            10,
            "Add a compelling professional summary (at least 50 characters)".to_string(),
        );
    }

    if record.experience.is_empty() {
        findings.warn(20, "Add at least one work experience entry");
    }
    for (i, exp) in record.experience.iter().enumerate() {
        let n = i + 1;
        if exp.description.chars().count() < MIN_DESCRIPTION_CHARS {
            findings.suggest(
                5,
                format!("Experience #{n}: Add detailed description with achievements"),
            );
        }
        if exp.duration.trim().is_empty() {
            findings.suggest(3, format!("Experience #{n}: Add complete date information"));
        }
    }

    if record.education.is_empty() {
        findings.suggest(10, "Consider adding your educational background".to_string());
    }

    if record.skills.len() < MIN_SKILLS {
        findings.suggest(
            8,
            "Add more skills to showcase your expertise (aim for 5-15 skills)".to_string(),
        );
    }
    if record.skills.len() > MAX_SKILLS {
        findings.improve(
            5,
            "Consider focusing on your most relevant skills (remove less important ones)",
        );
    }

    let words = word_count(record);
    if words < MIN_WORDS {
        findings.warn(15, "CV content is too brief - aim for more detailed descriptions");
    }
    if words > MAX_WORDS {
        findings.improve(
            5,
            "Consider making content more concise - aim for 400-600 words total",
        );
    }

    let score = 100u32.saturating_sub(findings.deducted);
    findings.improvements.push(verdict(score).to_string());

    ContentValidation {
        is_valid: score >= PASSING_SCORE,
        score,
        suggestions: findings.suggestions,
        warnings: findings.warnings,
        improvements: findings.improvements,
    }
}

fn verdict(score: u32) -> &'static str {
    match score {
        90.. => "Excellent CV! Consider adding quantifiable achievements for even more impact",
        80..=89 => "Good CV structure. Focus on adding more specific achievements and metrics",
        70..=79 => {
            "Solid foundation. Add more detail to experience descriptions and consider additional sections"
        }
        _ => "CV needs significant improvement. Focus on completing all sections with detailed information",
    }
}

/// Words of free-form prose: summary, experience and award descriptions.
fn word_count(record: &ExtractedRecord) -> usize {
    let summary = record.personal_info.summary.as_deref().into_iter();
    let experience = record.experience.iter().map(|e| e.description.as_str());
    let awards = record.awards.iter().filter_map(|a| a.description.as_deref());
    summary
        .chain(experience)
        .chain(awards)
        .map(|text| text.split_whitespace().count())
        .sum()
}
