//! Professional Summary Generator: pluggable, trait-based writer that turns an
//! `ExtractedRecord` into a short third-person CV summary.
//!
//! `AppState` holds an `Arc<dyn SummaryWriter>` chosen at startup:
//! `GeminiSummaryWriter` when an API key is configured, otherwise
//! `UnavailableSummaryWriter`. The analysis pipeline never touches either.

use async_trait::async_trait;
use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::analysis::models::{ExperienceEntry, ExtractedRecord};
use crate::errors::AppError;
use crate::llm_client::{GenerationConfig, LlmClient};
use crate::summary::prompts::{
    EXPERIENCE_SUMMARY_PROMPT_TEMPLATE, LENGTH_GUIDE, SKILL_SUMMARY_PROMPT_TEMPLATE,
    SUMMARY_PROMPT_TEMPLATE,
};

const MIN_SUMMARY_CHARS: usize = 50;
const RECOMMENDED_MIN_SKILLS: usize = 5;
const DEFAULT_SKILL_LEVEL: &str = "Proficient";

const SUMMARY_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 500,
};
const SKILL_SUMMARY_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.6,
    max_output_tokens: 300,
};
const EXPERIENCE_SUMMARY_GENERATION: GenerationConfig = GenerationConfig {
    temperature: 0.7,
    max_output_tokens: 400,
};

// ────────────────────────────────────────────────────────────────────────────
// Options and output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryTone {
    #[default]
    Professional,
    Creative,
    Academic,
    Executive,
}

impl SummaryTone {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryTone::Professional => "professional",
            SummaryTone::Creative => "creative",
            SummaryTone::Academic => "academic",
            SummaryTone::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl SummaryLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryLength::Short => "short",
            SummaryLength::Medium => "medium",
            SummaryLength::Long => "long",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SummaryOptions {
    pub tone: SummaryTone,
    pub length: SummaryLength,
    pub focus_areas: Vec<String>,
    pub target_role: Option<String>,
    pub industry: Option<String>,
}

/// A skill given either as a bare name or with a proficiency level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillInput {
    Name(String),
    Rated {
        name: String,
        #[serde(default)]
        level: Option<String>,
    },
}

impl SkillInput {
    pub fn name(&self) -> &str {
        match self {
            SkillInput::Name(name) | SkillInput::Rated { name, .. } => name,
        }
    }

    /// `Name (Level)`, with `Proficient` when no level is given.
    pub fn label(&self) -> String {
        let level = match self {
            SkillInput::Rated {
                level: Some(level), ..
            } if !level.trim().is_empty() => level.trim(),
            _ => DEFAULT_SKILL_LEVEL,
        };
        format!("{} ({level})", self.name().trim())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSummary {
    pub summary: String,
    pub success: bool,
    pub suggestions: Vec<String>,
}

/// Reported by `GET /api/v1/summary/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WriterStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    pub message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait SummaryWriter: Send + Sync {
    fn status(&self) -> WriterStatus;

    async fn generate(
        &self,
        record: &ExtractedRecord,
        options: &SummaryOptions,
    ) -> Result<GeneratedSummary, AppError>;

    /// Summary centred on a skill list, optionally aimed at a role.
    async fn generate_from_skills(
        &self,
        skills: &[SkillInput],
        target_role: Option<&str>,
    ) -> Result<GeneratedSummary, AppError>;

    /// Summary centred on career history.
    async fn generate_from_experience(
        &self,
        experience: &[ExperienceEntry],
    ) -> Result<GeneratedSummary, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// GeminiSummaryWriter
// ────────────────────────────────────────────────────────────────────────────

pub struct GeminiSummaryWriter {
    llm: LlmClient,
}

impl GeminiSummaryWriter {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    async fn write(&self, prompt: &str, config: GenerationConfig) -> Result<String, AppError> {
        let raw = self.llm.call_text(prompt, config).await?;
        let summary = clean_summary_response(&raw);
        if summary.is_empty() {
            return Err(AppError::Llm("model returned an empty summary".to_string()));
        }
        Ok(summary)
    }
}

#[async_trait]
impl SummaryWriter for GeminiSummaryWriter {
    fn status(&self) -> WriterStatus {
        WriterStatus {
            available: true,
            model: Some(self.llm.model().to_string()),
            message: "AI summary generation is available".to_string(),
        }
    }

    async fn generate(
        &self,
        record: &ExtractedRecord,
        options: &SummaryOptions,
    ) -> Result<GeneratedSummary, AppError> {
        let prompt = build_summary_prompt(record, options);
        let summary = self.write(&prompt, SUMMARY_GENERATION).await?;

        info!(
            tone = options.tone.as_str(),
            length = options.length.as_str(),
            chars = summary.len(),
            "professional summary generated"
        );

        Ok(GeneratedSummary {
            summary,
            success: true,
            suggestions: improvement_suggestions(record),
        })
    }

    async fn generate_from_skills(
        &self,
        skills: &[SkillInput],
        target_role: Option<&str>,
    ) -> Result<GeneratedSummary, AppError> {
        let prompt = build_skill_summary_prompt(skills, target_role);
        let summary = self.write(&prompt, SKILL_SUMMARY_GENERATION).await?;
        info!(skills = skills.len(), "skill-based summary generated");
        Ok(GeneratedSummary {
            summary,
            success: true,
            suggestions: Vec::new(),
        })
    }

    async fn generate_from_experience(
        &self,
        experience: &[ExperienceEntry],
    ) -> Result<GeneratedSummary, AppError> {
        let current_year = chrono::Utc::now().year();
        let prompt = build_experience_summary_prompt(experience, current_year);
        let summary = self.write(&prompt, EXPERIENCE_SUMMARY_GENERATION).await?;
        info!(entries = experience.len(), "experience summary generated");
        Ok(GeneratedSummary {
            summary,
            success: true,
            suggestions: Vec::new(),
        })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// UnavailableSummaryWriter
// ────────────────────────────────────────────────────────────────────────────

/// Used when no API key is configured.
pub struct UnavailableSummaryWriter;

#[async_trait]
impl SummaryWriter for UnavailableSummaryWriter {
    fn status(&self) -> WriterStatus {
        WriterStatus {
            available: false,
            model: None,
            message: "Gemini API key not configured".to_string(),
        }
    }

    async fn generate(
        &self,
        _record: &ExtractedRecord,
        _options: &SummaryOptions,
    ) -> Result<GeneratedSummary, AppError> {
        Err(unavailable())
    }

    async fn generate_from_skills(
        &self,
        _skills: &[SkillInput],
        _target_role: Option<&str>,
    ) -> Result<GeneratedSummary, AppError> {
        Err(unavailable())
    }

    async fn generate_from_experience(
        &self,
        _experience: &[ExperienceEntry],
    ) -> Result<GeneratedSummary, AppError> {
        Err(unavailable())
    }
}

fn unavailable() -> AppError {
    AppError::AiUnavailable(
        "AI summary generation is not available. Please configure your Gemini API key."
            .to_string(),
    )
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt building
// ────────────────────────────────────────────────────────────────────────────

/// Plain-text CV digest handed to the model.
pub fn build_context(record: &ExtractedRecord) -> String {
    let info = &record.personal_info;
    let mut context = String::new();

    if let Some(name) = &info.name {
        context.push_str(&format!("Full Name: {name}\n"));
    }
    if let Some(title) = &info.title {
        context.push_str(&format!("Professional Title: {title}\n"));
    }

    if !record.experience.is_empty() {
        context.push_str("\nWork Experience:\n");
        for exp in &record.experience {
            let mut line = format!("- {}", exp.position);
            if !exp.company.is_empty() {
                line.push_str(&format!(" at {}", exp.company));
            }
            if !exp.duration.is_empty() {
                line.push_str(&format!(" ({})", exp.duration));
            }
            context.push_str(&line);
            context.push('\n');
            if !exp.description.is_empty() {
                context.push_str(&format!("  {}\n", exp.description.replace('\n', " ")));
            }
        }
    }

    if !record.education.is_empty() {
        context.push_str("\nEducation:\n");
        for edu in &record.education {
            context.push_str(&format!(
                "- {} from {} ({})\n",
                edu.degree, edu.institution, edu.duration
            ));
        }
    }

    if !record.skills.is_empty() {
        context.push_str(&format!("\nSkills:\n- {}\n", record.skills.join(", ")));
    }

    context
}

pub fn build_summary_prompt(record: &ExtractedRecord, options: &SummaryOptions) -> String {
    let mut requirements = format!(
        "- Tone: {} and engaging\n- Length: {} ({LENGTH_GUIDE})",
        options.tone.as_str(),
        options.length.as_str()
    );
    if let Some(role) = options.target_role.as_deref().filter(|r| !r.trim().is_empty()) {
        requirements.push_str(&format!("\n- Target Position: {role}"));
    }
    if let Some(industry) = options.industry.as_deref().filter(|i| !i.trim().is_empty()) {
        requirements.push_str(&format!("\n- Industry Focus: {industry}"));
    }
    if !options.focus_areas.is_empty() {
        requirements.push_str(&format!("\n- Emphasize: {}", options.focus_areas.join(", ")));
    }

    SUMMARY_PROMPT_TEMPLATE
        .replace("{context}", build_context(record).trim_end())
        .replace("{requirements}", &requirements)
}

pub fn build_skill_summary_prompt(skills: &[SkillInput], target_role: Option<&str>) -> String {
    let skills = skills
        .iter()
        .map(SkillInput::label)
        .collect::<Vec<_>>()
        .join(", ");
    let target = target_role
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(|r| format!(" Target position: {r}."))
        .unwrap_or_default();

    SKILL_SUMMARY_PROMPT_TEMPLATE
        .replace("{skills}", &skills)
        .replace("{target}", &target)
}

pub fn build_experience_summary_prompt(experience: &[ExperienceEntry], current_year: i32) -> String {
    let history = experience
        .iter()
        .map(describe_experience)
        .collect::<Vec<_>>()
        .join(". ");
    let years = total_experience_years(experience, current_year)
        .map(|y| format!("- Include \"{y}+ years of experience\"\n"))
        .unwrap_or_default();

    EXPERIENCE_SUMMARY_PROMPT_TEMPLATE
        .replace("{experience}", &history)
        .replace("{years}", &years)
}

fn describe_experience(exp: &ExperienceEntry) -> String {
    let mut line = exp.position.clone();
    if !exp.company.is_empty() {
        line.push_str(&format!(" at {}", exp.company));
    }
    if !exp.duration.is_empty() {
        line.push_str(&format!(" ({})", exp.duration));
    }
    if !exp.description.is_empty() {
        line.push_str(&format!(": {}", exp.description.replace('\n', " ")));
    }
    line
}

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());
static ONGOING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(?:present|current|now)\b").unwrap());

/// Whole years spanned by the entries' durations. An entry with one year and
/// an ongoing marker runs to `current_year`; entries without a usable span are skipped.
pub fn total_experience_years(experience: &[ExperienceEntry], current_year: i32) -> Option<u32> {
    let total: i32 = experience
        .iter()
        .filter_map(|exp| {
            let mut years = YEAR_RE
                .find_iter(&exp.duration)
                .filter_map(|m| m.as_str().parse::<i32>().ok());
            let start = years.next()?;
            let end = match years.next() {
                Some(end) => end,
                None if ONGOING_RE.is_match(&exp.duration) => current_year,
                None => return None,
            };
            (end >= start).then_some(end - start)
        })
        .sum();
    u32::try_from(total).ok().filter(|&years| years > 0)
}

// ────────────────────────────────────────────────────────────────────────────
// Response cleanup
// ────────────────────────────────────────────────────────────────────────────

static WRAPPING_QUOTES_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r#"^["']|["']$"#).unwrap());
static LABEL_PREFIXES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)^\*\*Professional Summary\*\*:?\s*",
        r"(?i)^Summary:?\s*",
        r"(?i)^Professional Summary:?\s*",
    ]
    .into_iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACE_BEFORE_PUNCT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+([,.;:])").unwrap());
static SENTENCE_GAP_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"([.!?])\s*([A-Z])").unwrap());

/// Normalizes model output into a single clean paragraph.
pub fn clean_summary_response(response: &str) -> String {
    let mut cleaned = WRAPPING_QUOTES_RE
        .replace_all(response.trim(), "")
        .into_owned();
    for prefix in LABEL_PREFIXES.iter() {
        cleaned = prefix.replace(&cleaned, "").into_owned();
    }
    let cleaned = WHITESPACE_RE.replace_all(&cleaned, " ");
    let cleaned = SPACE_BEFORE_PUNCT_RE.replace_all(&cleaned, "$1");
    let cleaned = SENTENCE_GAP_RE.replace_all(&cleaned, "$1 $2");
    let cleaned = cleaned.trim();

    let mut chars = cleaned.chars();
    let mut out = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => return String::new(),
    };
    if !out.ends_with(['.', '!', '?']) {
        out.push('.');
    }
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Improvement hints
// ────────────────────────────────────────────────────────────────────────────

pub fn improvement_suggestions(record: &ExtractedRecord) -> Vec<String> {
    let mut suggestions = Vec::new();

    let summary_len = record
        .personal_info
        .summary
        .as_deref()
        .map_or(0, |s| s.chars().count());
    if summary_len < MIN_SUMMARY_CHARS {
        suggestions.push("Consider adding more detail to your professional summary".to_string());
    }
    if record.experience.is_empty() {
        suggestions.push("Add work experience to strengthen your profile".to_string());
    }
    if record.skills.len() < RECOMMENDED_MIN_SKILLS {
        suggestions.push("Add more relevant skills to showcase your expertise".to_string());
    }
    if record.education.is_empty() {
        suggestions.push("Include your educational background".to_string());
    }

    let has_numbers = record
        .experience
        .iter()
        .any(|e| e.description.chars().any(|c| c.is_ascii_digit()));
    if !has_numbers {
        suggestions
            .push("Include quantifiable achievements in your experience descriptions".to_string());
    }

    suggestions
}
