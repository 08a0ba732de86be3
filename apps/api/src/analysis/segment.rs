//! Section segmentation: tags every content line with the section it falls under.
//!
//! Header lines are recognized on the whole line (case-insensitive, optional
//! trailing colon) and consumed. Lines before the first header are `Personal`.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::models::SectionTag;
use crate::analysis::normalize::NormalizedText;

/// Header patterns, tested top to bottom. First match wins.
static HEADER_PATTERNS: Lazy<Vec<(SectionTag, Regex)>> = Lazy::new(|| {
    [
        (
            SectionTag::Experience,
            r"^(?:(?:work|professional|relevant)\s+)?experience$|^employment(?:\s+history)?$|^(?:professional|career|work)\s+history$",
        ),
        (
            SectionTag::Education,
            r"^(?:education|qualifications?|academic(?:\s+background)?|university|college|degrees?|certifications?)(?:\s*(?:&|and)\s*(?:certifications?|training|qualifications?))?$",
        ),
        (
            SectionTag::Skills,
            r"^(?:(?:technical|core|key|professional)\s+)?(?:skills|competenc(?:y|ies)|expertise|proficienc(?:y|ies)|technologies|tools|software)$",
        ),
        (
            SectionTag::Languages,
            r"^languages?$|^linguistic(?:\s+skills)?$",
        ),
        (
            SectionTag::Awards,
            r"^(?:awards?|achievements?|honou?rs?|recognition|accomplishments)(?:\s*(?:&|and)\s*(?:awards?|achievements?|honou?rs?))?$",
        ),
        (
            SectionTag::Summary,
            r"^(?:(?:professional|career|personal)\s+)?(?:summary|objective|profile)$|^about(?:\s+me)?$",
        ),
    ]
    .into_iter()
    .map(|(tag, pattern)| {
        let re = Regex::new(&format!("(?i){pattern}")).unwrap();
        (tag, re)
    })
    .collect()
});

/// A content line together with its position in the normalized document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedLine<'a> {
    pub index: usize,
    pub section: SectionTag,
    pub text: &'a str,
}

/// Returns the section a line introduces, or `None` when it is content.
pub fn classify_header(line: &str) -> Option<SectionTag> {
    let candidate = line
        .trim()
        .trim_end_matches([':', '.'])
        .trim_start_matches(['#', '='])
        .trim();
    if candidate.is_empty() || candidate.len() > 48 {
        return None;
    }
    HEADER_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(candidate))
        .map(|(tag, _)| *tag)
}

/// Single linear pass, no backtracking.
pub fn segment(text: &NormalizedText) -> Vec<TaggedLine<'_>> {
    let mut current = SectionTag::Personal;
    let mut tagged = Vec::with_capacity(text.lines().len());

    for (index, line) in text.lines().iter().enumerate() {
        if let Some(tag) = classify_header(line) {
            current = tag;
            continue;
        }
        tagged.push(TaggedLine {
            index,
            section: current,
            text: line.as_str(),
        });
    }

    tagged
}
