use crate::analysis::AnalysisError;

/// Minimum number of characters (summed over normalized lines) worth analyzing.
pub const MIN_CONTENT_CHARS: usize = 50;

/// Trimmed, non-empty lines in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedText {
    lines: Vec<String>,
}

impl NormalizedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn char_count(&self) -> usize {
        self.lines.iter().map(|l| l.chars().count()).sum()
    }
}

/// Splits on any run of `\n`/`\r`, trims every line and drops the empty ones.
pub fn split_lines(raw: &str) -> NormalizedText {
    let lines = raw
        .split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect();
    NormalizedText { lines }
}

/// Normalizes raw text and enforces the content floor.
pub fn normalize(raw: &str) -> Result<NormalizedText, AnalysisError> {
    let text = split_lines(raw);
    let found = text.char_count();
    if found < MIN_CONTENT_CHARS {
        return Err(AnalysisError::InsufficientContent {
            found,
            required: MIN_CONTENT_CHARS,
        });
    }
    Ok(text)
}
