//! Upload decoding: turns an uploaded file into plain text for analysis.
//!
//! PDF and Word files go through a printable-byte scan, not a document-format
//! parser. Images are rejected (no OCR).

use bytes::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound applied when no explicit limit is configured.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaType {
    Pdf,
    Word,
    Image,
    Text,
}

impl MediaType {
    /// Resolves the media type from a declared content type, falling back to
    /// the filename extension.
    pub fn detect(filename: &str, content_type: Option<&str>) -> Option<Self> {
        let by_mime = content_type.and_then(|ct| {
            let ct = ct.split(';').next().unwrap_or(ct).trim().to_lowercase();
            match ct.as_str() {
                "application/pdf" => Some(MediaType::Pdf),
                "application/msword"
                | "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                    Some(MediaType::Word)
                }
                "image/jpeg" | "image/jpg" | "image/png" | "image/gif" => Some(MediaType::Image),
                "text/plain" => Some(MediaType::Text),
                _ => None,
            }
        });

        by_mime.or_else(|| {
            let lower = filename.to_lowercase();
            let ext = lower.rsplit_once('.').map(|(_, ext)| ext)?;
            match ext {
                "pdf" => Some(MediaType::Pdf),
                "doc" | "docx" => Some(MediaType::Word),
                "jpg" | "jpeg" | "png" | "gif" => Some(MediaType::Image),
                "txt" => Some(MediaType::Text),
                _ => None,
            }
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Pdf => "pdf",
            MediaType::Word => "word",
            MediaType::Image => "image",
            MediaType::Text => "text",
        }
    }
}

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Unsupported file type. Please use PDF, Word, TXT, or image files.")]
    UnsupportedType,

    #[error("File size must be less than {limit} bytes (got {size}).")]
    TooLarge { size: usize, limit: usize },

    #[error("Image files cannot be read directly. Please convert to PDF or Word format.")]
    ImageNotSupported,
}

/// An uploaded file as received from the client. Consumed once by `decode`.
#[derive(Debug, Clone)]
pub struct RawDocument {
    pub filename: String,
    pub media_type: MediaType,
    pub bytes: Bytes,
}

impl RawDocument {
    pub fn new(
        filename: impl Into<String>,
        content_type: Option<&str>,
        bytes: Bytes,
        max_bytes: usize,
    ) -> Result<Self, DecodeError> {
        let filename = filename.into();
        let media_type =
            MediaType::detect(&filename, content_type).ok_or(DecodeError::UnsupportedType)?;
        if bytes.len() > max_bytes {
            return Err(DecodeError::TooLarge {
                size: bytes.len(),
                limit: max_bytes,
            });
        }
        Ok(Self {
            filename,
            media_type,
            bytes,
        })
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

pub fn decode(doc: &RawDocument) -> Result<String, DecodeError> {
    match doc.media_type {
        MediaType::Text => Ok(String::from_utf8_lossy(&doc.bytes).into_owned()),
        MediaType::Pdf => Ok(scan_pdf_bytes(&doc.bytes)),
        MediaType::Word => Ok(scan_word_bytes(&doc.bytes)),
        MediaType::Image => Err(DecodeError::ImageNotSupported),
    }
}

/// Keeps printable ASCII line by line; everything else becomes a space.
fn scan_pdf_bytes(bytes: &[u8]) -> String {
    let mut raw = String::with_capacity(bytes.len());
    for &b in bytes {
        match b {
            b'\n' | b'\r' => raw.push('\n'),
            b'\t' => raw.push(' '),
            32..=126 => raw.push(b as char),
            _ => raw.push(' '),
        }
    }

    raw.lines()
        .map(|line| {
            let kept: String = line
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || "_@.-+()".contains(c) {
                        c
                    } else {
                        ' '
                    }
                })
                .collect();
            collapse_runs(&kept.split_whitespace().collect::<Vec<_>>().join(" "))
        })
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Word containers yield one long line of plausible words.
fn scan_word_bytes(bytes: &[u8]) -> String {
    let printable: String = bytes
        .iter()
        .map(|&b| match b {
            32..=126 => b as char,
            _ => ' ',
        })
        .map(|c| {
            if c.is_ascii_alphanumeric() || "_@.-".contains(c) {
                c
            } else {
                ' '
            }
        })
        .collect();

    printable
        .split_whitespace()
        .filter(|word| {
            word.len() < 50
                && !word.chars().all(|c| c.is_ascii_digit())
                && !word.contains("xml")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Squashes any run of more than five identical characters to one.
fn collapse_runs(line: &str) -> String {
    let chars: Vec<char> = line.chars().collect();
    let mut out = String::with_capacity(line.len());
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let run = chars[i..].iter().take_while(|&&x| x == c).count();
        if run > 5 {
            out.push(c);
        } else {
            out.extend(std::iter::repeat(c).take(run));
        }
        i += run;
    }
    out
}
