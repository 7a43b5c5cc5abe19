//! Parsing of intent-extractor responses.
//!
//! Language models rarely return bare JSON: answers come wrapped in code
//! fences or with a sentence in front. This module extracts the JSON object,
//! validates it and normalises the list fields.

use super::Intent;
use thiserror::Error;

/// Errors that can occur when turning an extractor response into an [`Intent`].
#[derive(Debug, Error)]
pub enum IntentError {
    #[error("Empty intent response")]
    EmptyResponse,

    #[error("No JSON object found in intent response")]
    MissingObject,

    #[error("Invalid intent JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Invalid year range: start {start} is after end {end}")]
    InvalidYearRange { start: i32, end: i32 },

    #[error("Track limit must be at least 1")]
    ZeroTrackLimit,
}

impl Intent {
    /// Parse and validate an intent from raw extractor output.
    pub fn from_llm_response(text: &str) -> Result<Self, IntentError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(IntentError::EmptyResponse);
        }

        let json = extract_json_object(trimmed).ok_or(IntentError::MissingObject)?;
        let intent: Intent = serde_json::from_str(json)?;
        intent.validate()?;
        Ok(intent.normalized())
    }

    /// Check the invariants the matcher relies on.
    pub fn validate(&self) -> Result<(), IntentError> {
        if let Some(range) = self.year_range {
            if range.start > range.end {
                return Err(IntentError::InvalidYearRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }
        if self.track_limit == Some(0) {
            return Err(IntentError::ZeroTrackLimit);
        }
        Ok(())
    }

    /// Trim, lower-case and de-duplicate list fields, dropping blank entries.
    ///
    /// Confirmed artists keep their casing since they are shown back to users.
    pub fn normalized(mut self) -> Self {
        self.genres = normalize_terms(self.genres);
        self.moods = normalize_terms(self.moods);
        self.keywords = normalize_terms(self.keywords);
        self.confirmed_artists = self.confirmed_artists.map(|artists| {
            let mut seen = Vec::<String>::new();
            artists
                .into_iter()
                .map(|a| a.trim().to_string())
                .filter(|a| !a.is_empty())
                .filter(|a| {
                    let key = a.to_lowercase();
                    if seen.contains(&key) {
                        false
                    } else {
                        seen.push(key);
                        true
                    }
                })
                .collect()
        });
        self.language = normalize_optional(self.language);
        self.region = normalize_optional(self.region);
        self
    }
}

fn normalize_terms(terms: Vec<String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(terms.len());
    for term in terms {
        let term = term.trim().to_lowercase();
        if !term.is_empty() && !out.contains(&term) {
            out.push(term);
        }
    }
    out
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_lowercase())
        .filter(|v| !v.is_empty())
}

/// Slice from the first `{` to the last `}`, which also drops code fences.
fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
