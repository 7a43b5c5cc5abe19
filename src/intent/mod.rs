//! Structured playlist intent.
//!
//! The intent is produced by the language-model extractor from the user's
//! free-text request. The matcher only reads it.

mod parse;

pub use parse::IntentError;

use serde::{Deserialize, Serialize};

/// Desired energy band of the playlist.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
}

/// Which part of the catalog's history the playlist should favour.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearFocus {
    Recent,
    Classic,
    #[default]
    Mixed,
    Specific,
}

/// Inclusive range of release years.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct YearRange {
    pub start: i32,
    pub end: i32,
}

impl YearRange {
    pub fn contains(&self, year: i32) -> bool {
        year >= self.start && year <= self.end
    }
}

/// What the user wants out of the playlist.
///
/// Every field is optional on the wire; anything missing is treated as
/// "not requested" by the matcher.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    pub genres: Vec<String>,
    pub moods: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy_level: Option<EnergyLevel>,
    pub year_focus: YearFocus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_range: Option<YearRange>,
    pub include_popular: bool,
    pub include_emerging: bool,
    pub keywords: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirmed_artists: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Number of tracks the user asked for, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub playlist_description: Option<String>,
}

impl Intent {
    /// Confirmed artists with blank entries removed.
    pub fn requested_artists(&self) -> impl Iterator<Item = &str> {
        self.confirmed_artists
            .iter()
            .flatten()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
    }

    pub fn has_requested_artists(&self) -> bool {
        self.requested_artists().next().is_some()
    }

    pub fn has_requested_genres(&self) -> bool {
        self.genres.iter().any(|g| !g.trim().is_empty())
    }
}
