//! Weighted aggregation of category scores and the human-readable reason.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::score::{Category, CategoryScores};

/// Categories scoring above this percentage are named in the match reason.
pub const REASON_THRESHOLD: f64 = 70.0;

/// Reason given when no category exceeds [`REASON_THRESHOLD`].
pub const FALLBACK_REASON: &str = "partial match";

const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Error, PartialEq)]
pub enum WeightsError {
    #[error("Weight for {category} must be a finite, non-negative number (got {value})")]
    InvalidWeight { category: Category, value: f64 },

    #[error("Category weights must sum to 1.0 (got {0})")]
    BadSum(f64),
}

/// Relative importance of each category in the overall score.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryWeights {
    pub track_info: f64,
    pub genre: f64,
    pub mood: f64,
    pub context: f64,
    pub audio_features: f64,
    pub time_era: f64,
    pub popularity: f64,
    pub language_region: f64,
    pub sound: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            track_info: 0.25,
            genre: 0.15,
            mood: 0.15,
            context: 0.10,
            audio_features: 0.10,
            time_era: 0.10,
            popularity: 0.05,
            language_region: 0.05,
            sound: 0.05,
        }
    }
}

impl CategoryWeights {
    pub fn weight(&self, category: Category) -> f64 {
        match category {
            Category::TrackInfo => self.track_info,
            Category::Genre => self.genre,
            Category::Mood => self.mood,
            Category::Context => self.context,
            Category::AudioFeatures => self.audio_features,
            Category::TimeEra => self.time_era,
            Category::Popularity => self.popularity,
            Category::LanguageRegion => self.language_region,
            Category::Sound => self.sound,
        }
    }

    pub fn total(&self) -> f64 {
        Category::ALL.iter().map(|c| self.weight(*c)).sum()
    }

    pub fn validate(&self) -> Result<(), WeightsError> {
        for category in Category::ALL {
            let value = self.weight(category);
            if !value.is_finite() || value < 0.0 {
                return Err(WeightsError::InvalidWeight { category, value });
            }
        }
        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(WeightsError::BadSum(total));
        }
        Ok(())
    }

    /// Weighted sum of all nine category scores, rounded to 0-100.
    pub fn overall(&self, scores: &CategoryScores) -> u8 {
        let weighted: f64 = scores
            .iter()
            .map(|(category, score)| self.weight(category) * score.percent())
            .sum();
        weighted.round().clamp(0.0, 100.0) as u8
    }
}

/// Name the strong categories: "genre alignment, mood match, and context fit".
///
/// Only categories the request touched are named; an untouched category
/// scores full marks without saying anything about the track.
pub fn explain(scores: &CategoryScores) -> String {
    let reasons: Vec<&str> = scores
        .iter()
        .filter(|(_, score)| score.is_active() && score.percent() > REASON_THRESHOLD)
        .map(|(category, _)| category.reason())
        .collect();

    match reasons.as_slice() {
        [] => FALLBACK_REASON.to_string(),
        [one] => one.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    }
}
