//! Category scores derived from checklist evaluations.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use super::Evaluation;

/// The nine scoring categories, in reporting order.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    TrackInfo,
    Genre,
    Mood,
    Context,
    AudioFeatures,
    TimeEra,
    Popularity,
    LanguageRegion,
    Sound,
}

impl Category {
    pub const ALL: [Category; 9] = [
        Category::TrackInfo,
        Category::Genre,
        Category::Mood,
        Category::Context,
        Category::AudioFeatures,
        Category::TimeEra,
        Category::Popularity,
        Category::LanguageRegion,
        Category::Sound,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::TrackInfo => "trackInfo",
            Category::Genre => "genre",
            Category::Mood => "mood",
            Category::Context => "context",
            Category::AudioFeatures => "audioFeatures",
            Category::TimeEra => "timeEra",
            Category::Popularity => "popularity",
            Category::LanguageRegion => "languageRegion",
            Category::Sound => "sound",
        }
    }

    /// Phrase used in match explanations when the category scores well.
    pub fn reason(&self) -> &'static str {
        match self {
            Category::TrackInfo => "strong track/artist match",
            Category::Genre => "genre alignment",
            Category::Mood => "mood match",
            Category::Context => "context fit",
            Category::AudioFeatures => "audio features fit",
            Category::TimeEra => "era match",
            Category::Popularity => "popularity level",
            Category::LanguageRegion => "language/region match",
            Category::Sound => "sound match",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Tally of one category's predicates.
///
/// The denominator is always the category's full predicate count. Predicates
/// nobody asked for count as passed, so a category with no applicable
/// predicate is inactive and reports 100.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CategoryScore {
    satisfied: u8,
    applicable: u8,
    total: u8,
}

impl CategoryScore {
    pub fn new(satisfied: u8, applicable: u8, total: u8) -> Self {
        let applicable = applicable.min(total);
        Self {
            satisfied: satisfied.min(applicable),
            applicable,
            total,
        }
    }

    pub fn from_evaluations(evaluations: &[Evaluation]) -> Self {
        let count = |pred: fn(Evaluation) -> bool| -> u8 {
            u8::try_from(evaluations.iter().filter(|e| pred(**e)).count()).unwrap_or(u8::MAX)
        };
        Self::new(
            count(Evaluation::is_satisfied),
            count(Evaluation::is_applicable),
            u8::try_from(evaluations.len()).unwrap_or(u8::MAX),
        )
    }

    pub fn satisfied(&self) -> u8 {
        self.satisfied
    }

    pub fn applicable(&self) -> u8 {
        self.applicable
    }

    pub fn total(&self) -> u8 {
        self.total
    }

    pub fn is_active(&self) -> bool {
        self.applicable > 0
    }

    /// Predicates that did not fail: satisfied plus not applicable.
    pub fn passed(&self) -> u8 {
        self.total - (self.applicable - self.satisfied)
    }

    /// Share of predicates passed, 0-100.
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            return 100.0;
        }
        100.0 * f64::from(self.passed()) / f64::from(self.total)
    }
}

impl Serialize for CategoryScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CategoryScore", 4)?;
        state.serialize_field("score", &self.percent())?;
        state.serialize_field("satisfied", &self.satisfied)?;
        state.serialize_field("applicable", &self.applicable)?;
        state.serialize_field("total", &self.total)?;
        state.end()
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    pub track_info: CategoryScore,
    pub genre: CategoryScore,
    pub mood: CategoryScore,
    pub context: CategoryScore,
    pub audio_features: CategoryScore,
    pub time_era: CategoryScore,
    pub popularity: CategoryScore,
    pub language_region: CategoryScore,
    pub sound: CategoryScore,
}

impl CategoryScores {
    pub fn get(&self, category: Category) -> CategoryScore {
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

    pub fn iter(&self) -> impl Iterator<Item = (Category, CategoryScore)> + '_ {
        Category::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}
