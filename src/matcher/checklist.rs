//! The per-track checklist: every predicate of every category, evaluated once.

use serde::Serialize;

use super::predicates::{audio, context, era, genre, identity, language, mood, popularity, sound};
use super::request::MatchRequest;
use super::score::{CategoryScore, CategoryScores};
use super::Evaluation;
use crate::catalog::Track;

/// A category's group of predicate outcomes.
pub trait CheckGroup {
    fn evaluations(&self) -> Vec<Evaluation>;

    fn score(&self) -> CategoryScore {
        CategoryScore::from_evaluations(&self.evaluations())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackInfoChecks {
    pub title: Evaluation,
    pub album: Evaluation,
    pub artist: Evaluation,
    pub featured_artist: Evaluation,
    pub version: Evaluation,
    pub explicit: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreChecks {
    pub main_genre: Evaluation,
    pub genre_profile: Evaluation,
    pub sub_genre: Evaluation,
    pub fusion: Evaluation,
    pub era_genre: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodChecks {
    pub emotional_tone: Evaluation,
    pub energy_vibe: Evaluation,
    pub tonality: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContextChecks {
    pub activity: Evaluation,
    pub setting: Evaluation,
    pub occasion: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatureChecks {
    pub tempo: Evaluation,
    pub energy: Evaluation,
    pub danceability: Evaluation,
    pub valence: Evaluation,
    pub acousticness: Evaluation,
    pub instrumentalness: Evaluation,
    pub speechiness: Evaluation,
    pub liveness: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEraChecks {
    pub release_year: Evaluation,
    pub decade: Evaluation,
    pub era_descriptor: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularityChecks {
    pub popularity_level: Evaluation,
    pub viral: Evaluation,
    pub chart: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageRegionChecks {
    pub language: Evaluation,
    pub region: Evaluation,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundChecks {
    pub instrumentation: Evaluation,
    pub sound_descriptor: Evaluation,
    pub remix_type: Evaluation,
}

impl CheckGroup for TrackInfoChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![
            self.title,
            self.album,
            self.artist,
            self.featured_artist,
            self.version,
            self.explicit,
        ]
    }
}

impl CheckGroup for GenreChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![
            self.main_genre,
            self.genre_profile,
            self.sub_genre,
            self.fusion,
            self.era_genre,
        ]
    }
}

impl CheckGroup for MoodChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![self.emotional_tone, self.energy_vibe, self.tonality]
    }
}

impl CheckGroup for ContextChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![self.activity, self.setting, self.occasion]
    }
}

impl CheckGroup for AudioFeatureChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![
            self.tempo,
            self.energy,
            self.danceability,
            self.valence,
            self.acousticness,
            self.instrumentalness,
            self.speechiness,
            self.liveness,
        ]
    }
}

impl CheckGroup for TimeEraChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![self.release_year, self.decade, self.era_descriptor]
    }
}

impl CheckGroup for PopularityChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![self.popularity_level, self.viral, self.chart]
    }
}

impl CheckGroup for LanguageRegionChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![self.language, self.region]
    }
}

impl CheckGroup for SoundChecks {
    fn evaluations(&self) -> Vec<Evaluation> {
        vec![self.instrumentation, self.sound_descriptor, self.remix_type]
    }
}

/// Outcome of every predicate for one track against one request.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checklist {
    pub track_info: TrackInfoChecks,
    pub genre: GenreChecks,
    pub mood: MoodChecks,
    pub context: ContextChecks,
    pub audio_features: AudioFeatureChecks,
    pub time_era: TimeEraChecks,
    pub popularity: PopularityChecks,
    pub language_region: LanguageRegionChecks,
    pub sound: SoundChecks,
}

impl Checklist {
    pub fn build(track: &Track, request: &MatchRequest) -> Self {
        Self {
            track_info: TrackInfoChecks {
                title: identity::title(track, request),
                album: identity::album(track, request),
                artist: identity::artist(track, request),
                featured_artist: identity::featured_artist(track, request),
                version: identity::version(track, request),
                explicit: identity::explicit(track, request),
            },
            genre: GenreChecks {
                main_genre: genre::main_genre(track, request),
                genre_profile: genre::genre_profile(track, request),
                sub_genre: genre::sub_genre(track, request),
                fusion: genre::fusion(track, request),
                era_genre: genre::era_genre(track, request),
            },
            mood: MoodChecks {
                emotional_tone: mood::emotional_tone(track, request),
                energy_vibe: mood::energy_vibe(track, request),
                tonality: mood::tonality(track, request),
            },
            context: ContextChecks {
                activity: context::activity(track, request),
                setting: context::setting(track, request),
                occasion: context::occasion(track, request),
            },
            audio_features: AudioFeatureChecks {
                tempo: audio::tempo(track, request),
                energy: audio::energy(track, request),
                danceability: audio::danceability(track, request),
                valence: audio::valence(track, request),
                acousticness: audio::acousticness(track, request),
                instrumentalness: audio::instrumentalness(track, request),
                speechiness: audio::speechiness(track, request),
                liveness: audio::liveness(track, request),
            },
            time_era: TimeEraChecks {
                release_year: era::release_year(track, request),
                decade: era::decade(track, request),
                era_descriptor: era::era_descriptor(track, request),
            },
            popularity: PopularityChecks {
                popularity_level: popularity::popularity_level(track, request),
                viral: popularity::viral(track, request),
                chart: popularity::chart(track, request),
            },
            language_region: LanguageRegionChecks {
                language: language::language(track, request),
                region: language::region(track, request),
            },
            sound: SoundChecks {
                instrumentation: sound::instrumentation(track, request),
                sound_descriptor: sound::sound_descriptor(track, request),
                remix_type: sound::remix_type(track, request),
            },
        }
    }

    pub fn category_scores(&self) -> CategoryScores {
        CategoryScores {
            track_info: self.track_info.score(),
            genre: self.genre.score(),
            mood: self.mood.score(),
            context: self.context.score(),
            audio_features: self.audio_features.score(),
            time_era: self.time_era.score(),
            popularity: self.popularity.score(),
            language_region: self.language_region.score(),
            sound: self.sound.score(),
        }
    }

    /// Every predicate outcome, category by category.
    pub fn all(&self) -> Vec<Evaluation> {
        let groups: [&dyn CheckGroup; 9] = [
            &self.track_info,
            &self.genre,
            &self.mood,
            &self.context,
            &self.audio_features,
            &self.time_era,
            &self.popularity,
            &self.language_region,
            &self.sound,
        ];
        groups.iter().flat_map(|g| g.evaluations()).collect()
    }
}

pub fn build_checklist(track: &Track, request: &MatchRequest) -> Checklist {
    Checklist::build(track, request)
}
