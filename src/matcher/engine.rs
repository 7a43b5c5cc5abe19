//! Scoring and ranking entry points.

use chrono::Datelike;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::aggregate::{explain, CategoryWeights, WeightsError};
use super::checklist::{build_checklist, Checklist};
use super::gate::{GateConfig, Rejection};
use super::ranker::rank;
use super::request::MatchRequest;
use super::score::CategoryScores;
use crate::catalog::Track;
use crate::intent::Intent;

/// Pools at least this large are scored on the rayon thread pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// How well one track fits the request.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchScore<'a> {
    pub track: &'a Track,
    pub checklist: Checklist,
    pub category_scores: CategoryScores,
    pub overall_score: u8,
    pub match_reason: String,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RejectedTrack<'a> {
    #[serde(flatten)]
    pub score: MatchScore<'a>,
    pub rejection: Rejection,
}

/// Gated, ranked tracks plus everything the gate turned away.
#[derive(Clone, Debug, Default, Serialize)]
pub struct RankingOutcome<'a> {
    pub ranked: Vec<MatchScore<'a>>,
    pub rejected: Vec<RejectedTrack<'a>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    pub weights: CategoryWeights,
    pub gate: GateConfig,
    /// Year the era predicates treat as "now".
    pub reference_year: i32,
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            weights: CategoryWeights::default(),
            gate: GateConfig::default(),
            reference_year: chrono::Local::now().year(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Scores tracks against an intent and ranks the survivors of the gate.
///
/// Holds only read-only configuration, so one matcher can serve many
/// concurrent rankings.
#[derive(Clone, Debug, Default)]
pub struct TrackMatcher {
    config: MatcherConfig,
}

impl TrackMatcher {
    pub fn new(config: MatcherConfig) -> Result<Self, WeightsError> {
        config.weights.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    pub fn request<'i>(&self, intent: &'i Intent, prompt: &str) -> MatchRequest<'i> {
        MatchRequest::new(intent, prompt, self.config.reference_year)
    }

    pub fn score_track<'t>(&self, track: &'t Track, intent: &Intent, prompt: &str) -> MatchScore<'t> {
        self.score_with_request(track, &self.request(intent, prompt))
    }

    pub fn score_with_request<'t>(&self, track: &'t Track, request: &MatchRequest) -> MatchScore<'t> {
        let checklist = build_checklist(track, request);
        let category_scores = checklist.category_scores();
        MatchScore {
            track,
            checklist,
            overall_score: self.config.weights.overall(&category_scores),
            match_reason: explain(&category_scores),
            category_scores,
        }
    }

    /// Score every track, keeping input order.
    pub fn score_pool<'t>(&self, tracks: &'t [Track], request: &MatchRequest) -> Vec<MatchScore<'t>> {
        if tracks.len() >= self.config.parallel_threshold {
            tracks
                .par_iter()
                .map(|track| self.score_with_request(track, request))
                .collect()
        } else {
            tracks
                .iter()
                .map(|track| self.score_with_request(track, request))
                .collect()
        }
    }

    /// Score, gate and rank a pool, keeping the rejected tracks with their reason.
    pub fn rank_with_report<'t>(
        &self,
        tracks: &'t [Track],
        intent: &Intent,
        prompt: &str,
        min_score: u8,
    ) -> RankingOutcome<'t> {
        let request = self.request(intent, prompt);
        let gate = self.config.gate.with_min_score(min_score);

        let mut accepted = Vec::with_capacity(tracks.len());
        let mut rejected = Vec::new();
        for score in self.score_pool(tracks, &request) {
            match gate.check(&score, &request) {
                Ok(()) => accepted.push(score),
                Err(rejection) => rejected.push(RejectedTrack { score, rejection }),
            }
        }

        debug!(
            "Ranked {} candidate tracks: {} accepted, {} rejected (min score {})",
            tracks.len(),
            accepted.len(),
            rejected.len(),
            min_score
        );

        RankingOutcome {
            ranked: rank(accepted),
            rejected,
        }
    }

    /// Score, gate and rank a pool. An empty pool yields an empty ranking.
    pub fn rank_tracks<'t>(
        &self,
        tracks: &'t [Track],
        intent: &Intent,
        prompt: &str,
        min_score: u8,
    ) -> Vec<MatchScore<'t>> {
        self.rank_with_report(tracks, intent, prompt, min_score).ranked
    }
}

/// Score one track with the default configuration.
pub fn score_track_match<'t>(track: &'t Track, intent: &Intent, prompt: &str) -> MatchScore<'t> {
    TrackMatcher::default().score_track(track, intent, prompt)
}

/// Rank a pool with the default configuration.
pub fn rank_tracks_by_match<'t>(
    tracks: &'t [Track],
    intent: &Intent,
    prompt: &str,
    min_score: u8,
) -> Vec<MatchScore<'t>> {
    TrackMatcher::default().rank_tracks(tracks, intent, prompt, min_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Album, Artist, AudioFeatures, Mode};
    use crate::intent::EnergyLevel;

    fn matcher() -> TrackMatcher {
        TrackMatcher::new(MatcherConfig {
            reference_year: 2024,
            ..Default::default()
        })
        .unwrap()
    }

    fn track(id: &str, energy: f64, danceability: f64) -> Track {
        Track {
            id: id.to_string(),
            name: format!("Track {}", id),
            artists: vec![Artist {
                name: "Someone".to_string(),
            }],
            album: Album {
                name: "Album".to_string(),
                release_date: Some("2020-01-01".to_string()),
            },
            popularity: 60,
            explicit: Some(false),
            uri: None,
            genres: vec!["pop".to_string()],
            audio_features: Some(AudioFeatures {
                tempo: 125.0,
                energy,
                danceability,
                valence: 0.6,
                acousticness: 0.05,
                instrumentalness: 0.0,
                speechiness: 0.05,
                liveness: 0.1,
                mode: Mode::Major,
                key: 5,
            }),
        }
    }

    fn workout_intent() -> Intent {
        Intent {
            genres: vec!["pop".to_string()],
            energy_level: Some(EnergyLevel::High),
            ..Default::default()
        }
    }

    #[test]
    fn test_new_rejects_invalid_weights() {
        let config = MatcherConfig {
            weights: CategoryWeights {
                genre: 0.9,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(TrackMatcher::new(config).is_err());
    }

    #[test]
    fn test_score_track_fills_reason() {
        let t = track("a", 0.9, 0.8);
        let score = matcher().score_track(&t, &workout_intent(), "energetic workout songs");
        assert_eq!(score.overall_score, 100);
        assert_eq!(
            score.match_reason,
            "genre alignment, mood match, context fit, and audio features fit"
        );
    }

    #[test]
    fn test_rank_orders_and_reports_rejections() {
        let tracks = vec![
            track("mid", 0.72, 0.3),
            track("best", 0.9, 0.8),
            track("calm", 0.2, 0.2),
        ];
        let outcome =
            matcher().rank_with_report(&tracks, &workout_intent(), "energetic workout songs", 90);

        let ids: Vec<&str> = outcome.ranked.iter().map(|s| s.track.id.as_str()).collect();
        assert_eq!(ids, vec!["best", "mid"]);
        assert_eq!(outcome.ranked[0].overall_score, 100);
        assert_eq!(outcome.ranked[1].overall_score, 97);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].score.track.id, "calm");
        assert_eq!(
            outcome.rejected[0].rejection,
            Rejection::BelowMinScore {
                score: 87,
                min_score: 90
            }
        );
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let tracks: Vec<Track> = (0..100)
            .map(|i| track(&i.to_string(), f64::from(i) / 100.0, 0.6))
            .collect();
        let intent = workout_intent();
        let prompt = "energetic workout songs";

        let sequential = TrackMatcher::new(MatcherConfig {
            reference_year: 2024,
            parallel_threshold: usize::MAX,
            ..Default::default()
        })
        .unwrap();
        let parallel = TrackMatcher::new(MatcherConfig {
            reference_year: 2024,
            parallel_threshold: 1,
            ..Default::default()
        })
        .unwrap();

        let a = sequential.rank_tracks(&tracks, &intent, prompt, 30);
        let b = parallel.rank_tracks(&tracks, &intent, prompt, 30);
        let ids_a: Vec<&str> = a.iter().map(|s| s.track.id.as_str()).collect();
        let ids_b: Vec<&str> = b.iter().map(|s| s.track.id.as_str()).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_empty_pool() {
        let outcome = matcher().rank_with_report(&[], &workout_intent(), "anything", 30);
        assert!(outcome.ranked.is_empty());
        assert!(outcome.rejected.is_empty());
    }
}
