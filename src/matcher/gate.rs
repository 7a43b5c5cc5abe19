//! Hard filters applied after scoring.
//!
//! Requested artists and genres are near-mandatory: a track can have a
//! passable overall score and still be rejected here.

use serde::{Deserialize, Serialize};

use super::engine::MatchScore;
use super::predicates::identity::artist_matches;
use super::request::MatchRequest;

/// Minimum overall score when the caller does not choose one.
pub const DEFAULT_MIN_SCORE: u8 = 30;
/// Genre/mood average that lets a track by another artist through.
pub const ARTIST_ESCAPE_THRESHOLD: f64 = 80.0;
/// Minimum genre score when genres were requested.
pub const GENRE_FLOOR: f64 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub min_score: u8,
    pub artist_escape_threshold: f64,
    pub genre_floor: f64,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            artist_escape_threshold: ARTIST_ESCAPE_THRESHOLD,
            genre_floor: GENRE_FLOOR,
        }
    }
}

/// Why the gate turned a track away.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Rejection {
    BelowMinScore { score: u8, min_score: u8 },
    ArtistMismatch { genre_mood_average: f64 },
    GenreBelowFloor { genre_score: f64 },
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Rejection::BelowMinScore { score, min_score } => {
                write!(f, "score {} below minimum {}", score, min_score)
            }
            Rejection::ArtistMismatch { genre_mood_average } => write!(
                f,
                "no requested artist and genre/mood average {:.0} too low",
                genre_mood_average
            ),
            Rejection::GenreBelowFloor { genre_score } => {
                write!(f, "genre score {:.0} below floor", genre_score)
            }
        }
    }
}

impl GateConfig {
    pub fn with_min_score(self, min_score: u8) -> Self {
        Self { min_score, ..self }
    }

    /// Run every hard filter; the first one that fails is reported.
    pub fn check(&self, score: &MatchScore, request: &MatchRequest) -> Result<(), Rejection> {
        if score.overall_score < self.min_score {
            return Err(Rejection::BelowMinScore {
                score: score.overall_score,
                min_score: self.min_score,
            });
        }

        if !request.artists().is_empty() {
            let by_requested_artist = score
                .track
                .artist_names_lower()
                .iter()
                .any(|name| artist_matches(name, request.artists()));
            if !by_requested_artist {
                let average = (score.category_scores.genre.percent()
                    + score.category_scores.mood.percent())
                    / 2.0;
                if average < self.artist_escape_threshold {
                    return Err(Rejection::ArtistMismatch {
                        genre_mood_average: average,
                    });
                }
            }
        }

        if !request.genres().is_empty() {
            let genre_score = score.category_scores.genre.percent();
            if genre_score < self.genre_floor {
                return Err(Rejection::GenreBelowFloor { genre_score });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Album, Artist, Track};
    use crate::intent::Intent;
    use crate::matcher::checklist::build_checklist;
    use crate::matcher::score::{CategoryScore, CategoryScores};

    fn track_by(artist: &str) -> Track {
        Track {
            id: "t".to_string(),
            name: "Song".to_string(),
            artists: vec![Artist {
                name: artist.to_string(),
            }],
            album: Album {
                name: "Album".to_string(),
                release_date: None,
            },
            popularity: 40,
            explicit: None,
            uri: None,
            genres: vec![],
            audio_features: None,
        }
    }

    fn scored<'a>(
        track: &'a Track,
        request: &MatchRequest,
        scores: CategoryScores,
        overall: u8,
    ) -> MatchScore<'a> {
        MatchScore {
            track,
            checklist: build_checklist(track, request),
            category_scores: scores,
            overall_score: overall,
            match_reason: String::new(),
        }
    }

    #[test]
    fn test_min_score() {
        let intent = Intent::default();
        let request = MatchRequest::new(&intent, "", 2024);
        let track = track_by("Anyone");
        let gate = GateConfig::default();

        let low = scored(&track, &request, CategoryScores::default(), 29);
        assert_eq!(
            gate.check(&low, &request),
            Err(Rejection::BelowMinScore {
                score: 29,
                min_score: 30
            })
        );

        let ok = scored(&track, &request, CategoryScores::default(), 30);
        assert_eq!(gate.check(&ok, &request), Ok(()));
        assert_eq!(
            gate.with_min_score(50).check(&ok, &request),
            Err(Rejection::BelowMinScore {
                score: 30,
                min_score: 50
            })
        );
    }

    #[test]
    fn test_artist_escape_hatch() {
        let intent = Intent {
            confirmed_artists: Some(vec!["Artist X".to_string()]),
            ..Default::default()
        };
        let request = MatchRequest::new(&intent, "", 2024);
        let track = track_by("Artist Y");
        let gate = GateConfig::default();

        let strong = CategoryScores {
            genre: CategoryScore::new(4, 5, 5),
            mood: CategoryScore::new(3, 3, 3),
            ..Default::default()
        };
        assert_eq!(gate.check(&scored(&track, &request, strong, 60), &request), Ok(()));

        // No mood requested: mood passes in full, genre 60 brings it to 80.
        let boundary = CategoryScores {
            genre: CategoryScore::new(3, 5, 5),
            ..Default::default()
        };
        assert_eq!(gate.check(&scored(&track, &request, boundary, 60), &request), Ok(()));

        let weak = CategoryScores {
            genre: CategoryScore::new(2, 5, 5),
            mood: CategoryScore::new(1, 1, 3),
            ..Default::default()
        };
        assert_eq!(
            gate.check(&scored(&track, &request, weak, 95), &request),
            Err(Rejection::ArtistMismatch {
                genre_mood_average: 70.0
            })
        );

        let exact = track_by("artist x");
        assert_eq!(gate.check(&scored(&exact, &request, weak, 95), &request), Ok(()));
    }

    #[test]
    fn test_genre_floor() {
        let intent = Intent {
            genres: vec!["jazz".to_string()],
            ..Default::default()
        };
        let request = MatchRequest::new(&intent, "", 2024);
        let track = track_by("Anyone");
        let scores = CategoryScores {
            genre: CategoryScore::new(2, 5, 5),
            ..Default::default()
        };

        assert_eq!(
            GateConfig::default().check(&scored(&track, &request, scores, 80), &request),
            Err(Rejection::GenreBelowFloor { genre_score: 40.0 })
        );
    }

    #[test]
    fn test_rejection_display() {
        let rejection = Rejection::GenreBelowFloor { genre_score: 40.0 };
        assert_eq!(rejection.to_string(), "genre score 40 below floor");
    }
}
