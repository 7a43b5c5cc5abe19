//! Relevance cuts over a ranked candidate list.
//!
//! The gate removes tracks that are wrong; these cuts remove tracks that are
//! merely much weaker than the rest of the ranking.

use crate::matcher::MatchScore;
use serde::{Deserialize, Serialize};

/// How to trim the tail of a ranking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RelevanceCut {
    /// Keep everything the gate accepted.
    #[default]
    None,

    /// Keep tracks scoring at least `threshold` (0.0-1.0) of the best track.
    PercentageOfBest { threshold: f64 },

    /// Stop at the first track scoring below `drop_threshold` (0.0-1.0) of
    /// the track before it.
    GapDetection { drop_threshold: f64 },

    /// Keep tracks within `num_std_devs` standard deviations below the mean.
    StandardDeviation { num_std_devs: f64 },

    /// Percentage of best, applied only when the best track scores at least
    /// `min_best_score`.
    PercentageWithMinimum { threshold: f64, min_best_score: u8 },
}

impl RelevanceCut {
    pub fn percentage_of_best(threshold: f64) -> Self {
        Self::PercentageOfBest {
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    pub fn gap_detection(drop_threshold: f64) -> Self {
        Self::GapDetection {
            drop_threshold: drop_threshold.clamp(0.0, 1.0),
        }
    }

    pub fn std_deviation(num_std_devs: f64) -> Self {
        Self::StandardDeviation {
            num_std_devs: num_std_devs.max(0.0),
        }
    }

    pub fn percentage_with_minimum(threshold: f64, min_best_score: u8) -> Self {
        Self::PercentageWithMinimum {
            threshold: threshold.clamp(0.0, 1.0),
            min_best_score,
        }
    }

    /// Apply the cut to a list ranked best first. Order is preserved.
    pub fn apply<'a>(&self, ranked: Vec<MatchScore<'a>>) -> Vec<MatchScore<'a>> {
        if ranked.is_empty() {
            return ranked;
        }

        match *self {
            Self::None => ranked,
            Self::PercentageOfBest { threshold } => cut_percentage_of_best(ranked, threshold),
            Self::GapDetection { drop_threshold } => cut_at_gap(ranked, drop_threshold),
            Self::StandardDeviation { num_std_devs } => cut_std_deviation(ranked, num_std_devs),
            Self::PercentageWithMinimum {
                threshold,
                min_best_score,
            } => {
                if ranked[0].overall_score < min_best_score {
                    ranked
                } else {
                    cut_percentage_of_best(ranked, threshold)
                }
            }
        }
    }
}

fn cut_percentage_of_best(ranked: Vec<MatchScore<'_>>, threshold: f64) -> Vec<MatchScore<'_>> {
    let best = f64::from(ranked[0].overall_score);
    if best <= 0.0 {
        return ranked;
    }
    let floor = best * threshold;
    ranked
        .into_iter()
        .take_while(|s| f64::from(s.overall_score) >= floor)
        .collect()
}

fn cut_at_gap(ranked: Vec<MatchScore<'_>>, drop_threshold: f64) -> Vec<MatchScore<'_>> {
    let mut kept = Vec::with_capacity(ranked.len());
    let mut previous = ranked[0].overall_score;

    for score in ranked {
        let current = score.overall_score;
        if current != previous
            && previous > 0
            && f64::from(current) / f64::from(previous) < drop_threshold
        {
            break;
        }
        previous = current;
        kept.push(score);
    }
    kept
}

fn cut_std_deviation(ranked: Vec<MatchScore<'_>>, num_std_devs: f64) -> Vec<MatchScore<'_>> {
    if ranked.len() <= 2 {
        return ranked;
    }

    let values: Vec<f64> = ranked.iter().map(|s| f64::from(s.overall_score)).collect();
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std_dev = (values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n).sqrt();

    // All scores are close together.
    if std_dev < 1.0 {
        return ranked;
    }

    let floor = mean - num_std_devs * std_dev;
    ranked
        .into_iter()
        .filter(|s| f64::from(s.overall_score) >= floor)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Album, Track};
    use crate::intent::Intent;
    use crate::matcher::{build_checklist, CategoryScores, MatchRequest};

    fn tracks(n: usize) -> Vec<Track> {
        (0..n)
            .map(|i| Track {
                id: format!("item_{}", i),
                name: format!("Item {}", i),
                artists: vec![],
                album: Album {
                    name: String::new(),
                    release_date: None,
                },
                popularity: 0,
                explicit: None,
                uri: None,
                genres: vec![],
                audio_features: None,
            })
            .collect()
    }

    fn scored<'a>(tracks: &'a [Track], overall: &[u8]) -> Vec<MatchScore<'a>> {
        let intent = Intent::default();
        let request = MatchRequest::new(&intent, "", 2024);
        tracks
            .iter()
            .zip(overall)
            .map(|(track, &overall_score)| MatchScore {
                track,
                checklist: build_checklist(track, &request),
                category_scores: CategoryScores::default(),
                overall_score,
                match_reason: String::new(),
            })
            .collect()
    }

    fn overall(scores: &[MatchScore]) -> Vec<u8> {
        scores.iter().map(|s| s.overall_score).collect()
    }

    // ==========================================================================
    // Serialization
    // ==========================================================================

    #[test]
    fn test_cut_serialization() {
        let json = serde_json::to_string(&RelevanceCut::None).unwrap();
        assert_eq!(json, r#"{"method":"none"}"#);

        let cut: RelevanceCut =
            serde_json::from_str(r#"{"method":"gap_detection","drop_threshold":0.5}"#).unwrap();
        assert_eq!(cut, RelevanceCut::gap_detection(0.5));
    }

    #[test]
    fn test_constructors_clamp() {
        assert_eq!(
            RelevanceCut::percentage_of_best(1.5),
            RelevanceCut::PercentageOfBest { threshold: 1.0 }
        );
        assert_eq!(
            RelevanceCut::std_deviation(-1.0),
            RelevanceCut::StandardDeviation { num_std_devs: 0.0 }
        );
    }

    // ==========================================================================
    // Cuts
    // ==========================================================================

    #[test]
    fn test_none_keeps_all() {
        let pool = tracks(4);
        let kept = RelevanceCut::None.apply(scored(&pool, &[90, 50, 20, 10]));
        assert_eq!(kept.len(), 4);
    }

    #[test]
    fn test_percentage_of_best() {
        let pool = tracks(5);
        let kept = RelevanceCut::percentage_of_best(0.5).apply(scored(&pool, &[90, 80, 45, 44, 10]));
        assert_eq!(overall(&kept), vec![90, 80, 45]);
    }

    #[test]
    fn test_gap_detection() {
        let pool = tracks(5);
        let kept = RelevanceCut::gap_detection(0.5).apply(scored(&pool, &[90, 85, 85, 40, 38]));
        assert_eq!(overall(&kept), vec![90, 85, 85]);
    }

    #[test]
    fn test_std_deviation() {
        let pool = tracks(6);
        let kept = RelevanceCut::std_deviation(1.0).apply(scored(&pool, &[95, 90, 85, 80, 20, 10]));
        assert_eq!(overall(&kept), vec![95, 90, 85, 80]);

        let similar = RelevanceCut::std_deviation(0.0).apply(scored(&pool, &[70, 70, 70, 70]));
        assert_eq!(similar.len(), 4);
    }

    #[test]
    fn test_percentage_with_minimum() {
        let pool = tracks(3);
        let cut = RelevanceCut::percentage_with_minimum(0.8, 60);

        let weak = cut.apply(scored(&pool, &[50, 30, 10]));
        assert_eq!(weak.len(), 3);

        let strong = cut.apply(scored(&pool, &[90, 75, 60]));
        assert_eq!(overall(&strong), vec![90, 75]);
    }

    #[test]
    fn test_empty_list() {
        let cut = RelevanceCut::percentage_of_best(0.4);
        assert!(cut.apply(Vec::new()).is_empty());
    }
}
