//! Ordering of gated match scores.

use super::engine::MatchScore;

/// Order by overall score, best first. Ties keep their input order.
pub fn rank(mut scores: Vec<MatchScore<'_>>) -> Vec<MatchScore<'_>> {
    scores.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Album, Track};
    use crate::intent::Intent;
    use crate::matcher::checklist::build_checklist;
    use crate::matcher::request::MatchRequest;
    use crate::matcher::score::CategoryScores;

    fn track(id: &str) -> Track {
        Track {
            id: id.to_string(),
            name: id.to_string(),
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
        }
    }

    #[test]
    fn test_rank_is_stable_and_idempotent() {
        let intent = Intent::default();
        let request = MatchRequest::new(&intent, "", 2024);
        let tracks: Vec<Track> = ["a", "b", "c", "d"].iter().map(|id| track(id)).collect();
        let overall = [50, 90, 50, 70];

        let scores: Vec<MatchScore> = tracks
            .iter()
            .zip(overall)
            .map(|(t, o)| MatchScore {
                track: t,
                checklist: build_checklist(t, &request),
                category_scores: CategoryScores::default(),
                overall_score: o,
                match_reason: String::new(),
            })
            .collect();

        let ranked = rank(scores);
        let ids: Vec<String> = ranked.iter().map(|s| s.track.id.clone()).collect();
        assert_eq!(ids, vec!["b", "d", "a", "c"]);

        let again = rank(ranked);
        let ids_again: Vec<String> = again.iter().map(|s| s.track.id.clone()).collect();
        assert_eq!(ids_again, ids);
    }
}
