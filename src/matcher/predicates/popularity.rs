//! Popularity level, virality and chart presence.

use crate::catalog::Track;
use crate::matcher::request::MatchRequest;
use crate::matcher::Evaluation;

const MAINSTREAM_TERMS: &[&str] = &["mainstream", "well known", "well-known", "famous"];

const EMERGING_TERMS: &[&str] = &[
    "underground",
    "emerging",
    "hidden gem",
    "obscure",
    "deep cut",
    "lesser known",
    "lesser-known",
    "undiscovered",
];

const VIRAL_TERMS: &[&str] = &["viral", "trending", "tiktok", "popular", "hit"];

const CHART_TERMS: &[&str] = &[
    "chart",
    "top 40",
    "top 50",
    "top 100",
    "billboard",
    "number one",
    "#1",
];

/// Popularity at or above this counts as popular.
pub const POPULAR_FLOOR: u8 = 50;
/// Popularity above this counts as a hit for viral and chart requests.
pub const HIT_POPULARITY: u8 = 70;

pub fn popularity_level(track: &Track, request: &MatchRequest) -> Evaluation {
    let intent = request.intent();
    let popular = intent.include_popular || request.mentions_any(MAINSTREAM_TERMS);
    let emerging = intent.include_emerging || request.mentions_any(EMERGING_TERMS);

    match (popular, emerging) {
        (true, false) => Evaluation::from_check(track.popularity() >= POPULAR_FLOOR),
        (false, true) => Evaluation::from_check(track.popularity() < POPULAR_FLOOR),
        _ => Evaluation::NotApplicable,
    }
}

pub fn viral(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.mentions_any(VIRAL_TERMS) {
        Evaluation::from_check(track.popularity() > HIT_POPULARITY)
    } else {
        Evaluation::NotApplicable
    }
}

pub fn chart(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.mentions_any(CHART_TERMS) {
        Evaluation::from_check(track.popularity() > HIT_POPULARITY)
    } else {
        Evaluation::NotApplicable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Intent;
    use crate::matcher::predicates::test_support::track_with;

    fn with_popularity(popularity: u8) -> Track {
        let mut track = track_with(None);
        track.popularity = popularity;
        track
    }

    #[test]
    fn test_popularity_level_from_intent_flags() {
        let popular = Intent {
            include_popular: true,
            ..Default::default()
        };
        let request = MatchRequest::new(&popular, "", 2024);
        assert_eq!(
            popularity_level(&with_popularity(80), &request),
            Evaluation::Satisfied
        );
        assert_eq!(
            popularity_level(&with_popularity(20), &request),
            Evaluation::Failed
        );

        let both = Intent {
            include_popular: true,
            include_emerging: true,
            ..Default::default()
        };
        let request = MatchRequest::new(&both, "", 2024);
        assert_eq!(
            popularity_level(&with_popularity(20), &request),
            Evaluation::NotApplicable
        );
    }

    #[test]
    fn test_underground_prompt() {
        let intent = Intent::default();
        let request = MatchRequest::new(&intent, "underground techno", 2024);
        assert_eq!(
            popularity_level(&with_popularity(12), &request),
            Evaluation::Satisfied
        );
        assert_eq!(
            popularity_level(&with_popularity(90), &request),
            Evaluation::Failed
        );
    }

    #[test]
    fn test_viral_and_chart() {
        let intent = Intent::default();
        let viral_request = MatchRequest::new(&intent, "viral tiktok songs", 2024);
        assert_eq!(
            viral(&with_popularity(71), &viral_request),
            Evaluation::Satisfied
        );
        assert_eq!(
            viral(&with_popularity(70), &viral_request),
            Evaluation::Failed
        );
        assert_eq!(
            chart(&with_popularity(95), &viral_request),
            Evaluation::NotApplicable
        );

        let chart_request = MatchRequest::new(&intent, "billboard #1 hits", 2024);
        assert_eq!(
            chart(&with_popularity(95), &chart_request),
            Evaluation::Satisfied
        );
    }
}
