//! Listening context: activities, settings and occasions named in the prompt
//! or keywords.

use super::{check_features, evaluate_profiles, Profile};
use crate::catalog::{Mode, Track};
use crate::matcher::request::MatchRequest;
use crate::matcher::Evaluation;

const ACTIVITY_PROFILES: &[Profile] = &[
    Profile {
        terms: &[
            "workout", "gym", "training", "exercise", "lifting", "cardio", "hiit",
        ],
        check: |f| f.energy >= 0.6 && f.tempo >= 110.0,
    },
    Profile {
        terms: &["running", "run", "jogging", "jog"],
        check: |f| f.energy >= 0.6 && f.tempo >= 120.0,
    },
    Profile {
        terms: &["study", "studying", "focus", "concentration", "reading", "homework"],
        check: |f| f.energy < 0.5 && f.speechiness < 0.2,
    },
    Profile {
        terms: &["work", "working", "office", "coding", "programming"],
        check: |f| f.energy < 0.7 && f.speechiness < 0.3,
    },
    Profile {
        terms: &["sleep", "sleeping", "bedtime", "nap"],
        check: |f| f.energy < 0.3 && f.tempo < 100.0,
    },
    Profile {
        terms: &["meditation", "meditate", "yoga", "mindfulness"],
        check: |f| f.energy < 0.4 && f.acousticness >= 0.3,
    },
    Profile {
        terms: &["cooking", "cleaning", "chores"],
        check: |f| f.valence >= 0.4 && f.energy >= 0.4,
    },
    Profile {
        terms: &["party", "partying", "pregame", "pre-game"],
        check: |f| f.danceability >= 0.6 && f.energy >= 0.6,
    },
    Profile {
        terms: &["dancing", "dance floor", "dancefloor"],
        check: |f| f.danceability >= 0.65,
    },
];

const SETTING_PROFILES: &[Profile] = &[
    Profile {
        terms: &["road trip", "driving", "drive", "car"],
        check: |f| f.energy >= 0.5 && f.valence >= 0.4,
    },
    Profile {
        terms: &["beach", "summer", "pool", "poolside", "sunshine"],
        check: |f| f.valence >= 0.5 && f.danceability >= 0.5,
    },
    Profile {
        terms: &["rainy day", "rain", "rainy"],
        check: |f| f.energy < 0.6 && f.valence < 0.6,
    },
    Profile {
        terms: &["late night", "night drive", "midnight"],
        check: |f| f.energy < 0.7,
    },
    Profile {
        terms: &["morning", "wake up", "sunrise"],
        check: |f| f.valence >= 0.5,
    },
    Profile {
        terms: &["coffee shop", "cafe", "dinner", "dinner party"],
        check: |f| f.energy < 0.6 && f.acousticness >= 0.3,
    },
    Profile {
        terms: &["club", "nightclub", "rave"],
        check: |f| f.danceability >= 0.65 && f.energy >= 0.65,
    },
];

const SEASONAL_TITLE_TERMS: &[&str] = &[
    "christmas", "xmas", "santa", "snow", "jingle", "holiday", "sleigh", "noel", "winter",
];

const SPOOKY_TITLE_TERMS: &[&str] = &[
    "halloween", "ghost", "monster", "spooky", "haunted", "zombie", "witch", "thriller",
];

/// An occasion and the way a track proves it fits.
struct Occasion {
    terms: &'static [&'static str],
    check: fn(&Track) -> Evaluation,
}

const OCCASIONS: &[Occasion] = &[
    Occasion {
        terms: &["christmas", "xmas", "holiday season", "festive"],
        check: |track| Evaluation::from_check(title_mentions(track, SEASONAL_TITLE_TERMS)),
    },
    Occasion {
        terms: &["halloween", "spooky"],
        check: |track| {
            if title_mentions(track, SPOOKY_TITLE_TERMS) {
                return Evaluation::Satisfied;
            }
            check_features(track, |f| f.valence < 0.35 && f.mode == Mode::Minor)
        },
    },
    Occasion {
        terms: &[
            "birthday",
            "celebration",
            "celebrate",
            "graduation",
            "new year",
            "new years",
        ],
        check: |track| check_features(track, |f| f.valence >= 0.5 && f.energy >= 0.5),
    },
    Occasion {
        terms: &["wedding", "anniversary", "first dance"],
        check: |track| check_features(track, |f| f.valence >= 0.4 && f.energy <= 0.8),
    },
    Occasion {
        terms: &["valentine", "valentines", "date night"],
        check: |track| check_features(track, |f| f.valence >= 0.3 && f.energy < 0.7),
    },
];

fn title_mentions(track: &Track, terms: &[&str]) -> bool {
    let title = track.name.to_lowercase();
    let album = track.album.name.to_lowercase();
    terms
        .iter()
        .any(|term| title.contains(term) || album.contains(term))
}

pub fn activity(track: &Track, request: &MatchRequest) -> Evaluation {
    evaluate_profiles(track, ACTIVITY_PROFILES, |p| request.mentions_any(p.terms))
}

pub fn setting(track: &Track, request: &MatchRequest) -> Evaluation {
    evaluate_profiles(track, SETTING_PROFILES, |p| request.mentions_any(p.terms))
}

pub fn occasion(track: &Track, request: &MatchRequest) -> Evaluation {
    let mut requested = OCCASIONS
        .iter()
        .filter(|o| request.mentions_any(o.terms))
        .peekable();
    if requested.peek().is_none() {
        return Evaluation::NotApplicable;
    }
    Evaluation::from_check(requested.any(|o| (o.check)(track).is_satisfied()))
}
