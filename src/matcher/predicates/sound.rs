//! Sound: instrumentation, production descriptors and remix types.

use super::{evaluate_profiles, Profile};
use crate::catalog::Track;
use crate::matcher::request::MatchRequest;
use crate::matcher::Evaluation;

const INSTRUMENT_PROFILES: &[Profile] = &[
    Profile {
        terms: &["guitar", "guitars"],
        check: |f| f.acousticness >= 0.25 || f.energy >= 0.65,
    },
    Profile {
        terms: &["piano", "keys"],
        check: |f| f.acousticness >= 0.5,
    },
    Profile {
        terms: &["strings", "orchestra", "violin", "cello"],
        check: |f| f.acousticness >= 0.5 && f.instrumentalness >= 0.3,
    },
    Profile {
        terms: &["synth", "synths", "synthesizer", "electronic"],
        check: |f| f.acousticness < 0.3,
    },
    Profile {
        terms: &["drums", "bass", "808", "percussion"],
        check: |f| f.energy >= 0.5 && f.danceability >= 0.5,
    },
    Profile {
        terms: &["saxophone", "sax", "brass", "horns", "trumpet"],
        check: |f| f.acousticness >= 0.3,
    },
];

const DESCRIPTOR_PROFILES: &[Profile] = &[
    Profile {
        terms: &["lo-fi", "lofi"],
        check: |f| f.energy < 0.5,
    },
    Profile {
        terms: &["cinematic", "epic", "soundtrack"],
        check: |f| f.instrumentalness >= 0.4,
    },
    Profile {
        terms: &["atmospheric", "ethereal", "spacey"],
        check: |f| f.energy < 0.5 && f.instrumentalness >= 0.3,
    },
    Profile {
        terms: &["heavy", "distorted", "loud", "gritty"],
        check: |f| f.energy >= 0.8,
    },
    Profile {
        terms: &["smooth", "soft", "warm"],
        check: |f| f.energy < 0.5,
    },
];

const REMIX_TERMS: &[&str] = &[
    "remix",
    "extended mix",
    "radio edit",
    "club mix",
    "dub mix",
    "bootleg",
    "vip mix",
];

pub fn instrumentation(track: &Track, request: &MatchRequest) -> Evaluation {
    evaluate_profiles(track, INSTRUMENT_PROFILES, |p| request.mentions_any(p.terms))
}

pub fn sound_descriptor(track: &Track, request: &MatchRequest) -> Evaluation {
    evaluate_profiles(track, DESCRIPTOR_PROFILES, |p| request.mentions_any(p.terms))
}

pub fn remix_type(track: &Track, request: &MatchRequest) -> Evaluation {
    let requested: Vec<&str> = REMIX_TERMS
        .iter()
        .copied()
        .filter(|term| request.mentions(term))
        .collect();
    if requested.is_empty() {
        return Evaluation::NotApplicable;
    }
    let name = track.name.to_lowercase();
    Evaluation::from_check(requested.iter().any(|term| name.contains(term)))
}
