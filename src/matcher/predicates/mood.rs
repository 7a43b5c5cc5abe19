//! Mood: emotional tone, energy vibe and tonality.

use super::{check_features, evaluate_profiles, Profile};
use crate::catalog::{Mode, Track};
use crate::matcher::request::MatchRequest;
use crate::matcher::Evaluation;

pub(crate) const HAPPY_TERMS: &[&str] = &[
    "happy",
    "joyful",
    "cheerful",
    "uplifting",
    "feel good",
    "feel-good",
    "euphoric",
    "sunny",
];

pub(crate) const SAD_TERMS: &[&str] = &[
    "sad",
    "melancholic",
    "melancholy",
    "somber",
    "sombre",
    "gloomy",
    "depressing",
    "heartbreak",
    "heartbroken",
    "dark",
];

const ROMANTIC_TERMS: &[&str] = &["romantic", "love song", "sensual", "intimate"];

const ANGRY_TERMS: &[&str] = &["angry", "aggressive", "rage", "furious"];

const HIGH_VIBE_TERMS: &[&str] = &[
    "energetic",
    "energizing",
    "hype",
    "pumped",
    "intense",
    "powerful",
];

const LOW_VIBE_TERMS: &[&str] = &[
    "calm",
    "chill",
    "mellow",
    "peaceful",
    "relaxed",
    "relaxing",
    "soothing",
    "dreamy",
    "laid back",
    "laid-back",
];

const TONE_PROFILES: &[Profile] = &[
    Profile {
        terms: HAPPY_TERMS,
        check: |f| f.valence > 0.6,
    },
    Profile {
        terms: SAD_TERMS,
        check: |f| f.valence < 0.4,
    },
    Profile {
        terms: ROMANTIC_TERMS,
        check: |f| f.valence >= 0.3 && f.energy < 0.7,
    },
    Profile {
        terms: ANGRY_TERMS,
        check: |f| f.energy > 0.7 && f.valence < 0.5,
    },
];

const VIBE_PROFILES: &[Profile] = &[
    Profile {
        terms: HIGH_VIBE_TERMS,
        check: |f| f.energy > 0.7,
    },
    Profile {
        terms: LOW_VIBE_TERMS,
        check: |f| f.energy < 0.5,
    },
];

fn requested(request: &MatchRequest, terms: &[&str]) -> bool {
    request.mood_in(terms) || request.prompt_mentions_any(terms)
}

pub fn emotional_tone(track: &Track, request: &MatchRequest) -> Evaluation {
    evaluate_profiles(track, TONE_PROFILES, |p| requested(request, p.terms))
}

pub fn energy_vibe(track: &Track, request: &MatchRequest) -> Evaluation {
    evaluate_profiles(track, VIBE_PROFILES, |p| requested(request, p.terms))
}

/// Happy moods ask for a major key, sad ones for minor. Both at once cancel out.
pub fn tonality(track: &Track, request: &MatchRequest) -> Evaluation {
    let wanted = match (request.mood_in(HAPPY_TERMS), request.mood_in(SAD_TERMS)) {
        (true, false) => Mode::Major,
        (false, true) => Mode::Minor,
        _ => return Evaluation::NotApplicable,
    };
    check_features(track, |f| f.mode == wanted)
}
