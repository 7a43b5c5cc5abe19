//! Audio-feature thresholds triggered by explicit cues.

use super::check_features;
use super::mood::{HAPPY_TERMS, SAD_TERMS};
use crate::catalog::Track;
use crate::intent::EnergyLevel;
use crate::matcher::request::MatchRequest;
use crate::matcher::Evaluation;

const FAST_TERMS: &[&str] = &["fast", "upbeat", "uptempo", "up-tempo"];
const SLOW_TERMS: &[&str] = &["slow", "ballad", "downtempo"];
const MEDIUM_TEMPO_TERMS: &[&str] = &[
    "medium tempo",
    "mid tempo",
    "mid-tempo",
    "midtempo",
    "moderate tempo",
];
const DANCE_TERMS: &[&str] = &["dance", "dancing", "party", "club", "groove", "bounce"];
const ACOUSTIC_TERMS: &[&str] = &["acoustic", "unplugged", "stripped"];
const INSTRUMENTAL_TERMS: &[&str] = &[
    "instrumental",
    "no vocals",
    "without vocals",
    "lo-fi",
    "lofi",
    "ambient",
];
const SPEECH_TERMS: &[&str] = &["rap", "hip-hop", "hip hop", "spoken word"];
const LIVE_TERMS: &[&str] = &["live", "concert", "performance", "tour"];

pub const FAST_TEMPO_BPM: f64 = 120.0;
pub const SLOW_TEMPO_BPM: f64 = 100.0;

pub fn tempo(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.prompt_mentions_any(FAST_TERMS) {
        check_features(track, |f| f.tempo > FAST_TEMPO_BPM)
    } else if request.prompt_mentions_any(SLOW_TERMS) {
        check_features(track, |f| f.tempo < SLOW_TEMPO_BPM)
    } else if request.prompt_mentions_any(MEDIUM_TEMPO_TERMS) {
        check_features(track, |f| (SLOW_TEMPO_BPM..=FAST_TEMPO_BPM).contains(&f.tempo))
    } else {
        Evaluation::NotApplicable
    }
}

pub fn energy(track: &Track, request: &MatchRequest) -> Evaluation {
    match request.intent().energy_level {
        Some(EnergyLevel::High) => check_features(track, |f| f.energy > 0.7),
        Some(EnergyLevel::Medium) => check_features(track, |f| (0.4..=0.7).contains(&f.energy)),
        Some(EnergyLevel::Low) => check_features(track, |f| f.energy < 0.4),
        None => Evaluation::NotApplicable,
    }
}

pub fn danceability(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.prompt_mentions_any(DANCE_TERMS) || request.mood_in(&["energetic"]) {
        check_features(track, |f| f.danceability > 0.6)
    } else {
        Evaluation::NotApplicable
    }
}

pub fn valence(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.mood_in(HAPPY_TERMS) {
        check_features(track, |f| f.valence > 0.6)
    } else if request.mood_in(SAD_TERMS) {
        check_features(track, |f| f.valence < 0.4)
    } else {
        Evaluation::NotApplicable
    }
}

pub fn acousticness(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.mentions_any(ACOUSTIC_TERMS) {
        check_features(track, |f| f.acousticness > 0.5)
    } else {
        Evaluation::NotApplicable
    }
}

pub fn instrumentalness(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.mentions_any(INSTRUMENTAL_TERMS) {
        check_features(track, |f| f.instrumentalness > 0.5)
    } else {
        Evaluation::NotApplicable
    }
}

pub fn speechiness(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.genre_or_prompt_in(SPEECH_TERMS) {
        check_features(track, |f| f.speechiness > 0.33)
    } else {
        Evaluation::NotApplicable
    }
}

pub fn liveness(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.prompt_mentions_any(LIVE_TERMS) {
        check_features(track, |f| f.liveness > 0.8)
    } else {
        Evaluation::NotApplicable
    }
}
