//! Genre alignment: tag matching plus audio profiles per genre family.

use super::{check_features, Profile};
use crate::catalog::Track;
use crate::matcher::predicates::era;
use crate::matcher::request::{contains_term, normalize_genre, MatchRequest};
use crate::matcher::Evaluation;

/// Audio shape of the common genre families. A requested genre selects every
/// family whose key appears in it, so "dance pop" picks the pop profile.
const GENRE_PROFILES: &[Profile] = &[
    Profile {
        terms: &["pop"],
        check: |f| {
            f.danceability >= 0.5 && f.energy >= 0.4 && f.acousticness <= 0.6 && f.instrumentalness < 0.5
        },
    },
    Profile {
        terms: &["rock", "grunge", "alternative"],
        check: |f| f.energy >= 0.6 && f.acousticness < 0.5,
    },
    Profile {
        terms: &["metal", "hardcore"],
        check: |f| f.energy >= 0.8,
    },
    Profile {
        terms: &["punk"],
        check: |f| f.energy >= 0.75,
    },
    Profile {
        terms: &["hip hop", "rap", "trap", "drill"],
        check: |f| f.speechiness >= 0.1 && f.danceability >= 0.5,
    },
    Profile {
        terms: &[
            "electronic",
            "edm",
            "house",
            "techno",
            "trance",
            "dubstep",
            "drum and bass",
            "dnb",
            "electro",
        ],
        check: |f| f.acousticness < 0.3 && f.danceability >= 0.5,
    },
    Profile {
        terms: &["jazz", "swing", "bebop"],
        check: |f| f.acousticness >= 0.3 && f.speechiness < 0.33 && f.energy < 0.7,
    },
    Profile {
        terms: &["classical", "orchestral", "baroque"],
        check: |f| f.acousticness >= 0.7 && f.instrumentalness >= 0.5 && f.energy < 0.5,
    },
    Profile {
        terms: &["ambient", "new age", "drone"],
        check: |f| f.energy < 0.4 && f.instrumentalness >= 0.3,
    },
    Profile {
        terms: &["folk", "acoustic", "singer songwriter", "americana", "bluegrass"],
        check: |f| f.acousticness >= 0.5,
    },
    Profile {
        terms: &["country"],
        check: |f| f.acousticness >= 0.2 && f.speechiness < 0.2,
    },
    Profile {
        terms: &["r&b", "rnb", "soul"],
        check: |f| f.danceability >= 0.5 && f.energy < 0.8 && f.acousticness < 0.7,
    },
    Profile {
        terms: &["lo fi", "lofi", "chillhop"],
        check: |f| f.energy < 0.5 && f.tempo < 100.0,
    },
    Profile {
        terms: &["latin", "reggaeton", "salsa", "bachata", "cumbia"],
        check: |f| f.danceability >= 0.6,
    },
    Profile {
        terms: &["reggae", "dancehall", "ska"],
        check: |f| f.danceability >= 0.6 && f.energy < 0.8,
    },
    Profile {
        terms: &["funk", "disco"],
        check: |f| f.danceability >= 0.65,
    },
    Profile {
        terms: &["blues"],
        check: |f| f.acousticness >= 0.2 && f.energy < 0.75,
    },
];

const FUSION_TERMS: &[&str] = &[
    "fusion",
    "meets",
    "crossover",
    "blend",
    "mashup",
    "mix of",
    "hybrid",
];

/// A requested genre matches a tag when either names the other on word
/// boundaries: "pop" matches "dance pop" and "indie rock" matches "rock".
fn tag_matches(requested: &str, tag: &str) -> bool {
    let tag = normalize_genre(tag);
    !tag.is_empty() && (contains_term(&tag, requested) || contains_term(requested, &tag))
}

fn matches_requested_genre(track: &Track, requested: &str) -> bool {
    track.genres.iter().any(|tag| tag_matches(requested, tag))
}

/// Profiles selected by the requested genres.
fn requested_profiles(request: &MatchRequest) -> Vec<&'static Profile> {
    GENRE_PROFILES
        .iter()
        .filter(|profile| {
            request
                .genres()
                .iter()
                .any(|genre| profile.terms.iter().any(|term| contains_term(genre, term)))
        })
        .collect()
}

pub fn main_genre(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.genres().is_empty() {
        return Evaluation::NotApplicable;
    }
    Evaluation::from_check(
        request
            .genres()
            .iter()
            .any(|genre| matches_requested_genre(track, genre)),
    )
}

pub fn genre_profile(track: &Track, request: &MatchRequest) -> Evaluation {
    let profiles = requested_profiles(request);
    if profiles.is_empty() {
        return Evaluation::NotApplicable;
    }
    check_features(track, |features| {
        profiles.iter().any(|profile| (profile.check)(features))
    })
}

/// Multi-word genres ("deep house", "indie rock") need an exact tag.
pub fn sub_genre(track: &Track, request: &MatchRequest) -> Evaluation {
    let compound: Vec<&String> = request
        .genres()
        .iter()
        .filter(|genre| genre.contains(' '))
        .collect();
    if compound.is_empty() {
        return Evaluation::NotApplicable;
    }
    Evaluation::from_check(compound.iter().any(|genre| {
        track
            .genres
            .iter()
            .any(|tag| normalize_genre(tag) == genre.as_str())
    }))
}

/// "jazz meets hip hop": the track must carry tags of two requested genres.
pub fn fusion(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.genres().len() < 2 || !request.mentions_any(FUSION_TERMS) {
        return Evaluation::NotApplicable;
    }
    let matched = request
        .genres()
        .iter()
        .filter(|genre| matches_requested_genre(track, genre))
        .count();
    Evaluation::from_check(matched >= 2)
}

/// "90s hip hop": a genre tag match released in a named decade.
pub fn era_genre(track: &Track, request: &MatchRequest) -> Evaluation {
    let decades = era::named_decades(request);
    if request.genres().is_empty() || decades.is_empty() {
        return Evaluation::NotApplicable;
    }
    let in_decade = track
        .release_year()
        .is_some_and(|year| decades.iter().any(|&d| era::in_decade(year, d)));
    Evaluation::from_check(in_decade && main_genre(track, request).is_satisfied())
}
