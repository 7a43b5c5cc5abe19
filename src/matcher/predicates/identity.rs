//! Track identity: title, album, artist, featured credits, version and
//! explicit-content labelling.

use crate::catalog::Track;
use crate::matcher::request::{contains_term, MatchRequest};
use crate::matcher::Evaluation;

const VERSION_TERMS: &[&str] = &[
    "cover",
    "remix",
    "radio edit",
    "extended mix",
    "remaster",
    "remastered",
    "acoustic version",
    "live version",
    "unplugged",
    "version",
];

const FEATURE_TERMS: &[&str] = &["feat", "featuring", "ft.", "collab", "collaboration", "duet"];

const CLEAN_TERMS: &[&str] = &[
    "clean",
    "no explicit",
    "not explicit",
    "family friendly",
    "family-friendly",
    "kid friendly",
    "kid-friendly",
    "for kids",
    "radio safe",
];

const EXPLICIT_TERMS: &[&str] = &["explicit", "uncensored", "nsfw"];

/// Shorter titles ("Go", "Run") collide with ordinary prompt words.
const MIN_TITLE_CHARS: usize = 4;

/// Lower-cased title without version suffixes such as ` (feat. X)` or ` - Remastered`.
pub fn base_title(name: &str) -> String {
    let lower = name.to_lowercase();
    let cut = [" (", " [", " - "]
        .iter()
        .filter_map(|sep| lower.find(sep))
        .min()
        .unwrap_or(lower.len());
    lower[..cut].trim().to_string()
}

/// Case-insensitive artist match in either direction, so "Beyonce" matches
/// "Beyonce & Jay-Z" and vice versa. `wanted` must already be lower-cased.
pub fn artist_matches(artist_lower: &str, wanted: &[String]) -> bool {
    !artist_lower.is_empty()
        && wanted
            .iter()
            .any(|w| !w.is_empty() && (artist_lower.contains(w.as_str()) || w.contains(artist_lower)))
}

pub fn title(track: &Track, request: &MatchRequest) -> Evaluation {
    let title = base_title(&track.name);
    Evaluation::bonus(
        title.chars().count() >= MIN_TITLE_CHARS && contains_term(request.prompt(), &title),
    )
}

pub fn album(track: &Track, request: &MatchRequest) -> Evaluation {
    let album = base_title(&track.album.name);
    Evaluation::bonus(
        album.chars().count() >= MIN_TITLE_CHARS && contains_term(request.prompt(), &album),
    )
}

pub fn artist(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.artists().is_empty() {
        return Evaluation::NotApplicable;
    }
    Evaluation::from_check(
        track
            .artist_names_lower()
            .iter()
            .any(|name| artist_matches(name, request.artists())),
    )
}

pub fn featured_artist(track: &Track, request: &MatchRequest) -> Evaluation {
    if request.artists().is_empty() || !request.mentions_any(FEATURE_TERMS) {
        return Evaluation::NotApplicable;
    }
    let title = track.name.to_lowercase();
    let guest_credit = track
        .artist_names_lower()
        .iter()
        .skip(1)
        .any(|name| artist_matches(name, request.artists()));
    let title_credit = request
        .artists()
        .iter()
        .any(|wanted| title.contains(wanted.as_str()));
    Evaluation::from_check(guest_credit || title_credit)
}

pub fn version(track: &Track, request: &MatchRequest) -> Evaluation {
    let requested: Vec<&str> = VERSION_TERMS
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

pub fn explicit(track: &Track, request: &MatchRequest) -> Evaluation {
    // "no explicit" contains "explicit", so the clean request wins.
    if request.mentions_any(CLEAN_TERMS) {
        return Evaluation::from_check(track.explicit == Some(false));
    }
    if request.mentions_any(EXPLICIT_TERMS) {
        return Evaluation::from_check(track.explicit == Some(true));
    }
    Evaluation::NotApplicable
}
