//! Release era: explicit year ranges, named decades and classic/recent
//! descriptors.

use crate::catalog::Track;
use crate::intent::YearFocus;
use crate::matcher::request::MatchRequest;
use crate::matcher::Evaluation;

const DECADES: &[(&str, i32)] = &[
    ("1950s", 1950),
    ("1960s", 1960),
    ("1970s", 1970),
    ("1980s", 1980),
    ("1990s", 1990),
    ("2000s", 2000),
    ("2010s", 2010),
    ("2020s", 2020),
    ("50s", 1950),
    ("60s", 1960),
    ("70s", 1970),
    ("80s", 1980),
    ("90s", 1990),
    ("'60s", 1960),
    ("'70s", 1970),
    ("'80s", 1980),
    ("'90s", 1990),
    ("fifties", 1950),
    ("sixties", 1960),
    ("seventies", 1970),
    ("eighties", 1980),
    ("nineties", 1990),
    ("noughties", 2000),
];

const CLASSIC_TERMS: &[&str] = &[
    "classic",
    "vintage",
    "retro",
    "old school",
    "oldies",
    "throwback",
];

const RECENT_TERMS: &[&str] = &[
    "recent",
    "modern",
    "contemporary",
    "new music",
    "new releases",
    "latest",
    "fresh",
];

/// A "recent" track was released at most this many years before the reference year.
pub const RECENT_WINDOW_YEARS: i32 = 5;
/// A "classic" track was released at least this many years before the reference year.
pub const CLASSIC_MIN_AGE_YEARS: i32 = 20;

/// Decade start years named in the prompt or keywords, deduplicated.
pub(crate) fn named_decades(request: &MatchRequest) -> Vec<i32> {
    let mut decades = Vec::new();
    for (term, start) in DECADES {
        if request.mentions(term) && !decades.contains(start) {
            decades.push(*start);
        }
    }
    decades
}

pub(crate) fn in_decade(year: i32, decade_start: i32) -> bool {
    year >= decade_start && year < decade_start + 10
}

fn check_year(track: &Track, check: impl FnOnce(i32) -> bool) -> Evaluation {
    match track.release_year() {
        Some(year) => Evaluation::from_check(check(year)),
        None => Evaluation::Failed,
    }
}

pub fn release_year(track: &Track, request: &MatchRequest) -> Evaluation {
    match request.intent().year_range {
        Some(range) => check_year(track, |year| range.contains(year)),
        None => Evaluation::NotApplicable,
    }
}

pub fn decade(track: &Track, request: &MatchRequest) -> Evaluation {
    let decades = named_decades(request);
    if decades.is_empty() {
        return Evaluation::NotApplicable;
    }
    check_year(track, |year| decades.iter().any(|&d| in_decade(year, d)))
}

pub fn era_descriptor(track: &Track, request: &MatchRequest) -> Evaluation {
    let focus = request.intent().year_focus;
    let wants_classic = focus == YearFocus::Classic || request.mentions_any(CLASSIC_TERMS);
    let wants_recent = focus == YearFocus::Recent || request.mentions_any(RECENT_TERMS);
    let reference = request.reference_year();

    match (wants_classic, wants_recent) {
        (true, false) => check_year(track, |year| year <= reference - CLASSIC_MIN_AGE_YEARS),
        (false, true) => check_year(track, |year| year >= reference - RECENT_WINDOW_YEARS),
        _ => Evaluation::NotApplicable,
    }
}
