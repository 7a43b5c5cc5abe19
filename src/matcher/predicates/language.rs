//! Language and region, judged from genre tags and the script of the title.

use crate::catalog::Track;
use crate::matcher::request::{contains_term, normalize_genre, MatchRequest};
use crate::matcher::Evaluation;

struct LanguageMarkers {
    names: &'static [&'static str],
    tags: &'static [&'static str],
    script: Option<fn(char) -> bool>,
}

const LANGUAGES: &[LanguageMarkers] = &[
    LanguageMarkers {
        names: &["spanish", "espanol", "español"],
        tags: &[
            "latin", "reggaeton", "spanish", "latino", "urbano", "bachata", "salsa", "cumbia",
            "flamenco", "mexican",
        ],
        script: None,
    },
    LanguageMarkers {
        names: &["portuguese", "brazilian"],
        tags: &["brazilian", "mpb", "bossa nova", "sertanejo", "funk carioca", "portuguese", "fado"],
        script: None,
    },
    LanguageMarkers {
        names: &["french"],
        tags: &["french", "chanson", "francais", "quebecois"],
        script: None,
    },
    LanguageMarkers {
        names: &["german"],
        tags: &["german", "deutsch", "schlager", "neue deutsche"],
        script: None,
    },
    LanguageMarkers {
        names: &["italian"],
        tags: &["italian", "italiano", "canzone"],
        script: None,
    },
    LanguageMarkers {
        names: &["korean"],
        tags: &["k pop", "korean", "k rap", "k indie"],
        script: Some(|c| matches!(c, '\u{AC00}'..='\u{D7AF}' | '\u{1100}'..='\u{11FF}')),
    },
    LanguageMarkers {
        names: &["japanese"],
        tags: &["j pop", "japanese", "j rock", "anime", "city pop"],
        script: Some(|c| matches!(c, '\u{3040}'..='\u{30FF}')),
    },
    LanguageMarkers {
        names: &["chinese", "mandarin", "cantonese"],
        tags: &["c pop", "mandopop", "cantopop", "chinese"],
        script: Some(|c| matches!(c, '\u{4E00}'..='\u{9FFF}')),
    },
    LanguageMarkers {
        names: &["hindi", "punjabi", "bollywood"],
        tags: &["bollywood", "desi", "filmi", "hindi", "punjabi", "bhangra"],
        script: Some(|c| matches!(c, '\u{0900}'..='\u{097F}' | '\u{0A00}'..='\u{0A7F}')),
    },
    LanguageMarkers {
        names: &["russian"],
        tags: &["russian"],
        script: Some(|c| matches!(c, '\u{0400}'..='\u{04FF}')),
    },
    LanguageMarkers {
        names: &["arabic"],
        tags: &["arabic", "khaleeji", "rai"],
        script: Some(|c| matches!(c, '\u{0600}'..='\u{06FF}')),
    },
    LanguageMarkers {
        names: &["afrobeats", "yoruba", "nigerian"],
        tags: &["afrobeats", "afropop", "nigerian", "afro"],
        script: None,
    },
];

const REGIONS: &[(&[&str], &[&str])] = &[
    (&["uk", "british", "england", "london"], &["uk", "british", "grime", "britpop"]),
    (&["us", "usa", "american"], &["american", "us", "country", "americana"]),
    (&["latin america", "latin"], &["latin", "reggaeton", "latino"]),
    (&["korea", "korean"], &["k pop", "korean"]),
    (&["japan", "japanese"], &["j pop", "japanese"]),
    (&["africa", "african", "nigeria"], &["afrobeats", "afropop", "african", "amapiano"]),
    (&["brazil", "brazilian"], &["brazilian", "mpb", "sertanejo"]),
    (&["france", "french"], &["french", "chanson"]),
    (&["germany", "german"], &["german", "deutsch"]),
    (&["india", "indian"], &["bollywood", "desi", "indian"]),
    (&["caribbean", "jamaica", "jamaican"], &["reggae", "dancehall", "soca"]),
];

fn normalized_tags(track: &Track) -> Vec<String> {
    track.genres.iter().map(|t| normalize_genre(t)).collect()
}

fn any_tag(tags: &[String], markers: &[&str]) -> bool {
    tags.iter()
        .any(|tag| markers.iter().any(|m| contains_term(tag, m)))
}

fn title_uses_script(track: &Track, script: fn(char) -> bool) -> bool {
    track
        .name
        .chars()
        .chain(track.artists.iter().flat_map(|a| a.name.chars()))
        .any(script)
}

pub fn language(track: &Track, request: &MatchRequest) -> Evaluation {
    let Some(wanted) = request.intent().language.as_deref() else {
        return Evaluation::NotApplicable;
    };
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() {
        return Evaluation::NotApplicable;
    }
    let tags = normalized_tags(track);

    if wanted == "english" {
        let foreign_tag = LANGUAGES.iter().any(|lang| any_tag(&tags, lang.tags));
        return Evaluation::from_check(track.name.is_ascii() && !foreign_tag);
    }

    match LANGUAGES
        .iter()
        .find(|lang| lang.names.iter().any(|n| contains_term(&wanted, n)))
    {
        Some(markers) => {
            let by_script = markers
                .script
                .is_some_and(|script| title_uses_script(track, script));
            Evaluation::from_check(by_script || any_tag(&tags, markers.tags))
        }
        None => Evaluation::from_check(any_tag(&tags, &[wanted.as_str()])),
    }
}

pub fn region(track: &Track, request: &MatchRequest) -> Evaluation {
    let Some(wanted) = request.intent().region.as_deref() else {
        return Evaluation::NotApplicable;
    };
    let wanted = wanted.trim().to_lowercase();
    if wanted.is_empty() {
        return Evaluation::NotApplicable;
    }
    let tags = normalized_tags(track);

    let matched = match REGIONS
        .iter()
        .find(|(names, _)| names.iter().any(|n| contains_term(&wanted, n)))
    {
        Some((_, markers)) => any_tag(&tags, markers),
        None => any_tag(&tags, &[wanted.as_str()]),
    };
    Evaluation::from_check(matched)
}
