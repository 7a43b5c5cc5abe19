//! Per-ranking view of the user's request.
//!
//! Lower-cases the prompt and the intent's term lists once so that every
//! predicate of every track can share them read-only.

use crate::intent::Intent;

/// The prompt and intent, prepared for predicate evaluation.
#[derive(Debug, Clone)]
pub struct MatchRequest<'a> {
    intent: &'a Intent,
    prompt: String,
    keywords: Vec<String>,
    moods: Vec<String>,
    genres: Vec<String>,
    artists: Vec<String>,
    reference_year: i32,
}

impl<'a> MatchRequest<'a> {
    pub fn new(intent: &'a Intent, prompt: &str, reference_year: i32) -> Self {
        let lower_all = |items: &[String]| -> Vec<String> {
            items
                .iter()
                .map(|s| s.trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect()
        };

        Self {
            intent,
            prompt: prompt.to_lowercase(),
            keywords: lower_all(&intent.keywords),
            moods: lower_all(&intent.moods),
            genres: intent
                .genres
                .iter()
                .map(|g| normalize_genre(g))
                .filter(|g| !g.is_empty())
                .collect(),
            artists: intent.requested_artists().map(|a| a.to_lowercase()).collect(),
            reference_year,
        }
    }

    pub fn intent(&self) -> &'a Intent {
        self.intent
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn moods(&self) -> &[String] {
        &self.moods
    }

    /// Requested genres, lower-cased with `-`/`_` folded to spaces.
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Lower-cased confirmed artists.
    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    /// Year "now" for era judgements, fixed per ranking.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Whether the prompt or any intent keyword mentions `term`.
    pub fn mentions(&self, term: &str) -> bool {
        contains_term(&self.prompt, term) || self.keywords.iter().any(|k| contains_term(k, term))
    }

    pub fn mentions_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| self.mentions(t))
    }

    pub fn prompt_mentions_any(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| contains_term(&self.prompt, t))
    }

    /// Whether any requested mood contains one of `terms`.
    pub fn mood_in(&self, terms: &[&str]) -> bool {
        self.moods
            .iter()
            .any(|m| terms.iter().any(|t| contains_term(m, t)))
    }

    /// Whether a requested genre or the prompt mentions one of `terms`.
    pub fn genre_or_prompt_in(&self, terms: &[&str]) -> bool {
        terms.iter().any(|t| {
            let folded = normalize_genre(t);
            self.genres.iter().any(|g| contains_term(g, &folded))
                || contains_term(&self.prompt, t)
                || contains_term(&self.prompt, &folded)
        })
    }
}

/// Case-sensitive term containment on word boundaries.
///
/// The term must start at a word boundary and end at one, optionally followed
/// by a plural `s`. Boundaries are only enforced on alphanumeric term edges,
/// so terms like `#1` or `ft.` still match inside punctuation.
pub fn contains_term(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    let starts_alnum = term.chars().next().is_some_and(|c| c.is_alphanumeric());
    let ends_alnum = term.chars().next_back().is_some_and(|c| c.is_alphanumeric());

    haystack.match_indices(term).any(|(idx, _)| {
        let before_ok = !starts_alnum
            || haystack[..idx]
                .chars()
                .next_back()
                .map_or(true, |c| !c.is_alphanumeric());
        if !before_ok {
            return false;
        }
        if !ends_alnum {
            return true;
        }
        let rest = &haystack[idx + term.len()..];
        let mut chars = rest.chars();
        match chars.next() {
            None => true,
            Some(c) if !c.is_alphanumeric() => true,
            Some('s') => chars.next().map_or(true, |c| !c.is_alphanumeric()),
            Some(_) => false,
        }
    })
}

/// Lower-case a genre label and fold `-`/`_` separators to single spaces.
pub fn normalize_genre(genre: &str) -> String {
    genre
        .to_lowercase()
        .replace(['-', '_'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Term containment
    // ==========================================================================

    #[test]
    fn test_contains_term_word_boundaries() {
        assert!(contains_term("energetic workout songs", "workout"));
        assert!(contains_term("songs for workouts", "workout"));
        assert!(!contains_term("deliver the goods", "live"));
        assert!(!contains_term("classical piano", "classic"));
        assert!(contains_term("classic rock", "classic"));
        assert!(!contains_term("workout mix", "work"));
        assert!(contains_term("songs from the 90s", "90s"));
        assert!(!contains_term("the 1990s", "90s"));
    }

    #[test]
    fn test_contains_term_punctuation_edges() {
        assert!(contains_term("a #1 hit", "#1"));
        assert!(contains_term("song (ft. someone)", "ft."));
        assert!(contains_term("lo-fi beats", "lo-fi"));
        assert!(!contains_term("anything", ""));
    }

    #[test]
    fn test_normalize_genre() {
        assert_eq!(normalize_genre("Hip-Hop"), "hip hop");
        assert_eq!(normalize_genre("  Deep__House "), "deep house");
        assert_eq!(normalize_genre("R&B"), "r&b");
    }

    // ==========================================================================
    // Request helpers
    // ==========================================================================

    #[test]
    fn test_mentions_checks_prompt_and_keywords() {
        let intent = Intent {
            keywords: vec!["Acoustic".to_string()],
            moods: vec!["Feel-Good".to_string()],
            genres: vec!["Hip-Hop".to_string()],
            confirmed_artists: Some(vec!["Nas".to_string(), " ".to_string()]),
            ..Default::default()
        };
        let request = MatchRequest::new(&intent, "Fast songs for the GYM", 2024);

        assert!(request.mentions("gym"));
        assert!(request.mentions("acoustic"));
        assert!(!request.mentions("slow"));
        assert!(request.prompt_mentions_any(&["fast", "upbeat"]));
        assert!(!request.prompt_mentions_any(&["acoustic"]));
        assert!(request.mood_in(&["feel-good"]));
        assert!(request.genre_or_prompt_in(&["hip-hop"]));
        assert_eq!(request.artists(), &["nas".to_string()]);
        assert_eq!(request.reference_year(), 2024);
    }
}
