use serde::{Deserialize, Serialize};

/// Outcome of a single checklist predicate.
///
/// A facet nobody asked for is `NotApplicable` and always passes; it does not
/// count towards its category's score.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Evaluation {
    NotApplicable,
    Satisfied,
    Failed,
}

impl Evaluation {
    pub fn from_check(ok: bool) -> Self {
        if ok {
            Evaluation::Satisfied
        } else {
            Evaluation::Failed
        }
    }

    /// `Satisfied` when the check holds, `NotApplicable` otherwise.
    ///
    /// For bonus-only facets such as "the prompt names this exact title".
    pub fn bonus(ok: bool) -> Self {
        if ok {
            Evaluation::Satisfied
        } else {
            Evaluation::NotApplicable
        }
    }

    pub fn passes(self) -> bool {
        !matches!(self, Evaluation::Failed)
    }

    pub fn is_applicable(self) -> bool {
        !matches!(self, Evaluation::NotApplicable)
    }

    pub fn is_satisfied(self) -> bool {
        matches!(self, Evaluation::Satisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_applicable_passes() {
        assert!(Evaluation::NotApplicable.passes());
        assert!(!Evaluation::NotApplicable.is_applicable());
        assert!(!Evaluation::NotApplicable.is_satisfied());
    }

    #[test]
    fn test_constructors() {
        assert_eq!(Evaluation::from_check(true), Evaluation::Satisfied);
        assert_eq!(Evaluation::from_check(false), Evaluation::Failed);
        assert_eq!(Evaluation::bonus(true), Evaluation::Satisfied);
        assert_eq!(Evaluation::bonus(false), Evaluation::NotApplicable);
        assert!(!Evaluation::Failed.passes());
    }
}
