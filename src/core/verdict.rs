//! Validation outcomes
//!
//! Rejections are ordinary results, not errors.

use std::fmt;

/// Why a candidate was turned away, listed in the order the gates run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rejection {
    /// Already accepted earlier in this session
    DuplicateWord,
    /// Uses a letter the root lacks, or uses one more often than the root has it
    LettersNotInRoot,
    /// Not recognized by the dictionary
    NotARealWord,
    /// Fewer than `MIN_WORD_LENGTH` characters
    TooShort,
    /// Identical to the root word
    SameAsRoot,
}

impl Rejection {
    /// Every reason, in gate order
    pub const ALL: [Self; 5] = [
        Self::DuplicateWord,
        Self::LettersNotInRoot,
        Self::NotARealWord,
        Self::TooShort,
        Self::SameAsRoot,
    ];
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::DuplicateWord => "duplicate word",
            Self::LettersNotInRoot => "letters not in root",
            Self::NotARealWord => "not a real word",
            Self::TooShort => "too short",
            Self::SameAsRoot => "same as root",
        };
        f.write_str(name)
    }
}

/// Outcome of validating one candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(Rejection),
}

impl Verdict {
    #[inline]
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }
}

impl From<Option<Rejection>> for Verdict {
    fn from(failure: Option<Rejection>) -> Self {
        failure.map_or(Self::Accepted, Self::Rejected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_from_option() {
        assert_eq!(Verdict::from(None), Verdict::Accepted);
        assert_eq!(
            Verdict::from(Some(Rejection::TooShort)),
            Verdict::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn verdict_is_accepted() {
        assert!(Verdict::Accepted.is_accepted());
        assert!(!Verdict::Rejected(Rejection::SameAsRoot).is_accepted());
    }

    #[test]
    fn gate_order() {
        assert_eq!(Rejection::ALL[0], Rejection::DuplicateWord);
        assert_eq!(Rejection::ALL[4], Rejection::SameAsRoot);
    }

    #[test]
    fn rejection_display() {
        assert_eq!(Rejection::LettersNotInRoot.to_string(), "letters not in root");
        assert_eq!(format!("{}", Rejection::NotARealWord), "not a real word");
    }
}
