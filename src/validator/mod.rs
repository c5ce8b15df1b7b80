//! Candidate validation
//!
//! `WordValidator` runs five gates in a fixed order and reports the first one
//! that fails:
//!
//! 1. originality (`DuplicateWord`)
//! 2. composability from the root's letters (`LettersNotInRoot`)
//! 3. dictionary validity (`NotARealWord`)
//! 4. minimum length (`TooShort`)
//! 5. distinctness from the root (`SameAsRoot`)
//!
//! Validation never mutates anything; callers apply accepted words themselves.

pub mod gates;

use crate::core::{Rejection, Verdict};
use crate::dictionary::{DEFAULT_LOCALE, DictionaryOracle};

/// Decides whether a normalized candidate may be accepted
pub struct WordValidator<'d, D: DictionaryOracle + ?Sized> {
    dictionary: &'d D,
    locale: String,
}

impl<'d, D: DictionaryOracle + ?Sized> WordValidator<'d, D> {
    /// Validator checking words against `dictionary` in the default locale
    #[must_use]
    pub fn new(dictionary: &'d D) -> Self {
        Self::with_locale(dictionary, DEFAULT_LOCALE)
    }

    #[must_use]
    pub fn with_locale(dictionary: &'d D, locale: impl Into<String>) -> Self {
        Self {
            dictionary,
            locale: locale.into(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub const fn dictionary(&self) -> &'d D {
        self.dictionary
    }

    /// Validate `candidate` against `root` and the words already used
    ///
    /// `candidate` must already be normalized (trimmed, lowercased).
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{Rejection, Verdict};
    /// use word_scramble::dictionary::WordListDictionary;
    /// use word_scramble::validator::WordValidator;
    ///
    /// let dict = WordListDictionary::from_words("en", ["silk", "silkworm"]);
    /// let validator = WordValidator::new(&dict);
    ///
    /// assert_eq!(validator.validate("silk", "silkworm", &[] as &[&str]), Verdict::Accepted);
    /// assert_eq!(
    ///     validator.validate("silk", "silkworm", &["silk"]),
    ///     Verdict::Rejected(Rejection::DuplicateWord)
    /// );
    /// ```
    pub fn validate<S: AsRef<str>>(
        &self,
        candidate: &str,
        root: &str,
        used_words: &[S],
    ) -> Verdict {
        self.first_failure(candidate, root, used_words).into()
    }

    /// The first gate `candidate` fails, or `None` if it passes them all
    pub fn first_failure<S: AsRef<str>>(
        &self,
        candidate: &str,
        root: &str,
        used_words: &[S],
    ) -> Option<Rejection> {
        Rejection::ALL
            .into_iter()
            .find(|&gate| !self.passes(gate, candidate, root, used_words))
    }

    fn passes<S: AsRef<str>>(
        &self,
        gate: Rejection,
        candidate: &str,
        root: &str,
        used_words: &[S],
    ) -> bool {
        match gate {
            Rejection::DuplicateWord => gates::is_original(candidate, used_words),
            Rejection::LettersNotInRoot => gates::is_possible(candidate, root),
            Rejection::NotARealWord => gates::is_real(self.dictionary, candidate, &self.locale),
            Rejection::TooShort => gates::is_long_enough(candidate),
            Rejection::SameAsRoot => gates::differs_from_root(candidate, root),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    const NONE: &[&str] = &[];

    fn stub() -> WordListDictionary {
        WordListDictionary::from_words(
            "en",
            [
                "silkworm", "silk", "worm", "milk", "work", "risk", "sir", "table", "able", "bale",
                "cat", "act",
            ],
        )
    }

    #[test]
    fn accepts_valid_candidate() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(validator.validate("silk", "silkworm", NONE), Verdict::Accepted);
        assert_eq!(validator.validate("worm", "silkworm", NONE), Verdict::Accepted);
    }

    #[test]
    fn rejects_used_word() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("silk", "silkworm", &["silk"]),
            Verdict::Rejected(Rejection::DuplicateWord)
        );
    }

    #[test]
    fn rejects_overused_letter() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("silkk", "silkworm", NONE),
            Verdict::Rejected(Rejection::LettersNotInRoot)
        );
    }

    #[test]
    fn rejects_absent_letter() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("table", "silkworm", NONE),
            Verdict::Rejected(Rejection::LettersNotInRoot)
        );
    }

    #[test]
    fn rejects_unknown_word() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("slim", "silkworm", NONE),
            Verdict::Rejected(Rejection::NotARealWord)
        );
    }

    #[test]
    fn rejects_short_word() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("sir", "silkworm", NONE),
            Verdict::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn rejects_root_itself() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("table", "table", NONE),
            Verdict::Rejected(Rejection::SameAsRoot)
        );
        assert_eq!(
            validator.validate("silkworm", "silkworm", NONE),
            Verdict::Rejected(Rejection::SameAsRoot)
        );
    }

    #[test]
    fn too_short_wins_over_same_as_root() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("cat", "cat", NONE),
            Verdict::Rejected(Rejection::TooShort)
        );
    }

    #[test]
    fn unknown_root_fails_dictionary_before_same_as_root() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("blorp", "blorp", NONE),
            Verdict::Rejected(Rejection::NotARealWord)
        );
    }

    #[test]
    fn duplicate_wins_over_everything() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        // Also too short, unknown and spelled from absent letters
        assert_eq!(
            validator.validate("zq", "silkworm", &["zq"]),
            Verdict::Rejected(Rejection::DuplicateWord)
        );
        assert_eq!(
            validator.validate("cat", "cat", &["cat"]),
            Verdict::Rejected(Rejection::DuplicateWord)
        );
    }

    #[test]
    fn letters_win_over_dictionary_and_length() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("zq", "silkworm", NONE),
            Verdict::Rejected(Rejection::LettersNotInRoot)
        );
        assert_eq!(
            validator.validate("act", "silkworm", NONE),
            Verdict::Rejected(Rejection::LettersNotInRoot)
        );
    }

    #[test]
    fn dictionary_wins_over_length() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        assert_eq!(
            validator.validate("ilk", "silkworm", NONE),
            Verdict::Rejected(Rejection::NotARealWord)
        );
    }

    #[test]
    fn locale_mismatch_is_not_a_real_word() {
        let dict = stub();
        let validator = WordValidator::with_locale(&dict, "de");
        assert_eq!(validator.locale(), "de");
        assert_eq!(
            validator.validate("silk", "silkworm", NONE),
            Verdict::Rejected(Rejection::NotARealWord)
        );
    }

    #[test]
    fn validation_has_no_side_effects() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        let used = vec!["worm".to_string()];

        let first = validator.validate("silk", "silkworm", &used);
        let second = validator.validate("silk", "silkworm", &used);

        assert_eq!(first, second);
        assert_eq!(used, vec!["worm".to_string()]);
    }

    #[test]
    fn every_used_word_is_duplicate() {
        let dict = stub();
        let validator = WordValidator::new(&dict);
        let used = ["silk", "worm", "milk", "work", "risk"];
        for word in used {
            assert_eq!(
                validator.first_failure(word, "silkworm", &used),
                Some(Rejection::DuplicateWord)
            );
        }
    }

    #[test]
    fn works_with_dyn_oracle() {
        let dict = stub();
        let oracle: &dyn DictionaryOracle = &dict;
        let validator = WordValidator::new(oracle);
        assert!(validator.validate("milk", "silkworm", NONE).is_accepted());
    }
}
