//! Individual validation gates
//!
//! Each gate is a pure predicate that returns `true` when the candidate passes.

use crate::core::{LetterPool, MIN_WORD_LENGTH, letter_count};
use crate::dictionary::DictionaryOracle;

/// Not already accepted this session
pub fn is_original<S: AsRef<str>>(candidate: &str, used_words: &[S]) -> bool {
    !used_words.iter().any(|used| used.as_ref() == candidate)
}

/// Spellable from the root's letters, one-for-one
pub fn is_possible(candidate: &str, root: &str) -> bool {
    LetterPool::new(root).can_spell(candidate)
}

/// Recognized by the dictionary in `locale`
pub fn is_real<D: DictionaryOracle + ?Sized>(
    dictionary: &D,
    candidate: &str,
    locale: &str,
) -> bool {
    dictionary.is_real_word(candidate, locale)
}

/// At least `MIN_WORD_LENGTH` characters
pub fn is_long_enough(candidate: &str) -> bool {
    letter_count(candidate) >= MIN_WORD_LENGTH
}

/// Not the root word itself
pub fn differs_from_root(candidate: &str, root: &str) -> bool {
    candidate != root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::WordListDictionary;

    #[test]
    fn originality() {
        let used = ["silk".to_string(), "worm".to_string()];
        assert!(!is_original("silk", &used));
        assert!(is_original("milk", &used));
        assert!(is_original("silk", &[] as &[&str]));
    }

    #[test]
    fn possibility() {
        assert!(is_possible("silk", "silkworm"));
        assert!(!is_possible("silkk", "silkworm"));
        assert!(!is_possible("table", "silkworm"));
    }

    #[test]
    fn reality() {
        let dict = WordListDictionary::from_words("en", ["silk"]);
        assert!(is_real(&dict, "silk", "en"));
        assert!(!is_real(&dict, "slik", "en"));
    }

    #[test]
    fn length_threshold() {
        assert!(!is_long_enough("row"));
        assert!(is_long_enough("worm"));
        assert!(is_long_enough("silkworm"));
    }

    #[test]
    fn distinct_from_root() {
        assert!(!differs_from_root("table", "table"));
        assert!(differs_from_root("able", "table"));
    }
}
