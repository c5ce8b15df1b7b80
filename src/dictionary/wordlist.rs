//! Word-list backed dictionary

use super::{DictionaryOracle, language_of};
use crate::core::normalize;
use crate::wordlists::loader::{WordListError, load_from_file};
use crate::wordlists::DICTIONARY;
use rustc_hash::FxHashSet;
use std::path::Path;

/// A dictionary for a single language, backed by a set of known words
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// Build from any collection of words; entries are normalized
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{DictionaryOracle, WordListDictionary};
    ///
    /// let dict = WordListDictionary::from_words("en", ["silk", "Worm"]);
    /// assert!(dict.is_real_word("worm", "en-US"));
    /// assert!(!dict.is_real_word("wrom", "en"));
    /// ```
    pub fn from_words<I, S>(locale: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| normalize(w.as_ref()))
            .filter(|w| !w.is_empty())
            .collect();

        Self {
            language: language_of(locale),
            words,
        }
    }

    /// The English dictionary compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::from_words("en", DICTIONARY)
    }

    /// Load a newline-separated dictionary file for `locale`
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if the file cannot be read and
    /// `WordListError::Empty` if it holds no words.
    pub fn load<P: AsRef<Path>>(locale: &str, path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        let words = load_from_file(path)?;
        if words.is_empty() {
            return Err(WordListError::Empty {
                path: path.to_path_buf(),
            });
        }
        Ok(Self::from_words(locale, words))
    }

    /// Language subtag this dictionary answers for
    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over every known word, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl DictionaryOracle for WordListDictionary {
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        language_of(locale) == self.language && self.words.contains(word)
    }
}
