//! Root word selection
//!
//! A game starts from one word drawn uniformly at random from the root list.

use super::loader::{WordListError, load_from_file, words_from_slice, words_from_text};
use super::START_WORDS;
use rand::Rng;
use rand::prelude::IndexedRandom;
use std::path::Path;

/// Root used when the list has nothing to offer
pub const FALLBACK_ROOT: &str = "silkworm";

/// Pool of root words a session may start from
#[derive(Debug, Clone, Default)]
pub struct RootWords {
    words: Vec<String>,
}

impl RootWords {
    #[must_use]
    pub const fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Root words compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(words_from_slice(START_WORDS))
    }

    /// Parse newline-separated text
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::new(words_from_text(text))
    }

    /// Read root words from a file
    ///
    /// An unreadable file is a hard failure; an empty one is not, since `pick`
    /// falls back to `FALLBACK_ROOT`.
    ///
    /// # Errors
    ///
    /// Returns `WordListError::Io` if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        load_from_file(path).map(Self::new)
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Choose a root uniformly at random, or `FALLBACK_ROOT` if the list is empty
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        if let Some(word) = self.words.choose(rng) {
            word.as_str()
        } else {
            tracing::warn!(fallback = FALLBACK_ROOT, "no root words available");
            FALLBACK_ROOT
        }
    }
}
