//! Runtime configuration
//!
//! Resolved from command-line flags (or their `WORD_SCRAMBLE_*` environment
//! variables) into the dictionary, root words and RNG a game needs.

use crate::dictionary::{DEFAULT_LOCALE, WordListDictionary};
use crate::wordlists::{RootWords, WordListError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

/// Where game data comes from
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Root word list; the embedded list when `None`
    pub start_words: Option<PathBuf>,
    /// Dictionary word list; the embedded English list when `None`
    pub dictionary: Option<PathBuf>,
    pub locale: String,
    /// Fixed seed for reproducible root selection
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_words: None,
            dictionary: None,
            locale: DEFAULT_LOCALE.to_string(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Load the configured dictionary
    ///
    /// # Errors
    ///
    /// Returns an error if a dictionary file was given and cannot be read or is empty.
    pub fn load_dictionary(&self) -> Result<WordListDictionary, WordListError> {
        match &self.dictionary {
            Some(path) => WordListDictionary::load(&self.locale, path),
            None => Ok(WordListDictionary::embedded()),
        }
    }

    /// Load the configured root words
    ///
    /// # Errors
    ///
    /// Returns an error if a root word file was given and cannot be read.
    pub fn load_root_words(&self) -> Result<RootWords, WordListError> {
        match &self.start_words {
            Some(path) => RootWords::load(path),
            None => Ok(RootWords::embedded()),
        }
    }

    /// RNG for root selection, seeded when a seed is configured
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}
