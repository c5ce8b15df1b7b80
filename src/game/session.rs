//! A single game session: root word, accepted words and score

use crate::core::{Rejection, Verdict, letter_count, normalize};
use crate::dictionary::DictionaryOracle;
use crate::validator::WordValidator;

/// What happened to one submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// Input was empty after normalization; nothing changed
    Ignored,
    /// Word was added and the score increased by `points`
    Accepted { word: String, points: usize },
    /// Word was turned away; nothing changed
    Rejected { word: String, reason: Rejection },
}

/// Mutable state for one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    root: String,
    used_words: Vec<String>,
    score: usize,
}

impl Session {
    /// Start a session from `root`
    #[must_use]
    pub fn new(root: &str) -> Self {
        let root = normalize(root);
        tracing::info!(%root, "session started");
        Self {
            root,
            used_words: Vec::new(),
            score: 0,
        }
    }

    #[must_use]
    pub fn root(&self) -> &str {
        &self.root
    }

    /// Accepted words, newest first
    #[must_use]
    pub fn used_words(&self) -> &[String] {
        &self.used_words
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    /// Normalize, validate and, if accepted, record `raw`
    pub fn submit<D: DictionaryOracle + ?Sized>(
        &mut self,
        raw: &str,
        validator: &WordValidator<'_, D>,
    ) -> Submission {
        let word = normalize(raw);
        if word.is_empty() {
            return Submission::Ignored;
        }

        match validator.validate(&word, &self.root, &self.used_words) {
            Verdict::Accepted => {
                let points = letter_count(&word);
                self.score += points;
                self.used_words.insert(0, word.clone());
                tracing::debug!(%word, points, score = self.score, "word accepted");
                Submission::Accepted { word, points }
            }
            Verdict::Rejected(reason) => {
                tracing::debug!(%word, %reason, "word rejected");
                Submission::Rejected { word, reason }
            }
        }
    }

    /// Discard all progress and start over from `root`
    pub fn restart(&mut self, root: &str) {
        *self = Self::new(root);
    }
}
