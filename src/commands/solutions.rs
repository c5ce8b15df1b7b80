//! Solutions command
//!
//! Enumerates every dictionary word a fresh session would accept for a root.

use crate::core::{LetterPool, letter_count, normalize};
use crate::dictionary::WordListDictionary;
use crate::validator::WordValidator;
use rayon::prelude::*;

/// Every acceptable word for one root
pub struct SolutionsResult {
    pub root: String,
    /// Longest first, then alphabetical
    pub words: Vec<String>,
    /// Score if every word were found
    pub max_score: usize,
}

impl SolutionsResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    /// Number of solutions per word length, shortest first
    #[must_use]
    pub fn length_distribution(&self) -> Vec<(usize, usize)> {
        let mut distribution: Vec<(usize, usize)> = Vec::new();
        for word in &self.words {
            let len = letter_count(word);
            match distribution.iter_mut().find(|(l, _)| *l == len) {
                Some((_, count)) => *count += 1,
                None => distribution.push((len, 1)),
            }
        }
        distribution.sort_unstable();
        distribution
    }
}

/// Find all words in `dictionary` that pass every gate against `root`
#[must_use]
pub fn find_solutions(
    root: &str,
    dictionary: &WordListDictionary,
    locale: &str,
) -> SolutionsResult {
    let root = normalize(root);
    let pool = LetterPool::new(&root);
    let validator = WordValidator::with_locale(dictionary, locale);
    let none: &[&str] = &[];

    let candidates: Vec<&str> = dictionary.iter().collect();
    let mut words: Vec<String> = candidates
        .par_iter()
        .filter(|word| pool.can_spell(word))
        .filter(|word| validator.validate(word, &root, none).is_accepted())
        .map(|word| (*word).to_string())
        .collect();

    words.sort_unstable_by(|a, b| {
        letter_count(b)
            .cmp(&letter_count(a))
            .then_with(|| a.cmp(b))
    });

    let max_score = words.iter().map(|w| letter_count(w)).sum();

    SolutionsResult {
        root,
        words,
        max_score,
    }
}
