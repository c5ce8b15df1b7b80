//! Candidate normalization and root-letter bookkeeping
//!
//! A `LetterPool` is the multiset of letters in a root word. Candidates may draw
//! from it one-for-one: each letter used at most as many times as the root has it.

use rustc_hash::FxHashMap;
use std::fmt;

/// Shortest candidate the game accepts, in characters
pub const MIN_WORD_LENGTH: usize = 4;

/// Normalize raw player input: trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Silk\n"), "silk");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of characters in a word (not bytes)
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// The letter multiset of a root word
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, u32>,
    len: usize,
}

impl LetterPool {
    /// Build the pool from every character of `root`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("silkworm");
    /// assert!(pool.can_spell("milk"));
    /// assert!(!pool.can_spell("silkk"));
    /// ```
    #[must_use]
    pub fn new(root: &str) -> Self {
        let mut counts: FxHashMap<char, u32> = FxHashMap::default();
        let mut len = 0;
        for ch in root.chars() {
            *counts.entry(ch).or_insert(0) += 1;
            len += 1;
        }
        Self { counts, len }
    }

    /// Total number of letters in the pool
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether `candidate` can be spelled by removing letters one-for-one from the pool
    ///
    /// Letter order is irrelevant; letter counts are bounded by the pool's counts.
    #[must_use]
    pub fn can_spell(&self, candidate: &str) -> bool {
        let mut remaining = self.counts.clone();
        for ch in candidate.chars() {
            match remaining.get_mut(&ch) {
                Some(left) if *left > 0 => *left -= 1,
                _ => return false,
            }
        }
        true
    }
}

impl fmt::Display for LetterPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut letters: Vec<(char, u32)> = self.counts.iter().map(|(&c, &n)| (c, n)).collect();
        letters.sort_unstable();
        for (ch, n) in letters {
            for _ in 0..n {
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
