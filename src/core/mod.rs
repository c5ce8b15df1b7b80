//! Core domain types for the word scramble game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are pure, testable, and independent of any dictionary or UI.

mod verdict;
mod word;

pub use verdict::{Rejection, Verdict};
pub use word::{LetterPool, MIN_WORD_LENGTH, letter_count, normalize};
