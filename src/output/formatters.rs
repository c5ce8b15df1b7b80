//! Formatting utilities for terminal output

use crate::core::{Rejection, letter_count};

/// Short headline shown when a word is rejected
#[must_use]
pub const fn rejection_title(reason: Rejection) -> &'static str {
    match reason {
        Rejection::DuplicateWord => "Word used already",
        Rejection::LettersNotInRoot => "Word not possible",
        Rejection::NotARealWord => "Word not recognized",
        Rejection::TooShort => "Word too short",
        Rejection::SameAsRoot => "Same word",
    }
}

/// Longer explanation shown under the headline
#[must_use]
pub fn rejection_message(reason: Rejection, root: &str) -> String {
    match reason {
        Rejection::DuplicateWord => "Be more original!".to_string(),
        Rejection::LettersNotInRoot => {
            format!("You can't spell that word from '{root}'!")
        }
        Rejection::NotARealWord => "You can't just make them up, you know!".to_string(),
        Rejection::TooShort => format!(
            "Use at least {} letters.",
            crate::core::MIN_WORD_LENGTH
        ),
        Rejection::SameAsRoot => "You can't just use the root word, can you?".to_string(),
    }
}

/// Word followed by its letter count, e.g. `silk (4 letters)`
#[must_use]
pub fn word_with_length(word: &str) -> String {
    let count = letter_count(word);
    format!("{word} ({count} {})", if count == 1 { "letter" } else { "letters" })
}

/// Spread the letters of a word for display: `silk` → `S I L K`
#[must_use]
pub fn spaced_letters(word: &str) -> String {
    word.to_uppercase()
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
