//! Word list loading utilities
//!
//! Word lists are newline-separated text. Blank lines are skipped and every
//! entry is normalized the same way player input is.

use crate::core::normalize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to produce a word list from a file
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("could not read word list {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word list {} contains no words", path.display())]
    Empty { path: PathBuf },
}

/// Load words from a file
///
/// # Errors
///
/// Returns `WordListError::Io` if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = words_from_text(&content);
    tracing::info!(path = %path.display(), count = words.len(), "loaded word list");
    Ok(words)
}

/// Split newline-separated text into normalized, non-empty words
#[must_use]
pub fn words_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Convert embedded string slice to owned words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|s| normalize(s))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_text_skips_blank_lines() {
        let words = words_from_text("silkworm\n\n  table \r\n\nCRANE\n");
        assert_eq!(words, vec!["silkworm", "table", "crane"]);
    }

    #[test]
    fn words_from_text_empty() {
        assert!(words_from_text("").is_empty());
        assert!(words_from_text("\n\n   \n").is_empty());
    }

    #[test]
    fn words_from_slice_normalizes() {
        let words = words_from_slice(&["Silk", " worm ", ""]);
        assert_eq!(words, vec!["silk", "worm"]);
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let err = load_from_file("/definitely/not/here/start.txt").unwrap_err();
        assert!(matches!(err, WordListError::Io { .. }));
        assert!(err.to_string().contains("start.txt"));
    }

    #[test]
    fn load_from_temp_file() {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_loader_{}.txt",
            std::process::id()
        ));
        {
            let mut file = fs::File::create(&path).unwrap();
            writeln!(file, "Alphabet\n\nbirthday").unwrap();
        }

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(words, vec!["alphabet", "birthday"]);
    }
}
