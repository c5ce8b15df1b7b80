//! Word lists for the game
//!
//! Provides embedded root words and an embedded English dictionary compiled into
//! the binary, plus loaders for replacing either from a file.

mod embedded;
pub mod loader;
mod roots;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use loader::WordListError;
pub use roots::{FALLBACK_ROOT, RootWords};
