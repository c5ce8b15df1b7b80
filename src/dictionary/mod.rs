//! Dictionary lookup
//!
//! The validator never decides on its own whether a word is real; it asks a
//! `DictionaryOracle`. Swapping the oracle or the locale changes nothing else.

mod wordlist;

pub use wordlist::WordListDictionary;

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "en";

/// Word-recognition capability
pub trait DictionaryOracle {
    /// Whether `word` is a recognized word in `locale`
    fn is_real_word(&self, word: &str, locale: &str) -> bool;
}

impl<D: DictionaryOracle + ?Sized> DictionaryOracle for &D {
    fn is_real_word(&self, word: &str, locale: &str) -> bool {
        (**self).is_real_word(word, locale)
    }
}

/// Primary language subtag of a locale tag: `en-US`, `en_GB` and `EN` all give `en`
#[must_use]
pub fn language_of(locale: &str) -> String {
    locale
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}
