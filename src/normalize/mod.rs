// Word normalization — turns a raw whitespace-delimited word into its
// canonical form, or the empty string to signal "discard".
//
// Steps run in a fixed order: strip digits and punctuation, lower-case,
// drop stop words, drop short words. Every step maps the empty string to
// the empty string, so a word discarded early stays discarded no matter
// how many steps still run after it.

mod stopwords;

pub use stopwords::{is_stopword, ENGLISH_STOPWORDS, GERMAN_STOPWORDS};

/// Purified, lower-cased words at or below this character count are
/// discarded as carrying too little signal.
pub const MAX_SHORT_WORD_LENGTH: usize = 3;

/// Strip every ASCII decimal digit and ASCII punctuation character.
///
/// The classification is fixed and locale-independent, so the same input
/// purifies identically in every environment.
fn purify(word: &str) -> String {
    word.chars()
        .filter(|c| !c.is_ascii_digit() && !c.is_ascii_punctuation())
        .collect()
}

/// Discard the word if it matches either stop-word list exactly.
fn remove_stopwords(word: String) -> String {
    if is_stopword(&word) {
        String::new()
    } else {
        word
    }
}

/// Discard the word if it is `MAX_SHORT_WORD_LENGTH` characters or fewer.
fn remove_short_words(word: String) -> String {
    if word.chars().count() <= MAX_SHORT_WORD_LENGTH {
        String::new()
    } else {
        word
    }
}

/// Normalize a raw word into its canonical form.
///
/// Returns the empty string when the word should be discarded: nothing
/// left after purification, a stop word, or too short. The lower-casing
/// uses the fixed Unicode default mapping, never a locale.
pub fn normalize(word: &str) -> String {
    remove_short_words(remove_stopwords(purify(word).to_lowercase()))
}
