use lazy_static::lazy_static;
use std::collections::HashSet;
use unicode_normalization::UnicodeNormalization;

/// ASCII punctuation stripped during normalization. The sentence splitter
/// applies the same table when inspecting a segment's final word, so the
/// two stages never disagree on what counts as punctuation.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

lazy_static! {
    static ref PUNCT: HashSet<char> = PUNCTUATION.chars().collect();
}

/// Normalize text for indexing and querying: NFKC fold, lowercase, strip
/// the fixed punctuation set. Word boundaries (whitespace) are preserved.
pub fn clean_text(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    folded
        .to_lowercase()
        .chars()
        .filter(|c| !PUNCT.contains(c))
        .collect()
}

/// Remove punctuation characters from a single word, keeping its case.
pub fn strip_punctuation(word: &str) -> String {
    word.chars().filter(|c| !PUNCT.contains(c)).collect()
}

/// Split cleaned text on whitespace and emit every word followed by every
/// adjacent word pair joined with a single space. With fewer than two words
/// there are no pairs and the words alone are returned.
pub fn ngrams(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
    if words.len() >= 2 {
        tokens.extend(words.windows(2).map(|pair| pair.join(" ")));
    }
    tokens
}

/// The full normalization pipeline. Index builds and query parsing both go
/// through here: BM25 scores are only comparable when the two sides apply
/// the identical token sequence.
pub fn tokenize(text: &str) -> Vec<String> {
    ngrams(&clean_text(text))
}
