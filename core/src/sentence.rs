//! Heuristic sentence splitting for cooking-procedure text.
//!
//! The source data runs whole procedures together with inconsistent
//! punctuation. Splitting naively on periods or capital letters breaks
//! sentences at grammatical particles ("con il Pecorino" must not end a
//! sentence at "il"), so candidate segments whose final word is a particle
//! are buffered and merged into the following segment.

use crate::tokenizer::strip_punctuation;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

const SPLIT_MARKER: &str = "|SPLIT|";

lazy_static! {
    // A lowercase letter (accented Italian vowels included), whitespace,
    // then an uppercase letter marks a likely unpunctuated boundary.
    static ref BOUNDARY: Regex =
        Regex::new(r"([a-zà-ù])\s+([A-Z])").expect("valid boundary regex");
}

/// Italian words that cannot close a well-formed instruction sentence:
/// articles, articulated prepositions, simple prepositions, conjunctions.
const ITALIAN_PARTICLES: &[&str] = &[
    "il", "lo", "la", "i", "gli", "le",
    "un", "uno", "una",
    "del", "dello", "della", "dei", "degli", "delle",
    "al", "allo", "alla", "ai", "agli", "alle",
    "nel", "nello", "nella", "nei", "negli", "nelle",
    "sul", "sullo", "sulla", "sui", "sugli", "sulle",
    "col", "coi", "dal", "dallo", "dalla", "dai", "dagli", "dalle",
    "di", "a", "da", "in", "con", "su", "per", "tra", "fra",
    "e", "ed", "o",
];

const ITALIAN_PLACEHOLDER: &str = "Procedimento non disponibile.";

/// Sentence splitter parameterized by its locale tables. The particle set
/// and placeholder are data, not logic; `italian()` builds the default.
pub struct Splitter {
    particles: HashSet<&'static str>,
    placeholder: &'static str,
}

impl Default for Splitter {
    fn default() -> Self {
        Self::italian()
    }
}

impl Splitter {
    pub fn new(particles: &[&'static str], placeholder: &'static str) -> Self {
        Self {
            particles: particles.iter().copied().collect(),
            placeholder,
        }
    }

    pub fn italian() -> Self {
        Self::new(ITALIAN_PARTICLES, ITALIAN_PLACEHOLDER)
    }

    /// Sentence emitted when a procedure is missing or unrecoverable.
    pub fn placeholder(&self) -> &'static str {
        self.placeholder
    }

    /// Split one block of procedure text into standalone sentences.
    ///
    /// Every emitted sentence ends in `.`, `!`, `?` or `:` (a period is
    /// appended when missing) and never ends in a particle, except for a
    /// trailing buffered remainder which is emitted rather than dropped.
    /// Empty input yields no sentences.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.trim();
        if text.is_empty() {
            return Vec::new();
        }

        // Leftover list-encoding fragments from upstream.
        let text = text
            .replace("['", "")
            .replace("']", "")
            .replace("[\"", "")
            .replace("\"]", "");

        // A period followed by a space is always a safe boundary.
        let text = text.replace(". ", &format!(". {SPLIT_MARKER}"));
        let text = BOUNDARY.replace_all(&text, format!("${{1}} {SPLIT_MARKER}${{2}}"));

        let mut sentences = Vec::new();
        let mut buffer = String::new();

        for part in text.split(SPLIT_MARKER) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }

            let part = if buffer.is_empty() {
                part.to_string()
            } else {
                std::mem::take(&mut buffer) + " " + part
            };

            let Some(last) = part.split_whitespace().last() else {
                continue;
            };
            let last = strip_punctuation(last).to_lowercase();

            if self.particles.contains(last.as_str()) {
                // Cannot end a sentence here; hold and merge forward.
                buffer = part;
            } else {
                sentences.push(finish_sentence(part));
            }
        }

        if !buffer.is_empty() {
            sentences.push(finish_sentence(buffer));
        }

        sentences
    }
}

fn finish_sentence(mut sentence: String) -> String {
    if !matches!(sentence.chars().last(), Some('.' | '!' | '?' | ':')) {
        sentence.push('.');
    }
    sentence
}
