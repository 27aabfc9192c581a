//! Parsing for the loosely-typed ingredient and step columns.
//!
//! Fields arrive either as plain text or as a serialized pseudo-list; both
//! parsers degrade on failure instead of erroring, so a malformed row can
//! never take down a load.

use crate::literal::{self, Value};
use crate::sentence::Splitter;
use tracing::debug;

/// Parse a raw ingredients field into one phrase per ingredient.
///
/// Inner lists encode `[quantity/unit, name]` in reverse of natural reading
/// order; their items are rejoined with single spaces after reversal, which
/// restores "flour 200g" from `["200g", "flour"]`. Plain string elements
/// pass through. Values that are not a literal list at all come back as a
/// single element, stripped of bracket and quote characters when the
/// literal parse fails outright.
pub fn parse_ingredients(raw: &str) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Vec::new();
    }
    match literal::parse(raw) {
        Some(Value::List(items)) => {
            let mut clean = Vec::new();
            for item in items {
                match item {
                    Value::List(parts) if !parts.is_empty() => {
                        let mut texts: Vec<String> =
                            parts.iter().map(Value::text).collect();
                        texts.reverse();
                        clean.push(texts.join(" "));
                    }
                    Value::Str(s) => clean.push(s),
                    _ => {}
                }
            }
            clean
        }
        Some(_) => vec![raw.to_string()],
        None => {
            debug!(field = raw, "ingredients not a literal list, using raw text");
            vec![strip_list_artifacts(raw)]
        }
    }
}

/// Parse a raw steps field into an ordered list of instruction sentences.
///
/// A literal list with more than one element is already split: its elements
/// are returned trimmed. A single-element list or any unparseable content
/// is handed to the sentence splitter. Empty input (or content the splitter
/// cannot recover anything from) yields the placeholder sentence so a
/// record never carries an empty procedure.
pub fn parse_steps(raw: &str, splitter: &Splitter) -> Vec<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return vec![splitter.placeholder().to_string()];
    }
    let steps = match literal::parse(raw) {
        Some(Value::List(items)) if items.len() > 1 => items
            .iter()
            .map(|item| item.text().trim().to_string())
            .collect(),
        Some(Value::List(items)) if items.len() == 1 => {
            splitter.split(&items[0].text())
        }
        _ => splitter.split(raw),
    };
    if steps.is_empty() {
        return vec![splitter.placeholder().to_string()];
    }
    steps
}

fn strip_list_artifacts(raw: &str) -> String {
    raw.chars()
        .filter(|c| !matches!(c, '[' | ']' | '\'' | '"'))
        .collect()
}
