//! Strict parser for the bracketed pseudo-list encoding the dataset uses in
//! its ingredient and step columns. Accepted shapes are lists, quoted
//! strings and bare numbers, nothing else; anything outside that grammar
//! makes the parse fail and the caller falls back to plain-text cleanup.

use std::iter::Peekable;
use std::str::Chars;

/// A parsed literal value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    List(Vec<Value>),
    Str(String),
    /// Bare numeric atom, kept as its source lexeme ("200" stays "200").
    Num(String),
}

impl Value {
    /// Text rendering used when list elements are rejoined into phrases.
    pub fn text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Num(n) => n.clone(),
            Value::List(items) => items
                .iter()
                .map(Value::text)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

/// Parse a complete literal from `input`. Returns `None` unless the whole
/// input (ignoring surrounding whitespace) is one valid literal.
pub fn parse(input: &str) -> Option<Value> {
    let mut chars = input.trim().chars().peekable();
    let value = parse_value(&mut chars)?;
    skip_whitespace(&mut chars);
    if chars.next().is_some() {
        return None;
    }
    Some(value)
}

fn parse_value(chars: &mut Peekable<Chars>) -> Option<Value> {
    skip_whitespace(chars);
    match chars.peek()? {
        '[' => parse_list(chars),
        '\'' | '"' => parse_string(chars),
        c if c.is_ascii_digit() || *c == '-' || *c == '+' => parse_number(chars),
        _ => None,
    }
}

fn parse_list(chars: &mut Peekable<Chars>) -> Option<Value> {
    chars.next(); // consume '['
    let mut items = Vec::new();
    loop {
        skip_whitespace(chars);
        match chars.peek() {
            Some(']') => {
                chars.next();
                return Some(Value::List(items));
            }
            Some(_) => {
                items.push(parse_value(chars)?);
                skip_whitespace(chars);
                match chars.peek() {
                    Some(',') => {
                        chars.next();
                    }
                    Some(']') => {}
                    _ => return None,
                }
            }
            None => return None,
        }
    }
}

fn parse_string(chars: &mut Peekable<Chars>) -> Option<Value> {
    let quote = chars.next()?;
    let mut out = String::new();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next()? {
                'n' => out.push('\n'),
                't' => out.push('\t'),
                escaped => out.push(escaped),
            },
            c if c == quote => return Some(Value::Str(out)),
            c => out.push(c),
        }
    }
    // ran out of input inside the string
    None
}

fn parse_number(chars: &mut Peekable<Chars>) -> Option<Value> {
    let mut lexeme = String::new();
    if matches!(chars.peek(), Some('-') | Some('+')) {
        lexeme.push(chars.next().unwrap());
    }
    let mut seen_dot = false;
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            lexeme.push(c);
            chars.next();
        } else if c == '.' && !seen_dot {
            seen_dot = true;
            lexeme.push(c);
            chars.next();
        } else {
            break;
        }
    }
    if !lexeme.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(Value::Num(lexeme))
}

fn skip_whitespace(chars: &mut Peekable<Chars>) {
    while matches!(chars.peek(), Some(c) if c.is_whitespace()) {
        chars.next();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_nested_lists() {
        let parsed = parse("[['200g', 'farina'], ['2', 'uova']]").unwrap();
        assert_eq!(
            parsed,
            Value::List(vec![
                Value::List(vec![
                    Value::Str("200g".into()),
                    Value::Str("farina".into())
                ]),
                Value::List(vec![Value::Str("2".into()), Value::Str("uova".into())]),
            ])
        );
    }

    #[test]
    fn parses_flat_string_list_with_double_quotes() {
        let parsed = parse(r#"["sale", "pepe"]"#).unwrap();
        assert_eq!(
            parsed,
            Value::List(vec![Value::Str("sale".into()), Value::Str("pepe".into())])
        );
    }

    #[test]
    fn parses_numbers_as_lexemes() {
        assert_eq!(
            parse("[200, 3.5]").unwrap(),
            Value::List(vec![Value::Num("200".into()), Value::Num("3.5".into())])
        );
    }

    #[test]
    fn handles_escaped_quotes() {
        let parsed = parse(r"['l\'olio']").unwrap();
        assert_eq!(parsed, Value::List(vec![Value::Str("l'olio".into())]));
    }

    #[test]
    fn allows_trailing_comma_and_empty_list() {
        assert_eq!(
            parse("['a',]").unwrap(),
            Value::List(vec![Value::Str("a".into())])
        );
        assert_eq!(parse("[]").unwrap(), Value::List(vec![]));
    }

    #[test]
    fn rejects_plain_text() {
        assert!(parse("tritare la cipolla").is_none());
        assert!(parse("farina").is_none());
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse("['farina'").is_none());
        assert!(parse("['a'] extra").is_none());
        assert!(parse("['unterminated").is_none());
        assert!(parse("").is_none());
    }
}
