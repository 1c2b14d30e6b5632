//! Word tokenizer.
//!
//! Words may be joined by `.`, `+` or `#` so that `node.js`, `c++` and `c#`
//! survive as single tokens. Any other non-space character is a token of its own.

use once_cell::sync::Lazy;
use regex::Regex;

static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:[.+#]\w+)*[+#]*|[^\w\s]").expect("token pattern is valid"));

/// A token before tagging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawToken<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
    /// First token of the text, after `.`/`!`/`?`, or after a line break.
    pub sentence_start: bool,
}

pub fn tokenize(text: &str) -> Vec<RawToken<'_>> {
    let mut tokens: Vec<RawToken<'_>> = Vec::new();

    for m in TOKEN_RE.find_iter(text) {
        let sentence_start = match tokens.last() {
            None => true,
            Some(prev) => {
                matches!(prev.text, "." | "!" | "?") || text[prev.end..m.start()].contains('\n')
            }
        };
        tokens.push(RawToken {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
            sentence_start,
        });
    }

    tokens
}

/// True when every character is alphabetic.
pub fn is_alpha(text: &str) -> bool {
    !text.is_empty() && text.chars().all(char::is_alphabetic)
}

pub fn is_punctuation(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

pub fn is_numeric(text: &str) -> bool {
    text.chars().next().is_some_and(|c| c.is_ascii_digit())
        && text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '+'))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_splits_words_and_punctuation() {
        assert_eq!(
            texts("Python, SQL and Rust."),
            vec!["Python", ",", "SQL", "and", "Rust", "."]
        );
    }

    #[test]
    fn test_keeps_technology_names_whole() {
        assert_eq!(texts("c++ c# node.js"), vec!["c++", "c#", "node.js"]);
    }

    #[test]
    fn test_trailing_period_is_separate() {
        assert_eq!(texts("I know sql."), vec!["I", "know", "sql", "."]);
    }

    #[test]
    fn test_hyphen_splits_compound() {
        assert_eq!(texts("full-stack"), vec!["full", "-", "stack"]);
    }

    #[test]
    fn test_offsets_point_into_source() {
        let text = "hello  world";
        let tokens = tokenize(text);
        assert_eq!(&text[tokens[1].start..tokens[1].end], "world");
    }

    #[test]
    fn test_sentence_start_detection() {
        let tokens = tokenize("One two. Three\nFour five");
        let starts: Vec<bool> = tokens.iter().map(|t| t.sentence_start).collect();
        // One two . Three Four five
        assert_eq!(starts, vec![true, false, false, true, true, false]);
    }

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha("python"));
        assert!(!is_alpha("c++"));
        assert!(!is_alpha("5"));
        assert!(!is_alpha("node.js"));
        assert!(!is_alpha(""));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("5"));
        assert!(is_numeric("3.5"));
        assert!(is_numeric("10+"));
        assert!(!is_numeric("b2b"));
    }
}
