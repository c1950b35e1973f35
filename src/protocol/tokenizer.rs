//! Input Tokenizer
//!
//! Splits a line typed at the prompt into command arguments.
//!
//! - Spaces separate tokens; runs of spaces never produce empty tokens.
//! - A double quote toggles quoting. Inside quotes a space is literal.
//! - Quote characters are never part of a token.
//! - Closing a quote ends the token, even if it is followed directly by
//!   more text.
//! - An unterminated quote is not an error; its text is still emitted.
//!
//! There is no escape syntax, so a quoted token cannot contain `"`.

/// Splits `line` into tokens.
///
/// # Example
///
/// ```
/// use flashkv_cli::protocol::tokenize;
///
/// assert_eq!(tokenize(r#"SET "my key" 5"#), vec!["SET", "my key", "5"]);
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for c in line.chars() {
        match c {
            ' ' if !quoted => flush(&mut current, &mut tokens),
            '"' => {
                if quoted {
                    flush(&mut current, &mut tokens);
                }
                quoted = !quoted;
            }
            _ => current.push(c),
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}

#[inline]
fn flush(current: &mut String, tokens: &mut Vec<String>) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_tokens() {
        assert_eq!(tokenize("GET foo"), vec!["GET", "foo"]);
    }

    #[test]
    fn test_quoted_token_keeps_spaces() {
        assert_eq!(tokenize(r#"SET "my key" 5"#), vec!["SET", "my key", "5"]);
    }

    #[test]
    fn test_collapsed_separators() {
        assert_eq!(tokenize("GET   foo"), vec!["GET", "foo"]);
        assert_eq!(tokenize("  PING  "), vec!["PING"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("     ").is_empty());
        assert!(tokenize(r#""""#).is_empty());
    }

    #[test]
    fn test_closing_quote_ends_token() {
        assert_eq!(tokenize(r#""a b"c"#), vec!["a b", "c"]);
    }

    #[test]
    fn test_opening_quote_mid_token() {
        // The quote only switches mode; it does not split
        assert_eq!(tokenize(r#"ab"c d""#), vec!["abc d"]);
    }

    #[test]
    fn test_unterminated_quote_is_flushed() {
        assert_eq!(tokenize(r#"SET "dangling value"#), vec!["SET", "dangling value"]);
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(tokenize("SET clé \"à b\""), vec!["SET", "clé", "à b"]);
    }

    #[test]
    fn test_tabs_are_not_separators() {
        assert_eq!(tokenize("a\tb"), vec!["a\tb"]);
    }
}
