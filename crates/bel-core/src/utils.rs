//! String helpers shared by the model's `Display` impls and the parser.

/// Remove BEL string escapes from the content between a pair of quotes.
///
/// Only `\"` and `\\` are escapes. Any other backslash sequence is kept
/// verbatim so that values such as `[0-9]\.[0-9]+` survive unchanged.
///
/// # Examples
/// ```
/// use bel_core::utils::unescape;
/// assert_eq!(unescape(r#"say \"hi\""#), r#"say "hi""#);
/// assert_eq!(unescape(r"[0-9]\.[0-9]+"), r"[0-9]\.[0-9]+");
/// ```
pub fn unescape(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some(&next @ ('"' | '\\')) => {
                    result.push(next);
                    chars.next();
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }
    result
}

/// Inverse of [`unescape`]: escape `"` always, and `\` only where it would
/// otherwise be read as the start of an escape.
pub fn escape(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' if matches!(chars.peek(), None | Some('"' | '\\')) => result.push_str("\\\\"),
            _ => result.push(c),
        }
    }
    result
}

/// Wrap `s` in double quotes, escaping as needed.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape(s))
}
