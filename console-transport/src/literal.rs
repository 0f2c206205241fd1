use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde_json::Value;

// A newline right after the opening quotes and a newline plus trailing
// whitespace before the closing quotes are not part of the literal.
static TRIPLE_QUOTED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#""""(?:\s*\r?\n)?((?:.|\r?\n)*?)(?:\r?\n\s*)?""""#).expect("valid regex")
});

/// Replace every `"""..."""` literal with the equivalent JSON string.
///
/// An unterminated literal is left as written.
pub fn collapse_literal_strings(data: &str) -> String {
    TRIPLE_QUOTED_RE
        .replace_all(data, |caps: &Captures<'_>| {
            Value::String(caps[1].to_string()).to_string()
        })
        .into_owned()
}
