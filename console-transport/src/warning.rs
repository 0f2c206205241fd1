use std::sync::LazyLock;

use regex::Regex;

const DEPRECATION_PREFIX: &str = "#! Deprecation: ";

// code agent "text" ["date"]
static WARNING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\d{3} [0-9a-zA-Z!#$%&'*+\-.^_`|~]+ "((?:\\"|[^"])*)"(?: "[^"]*")?"#)
        .expect("valid regex")
});
static ESCAPED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\\([\\"])"#).expect("valid regex"));

/// Render a `Warning` response header as console deprecation lines.
///
/// The header holds comma separated `code agent "text" ["date"]` entries.
/// Entries that do not follow that shape are reported verbatim.
pub fn extract_deprecation_messages(warnings: &str) -> Vec<String> {
    split_unquoted(warnings)
        .into_iter()
        .map(|warning| {
            let text = warning_text(&warning).unwrap_or(warning);
            format!("{DEPRECATION_PREFIX}{text}")
        })
        .collect()
}

/// Split on `", "` sequences that sit outside a quoted string.
fn split_unquoted(s: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut buffer = String::new();
    let mut quoted = false;
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                buffer.push(c);
                if let Some(escaped) = chars.next() {
                    buffer.push(escaped);
                }
            }
            ',' if !quoted && chars.peek() == Some(&' ') => {
                chars.next();
                parts.push(std::mem::take(&mut buffer));
            }
            '"' => {
                quoted = !quoted;
                buffer.push(c);
            }
            _ => buffer.push(c),
        }
    }
    parts.push(buffer);
    parts
}

fn warning_text(warning: &str) -> Option<String> {
    let caps = WARNING_RE.captures(warning)?;
    Some(ESCAPED_RE.replace_all(&caps[1], "$1").into_owned())
}
