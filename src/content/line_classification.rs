//! Line Classification
//!
//! Small predicates shared by every extractor: splitting raw content into
//! trimmed lines, recognizing bullet markers, spotting bold header-like lines
//! that no rule knows about, and spotting answer options.

use once_cell::sync::Lazy;
use regex::Regex;

/// `a) x`, `(a) x`, `A. x`, `12. x`
static OPTION_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[a-z]\)|\([a-z]\)|[A-Z]\.|\d+\.)").unwrap());

/// Split on `\n` or `\r\n` and trim each line.
pub fn trimmed_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim)
}

/// The text after a leading `*` or `-` bullet marker.
///
/// The marker must be followed by whitespace (or end the line), so
/// `**Bold**` is not a bullet. Returns `None` for non-bullet lines and
/// `Some("")` for a bare marker.
pub fn strip_bullet(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('*').or_else(|| line.strip_prefix('-'))?;
    if rest.is_empty() {
        return Some("");
    }
    if rest.starts_with(char::is_whitespace) {
        Some(rest.trim())
    } else {
        None
    }
}

pub fn is_bullet(line: &str) -> bool {
    strip_bullet(line).is_some()
}

/// A bold, colon-terminated line such as `**Notes:**` or `**Notes**:`.
///
/// Only meaningful after the known header rules had their chance; such a
/// line is then a header for a section nobody asked for.
pub fn is_unrecognized_header(line: &str) -> bool {
    line.contains("**") && (line.ends_with(":**") || line.ends_with("**:"))
}

/// Answer option markers at the start of a trimmed line.
pub fn is_option_line(line: &str) -> bool {
    OPTION_LINE.is_match(line)
}

/// Collapse runs of three or more newlines to exactly two.
pub fn collapse_blank_lines(text: &str) -> String {
    static EXCESS_NEWLINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());
    EXCESS_NEWLINES.replace_all(text, "\n\n").into_owned()
}
