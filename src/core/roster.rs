//! Roster text handling: pasted blocks → lines, lines → drivers.

use crate::models::driver::DriverLine;
use regex::Regex;
use std::sync::LazyLock;

/// `1234567 Jane Doe`: 6 to 8 ASCII digits, whitespace, then the name.
static DRIVER_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{6,8})\s+(.+)$").expect("driver line pattern is valid")
});

/// Remove at most one leading `[` and at most one trailing `]`.
fn strip_brackets(s: &str) -> &str {
    let s = s.strip_prefix('[').unwrap_or(s);
    s.strip_suffix(']').unwrap_or(s)
}

/// Split a pasted roster into trimmed, non-empty lines.
///
/// The whole block may be wrapped in a single `[` … `]` pair, which is
/// dropped before splitting. Any line ending style is accepted.
pub fn normalize_block(text: &str) -> Vec<String> {
    let body = strip_brackets(text.trim());

    body.lines()
        .flat_map(|l| l.split('\r'))
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse one roster line into a driver.
///
/// Returns `None` for anything that does not look like `<id> <name>`;
/// callers skip such lines silently.
pub fn parse_driver_line(line: &str) -> Option<DriverLine> {
    let s = strip_brackets(line.trim());

    let caps = DRIVER_LINE_RE.captures(s)?;
    let id = caps.get(1)?.as_str();
    let name = caps.get(2)?.as_str().trim();

    Some(DriverLine::new(id, name))
}
