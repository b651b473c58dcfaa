//! Per-constant derivation: tag struct name, cleaned doc comment, and
//! dimension count.

use crate::extract::RawEntry;
use crate::GenConfig;
use regex::Regex;
use std::sync::LazyLock;

/// First run of digits immediately followed by `D` (e.g. `4D`, `12D`).
static RE_DIMS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]+)D").unwrap());

/// A constant ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub tag_struct: String,
    pub ident: String,
    /// Decimal dimension count, kept as text so any digit run survives.
    pub num: String,
    pub comment: String,
}

impl Entry {
    /// Derive all output fields from a raw extracted pair.
    ///
    /// Backslashes are escaped before whitespace is collapsed; the dimension
    /// is read from the cleaned comment.
    pub fn derive(raw: &RawEntry, config: &GenConfig) -> Self {
        let comment = collapse_whitespace(&escape_backslashes(&raw.doc));
        let num = dimension(&comment, config.default_dims);
        Entry {
            tag_struct: tag_struct(&raw.ident, &config.strip_prefix),
            ident: raw.ident.clone(),
            num,
            comment,
        }
    }
}

/// Remove every occurrence of `prefix` from `ident`, not only a leading one.
pub fn tag_struct(ident: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return ident.to_string();
    }
    ident.replace(prefix, "")
}

/// Double every backslash so the text survives as a Rust string literal.
pub fn escape_backslashes(doc: &str) -> String {
    doc.replace('\\', "\\\\")
}

/// Unicode whitespace plus the ASCII separators U+001C..=U+001F.
fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Collapse whitespace runs (newlines and tabs included) to single spaces
/// and trim both ends.
pub fn collapse_whitespace(s: &str) -> String {
    s.split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dimension count taken from the first `<digits>D` in `comment`, or
/// `default` when there is none. Leading zeros are dropped; the digit run
/// is otherwise kept exact.
pub fn dimension(comment: &str, default: u32) -> String {
    match RE_DIMS.captures(comment) {
        Some(caps) => {
            let digits = caps[1].trim_start_matches('0');
            if digits.is_empty() {
                "0".to_string()
            } else {
                digits.to_string()
            }
        }
        None => default.to_string(),
    }
}
