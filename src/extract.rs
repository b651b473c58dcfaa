//! Block isolation and constant extraction.
//!
//! Locates the `pub mod <name> { ... }` block emitted by bindgen for a C enum
//! and pulls out every `#[doc = "..."]` / `pub const NAME:` pair inside it.
//! Matching is regex-only; no Rust syntax is parsed.

use anyhow::{Context, Result};
use regex::Regex;
use std::sync::LazyLock;

/// `#[doc = "..."]` immediately followed (next line) by `pub const NAME:`.
/// The doc capture is lazy and may span raw line breaks, but never an
/// attribute end (`"]` + newline), so a doc on a non-const item is skipped
/// instead of swallowing the next entry.
static RE_DOC_CONST: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"#\[doc = "((?:[^"]|"+[^"\]]|"+\][^\n])*?"*)"\]\n\s*pub const (\w+):"#)
        .unwrap()
});

/// A documented constant as it appears in the source block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEntry {
    pub doc: String,
    pub ident: String,
}

/// Build the block pattern for `module`. Tolerates one level of nested
/// braces inside the block body.
fn block_regex(module: &str) -> Result<Regex> {
    let pattern = format!(
        r"(?s)pub mod {} \{{\s*((?:[^{{}}]|\{{[^{{}}]*\}})*)\s*\}}",
        regex::escape(module)
    );
    Regex::new(&pattern).with_context(|| format!("invalid module name: {module}"))
}

/// Return the inner content of the first `pub mod <module> { ... }` block,
/// or `None` when the input has no such block.
pub fn find_block<'a>(input: &'a str, module: &str) -> Result<Option<&'a str>> {
    let re = block_regex(module)?;
    Ok(re
        .captures(input)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str()))
}

/// Extract every documented constant from a block body, in source order.
pub fn extract_entries(block: &str) -> Vec<RawEntry> {
    RE_DOC_CONST
        .captures_iter(block)
        .map(|caps| RawEntry {
            doc: caps[1].to_string(),
            ident: caps[2].to_string(),
        })
        .collect()
}
