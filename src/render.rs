//! Output rendering.

use crate::entry::Entry;

/// Format a single entry as an `impl_format_tag!` invocation, newline included.
pub fn render_line(entry: &Entry) -> String {
    format!(
        "impl_format_tag!({}, {}, {}, \"{}\");\n",
        entry.tag_struct, entry.ident, entry.num, entry.comment
    )
}

/// Trait and macro definitions the generated invocations expand against.
/// `module` must be in scope where the output is included.
pub fn prelude(module: &str) -> String {
    format!(
        r#"pub trait FormatTag<const NDIMS: usize> {{
    const TAG: {module}::Type;
}}

macro_rules! impl_format_tag {{
    ($tag_struct:ident, $c_enum:ident, $ndims:expr, $comment:literal) => {{
        #[doc = $comment]
        pub struct $tag_struct;

        impl FormatTag<$ndims> for $tag_struct {{
            const TAG: {module}::Type = {module}::$c_enum;
        }}
    }};
}}

"#
    )
}

/// Render all entries in order, optionally preceded by the [`prelude`].
pub fn render(entries: &[Entry], prelude_module: Option<&str>) -> String {
    let mut out = prelude_module.map(prelude).unwrap_or_default();
    for entry in entries {
        out.push_str(&render_line(entry));
    }
    out
}
