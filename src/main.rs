//! Format tag generator for oneDNN bindings.
//!
//! Reads a bindgen-generated source file, locates the
//! `pub mod dnnl_format_tag_t { ... }` block and writes one
//! `impl_format_tag!(tag, dnnl_tag, ndims, "doc");` line per documented
//! constant to `output.rs` in the current directory.
//!
//! 1. **Extract**: isolate the module block, collect `#[doc]`/`pub const` pairs
//! 2. **Derive**: strip the prefix, clean the doc, read the dimension count
//! 3. **Render**: emit the macro invocations (optionally with the macro prelude)

mod entry;
mod extract;
mod render;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;

/// Output file, always written to the current working directory.
const OUTPUT_FILE: &str = "output.rs";

#[derive(Parser)]
#[command(
    name = "format-tag-gen",
    about = "Generate impl_format_tag! invocations from a bindgen format tag module"
)]
struct Cli {
    /// Input file
    input: String,

    /// Name of the module holding the format tag constants
    #[arg(long, default_value = "dnnl_format_tag_t")]
    module: String,

    /// Substring removed from each constant name to form the tag struct name
    #[arg(long = "strip-prefix", default_value = "dnnl_")]
    strip_prefix: String,

    /// Dimension count used when a doc comment has no `<N>D`
    #[arg(long = "default-dims", default_value_t = 6)]
    default_dims: u32,

    /// Emit the FormatTag trait and impl_format_tag! macro before the invocations
    #[arg(long)]
    prelude: bool,
}

/// Pipeline configuration for [`generate`].
#[derive(Debug, Clone)]
pub struct GenConfig {
    pub module: String,
    pub strip_prefix: String,
    pub default_dims: u32,
    pub prelude: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        GenConfig {
            module: "dnnl_format_tag_t".to_string(),
            strip_prefix: "dnnl_".to_string(),
            default_dims: 6,
            prelude: false,
        }
    }
}

/// Core generation pipeline. Returns `None` when the module block is missing.
fn generate(source: &str, config: &GenConfig) -> Result<Option<String>> {
    let Some(block) = extract::find_block(source, &config.module)? else {
        return Ok(None);
    };

    let entries: Vec<entry::Entry> = extract::extract_entries(block)
        .iter()
        .map(|raw| entry::Entry::derive(raw, config))
        .collect();

    let prelude_module = config.prelude.then_some(config.module.as_str());
    Ok(Some(render::render(&entries, prelude_module)))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let source = fs::read_to_string(&cli.input)
        .with_context(|| format!("Failed to read {}", cli.input))?;

    let config = GenConfig {
        module: cli.module,
        strip_prefix: cli.strip_prefix,
        default_dims: cli.default_dims,
        prelude: cli.prelude,
    };
    let Some(output) = generate(&source, &config)? else {
        println!(
            "Error: Could not find mod {} in the input file.",
            config.module
        );
        return Ok(());
    };

    fs::write(OUTPUT_FILE, &output)
        .with_context(|| format!("Failed to write {OUTPUT_FILE}"))?;

    Ok(())
}
