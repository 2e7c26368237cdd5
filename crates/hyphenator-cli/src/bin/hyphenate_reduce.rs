// hyphenate-reduce: Build a reduced pattern file from sample text.
//
// Hyphenates every stdin line as text with reduced-set tracking enabled, then
// writes a pattern file holding only the patterns that matched.
//
// Usage:
//   hyphenate-reduce [-l LANG] [-p PATTERNS]... [-o FILE] < corpus.txt

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use hyphenator_cli::{CommonArgs, LineMode, init_tracing, stdin_lines, write_output};

#[derive(Parser)]
#[command(
    name = "hyphenate-reduce",
    about = "Write a pattern file with only the patterns used by stdin text"
)]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut options = args.common.options()?;
    options.enable_reduced_pattern_set = true;
    let mut handle = args.common.load_handle(options)?;
    let lang = args.common.lang.as_str();

    let mut lines = 0usize;
    for line in stdin_lines(LineMode::Text) {
        handle.hyphenate_text(lang, &line?)?;
        lines += 1;
    }

    // Nothing read means nothing prepared yet
    let prepared = handle.prepare(lang)?;
    let data = prepared
        .reduced_language_data()
        .context("reduced pattern tracking is disabled")?;
    info!(
        lines,
        kept = data.record_count(),
        total = prepared.table().len(),
        "reduced pattern set"
    );
    let json = serde_json::to_string_pretty(&data)?;
    write_output(args.output.as_deref(), &json)
}
