// hyphenate-prepare: Print the prepared form of a language.
//
// The output can be restored later without re-preparation
// (`HyphenatorHandle::restore_language`). Words given as arguments are
// hyphenated first so their results are stored in the cache.
//
// Usage:
//   hyphenate-prepare [-l LANG] [-p PATTERNS]... [--decode] [-o FILE] [WORD...]

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use hyphenator_cli::{CommonArgs, init_tracing, write_output};

#[derive(Parser)]
#[command(name = "hyphenate-prepare", about = "Export a prepared language as JSON")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Decode every pattern before exporting
    #[arg(long)]
    decode: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Words to hyphenate (and cache) before exporting
    words: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let mut options = args.common.options()?;
    options.pre_decode_patterns |= args.decode;
    let mut handle = args.common.load_handle(options)?;
    let lang = args.common.lang.as_str();

    handle.prepare(lang)?;
    for word in &args.words {
        handle.hyphenate_word(lang, word)?;
    }
    let json = handle.export_language(lang)?;
    write_output(args.output.as_deref(), &json)
}
