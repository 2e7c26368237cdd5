// hyphenate: Hyphenate words or text.
//
// If WORD arguments are given, hyphenates each word. Otherwise reads stdin
// line by line: one word per line, or whole lines as text with --text.
//
// Usage:
//   hyphenate [-l LANG] [-p PATTERNS]... [-c CONFIG] [OPTIONS] [WORD...]

use std::io::{self, BufWriter, Write};

use anyhow::Result;
use clap::Parser;

use hyphenator_cli::{CommonArgs, LineMode, init_tracing, stdin_lines};

#[derive(Parser)]
#[command(name = "hyphenate", about = "Hyphenate words or text using Liang patterns")]
struct Args {
    #[command(flatten)]
    common: CommonArgs,

    /// Treat each input line as text (words, URLs, mail addresses)
    #[arg(long)]
    text: bool,

    /// Words to hyphenate; stdin is read when none are given
    words: Vec<String>,
}

fn main() -> Result<()> {
    init_tracing();
    let args = Args::parse();
    let options = args.common.options()?;
    let mut handle = args.common.load_handle(options)?;
    let lang = args.common.lang.as_str();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut process = |input: &str, out: &mut BufWriter<io::StdoutLock<'_>>| -> Result<()> {
        let result = if args.text {
            handle.hyphenate_text(lang, input)?
        } else {
            handle.hyphenate_word(lang, input)?
        };
        writeln!(out, "{result}")?;
        Ok(())
    };

    if args.words.is_empty() {
        let mode = if args.text { LineMode::Text } else { LineMode::Words };
        for line in stdin_lines(mode) {
            process(&line?, &mut out)?;
        }
    } else {
        for word in &args.words {
            process(word, &mut out)?;
        }
    }
    out.flush()?;
    Ok(())
}
