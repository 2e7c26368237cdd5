// hyphenator-cli: shared utilities for the command-line tools.

use std::io::{self, BufRead};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use hyphenator::{HyphenatorHandle, HyphenatorOptions, bundled};
use hyphenator_core::enums::OrphanControl;
use hyphenator_core::language::LanguageData;

/// Environment variable naming a directory of `<lang>.json` pattern files.
pub const PATTERNS_ENV: &str = "HYPHENATOR_PATTERNS_PATH";

/// Pattern directory below the home directory.
const HOME_PATTERNS_DIR: &str = ".hyphenator/patterns";

/// Options shared by every tool.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Language id
    #[arg(short, long, default_value = "en-gb")]
    pub lang: String,

    /// Pattern file, or directory containing <LANG>.json (repeatable)
    #[arg(short = 'p', long = "patterns")]
    pub patterns: Vec<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Break marker for words (default: soft hyphen)
    #[arg(long)]
    pub hyphen: Option<String>,

    /// Break marker for URLs and mail addresses (default: zero-width space)
    #[arg(long)]
    pub url_hyphen: Option<String>,

    /// Minimum word length to hyphenate
    #[arg(long)]
    pub min_length: Option<usize>,

    /// Orphan control level: 1, 2 or 3
    #[arg(long)]
    pub orphan_control: Option<u8>,

    /// Exceptions for the language, e.g. "Fort-ran, Hy-phen-a-tion"
    #[arg(long)]
    pub exceptions: Option<String>,
}

impl CommonArgs {
    /// Options from the config file (if any) with command-line overrides.
    pub fn options(&self) -> Result<HyphenatorOptions> {
        let mut options = match &self.config {
            Some(path) => HyphenatorOptions::load_toml(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => HyphenatorOptions::default(),
        };
        if let Some(hyphen) = &self.hyphen {
            options.hyphen = hyphen.clone();
        }
        if let Some(url_hyphen) = &self.url_hyphen {
            options.url_hyphen = url_hyphen.clone();
        }
        if let Some(min) = self.min_length {
            options.min_word_length = min;
        }
        if let Some(level) = self.orphan_control {
            options.orphan_control = OrphanControl::try_from(level)?;
        }
        Ok(options)
    }

    /// Build a handle with the requested language supplied.
    pub fn load_handle(&self, options: HyphenatorOptions) -> Result<HyphenatorHandle> {
        let data = load_language(&self.lang, &self.patterns)?;
        let mut handle = HyphenatorHandle::new(options);
        handle.supply_language(&self.lang, data);
        if let Some(words) = &self.exceptions {
            handle.add_exceptions(&self.lang, words);
        }
        Ok(handle)
    }
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` overrides the `warn` default.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Find and parse the pattern file of `lang`.
///
/// Search order:
/// 1. `explicit` paths (files are used as is, directories must hold `<lang>.json`)
/// 2. `HYPHENATOR_PATTERNS_PATH` directory
/// 3. `~/.hyphenator/patterns`
/// 4. Current working directory
/// 5. Bundled data
pub fn load_language(lang: &str, explicit: &[PathBuf]) -> Result<LanguageData> {
    let env_dir = std::env::var_os(PATTERNS_ENV).map(PathBuf::from);
    let home = std::env::var_os("HOME").map(PathBuf::from);
    let cwd = std::env::current_dir().ok();
    let candidates = build_search_paths(lang, explicit, env_dir, home, cwd);

    for path in &candidates {
        if path.is_file() {
            info!(lang, path = %path.display(), "loading patterns");
            return read_language_file(path);
        }
        debug!(path = %path.display(), "no pattern file");
    }

    if let Some(json) = bundled::language_json(lang) {
        info!(lang, "using bundled patterns");
        return Ok(LanguageData::from_json(json)?);
    }

    bail!(
        "could not find patterns for {lang:?} in any of the search paths:\n{}\nbundled languages: {}",
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n"),
        bundled::BUNDLED_LANGUAGES.join(", ")
    )
}

/// Candidate pattern files for `lang`, in search order.
pub fn build_search_paths(
    lang: &str,
    explicit: &[PathBuf],
    env_dir: Option<PathBuf>,
    home: Option<PathBuf>,
    cwd: Option<PathBuf>,
) -> Vec<PathBuf> {
    let file_name = format!("{lang}.json");
    let mut paths = Vec::new();

    for p in explicit {
        if p.is_dir() {
            paths.push(p.join(&file_name));
        } else {
            paths.push(p.clone());
        }
    }
    if let Some(dir) = env_dir {
        paths.push(dir.join(&file_name));
    }
    if let Some(home) = home {
        paths.push(home.join(HOME_PATTERNS_DIR).join(&file_name));
    }
    if let Some(cwd) = cwd {
        paths.push(cwd.join(&file_name));
    }
    paths
}

fn read_language_file(path: &Path) -> Result<LanguageData> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    LanguageData::from_json(&json).with_context(|| format!("failed to parse {}", path.display()))
}

/// How input lines become items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// One word per line: trimmed, blank lines skipped.
    Words,
    /// Every line as read, whitespace included.
    Text,
}

/// Lines of `reader` according to `mode`.
pub fn read_lines<R: BufRead>(reader: R, mode: LineMode) -> impl Iterator<Item = Result<String>> {
    reader.lines().filter_map(move |line| match line {
        Ok(l) if mode == LineMode::Text => Some(Ok(l)),
        Ok(l) => {
            let word = l.trim();
            (!word.is_empty()).then(|| Ok(word.to_string()))
        }
        Err(e) => Some(Err(anyhow::Error::new(e).context("error reading stdin"))),
    })
}

/// Lines of stdin according to `mode`.
pub fn stdin_lines(mode: LineMode) -> impl Iterator<Item = Result<String>> {
    read_lines(io::stdin().lock(), mode)
}

/// Write `content` to `output`, or to stdout when `output` is `None`.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => std::fs::write(path, content)
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{content}");
            Ok(())
        }
    }
}
