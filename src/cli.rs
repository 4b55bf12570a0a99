//! CLI argument parsing for the Python baseline report.
use crate::search::SearchFilter;
use crate::targets::Baseline;
use clap::Parser;
use std::path::PathBuf;

/// Database read when no path is given.
pub const DEFAULT_DATABASE: &str = "eix-current.json";

/// Root CLI entrypoint.
#[derive(Parser, Debug)]
#[command(
    name = "eix-pycheck",
    version,
    about = "Report stable packages whose Python targets omit the baseline interpreter",
    after_help = "Examples:\n  eix-pycheck eix-current.json\n  eix-pycheck --search ^dev-python/ eix-current.json\n  eix-pycheck --baseline 3.9 -\n  eix-pycheck --dump eix-current.json"
)]
pub struct RootArgs {
    /// Decoded eix collection (JSON); `-` reads stdin
    #[arg(value_name = "DATABASE", default_value = DEFAULT_DATABASE)]
    pub database: PathBuf,

    /// Oldest Python release every stable package must target
    #[arg(long, value_name = "MAJOR.MINOR", default_value = "3.8", value_parser = parse_baseline)]
    pub baseline: Baseline,

    /// Only report packages whose category/name matches this pattern
    #[arg(long, value_name = "PATTERN", value_parser = parse_search)]
    pub search: Option<SearchFilter>,

    /// Print the decoded collection as JSON instead of the report
    #[arg(long, conflicts_with_all = ["baseline", "search"])]
    pub dump: bool,

    /// Emit debug logs on stderr
    #[arg(long, short)]
    pub verbose: bool,
}

fn parse_baseline(raw: &str) -> Result<Baseline, String> {
    Baseline::parse(raw).map_err(|err| err.to_string())
}

fn parse_search(raw: &str) -> Result<SearchFilter, String> {
    SearchFilter::parse(raw).map_err(|err| err.to_string())
}
