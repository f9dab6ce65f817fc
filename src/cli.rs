use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "header-inc")]
#[command(author, version, about = "Generate an aggregated #include listing for a source tree")]
#[command(long_about = "Scans ROOT recursively for header files and writes one \
    `#include \"relative/path\"` line per header to the output file.\n\n\
    Exit codes:\n  \
    0 - Listing written (or up to date with --check)\n  \
    1 - Listing is stale (--check only)\n  \
    2 - I/O or pattern error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory to scan for header files
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Output file [default: <ROOT>/test/header.inc]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Header suffixes to match, case-sensitive (comma-separated, e.g., h,hpp)
    #[arg(long, value_delimiter = ',', default_value = "h")]
    pub ext: Vec<String>,

    /// Exclude patterns relative to ROOT (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Keep directory traversal order instead of sorting by path
    #[arg(long)]
    pub no_sort: bool,

    /// Verify the output is up to date without writing it
    #[arg(long, conflicts_with = "stdout")]
    pub check: bool,

    /// Print the listing to stdout instead of writing the output file
    #[arg(long)]
    pub stdout: bool,

    /// Report format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
