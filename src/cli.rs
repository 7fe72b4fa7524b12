use std::path::PathBuf;

use clap::Parser;

/// misra-summary: readable summaries of cppcheck MISRA reports
///
/// Deduplicates the `file:line:rule` lines of a pre-processed MISRA C 2012
/// report, groups them by file and prints them with colors.
#[derive(Parser, Debug)]
#[command(
    name = "misra-summary",
    version,
    about = "Summarize a cppcheck MISRA C 2012 report",
    long_about = "Reads a pre-processed cppcheck MISRA report (one `file:line:rule` per line),\ndrops duplicate lines and prints the violations grouped by file.\n\nExit codes: 0 = empty report, 127 = violations found, 1 = error."
)]
pub struct Cli {
    /// Report file to summarize
    pub report: PathBuf,

    /// Enable verbose diagnostics on stderr (debug level)
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all diagnostics except errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print the report without ANSI colors
    #[arg(long)]
    pub no_color: bool,

    /// Ignore .misra-summary.toml config files
    #[arg(long)]
    pub no_config: bool,
}
