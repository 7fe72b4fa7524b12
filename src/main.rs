mod cli;

use std::io::Write;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use misra_summary::config::SummaryConfig;
use misra_summary::engine::Summarizer;
use misra_summary::report::palette::Palette;
use misra_summary::report::terminal::{self, Layout};

/// Exit status when the report contains at least one violation
const EXIT_VIOLATIONS: u8 = 127;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout carries only the report
    let filter = if cli.verbose {
        EnvFilter::new("misra_summary=debug")
    } else if cli.quiet {
        EnvFilter::new("misra_summary=error")
    } else {
        EnvFilter::new("misra_summary=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    info!("misra-summary v{}", env!("CARGO_PKG_VERSION"));

    let config = if cli.no_config {
        SummaryConfig::default()
    } else {
        SummaryConfig::load(&cli.report).unwrap_or_default()
    };

    let color = config.output.color && !cli.no_color && !no_color_env();
    debug!("color output: {}", color);
    let palette = Palette::new(color);
    let layout = Layout {
        column_width: config.output.column_width,
    };

    let summarizer = Summarizer::load(&cli.report)?;
    debug!(
        "analyzing {} ({} lines)",
        summarizer.report_path().display(),
        summarizer.line_count()
    );
    let analysis = summarizer.analyze()?;

    let mut out = std::io::stdout().lock();
    terminal::render(&analysis, &palette, &layout, &mut out)?;
    out.flush()?;

    if analysis.has_violations() {
        Ok(ExitCode::from(EXIT_VIOLATIONS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Honor the NO_COLOR convention (any non-empty value)
fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}
