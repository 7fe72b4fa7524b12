use std::io::{self, Write};

use owo_colors::OwoColorize;

use crate::report::palette::Palette;
use crate::report::violation::{Analysis, Violation, ViolationIndex};

pub const CLEAN_MESSAGE: &str = "Static analysis for MISRA compliance complete. No errors found.";
pub const TITLE: &str = "Static analysis results: Error Summary";
const TITLE_LINE: &str = "       Static analysis results: Error Summary        ";
pub const DIVIDER_WIDTH: usize = 49;
pub const DEFAULT_COLUMN_WIDTH: usize = 75;

/// Layout knobs for the violation lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Visible width the "File <name>" fragment is padded to
    pub column_width: usize,
}

impl Default for Layout {
    fn default() -> Self {
        Layout {
            column_width: DEFAULT_COLUMN_WIDTH,
        }
    }
}

/// Render an analysis to `out` with colors
pub fn render<W: Write>(
    analysis: &Analysis,
    palette: &Palette,
    layout: &Layout,
    out: &mut W,
) -> io::Result<()> {
    match analysis {
        Analysis::NoViolations => writeln!(out, "{}", CLEAN_MESSAGE.style(palette.success)),
        Analysis::Violations(index) => render_index(index, palette, layout, out),
    }
}

fn render_index<W: Write>(
    index: &ViolationIndex,
    palette: &Palette,
    layout: &Layout,
    out: &mut W,
) -> io::Result<()> {
    let divider = "=".repeat(DIVIDER_WIDTH);

    writeln!(out, "{}", divider.style(palette.alert))?;
    writeln!(out)?;
    writeln!(out, "{}", TITLE_LINE.style(palette.alert))?;
    writeln!(out)?;

    for (file, violations) in index.iter() {
        for violation in violations {
            writeln!(out, "{}", violation_line(file, violation, palette, layout))?;
        }
    }

    writeln!(out)?;
    writeln!(out)?;
    writeln!(out, "{}", divider.style(palette.alert))?;
    Ok(())
}

/// One aligned report line for a single violation
pub fn violation_line(
    file: &str,
    violation: &Violation,
    palette: &Palette,
    layout: &Layout,
) -> String {
    // Padding is computed on the visible text so escape codes don't skew it
    let visible = "File ".len() + file.chars().count();
    let padding = " ".repeat(layout.column_width.saturating_sub(visible));

    let name = format!(
        "{}{}{}",
        "File ".style(palette.alert),
        file.style(palette.highlight),
        padding
    );
    let rule = format!(
        "{} {} {}",
        "violates rule".style(palette.alert),
        format!("#{}", violation.rule).style(palette.highlight),
        "of the MISRA C 2012 standard".style(palette.alert)
    );
    let line = format!(
        "{} {}",
        "at line".style(palette.alert),
        violation.line.style(palette.highlight)
    );

    format!("{} {} {}", name, rule, line)
}
