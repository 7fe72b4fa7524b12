pub mod parser;

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{Result, SummaryError};
use crate::report::merger;
use crate::report::violation::{Analysis, ViolationIndex};

/// Loads a pre-processed cppcheck MISRA report and turns it into
/// violations grouped by file.
pub struct Summarizer {
    /// Report that was loaded
    report_path: PathBuf,
    /// Raw report lines, newline removed
    lines: Vec<String>,
}

impl Summarizer {
    /// Read the whole report into memory
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| SummaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let summarizer = Self::from_content(path, &content);
        info!(
            "Read {} lines from {}",
            summarizer.lines.len(),
            path.display()
        );
        Ok(summarizer)
    }

    /// Build from report text already in memory
    pub fn from_content(path: &Path, content: &str) -> Self {
        Summarizer {
            report_path: path.to_path_buf(),
            lines: split_lines(content),
        }
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Dedup the report lines and group the parsed violations by file.
    ///
    /// Stops at the first malformed line.
    pub fn analyze(&self) -> Result<Analysis> {
        if self.lines.is_empty() {
            info!("Report is empty");
            return Ok(Analysis::NoViolations);
        }

        let unique = merger::unique_lines(self.lines.iter().map(String::as_str));
        debug!(
            "{} duplicate lines skipped",
            self.lines.len() - unique.len()
        );

        let mut index = ViolationIndex::new();
        for (line_no, line) in unique {
            let parsed = parser::parse_line(line_no, line)?;
            index.push(parsed.file, parsed.violation);
        }

        info!(
            "{} violations across {} files",
            index.len(),
            index.file_count()
        );
        Ok(Analysis::Violations(index))
    }
}

/// Split report text into lines; `\r\n`, `\r` and `\n` all end a line
fn split_lines(content: &str) -> Vec<String> {
    content
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .split_terminator('\n')
        .map(str::to_string)
        .collect()
}
