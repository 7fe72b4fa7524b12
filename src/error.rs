use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a summary run before anything is rendered
#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("failed to read report {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A report line without the `file:line:rule` shape
    #[error("malformed report line {line_no}: expected `file:line:rule`, got {fields} field(s) in {content:?}")]
    MalformedLine {
        line_no: usize,
        content: String,
        fields: usize,
    },
}

pub type Result<T> = std::result::Result<T, SummaryError>;
