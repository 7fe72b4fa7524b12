use crate::error::{Result, SummaryError};
use crate::report::violation::Violation;

/// A report line split into its `file:line:rule` parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    pub file: &'a str,
    pub violation: Violation,
}

/// Parse one `file:line:rule[:...]` report line.
///
/// Fields past the third are ignored. Only the rule id loses trailing
/// newlines; nothing else is trimmed.
pub fn parse_line(line_no: usize, line: &str) -> Result<ParsedLine<'_>> {
    let mut fields = line.split(':');

    match (fields.next(), fields.next(), fields.next()) {
        (Some(file), Some(number), Some(rule)) => Ok(ParsedLine {
            file,
            violation: Violation::new(number, rule.trim_end_matches('\n')),
        }),
        _ => Err(SummaryError::MalformedLine {
            line_no,
            content: line.to_string(),
            fields: line.split(':').count(),
        }),
    }
}
