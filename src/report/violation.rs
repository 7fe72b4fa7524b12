use std::collections::HashMap;

/// A single MISRA rule violation, as reported for one file.
///
/// Both fields are kept verbatim from the report; the line number is never
/// converted to an integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Violation {
    /// Line number token, e.g. "10"
    pub line: String,

    /// Rule id token, e.g. "21.1"
    pub rule: String,
}

impl Violation {
    pub fn new(line: impl Into<String>, rule: impl Into<String>) -> Self {
        Violation {
            line: line.into(),
            rule: rule.into(),
        }
    }
}

/// Violations grouped by file name.
///
/// Files iterate in the order they were first seen, and each file keeps its
/// violations in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViolationIndex {
    files: Vec<(String, Vec<Violation>)>,
    positions: HashMap<String, usize>,
}

impl ViolationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a violation to `file`, creating its group on first use
    pub fn push(&mut self, file: &str, violation: Violation) {
        match self.positions.get(file) {
            Some(&pos) => self.files[pos].1.push(violation),
            None => {
                self.positions.insert(file.to_string(), self.files.len());
                self.files.push((file.to_string(), vec![violation]));
            }
        }
    }

    pub fn get(&self, file: &str) -> Option<&[Violation]> {
        self.positions
            .get(file)
            .map(|&pos| self.files[pos].1.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Violation])> {
        self.files
            .iter()
            .map(|(file, violations)| (file.as_str(), violations.as_slice()))
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Total number of violations across all files
    pub fn len(&self) -> usize {
        self.files.iter().map(|(_, v)| v.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Outcome of analyzing a report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Analysis {
    /// The report had no lines at all
    NoViolations,
    Violations(ViolationIndex),
}

impl Analysis {
    pub fn has_violations(&self) -> bool {
        matches!(self, Analysis::Violations(_))
    }
}
