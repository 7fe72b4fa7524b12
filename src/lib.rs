//! Summaries of cppcheck MISRA C 2012 reports.
//!
//! A report is a text file with one `file:line:rule` violation per line.
//! [`engine::Summarizer`] reads and deduplicates it into an
//! [`report::violation::Analysis`], and [`report::terminal::render`] prints it.

pub mod config;
pub mod engine;
pub mod error;
pub mod report;

pub use error::{Result, SummaryError};
