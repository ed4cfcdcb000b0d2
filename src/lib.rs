//! CSV Header Analyzer Library
//!
//! Reads the header row of a CSV file and produces a human-readable
//! description for every column name.
//!
//! Descriptions come from a fixed, ordered keyword dictionary:
//! - exact (case-insensitive) keyword matches take priority
//! - otherwise the first keyword, in declaration order, contained in the header
//! - otherwise a generic "data field related to ..." description
//!
//! Results can be printed as a bordered console block and saved as a
//! plain-text report.

pub mod cli;
pub mod config;
pub mod constants;
pub mod describer;
pub mod error;
pub mod header;
pub mod models;
pub mod report;

// Re-export commonly used types
pub use config::AnalyzerConfig;
pub use describer::HeaderDescriber;
pub use error::{AnalyzerError, Result};
pub use header::read_csv_headers;
pub use models::{AnalysisSummary, HeaderDescription, HeaderDescriptions, MatchKind};
