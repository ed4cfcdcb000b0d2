//! Configuration management and validation.
//!
//! Provides the settings that control where the report is written,
//! which outputs are produced, and the layout of the result banners.
//! Whether the report path is writable is only discovered when the
//! report is saved.

use crate::constants::{CONSOLE_RULE_WIDTH, DEFAULT_OUTPUT_FILE, REPORT_RULE_WIDTH};
use crate::error::{AnalyzerError, Result};
use std::path::PathBuf;
use tracing::debug;

/// Global configuration for a header analysis run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzerConfig {
    /// Report file path (overwritten if present)
    pub output_path: PathBuf,

    /// Write the report file after printing results
    pub save_report: bool,

    /// Print progress messages around the results
    pub show_progress: bool,

    /// Width of the `=` rules around console results
    pub console_width: usize,

    /// Width of the `=` rule under the report title
    pub report_width: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            save_report: true,
            show_progress: true,
            console_width: CONSOLE_RULE_WIDTH,
            report_width: REPORT_RULE_WIDTH,
        }
    }
}

impl AnalyzerConfig {
    /// Set the report output path
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    /// Skip writing the report file
    pub fn without_report(mut self) -> Self {
        self.save_report = false;
        self
    }

    /// Suppress progress messages
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Validate settings before a run
    pub fn validate(&self) -> Result<()> {
        if self.console_width == 0 {
            return Err(AnalyzerError::configuration(
                "Console width must be greater than 0",
            ));
        }

        if self.report_width == 0 {
            return Err(AnalyzerError::configuration(
                "Report width must be greater than 0",
            ));
        }

        debug!("Configuration validated: {:?}", self);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.output_path, PathBuf::from("output.txt"));
        assert!(config.save_report);
        assert!(config.show_progress);
        assert_eq!(config.console_width, 60);
        assert_eq!(config.report_width, 40);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = AnalyzerConfig::default()
            .with_output_path("report.txt")
            .without_report()
            .quiet();

        assert_eq!(config.output_path, PathBuf::from("report.txt"));
        assert!(!config.save_report);
        assert!(!config.show_progress);
    }

    #[test]
    fn test_zero_width_rejected() {
        let config = AnalyzerConfig {
            console_width: 0,
            ..AnalyzerConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(AnalyzerError::Configuration { .. })
        ));
    }

    #[test]
    fn test_unwritable_output_path_passes_validation() {
        // Write failures surface when saving, after results are printed
        let dir = tempfile::tempdir().unwrap();
        assert!(
            AnalyzerConfig::default()
                .with_output_path(dir.path())
                .validate()
                .is_ok()
        );
        assert!(
            AnalyzerConfig::default()
                .with_output_path("")
                .validate()
                .is_ok()
        );
    }
}
