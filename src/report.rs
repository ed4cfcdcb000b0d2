//! Console and file output for analysis results.
//!
//! Both sinks render to a `String` first so the layout can be checked
//! without touching stdout or the filesystem.

use crate::config::AnalyzerConfig;
use crate::constants::{CONSOLE_TITLE, ENTRY_SEPARATOR, REPORT_ATTRIBUTION, REPORT_TITLE};
use crate::error::{AnalyzerError, Result};
use crate::models::HeaderDescriptions;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error};

/// Format a single `header → description` line
pub fn format_entry(header: &str, description: &str) -> String {
    format!("{} {} {}", header, ENTRY_SEPARATOR, description)
}

/// Render the bordered console block
pub fn render_console(results: &HeaderDescriptions, width: usize) -> String {
    let rule = "=".repeat(width);

    let mut lines = vec![rule.clone(), CONSOLE_TITLE.to_string(), rule.clone()];
    lines.extend(entry_lines(results));
    lines.push(rule);

    join_lines(lines)
}

/// Render the text report file contents
pub fn render_report(results: &HeaderDescriptions, width: usize) -> String {
    let mut lines = vec![REPORT_TITLE.to_string(), "=".repeat(width), String::new()];
    lines.extend(entry_lines(results));
    lines.push(String::new());
    lines.push(REPORT_ATTRIBUTION.to_string());

    join_lines(lines)
}

fn entry_lines(results: &HeaderDescriptions) -> impl Iterator<Item = String> + '_ {
    results
        .iter()
        .map(|(header, description)| format_entry(header, description))
}

/// Newline-terminated text, one line per element
fn join_lines(lines: Vec<String>) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Print the results block to stdout, preceded by a blank line
pub fn print_results(results: &HeaderDescriptions, config: &AnalyzerConfig) {
    println!();
    print!("{}", render_console(results, config.console_width));
}

/// Write the report to `path`, replacing any existing file
pub fn save_results(results: &HeaderDescriptions, path: &Path, width: usize) -> Result<PathBuf> {
    let contents = render_report(results, width);

    fs::write(path, contents).map_err(|source| {
        error!("Failed to write report {}: {}", path.display(), source);
        AnalyzerError::ReportWrite {
            path: path.to_path_buf(),
            source,
        }
    })?;

    debug!("Wrote {} entries to {}", results.len(), path.display());
    Ok(path.to_path_buf())
}
