//! Keyword-driven header descriptions.
//!
//! Resolves each header against an ordered keyword dictionary: exact
//! match first, then the first keyword (in declaration order) contained
//! in the header, then a generic fallback built from the header text.

use crate::constants::{DEFAULT_PATTERNS, FALLBACK_PREFIX, MIN_SUBSTRING_KEY_LEN};
use crate::error::{AnalyzerError, Result};
use crate::models::{HeaderDescription, HeaderDescriptions, MatchKind};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Header describer backed by an ordered keyword table
#[derive(Debug, Clone)]
pub struct HeaderDescriber {
    /// Keyword table in declaration order; drives substring precedence
    patterns: Vec<(String, String)>,
    /// Keyword -> position in `patterns`, used for exact matches only
    exact_index: HashMap<String, usize>,
}

impl HeaderDescriber {
    /// Create a describer over the canonical dictionary
    pub fn new() -> Self {
        // The canonical table is checked by `test_default_table_is_valid`
        Self::build(
            DEFAULT_PATTERNS
                .iter()
                .map(|(key, description)| (key.to_string(), description.to_string()))
                .collect(),
        )
    }

    /// Create a describer over a custom ordered table.
    ///
    /// Keys must be non-empty, lowercase and unique; order is kept as given.
    pub fn with_patterns<K, D>(patterns: impl IntoIterator<Item = (K, D)>) -> Result<Self>
    where
        K: Into<String>,
        D: Into<String>,
    {
        let patterns: Vec<(String, String)> = patterns
            .into_iter()
            .map(|(key, description)| (key.into(), description.into()))
            .collect();

        validate_patterns(&patterns)?;
        Ok(Self::build(patterns))
    }

    fn build(patterns: Vec<(String, String)>) -> Self {
        let exact_index = patterns
            .iter()
            .enumerate()
            .map(|(position, (key, _))| (key.clone(), position))
            .collect();

        Self {
            patterns,
            exact_index,
        }
    }

    /// Number of keywords in the table
    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    /// Describe a single header
    pub fn describe(&self, header: &str) -> String {
        self.resolve(header).description
    }

    /// Describe a single header, keeping how the description was found
    pub fn resolve(&self, header: &str) -> HeaderDescription {
        let header_lower = header.to_lowercase();

        if let Some(&position) = self.exact_index.get(&header_lower) {
            let (key, description) = &self.patterns[position];
            return HeaderDescription {
                description: description.clone(),
                kind: MatchKind::Exact,
                matched_key: Some(key.clone()),
            };
        }

        let substring_match = self.patterns.iter().find(|(key, _)| {
            key.chars().count() > MIN_SUBSTRING_KEY_LEN && header_lower.contains(key.as_str())
        });

        if let Some((key, description)) = substring_match {
            return HeaderDescription {
                description: description.clone(),
                kind: MatchKind::Substring,
                matched_key: Some(key.clone()),
            };
        }

        HeaderDescription {
            description: fallback_description(&header_lower),
            kind: MatchKind::Fallback,
            matched_key: None,
        }
    }

    /// Describe every non-empty header, preserving first-occurrence order
    pub fn analyze<S: AsRef<str>>(&self, headers: &[S]) -> HeaderDescriptions {
        let mut results = HeaderDescriptions::new();

        for header in headers {
            let header = header.as_ref();
            if header.is_empty() {
                trace!("Skipping empty header");
                continue;
            }

            let resolved = self.resolve(header);
            debug!(
                "{} -> {:?} match{}",
                header,
                resolved.kind,
                resolved
                    .matched_key
                    .as_deref()
                    .map(|key| format!(" on '{}'", key))
                    .unwrap_or_default()
            );

            if results.insert(header, resolved).is_some() {
                debug!("Duplicate header '{}' replaced earlier entry", header);
            }
        }

        results
    }
}

impl Default for HeaderDescriber {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic description for a header no keyword matched
fn fallback_description(header_lower: &str) -> String {
    let clean_header = header_lower.replace(['_', '-'], " ");
    format!("{} {}", FALLBACK_PREFIX, clean_header)
}

/// Check the invariants the lookup relies on
fn validate_patterns(patterns: &[(String, String)]) -> Result<()> {
    let mut seen = HashMap::with_capacity(patterns.len());

    for (position, (key, _)) in patterns.iter().enumerate() {
        if key.is_empty() {
            return Err(AnalyzerError::configuration(format!(
                "Pattern {} has an empty key",
                position
            )));
        }

        if key.to_lowercase() != *key {
            return Err(AnalyzerError::configuration(format!(
                "Pattern key '{}' must be lowercase",
                key
            )));
        }

        if let Some(first) = seen.insert(key.as_str(), position) {
            return Err(AnalyzerError::configuration(format!(
                "Duplicate pattern key '{}' at positions {} and {}",
                key, first, position
            )));
        }
    }

    Ok(())
}
