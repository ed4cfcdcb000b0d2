//! Core data structures for header analysis.
//!
//! Defines the match kinds produced by the describer, the ordered
//! result set returned by batch analysis, and summary statistics.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// How a description was resolved for a header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Lowercased header equals a dictionary key
    Exact,
    /// A dictionary key occurs inside the lowercased header
    Substring,
    /// No key matched; generic description generated
    Fallback,
}

/// Description resolved for a single header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDescription {
    pub description: String,
    pub kind: MatchKind,
    /// Dictionary key that produced the description, if any
    pub matched_key: Option<String>,
}

/// Ordered header -> description mapping.
///
/// Iteration follows first-insertion order. Inserting a header that is
/// already present replaces its description without moving the entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDescriptions {
    entries: Vec<(String, HeaderDescription)>,
    index: HashMap<String, usize>,
}

impl HeaderDescriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite in place; returns the previous value for duplicates
    pub fn insert(
        &mut self,
        header: impl Into<String>,
        description: HeaderDescription,
    ) -> Option<HeaderDescription> {
        let header = header.into();
        match self.index.get(&header) {
            Some(&position) => Some(std::mem::replace(
                &mut self.entries[position].1,
                description,
            )),
            None => {
                self.index.insert(header.clone(), self.entries.len());
                self.entries.push((header, description));
                None
            }
        }
    }

    pub fn get(&self, header: &str) -> Option<&HeaderDescription> {
        self.index
            .get(header)
            .map(|&position| &self.entries[position].1)
    }

    /// Description text for a header
    pub fn description(&self, header: &str) -> Option<&str> {
        self.get(header).map(|entry| entry.description.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate (header, description) pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(header, entry)| (header.as_str(), entry.description.as_str()))
    }

    /// Count entries per match kind
    pub fn summary(&self) -> AnalysisSummary {
        let mut summary = AnalysisSummary::default();
        for (_, entry) in &self.entries {
            match entry.kind {
                MatchKind::Exact => summary.exact_matches += 1,
                MatchKind::Substring => summary.substring_matches += 1,
                MatchKind::Fallback => summary.fallbacks += 1,
            }
        }
        summary
    }
}

/// Match statistics for a completed analysis
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub exact_matches: usize,
    pub substring_matches: usize,
    pub fallbacks: usize,
}

impl AnalysisSummary {
    pub fn total(&self) -> usize {
        self.exact_matches + self.substring_matches + self.fallbacks
    }
}
