//! Injected label-to-score lookup tables.
//!
//! Rating letters ("AAA", "A+") and liquidity tier labels ("Same Day",
//! "Weekly") reach the optimizer only as numeric scores. The exact
//! numeric scale is owned by the data source, not this library, so the
//! mapping is plain injected data: callers load whatever key sheet or
//! reference table they have into a [`ScoreTable`] and translate labels
//! before constructing bonds.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A label-to-score lookup supplied by the caller.
///
/// Used for both credit ratings (lower score = better credit) and
/// liquidity tiers (higher score = more liquid); the table itself is
/// direction-agnostic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreTable {
    scores: BTreeMap<String, f64>,
}

impl ScoreTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(label, score)` pairs.
    #[must_use]
    pub fn from_pairs<L: Into<String>>(pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self {
            scores: pairs
                .into_iter()
                .map(|(label, score)| (label.into(), score))
                .collect(),
        }
    }

    /// Adds or replaces one mapping.
    pub fn insert(&mut self, label: impl Into<String>, score: f64) {
        self.scores.insert(label.into(), score);
    }

    /// Looks up the score for a label.
    #[must_use]
    pub fn score(&self, label: &str) -> Option<f64> {
        self.scores.get(label).copied()
    }

    /// Number of mappings in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.scores.len()
    }

    /// Returns true if the table holds no mappings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Iterates over `(label, score)` pairs in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(label, score)| (label.as_str(), *score))
    }
}
