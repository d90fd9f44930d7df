//! Error types for universe validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, SchemaError>;

/// A single schema violation found in a candidate bond table.
///
/// Validation is exhaustive, so one bad input can produce several
/// violations; each names the offending row, bond and field.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("row {row} ('{id}'): {field}: {message}")]
pub struct SchemaViolation {
    /// Zero-based row index in the input table.
    pub row: usize,

    /// The bond id of the offending row (may be empty for table-level checks).
    pub id: String,

    /// The field that failed validation.
    pub field: String,

    /// Human-readable description of the failure.
    pub message: String,
}

impl SchemaViolation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        row: usize,
        id: impl Into<String>,
        field: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            row,
            id: id.into(),
            field: field.into(),
            message: message.into(),
        }
    }
}

/// The candidate bond table failed structural or domain validation.
///
/// Carries every violation found in one pass, never just the first.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("universe failed schema validation with {} violation(s)", .violations.len())]
pub struct SchemaError {
    /// All violations found, in row order.
    pub violations: Vec<SchemaViolation>,
}

impl SchemaError {
    /// Creates an error from a non-empty list of violations.
    #[must_use]
    pub fn new(violations: Vec<SchemaViolation>) -> Self {
        Self { violations }
    }

    /// Returns the rows that had at least one violation, in order.
    #[must_use]
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self.violations.iter().map(|v| v.row).collect();
        rows.dedup();
        rows
    }
}
