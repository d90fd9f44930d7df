//! Validated bond universe.
//!
//! The universe is the boundary where untyped candidate rows become
//! trusted data: [`BondUniverse::new`] runs the full schema check and
//! every downstream component operates on the validated result. The
//! check is exhaustive - all violations are reported in one pass, not
//! just the first.

use crate::error::{CoreResult, SchemaError, SchemaViolation};
use crate::types::Bond;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An immutable, schema-validated collection of candidate bonds.
///
/// Construction is the only validation point; a `BondUniverse` in hand
/// is guaranteed to have unique ids, finite fields, non-negative
/// durations and per-asset bounds inside `[0, 1]` with `min <= max`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Bond>", into = "Vec<Bond>")]
pub struct BondUniverse {
    bonds: Vec<Bond>,
}

impl BondUniverse {
    /// Validates the candidate rows and builds a universe.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] listing every violating row when any
    /// check fails.
    pub fn new(bonds: Vec<Bond>) -> CoreResult<Self> {
        validate(&bonds)?;
        Ok(Self { bonds })
    }

    /// Returns the bonds in input order.
    #[must_use]
    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Number of bonds in the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Returns true if the universe holds no bonds.
    ///
    /// Always false for a validated universe; kept for the usual
    /// `len`/`is_empty` pairing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }

    /// Iterates over the bonds in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bond> {
        self.bonds.iter()
    }

    /// Extracts the yield column.
    #[must_use]
    pub fn yields(&self) -> Vec<f64> {
        self.bonds.iter().map(|b| b.yield_value).collect()
    }

    /// Extracts the duration column.
    #[must_use]
    pub fn durations(&self) -> Vec<f64> {
        self.bonds.iter().map(|b| b.duration).collect()
    }

    /// Extracts the credit-quality column.
    #[must_use]
    pub fn qualities(&self) -> Vec<f64> {
        self.bonds.iter().map(|b| b.quality).collect()
    }

    /// Returns a copy of the universe with every yield bumped by
    /// `delta` (decimal terms, e.g. 100bp = 0.01).
    ///
    /// The original is never mutated. The copy skips re-validation: a
    /// finite uniform shift touches only `yield_value`, which has no
    /// domain restriction beyond finiteness, so the validated-by-
    /// construction invariant carries over.
    #[must_use]
    pub fn shifted(&self, delta: f64) -> Self {
        Self {
            bonds: self
                .bonds
                .iter()
                .map(|b| b.with_shifted_yield(delta))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a BondUniverse {
    type Item = &'a Bond;
    type IntoIter = std::slice::Iter<'a, Bond>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TryFrom<Vec<Bond>> for BondUniverse {
    type Error = SchemaError;

    fn try_from(bonds: Vec<Bond>) -> CoreResult<Self> {
        Self::new(bonds)
    }
}

impl From<BondUniverse> for Vec<Bond> {
    fn from(universe: BondUniverse) -> Self {
        universe.bonds
    }
}

/// Checks a sequence of candidate bonds against the schema.
///
/// Verifies unique ids, finite numeric fields, non-negative durations
/// and per-asset weight bounds `0 <= min <= max <= 1`. The check is
/// exhaustive: every violating row is reported, and a row can appear
/// more than once when several fields are bad. Pure check, no side
/// effects.
///
/// # Errors
///
/// Returns [`SchemaError`] with the full violation list on any failure.
pub fn validate(bonds: &[Bond]) -> CoreResult<()> {
    let mut violations = Vec::new();

    if bonds.is_empty() {
        violations.push(SchemaViolation::new(
            0,
            "",
            "universe",
            "universe contains no bonds",
        ));
        return Err(SchemaError::new(violations));
    }

    // Rows sharing an id are all reported, never silently deduplicated.
    let mut by_id: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for (row, bond) in bonds.iter().enumerate() {
        by_id.entry(bond.id.as_str()).or_default().push(row);
    }
    let mut duplicate_rows: Vec<(usize, &str)> = Vec::new();
    for (id, rows) in &by_id {
        if rows.len() > 1 {
            for &row in rows {
                duplicate_rows.push((row, id));
            }
        }
    }
    duplicate_rows.sort_unstable();
    for (row, id) in duplicate_rows {
        violations.push(SchemaViolation::new(
            row,
            id,
            "id",
            format!("duplicate id '{id}'"),
        ));
    }

    for (row, bond) in bonds.iter().enumerate() {
        if bond.id.is_empty() {
            violations.push(SchemaViolation::new(row, "", "id", "id must not be empty"));
        }

        for (field, value) in [
            ("yield_value", bond.yield_value),
            ("duration", bond.duration),
            ("quality", bond.quality),
            ("liquidity_score", bond.liquidity_score),
            ("min_weight", bond.min_weight),
            ("max_weight", bond.max_weight),
        ] {
            if !value.is_finite() {
                violations.push(SchemaViolation::new(
                    row,
                    &bond.id,
                    field,
                    format!("must be finite, got {value}"),
                ));
            }
        }

        if bond.duration < 0.0 {
            violations.push(SchemaViolation::new(
                row,
                &bond.id,
                "duration",
                format!("must be non-negative, got {}", bond.duration),
            ));
        }

        if bond.min_weight < 0.0 || bond.min_weight > 1.0 {
            violations.push(SchemaViolation::new(
                row,
                &bond.id,
                "min_weight",
                format!("must lie in [0, 1], got {}", bond.min_weight),
            ));
        }
        if bond.max_weight < 0.0 || bond.max_weight > 1.0 {
            violations.push(SchemaViolation::new(
                row,
                &bond.id,
                "max_weight",
                format!("must lie in [0, 1], got {}", bond.max_weight),
            ));
        }
        if bond.min_weight.is_finite()
            && bond.max_weight.is_finite()
            && bond.min_weight > bond.max_weight
        {
            violations.push(SchemaViolation::new(
                row,
                &bond.id,
                "min_weight",
                format!(
                    "min_weight {} exceeds max_weight {}",
                    bond.min_weight, bond.max_weight
                ),
            ));
        }
    }

    if violations.is_empty() {
        Ok(())
    } else {
        violations.sort_by_key(|v| v.row);
        Err(SchemaError::new(violations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_bonds() -> Vec<Bond> {
        vec![
            Bond::new("T1", "TSY", 0.035, 2.0, 1.0, 3.0),
            Bond::new("C1", "Corp", 0.055, 6.5, 4.0, 2.0).with_bounds(0.0, 0.5),
            Bond::new("H1", "High Yield", 0.085, 5.0, 8.0, 1.0).with_bounds(0.0, 0.1),
        ]
    }

    #[test]
    fn test_valid_universe() {
        let universe = BondUniverse::new(sample_bonds()).unwrap();
        assert_eq!(universe.len(), 3);
        assert!(!universe.is_empty());
        assert_eq!(universe.yields(), vec![0.035, 0.055, 0.085]);
        assert_eq!(universe.durations(), vec![2.0, 6.5, 5.0]);
        assert_eq!(universe.qualities(), vec![1.0, 4.0, 8.0]);
    }

    #[test]
    fn test_empty_universe_rejected() {
        let err = BondUniverse::new(Vec::new()).unwrap_err();
        assert_eq!(err.violations.len(), 1);
        assert_eq!(err.violations[0].field, "universe");
    }

    #[test]
    fn test_duplicate_ids_name_every_row() {
        let mut bonds = sample_bonds();
        bonds.push(Bond::new("T1", "TSY", 0.036, 3.0, 1.0, 3.0));
        let err = BondUniverse::new(bonds).unwrap_err();

        let dup_rows: Vec<usize> = err
            .violations
            .iter()
            .filter(|v| v.field == "id")
            .map(|v| v.row)
            .collect();
        assert_eq!(dup_rows, vec![0, 3]);
    }

    #[test]
    fn test_validation_is_exhaustive_not_fail_fast() {
        let bonds = vec![
            Bond::new("A", "TSY", f64::NAN, 2.0, 1.0, 3.0),
            Bond::new("B", "Corp", 0.05, -1.0, 4.0, 2.0),
            Bond::new("C", "Corp", 0.05, 3.0, 4.0, 2.0).with_bounds(0.6, 0.4),
        ];
        let err = validate(&bonds).unwrap_err();
        assert_eq!(err.rows(), vec![0, 1, 2]);
    }

    #[test]
    fn test_weight_domain_checks() {
        let bonds = vec![
            Bond::new("A", "TSY", 0.03, 2.0, 1.0, 3.0).with_bounds(-0.1, 1.0),
            Bond::new("B", "TSY", 0.03, 2.0, 1.0, 3.0).with_bounds(0.0, 1.2),
        ];
        let err = validate(&bonds).unwrap_err();
        assert!(err
            .violations
            .iter()
            .any(|v| v.row == 0 && v.field == "min_weight"));
        assert!(err
            .violations
            .iter()
            .any(|v| v.row == 1 && v.field == "max_weight"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let bonds = vec![Bond::new("", "TSY", 0.03, 2.0, 1.0, 3.0)];
        let err = validate(&bonds).unwrap_err();
        assert_eq!(err.violations[0].field, "id");
    }

    #[test]
    fn test_shifted_copies_and_preserves_original() {
        let universe = BondUniverse::new(sample_bonds()).unwrap();
        let shifted = universe.shifted(0.01);

        assert_eq!(universe.yields(), vec![0.035, 0.055, 0.085]);
        let bumped = shifted.yields();
        for (before, after) in universe.yields().iter().zip(&bumped) {
            assert!((after - before - 0.01).abs() < 1e-12);
        }
        // Everything but the yield column is untouched.
        assert_eq!(universe.durations(), shifted.durations());
        assert_eq!(universe.qualities(), shifted.qualities());
    }

    #[test]
    fn test_serde_rejects_invalid_payload() {
        let json = r#"[
            {"id": "X", "sector": "TSY", "yield_value": 0.03, "duration": -2.0,
             "quality": 1.0, "liquidity_score": 3.0, "min_weight": 0.0, "max_weight": 1.0}
        ]"#;
        let parsed: Result<BondUniverse, _> = serde_json::from_str(json);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let universe = BondUniverse::new(sample_bonds()).unwrap();
        let json = serde_json::to_string(&universe).unwrap();
        let parsed: BondUniverse = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, universe);
    }

    proptest! {
        #[test]
        fn prop_in_domain_bonds_always_validate(
            yields in proptest::collection::vec(-0.05f64..0.20, 1..40),
            durations in proptest::collection::vec(0.0f64..30.0, 1..40),
            span in 0.0f64..1.0,
        ) {
            let n = yields.len().min(durations.len());
            let bonds: Vec<Bond> = (0..n)
                .map(|i| {
                    Bond::new(format!("B{i}"), "Corp", yields[i], durations[i], 3.0, 2.0)
                        .with_bounds(0.0, span.max(f64::EPSILON))
                })
                .collect();
            prop_assert!(validate(&bonds).is_ok());
        }

        #[test]
        fn prop_negative_duration_always_rejected(duration in -30.0f64..-1e-9) {
            let bonds = vec![Bond::new("B0", "Corp", 0.05, duration, 3.0, 2.0)];
            prop_assert!(validate(&bonds).is_err());
        }
    }
}
