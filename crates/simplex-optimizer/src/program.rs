//! Linear program representation.
//!
//! The constraint builder emits an [`LpProgram`]; solver backends
//! consume it. Every constraint row carries a stable label so that
//! infeasibility can be reported in the caller's vocabulary
//! (e.g. `sector:Financials:max`), independent of which backend solved
//! the program.

use serde::{Deserialize, Serialize};

/// Label of the full-allocation constraint (`sum(w) == 1`).
pub const LABEL_ALLOCATION: &str = "allocation:full";

/// Label of the lower duration-band constraint.
pub const LABEL_DURATION_MIN: &str = "duration:min";

/// Label of the upper duration-band constraint.
pub const LABEL_DURATION_MAX: &str = "duration:max";

/// Label of the liquidity-floor constraint.
pub const LABEL_LIQUIDITY_FLOOR: &str = "liquidity:floor";

/// Label of the quality-ceiling constraint.
pub const LABEL_QUALITY_CEILING: &str = "quality:ceiling";

/// Label of a sector's minimum-weight constraint.
#[must_use]
pub fn sector_min_label(sector: &str) -> String {
    format!("sector:{sector}:min")
}

/// Label of a sector's maximum-weight constraint.
#[must_use]
pub fn sector_max_label(sector: &str) -> String {
    format!("sector:{sector}:max")
}

/// Label of one asset's minimum-weight bound.
#[must_use]
pub fn asset_min_label(id: &str) -> String {
    format!("asset:{id}:min")
}

/// Label of one asset's maximum-weight bound.
#[must_use]
pub fn asset_max_label(id: &str) -> String {
    format!("asset:{id}:max")
}

/// Direction of a linear constraint row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    /// Left-hand side equals the right-hand side.
    Eq,
    /// Left-hand side is at least the right-hand side.
    Ge,
    /// Left-hand side is at most the right-hand side.
    Le,
}

/// One labeled linear constraint row over the weight vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearConstraint {
    /// Stable diagnostic label, e.g. `"sector:Corp:max"`.
    pub label: String,

    /// Sparse `(bond index, coefficient)` terms; zero coefficients are
    /// never stored.
    pub terms: Vec<(usize, f64)>,

    /// Constraint direction.
    pub op: Relation,

    /// Right-hand side.
    pub rhs: f64,
}

impl LinearConstraint {
    /// Creates a new constraint row.
    #[must_use]
    pub fn new(label: impl Into<String>, terms: Vec<(usize, f64)>, op: Relation, rhs: f64) -> Self {
        Self {
            label: label.into(),
            terms,
            op,
            rhs,
        }
    }

    /// Returns true if the row has no terms (its left-hand side is
    /// identically zero).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Evaluates the left-hand side at `weights`.
    #[must_use]
    pub fn evaluate(&self, weights: &[f64]) -> f64 {
        self.terms
            .iter()
            .map(|&(i, coeff)| coeff * weights.get(i).copied().unwrap_or(0.0))
            .sum()
    }

    /// Returns true if the row holds at `weights` within tolerance.
    #[must_use]
    pub fn satisfied_at(&self, weights: &[f64], eps: f64) -> bool {
        let lhs = self.evaluate(weights);
        match self.op {
            Relation::Eq => (lhs - self.rhs).abs() <= eps,
            Relation::Ge => lhs >= self.rhs - eps,
            Relation::Le => lhs <= self.rhs + eps,
        }
    }
}

/// A complete linear program: maximize `objective . w` subject to the
/// constraint rows and per-variable bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LpProgram {
    /// Objective coefficients, one per bond (its yield).
    pub objective: Vec<f64>,

    /// Per-variable `(min, max)` bounds - the per-asset weight limits.
    pub var_bounds: Vec<(f64, f64)>,

    /// Constraint rows in builder order.
    pub constraints: Vec<LinearConstraint>,
}

impl LpProgram {
    /// Number of decision variables.
    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    /// Labels of all constraint rows, in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.constraints.iter().map(|c| c.label.clone()).collect()
    }
}
