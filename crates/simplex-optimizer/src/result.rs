//! Solve outcomes and achieved-portfolio diagnostics.

use serde::{Deserialize, Serialize};

/// An optimal weight vector together with the portfolio metrics it
/// achieves.
///
/// Produced fresh per solve and immutable once returned; scenario runs
/// each carry their own allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Allocation {
    /// Optimal weight per bond, in universe order.
    pub weights: Vec<f64>,

    /// Weighted-average yield at the optimum (the maximized objective).
    pub portfolio_yield: f64,

    /// Weighted-average duration in years.
    pub portfolio_duration: f64,

    /// Weighted-average credit-quality score (lower = better).
    pub portfolio_quality: f64,

    /// Portfolio fraction held in liquidity tiers at/above the
    /// configured threshold.
    pub liquid_fraction: f64,
}

impl Allocation {
    /// Sum of all weights (1.0 up to solver tolerance for any valid
    /// allocation).
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.weights.iter().sum()
    }
}

/// Outcome of one optimization solve.
///
/// Errors are values: no partially-built weight vector ever escapes a
/// failed solve, and a failure is never downgraded to a default
/// allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveResult {
    /// A feasible optimum satisfying every constraint within tolerance.
    Optimal {
        /// The optimal weights and achieved metrics.
        allocation: Allocation,
    },

    /// The constraint set has no feasible point.
    Infeasible {
        /// Best-effort labels of the jointly-unsatisfiable constraints;
        /// the full assembled row set when no finer attribution exists.
        violated: Vec<String>,
    },

    /// The objective is unbounded. Cannot happen with the full
    /// allocation row and `[0, 1]` variable bounds in place, so this
    /// indicates defective constraint assembly upstream.
    Unbounded,

    /// Numeric solver failure or a precision breach in the returned
    /// point. Fatal to this solve.
    SolverError {
        /// Description of the failure.
        message: String,
    },
}

impl SolveResult {
    /// Creates an infeasibility outcome.
    #[must_use]
    pub fn infeasible(violated: Vec<String>) -> Self {
        Self::Infeasible { violated }
    }

    /// Creates a solver-error outcome.
    #[must_use]
    pub fn solver_error(message: impl Into<String>) -> Self {
        Self::SolverError {
            message: message.into(),
        }
    }

    /// Returns true for an optimal outcome.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Optimal { .. })
    }

    /// Returns the allocation of an optimal outcome.
    #[must_use]
    pub fn allocation(&self) -> Option<&Allocation> {
        match self {
            Self::Optimal { allocation } => Some(allocation),
            _ => None,
        }
    }
}
