//! LP solver capability boundary.
//!
//! The optimizer is written against [`LpBackend`] so any conforming
//! linear-programming library can be substituted; [`MicrolpSolver`]
//! is the backend shipped with this crate.

use crate::program::{LpProgram, Relation};
use thiserror::Error;

/// Why a backend could not return an optimal point.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The constraint set has no feasible point.
    #[error("linear program is infeasible")]
    Infeasible,

    /// The objective is unbounded over the feasible region.
    #[error("linear program is unbounded")]
    Unbounded,

    /// Numeric or internal solver failure.
    #[error("solver failed: {0}")]
    Failed(String),
}

/// A raw optimal point as reported by a backend, before the engine's
/// own tolerance validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawSolution {
    /// Optimal weight per variable, in program order.
    pub weights: Vec<f64>,

    /// Objective value at the optimum.
    pub objective: f64,
}

/// Capability to maximize a linear program.
///
/// Implementations must be deterministic for a fixed program: the
/// scenario engine relies on identical inputs producing identical
/// results whether scenarios run sequentially or in parallel.
pub trait LpBackend {
    /// Maximizes `program.objective . w` subject to the program's
    /// constraint rows and variable bounds.
    ///
    /// # Errors
    ///
    /// [`BackendError`] when no optimal point exists or the solve
    /// fails numerically.
    fn maximize(&self, program: &LpProgram) -> Result<RawSolution, BackendError>;
}

/// Backend built on the pure-Rust `microlp` simplex implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrolpSolver;

impl MicrolpSolver {
    /// Creates the backend.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LpBackend for MicrolpSolver {
    fn maximize(&self, program: &LpProgram) -> Result<RawSolution, BackendError> {
        let mut problem = microlp::Problem::new(microlp::OptimizationDirection::Maximize);

        let vars: Vec<microlp::Variable> = program
            .objective
            .iter()
            .zip(&program.var_bounds)
            .map(|(&coeff, &(min, max))| problem.add_var(coeff, (min, max)))
            .collect();

        for row in &program.constraints {
            let terms: Vec<(microlp::Variable, f64)> = row
                .terms
                .iter()
                .map(|&(i, coeff)| (vars[i], coeff))
                .collect();
            let op = match row.op {
                Relation::Eq => microlp::ComparisonOp::Eq,
                Relation::Ge => microlp::ComparisonOp::Ge,
                Relation::Le => microlp::ComparisonOp::Le,
            };
            problem.add_constraint(terms.as_slice(), op, row.rhs);
        }

        match problem.solve() {
            Ok(solution) => Ok(RawSolution {
                objective: solution.objective(),
                weights: vars.iter().map(|&v| solution[v]).collect(),
            }),
            Err(microlp::Error::Infeasible) => Err(BackendError::Infeasible),
            Err(microlp::Error::Unbounded) => Err(BackendError::Unbounded),
            #[allow(unreachable_patterns)]
            Err(other) => Err(BackendError::Failed(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::LinearConstraint;

    fn two_var_program() -> LpProgram {
        // maximize 0.05 a + 0.07 b  s.t.  a + b = 1, b <= 0.6
        LpProgram {
            objective: vec![0.05, 0.07],
            var_bounds: vec![(0.0, 1.0), (0.0, 1.0)],
            constraints: vec![
                LinearConstraint::new(
                    "allocation:full",
                    vec![(0, 1.0), (1, 1.0)],
                    Relation::Eq,
                    1.0,
                ),
                LinearConstraint::new("asset:b:cap", vec![(1, 1.0)], Relation::Le, 0.6),
            ],
        }
    }

    #[test]
    fn test_solves_small_program() {
        let raw = MicrolpSolver::new().maximize(&two_var_program()).unwrap();
        assert!((raw.weights[0] - 0.4).abs() < 1e-6);
        assert!((raw.weights[1] - 0.6).abs() < 1e-6);
        assert!((raw.objective - (0.4 * 0.05 + 0.6 * 0.07)).abs() < 1e-9);
    }

    #[test]
    fn test_reports_infeasible() {
        let mut program = two_var_program();
        program
            .constraints
            .push(LinearConstraint::new("b:floor", vec![(1, 1.0)], Relation::Ge, 0.8));
        let err = MicrolpSolver::new().maximize(&program).unwrap_err();
        assert_eq!(err, BackendError::Infeasible);
    }
}
