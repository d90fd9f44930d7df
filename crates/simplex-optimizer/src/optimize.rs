//! Optimization entry point.
//!
//! Wraps the backend solve with the defensive layers the backend does
//! not provide: a weight-mass feasibility check before any LP work,
//! screening of structurally-empty rows, and tolerance validation of
//! the returned point. A solver is never trusted blindly - a returned
//! weight outside its own bound is a [`SolveResult::SolverError`], not
//! an optimum.

use crate::builder::build_program;
use crate::config::SolverConfig;
use crate::program::{asset_max_label, asset_min_label, LpProgram, LABEL_ALLOCATION};
use crate::result::{Allocation, SolveResult};
use crate::solver::{BackendError, LpBackend, MicrolpSolver};
use simplex_core::{BondUniverse, PortfolioConfig};
use tracing::{debug, warn};

/// Maximizes portfolio yield over the universe under the configured
/// limits, with the default tolerance and the bundled microlp backend.
#[must_use]
pub fn optimize(universe: &BondUniverse, config: &PortfolioConfig) -> SolveResult {
    optimize_with(universe, config, &SolverConfig::default(), &MicrolpSolver)
}

/// Maximizes portfolio yield with explicit solver settings and backend.
#[must_use]
pub fn optimize_with<B: LpBackend>(
    universe: &BondUniverse,
    config: &PortfolioConfig,
    solver: &SolverConfig,
    backend: &B,
) -> SolveResult {
    let eps = solver.epsilon;

    // Weight-mass check: if the per-asset minimums already overcommit
    // the portfolio (or the maximums cannot fill it), the program is
    // infeasible by construction and is reported without solving.
    let min_mass: f64 = universe.iter().map(|b| b.min_weight).sum();
    if min_mass > 1.0 + eps {
        let mut violated = vec![LABEL_ALLOCATION.to_string()];
        violated.extend(
            universe
                .iter()
                .filter(|b| b.min_weight > 0.0)
                .map(|b| asset_min_label(&b.id)),
        );
        debug!(min_mass, "per-asset minimums exceed full allocation");
        return SolveResult::infeasible(violated);
    }
    let max_mass: f64 = universe.iter().map(|b| b.max_weight).sum();
    if max_mass < 1.0 - eps {
        let mut violated = vec![LABEL_ALLOCATION.to_string()];
        violated.extend(
            universe
                .iter()
                .filter(|b| b.max_weight < 1.0)
                .map(|b| asset_max_label(&b.id)),
        );
        debug!(max_mass, "per-asset maximums cannot fill the allocation");
        return SolveResult::infeasible(violated);
    }

    let program = build_program(universe, config);

    // Rows with no terms have a left-hand side of identically zero
    // (a configured sector with no members, a liquidity floor nothing
    // qualifies for). Violated ones are exact infeasibility evidence;
    // satisfied ones cannot bind and are dropped.
    let mut screened = LpProgram {
        objective: program.objective,
        var_bounds: program.var_bounds,
        constraints: Vec::with_capacity(program.constraints.len()),
    };
    for row in program.constraints {
        if row.is_empty() {
            if !row.satisfied_at(&[], eps) {
                debug!(label = %row.label, "empty constraint row is unsatisfiable");
                return SolveResult::infeasible(vec![row.label]);
            }
        } else {
            screened.constraints.push(row);
        }
    }

    match backend.maximize(&screened) {
        Ok(raw) => validate_solution(&raw.weights, &screened, universe, config, eps),
        Err(BackendError::Infeasible) => SolveResult::infeasible(screened.labels()),
        Err(BackendError::Unbounded) => {
            // Unreachable with the full-allocation row and [0, 1]
            // variable bounds in place; points at defective assembly.
            warn!("backend reported an unbounded program");
            SolveResult::Unbounded
        }
        Err(BackendError::Failed(message)) => {
            warn!(%message, "backend solve failed");
            SolveResult::solver_error(message)
        }
    }
}

/// Checks a returned point against the program within tolerance and
/// derives the achieved portfolio metrics.
fn validate_solution(
    weights: &[f64],
    program: &LpProgram,
    universe: &BondUniverse,
    config: &PortfolioConfig,
    eps: f64,
) -> SolveResult {
    if weights.len() != universe.len() {
        return SolveResult::solver_error(format!(
            "backend returned {} weights for {} variables",
            weights.len(),
            universe.len()
        ));
    }

    for (bond, &w) in universe.iter().zip(weights) {
        if !w.is_finite() || w < -eps || w > 1.0 + eps {
            warn!(id = %bond.id, weight = w, "weight outside [0, 1]");
            return SolveResult::solver_error(format!(
                "weight {w} for '{}' outside [0, 1]",
                bond.id
            ));
        }
        if w < bond.min_weight - eps || w > bond.max_weight + eps {
            warn!(id = %bond.id, weight = w, "weight breaches its asset bound");
            return SolveResult::solver_error(format!(
                "weight {w} for '{}' breaches bound [{}, {}]",
                bond.id, bond.min_weight, bond.max_weight
            ));
        }
    }

    if let Some(row) = program
        .constraints
        .iter()
        .find(|row| !row.satisfied_at(weights, eps))
    {
        warn!(label = %row.label, "returned point violates a constraint row");
        return SolveResult::solver_error(format!(
            "returned point violates '{}' beyond tolerance",
            row.label
        ));
    }

    let portfolio_yield: f64 = universe
        .iter()
        .zip(weights)
        .map(|(b, &w)| b.yield_value * w)
        .sum();
    let portfolio_duration: f64 = universe
        .iter()
        .zip(weights)
        .map(|(b, &w)| b.duration * w)
        .sum();
    let portfolio_quality: f64 = universe
        .iter()
        .zip(weights)
        .map(|(b, &w)| b.quality * w)
        .sum();
    let liquid_fraction: f64 = universe
        .iter()
        .zip(weights)
        .filter(|(b, _)| b.liquidity_score >= config.liquidity_threshold)
        .map(|(_, &w)| w)
        .sum();

    debug!(
        yield_ = portfolio_yield,
        duration = portfolio_duration,
        "optimal allocation found"
    );

    SolveResult::Optimal {
        allocation: Allocation {
            weights: weights.to_vec(),
            portfolio_yield,
            portfolio_duration,
            portfolio_quality,
            liquid_fraction,
        },
    }
}
