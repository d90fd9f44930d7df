//! Parallel-shift scenario engine.
//!
//! Re-runs the full build-and-solve pipeline on yield-shifted copies
//! of the universe, one copy per shift. Scenarios are mutually
//! independent: each reads only its own shifted universe and the shared
//! configuration, one infeasible scenario never aborts the batch, and
//! the batch may fan out across threads without changing any result.

use crate::config::SolverConfig;
use crate::optimize::optimize_with;
use crate::parallel::maybe_parallel_map;
use crate::result::SolveResult;
use crate::solver::{LpBackend, MicrolpSolver};
use serde::{Deserialize, Serialize};
use simplex_core::{BondUniverse, PortfolioConfig};
use std::collections::BTreeMap;
use tracing::debug;

/// The conventional base/up/down shift batch, in basis points.
pub const STANDARD_SHIFTS: [i32; 3] = [-100, 0, 100];

/// Outcome of one yield-shift scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Display label, e.g. `"+100bp"` / `"-100bp"` / `"+0bp"`.
    pub label: String,

    /// The applied shift in basis points.
    pub shift_bps: i32,

    /// The solve outcome on the shifted universe.
    pub result: SolveResult,
}

impl ScenarioResult {
    /// Formats the display label for a shift.
    #[must_use]
    pub fn label_for(shift_bps: i32) -> String {
        format!("{shift_bps:+}bp")
    }

    /// Returns true if this scenario solved to optimality.
    #[must_use]
    pub fn is_optimal(&self) -> bool {
        self.result.is_optimal()
    }
}

/// Runs the optimizer across yield-shift scenarios with the default
/// tolerance and the bundled microlp backend.
///
/// Each shift derives a fresh universe copy with every yield bumped by
/// `shift_bps / 10000` (basis points to decimal) and solves it under
/// the same configuration. Results are keyed by shift; duplicate
/// shifts collapse onto one entry.
#[must_use]
pub fn run_scenarios(
    universe: &BondUniverse,
    config: &PortfolioConfig,
    shifts_bps: &[i32],
) -> BTreeMap<i32, ScenarioResult> {
    run_scenarios_with(
        universe,
        config,
        shifts_bps,
        &SolverConfig::default(),
        &MicrolpSolver,
    )
}

/// Runs the scenario batch with explicit solver settings and backend.
#[must_use]
pub fn run_scenarios_with<B: LpBackend + Sync>(
    universe: &BondUniverse,
    config: &PortfolioConfig,
    shifts_bps: &[i32],
    solver: &SolverConfig,
    backend: &B,
) -> BTreeMap<i32, ScenarioResult> {
    let results = maybe_parallel_map(shifts_bps, solver, |&shift_bps| {
        let shifted = universe.shifted(f64::from(shift_bps) / 10_000.0);
        let result = optimize_with(&shifted, config, solver, backend);
        debug!(
            shift_bps,
            optimal = result.is_optimal(),
            "scenario solved"
        );
        (
            shift_bps,
            ScenarioResult {
                label: ScenarioResult::label_for(shift_bps),
                shift_bps,
                result,
            },
        )
    });

    results.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::program::LpProgram;
    use crate::solver::{BackendError, RawSolution};
    use approx::assert_relative_eq;
    use simplex_core::Bond;

    fn universe() -> BondUniverse {
        BondUniverse::new(vec![
            Bond::new("A", "X", 0.05, 3.0, 2.0, 3.0),
            Bond::new("B", "Y", 0.07, 10.0, 2.0, 3.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_labels() {
        assert_eq!(ScenarioResult::label_for(100), "+100bp");
        assert_eq!(ScenarioResult::label_for(-100), "-100bp");
        assert_eq!(ScenarioResult::label_for(0), "+0bp");
    }

    #[test]
    fn test_standard_batch_returns_every_entry() {
        let config = PortfolioConfig::new().with_duration_band(2.0, 8.0);
        let results = run_scenarios(&universe(), &config, &STANDARD_SHIFTS);

        assert_eq!(results.len(), 3);
        for shift in STANDARD_SHIFTS {
            assert!(results[&shift].is_optimal());
            assert_eq!(results[&shift].shift_bps, shift);
        }
    }

    #[test]
    fn test_shift_moves_achieved_yield_by_the_shift() {
        // The feasible region does not depend on yields, so the same
        // weights stay optimal and the achieved yield moves by exactly
        // the shift (100bp = 0.01).
        let config = PortfolioConfig::new().with_duration_band(2.0, 8.0);
        let results = run_scenarios(&universe(), &config, &STANDARD_SHIFTS);

        let base = results[&0].result.allocation().unwrap().portfolio_yield;
        let up = results[&100].result.allocation().unwrap().portfolio_yield;
        let down = results[&-100].result.allocation().unwrap().portfolio_yield;

        assert_relative_eq!(up, base + 0.01, epsilon = 1e-6);
        assert_relative_eq!(down, base - 0.01, epsilon = 1e-6);
    }

    #[test]
    fn test_base_scenario_matches_direct_optimize() {
        let config = PortfolioConfig::new().with_duration_band(2.0, 8.0);
        let direct = crate::optimize::optimize(&universe(), &config);
        let results = run_scenarios(&universe(), &config, &[0]);

        let direct_weights = &direct.allocation().unwrap().weights;
        let scenario_weights = &results[&0].result.allocation().unwrap().weights;
        for (a, b) in direct_weights.iter().zip(scenario_weights) {
            assert_relative_eq!(a, b, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_original_universe_is_never_mutated() {
        let base = universe();
        let config = PortfolioConfig::default();
        let _ = run_scenarios(&base, &config, &STANDARD_SHIFTS);
        assert_eq!(base.yields(), vec![0.05, 0.07]);
    }

    /// Delegates to microlp but fails whenever the first objective
    /// coefficient exceeds the cutoff - a deterministic way to break
    /// only the shifted-up scenario.
    struct FlakyAbove(f64);

    impl LpBackend for FlakyAbove {
        fn maximize(&self, program: &LpProgram) -> Result<RawSolution, BackendError> {
            if program.objective[0] > self.0 {
                return Err(BackendError::Failed("cutoff exceeded".into()));
            }
            MicrolpSolver.maximize(program)
        }
    }

    #[test]
    fn test_one_failed_scenario_never_aborts_the_batch() {
        let config = PortfolioConfig::default();
        let backend = FlakyAbove(0.055);
        let results = run_scenarios_with(
            &universe(),
            &config,
            &STANDARD_SHIFTS,
            &SolverConfig::sequential(),
            &backend,
        );

        assert_eq!(results.len(), 3);
        assert!(results[&-100].is_optimal());
        assert!(results[&0].is_optimal());
        assert!(matches!(
            results[&100].result,
            SolveResult::SolverError { .. }
        ));
    }

    #[test]
    fn test_sequential_and_parallel_paths_agree() {
        let config = PortfolioConfig::new().with_duration_band(2.0, 8.0);
        let shifts: Vec<i32> = (-300..=300).step_by(50).collect();

        let sequential = run_scenarios_with(
            &universe(),
            &config,
            &shifts,
            &SolverConfig::sequential(),
            &MicrolpSolver,
        );
        let parallel = run_scenarios_with(
            &universe(),
            &config,
            &shifts,
            &SolverConfig::new().with_threshold(2),
            &MicrolpSolver,
        );

        assert_eq!(sequential, parallel);
    }
}
