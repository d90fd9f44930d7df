//! # Simplex Optimizer
//!
//! Constrained bond-portfolio optimization: maximize weighted-average
//! yield over a validated universe subject to allocation, sector,
//! duration, liquidity and credit-quality limits, then stress-test the
//! result under parallel yield shifts.
//!
//! ## Design Philosophy
//!
//! - **Pure pipeline**: (universe, config) -> constraints -> solve;
//!   no I/O, no caching, no shared state between solves.
//! - **Delegated solving**: the LP solve goes through the [`LpBackend`]
//!   capability trait (shipped backend: [`MicrolpSolver`]); the
//!   engineering weight sits in correctly-signed constraint assembly
//!   and faithful infeasibility diagnostics.
//! - **Defensive validation**: returned points are re-checked against
//!   every bound and row within tolerance; a breach is a
//!   [`SolveResult::SolverError`], never a silent optimum.
//! - **Scenario isolation**: each yield shift solves an independent
//!   shifted copy; one failure never suppresses the other results.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use simplex_optimizer::prelude::*;
//!
//! let universe = BondUniverse::new(bonds)?;
//! let config = PortfolioConfig::new()
//!     .with_sector_bounds("High Yield", Bounds::new(0.0, 0.05))
//!     .with_duration_band(2.0, 8.0)
//!     .with_liquidity_floor(0.20, 3.0)
//!     .with_quality_ceiling(5.0);
//!
//! match optimize(&universe, &config) {
//!     SolveResult::Optimal { allocation } => {
//!         println!("yield: {:.4}", allocation.portfolio_yield);
//!     }
//!     other => eprintln!("no allocation: {other:?}"),
//! }
//!
//! let by_shift = run_scenarios(&universe, &config, &STANDARD_SHIFTS);
//! ```
//!
//! ## Module Overview
//!
//! - [`builder`] - constraint assembly with stable row labels
//! - [`config`] - [`SolverConfig`] tolerances and parallelism
//! - [`optimize`](crate::optimize()) - the solve entry point
//! - [`program`] - [`LpProgram`] and [`LinearConstraint`]
//! - [`result`] - [`SolveResult`] and [`Allocation`]
//! - [`scenario`] - yield-shift batches
//! - [`solver`] - the [`LpBackend`] boundary and microlp backend
//!
//! ## Feature Flags
//!
//! - `parallel`: rayon-based parallel scenario solves

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod builder;
pub mod config;
pub mod optimize;
pub mod parallel;
pub mod program;
pub mod result;
pub mod scenario;
pub mod solver;

pub use builder::build_program;
pub use config::SolverConfig;
pub use optimize::{optimize, optimize_with};
pub use parallel::maybe_parallel_map;
pub use program::{LinearConstraint, LpProgram, Relation};
pub use result::{Allocation, SolveResult};
pub use scenario::{run_scenarios, run_scenarios_with, ScenarioResult, STANDARD_SHIFTS};
pub use solver::{BackendError, LpBackend, MicrolpSolver, RawSolution};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use simplex_optimizer::prelude::*;
/// ```
pub mod prelude {
    pub use crate::builder::build_program;
    pub use crate::config::SolverConfig;
    pub use crate::optimize::{optimize, optimize_with};
    pub use crate::program::{LinearConstraint, LpProgram, Relation};
    pub use crate::result::{Allocation, SolveResult};
    pub use crate::scenario::{run_scenarios, run_scenarios_with, ScenarioResult, STANDARD_SHIFTS};
    pub use crate::solver::{BackendError, LpBackend, MicrolpSolver, RawSolution};

    // Re-export the data model from simplex-core
    pub use simplex_core::{validate, Bond, BondUniverse, Bounds, PortfolioConfig, ScoreTable};
    pub use simplex_core::{CoreResult, SchemaError, SchemaViolation};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let result = SolveResult::solver_error("boom");
        assert!(!result.is_optimal());
    }
}
