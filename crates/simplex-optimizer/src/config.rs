//! Solver engine configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the solve pipeline: numerical tolerance and
/// scenario-level parallelism.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Tolerance applied to every feasibility check on returned
    /// weights and constraint rows.
    pub epsilon: f64,

    /// Enable parallel scenario solves (requires the `parallel`
    /// feature).
    pub parallel: bool,

    /// Minimum scenario count to trigger parallel solves. Below this,
    /// sequential is faster than the thread fan-out.
    pub parallel_threshold: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            epsilon: 1e-6,
            parallel: true,
            parallel_threshold: 2,
        }
    }
}

impl SolverConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always solves scenarios sequentially.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the feasibility tolerance.
    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Sets whether scenario solves may run in parallel.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the scenario count threshold for parallel solves.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel solves should be used for `count`
    /// scenarios.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
