//! Conditional parallel iteration for scenario batches.
//!
//! Uses rayon when the `parallel` feature is enabled and the batch is
//! large enough to pay for the fan-out; sequential otherwise. Either
//! path produces identical results - scenarios share no mutable state.

use crate::config::SolverConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Parallel iteration is used when the `parallel` feature is compiled
/// in, `config.parallel` is true and the item count reaches
/// `config.parallel_threshold`.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(items: &[T], config: &SolverConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
