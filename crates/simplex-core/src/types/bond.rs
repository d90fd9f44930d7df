//! Candidate bond representation.

use serde::{Deserialize, Serialize};

/// One candidate instrument in the optimization universe.
///
/// All numeric attributes are pre-mapped scores supplied by the caller:
/// raw rating letters and liquidity tier labels are translated to numbers
/// through an external lookup (see [`crate::types::ScoreTable`]) before a
/// `Bond` is constructed. Field domains are enforced at the universe
/// boundary, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    /// Unique identifier across the universe.
    pub id: String,

    /// Sector label (e.g. "TSY", "Corp", "High Yield").
    pub sector: String,

    /// Annualized yield. Decimal fraction or percent - the unit is fixed
    /// once per universe and never mixed.
    pub yield_value: f64,

    /// Duration in years, >= 0.
    pub duration: f64,

    /// Numeric credit-quality score; lower = better credit.
    pub quality: f64,

    /// Numeric liquidity score; higher = more liquid.
    pub liquidity_score: f64,

    /// Per-asset minimum weight, in [0, 1].
    pub min_weight: f64,

    /// Per-asset maximum weight, in [0, 1], >= `min_weight`.
    pub max_weight: f64,
}

impl Bond {
    /// Creates a bond with free per-asset bounds `[0, 1]`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        sector: impl Into<String>,
        yield_value: f64,
        duration: f64,
        quality: f64,
        liquidity_score: f64,
    ) -> Self {
        Self {
            id: id.into(),
            sector: sector.into(),
            yield_value,
            duration,
            quality,
            liquidity_score,
            min_weight: 0.0,
            max_weight: 1.0,
        }
    }

    /// Sets the per-asset weight bounds.
    #[must_use]
    pub fn with_bounds(mut self, min_weight: f64, max_weight: f64) -> Self {
        self.min_weight = min_weight;
        self.max_weight = max_weight;
        self
    }

    /// Returns a copy with the yield bumped by `delta` (decimal terms).
    #[must_use]
    pub fn with_shifted_yield(&self, delta: f64) -> Self {
        Self {
            yield_value: self.yield_value + delta,
            ..self.clone()
        }
    }
}
