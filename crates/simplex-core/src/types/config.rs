//! Portfolio-level optimization limits.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An inclusive `[min, max]` interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// Lower bound (inclusive).
    pub min: f64,
    /// Upper bound (inclusive).
    pub max: f64,
}

impl Bounds {
    /// Creates a new interval.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// The unit interval `[0, 1]` - the default for sectors without a
    /// configured cap (unconstrained except by full allocation).
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }

    /// A one-sided interval `[0, +inf)` - no effective upper limit.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(0.0, f64::INFINITY)
    }

    /// Returns true if `x` lies inside the interval within tolerance.
    #[must_use]
    pub fn contains(&self, x: f64, eps: f64) -> bool {
        x >= self.min - eps && x <= self.max + eps
    }
}

/// Portfolio-level limits consumed by the constraint builder.
///
/// An explicit, immutable value passed to every entry point - there is
/// no process-wide default state. The neutral [`Default`] leaves every
/// limit unconstrained; callers opt in to each restriction through the
/// `with_*` builders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Per-sector weight caps. Sectors present in the universe but
    /// absent here default to [`Bounds::unit`].
    pub sector_bounds: BTreeMap<String, Bounds>,

    /// Allowed band for weighted-average duration, in years.
    pub duration_band: Bounds,

    /// Minimum portfolio fraction held in qualifying liquidity tiers.
    pub liquidity_floor: f64,

    /// Minimum liquidity score for a bond to count toward the floor.
    pub liquidity_threshold: f64,

    /// Maximum allowed weighted-average quality score (lower score =
    /// better credit, so this caps how far down the credit scale the
    /// portfolio can sit).
    pub quality_ceiling: f64,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            sector_bounds: BTreeMap::new(),
            duration_band: Bounds::unbounded(),
            liquidity_floor: 0.0,
            liquidity_threshold: 0.0,
            quality_ceiling: f64::INFINITY,
        }
    }
}

impl PortfolioConfig {
    /// Creates a neutral configuration with every limit unconstrained.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the cap for one sector.
    #[must_use]
    pub fn with_sector_bounds(mut self, sector: impl Into<String>, bounds: Bounds) -> Self {
        self.sector_bounds.insert(sector.into(), bounds);
        self
    }

    /// Sets the duration band in years.
    #[must_use]
    pub fn with_duration_band(mut self, min: f64, max: f64) -> Self {
        self.duration_band = Bounds::new(min, max);
        self
    }

    /// Sets the liquidity floor and the score threshold a bond must
    /// reach to count toward it.
    #[must_use]
    pub fn with_liquidity_floor(mut self, floor: f64, threshold: f64) -> Self {
        self.liquidity_floor = floor;
        self.liquidity_threshold = threshold;
        self
    }

    /// Sets the weighted-average quality ceiling.
    #[must_use]
    pub fn with_quality_ceiling(mut self, ceiling: f64) -> Self {
        self.quality_ceiling = ceiling;
        self
    }

    /// Returns the configured bounds for `sector`, or the unit interval
    /// when the sector carries no cap.
    #[must_use]
    pub fn sector_bounds_for(&self, sector: &str) -> Bounds {
        self.sector_bounds
            .get(sector)
            .copied()
            .unwrap_or_else(Bounds::unit)
    }
}
