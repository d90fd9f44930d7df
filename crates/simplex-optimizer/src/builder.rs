//! Constraint builder: (universe, config) -> linear program.
//!
//! Pure transformation, no solving. Constraint rows are emitted in a
//! fixed order - full allocation, sectors, duration band, liquidity
//! floor, quality ceiling - which affects only diagnostic reporting,
//! never the solution.

use crate::program::{
    sector_max_label, sector_min_label, LinearConstraint, LpProgram, Relation, LABEL_ALLOCATION,
    LABEL_DURATION_MAX, LABEL_DURATION_MIN, LABEL_LIQUIDITY_FLOOR, LABEL_QUALITY_CEILING,
};
use simplex_core::{BondUniverse, PortfolioConfig};
use tracing::debug;

/// Assembles the linear program for one universe and configuration.
///
/// The objective is each bond's yield; per-asset weight limits become
/// variable bounds. Rows that cannot bind are not emitted: a sector
/// minimum of zero, a sector maximum of one or more, an unbounded side
/// of the duration band, a liquidity floor of zero and an infinite
/// quality ceiling all restrict nothing beyond the remaining rows.
#[must_use]
pub fn build_program(universe: &BondUniverse, config: &PortfolioConfig) -> LpProgram {
    let n = universe.len();
    let objective = universe.yields();
    let var_bounds: Vec<(f64, f64)> = universe
        .iter()
        .map(|b| (b.min_weight, b.max_weight))
        .collect();

    let mut constraints = Vec::new();

    // 1. Full allocation: weights sum to one.
    constraints.push(LinearConstraint::new(
        LABEL_ALLOCATION,
        (0..n).map(|i| (i, 1.0)).collect(),
        Relation::Eq,
        1.0,
    ));

    // 2. Per-sector caps, one membership-indicator row per bound.
    for (sector, bounds) in &config.sector_bounds {
        let members: Vec<(usize, f64)> = universe
            .iter()
            .enumerate()
            .filter(|(_, b)| b.sector == *sector)
            .map(|(i, _)| (i, 1.0))
            .collect();

        if bounds.min > 0.0 {
            constraints.push(LinearConstraint::new(
                sector_min_label(sector),
                members.clone(),
                Relation::Ge,
                bounds.min,
            ));
        }
        if bounds.max < 1.0 {
            constraints.push(LinearConstraint::new(
                sector_max_label(sector),
                members,
                Relation::Le,
                bounds.max,
            ));
        }
    }

    // 3. Duration band on the weighted average.
    let duration_terms: Vec<(usize, f64)> = universe
        .iter()
        .enumerate()
        .filter(|(_, b)| b.duration != 0.0)
        .map(|(i, b)| (i, b.duration))
        .collect();
    if config.duration_band.min > 0.0 {
        constraints.push(LinearConstraint::new(
            LABEL_DURATION_MIN,
            duration_terms.clone(),
            Relation::Ge,
            config.duration_band.min,
        ));
    }
    if config.duration_band.max.is_finite() {
        constraints.push(LinearConstraint::new(
            LABEL_DURATION_MAX,
            duration_terms,
            Relation::Le,
            config.duration_band.max,
        ));
    }

    // 4. Liquidity floor: weight held in tiers at/above the threshold.
    if config.liquidity_floor > 0.0 {
        let qualifying: Vec<(usize, f64)> = universe
            .iter()
            .enumerate()
            .filter(|(_, b)| b.liquidity_score >= config.liquidity_threshold)
            .map(|(i, _)| (i, 1.0))
            .collect();
        constraints.push(LinearConstraint::new(
            LABEL_LIQUIDITY_FLOOR,
            qualifying,
            Relation::Ge,
            config.liquidity_floor,
        ));
    }

    // 5. Quality ceiling on the weighted-average score.
    if config.quality_ceiling.is_finite() {
        let quality_terms: Vec<(usize, f64)> = universe
            .iter()
            .enumerate()
            .filter(|(_, b)| b.quality != 0.0)
            .map(|(i, b)| (i, b.quality))
            .collect();
        constraints.push(LinearConstraint::new(
            LABEL_QUALITY_CEILING,
            quality_terms,
            Relation::Le,
            config.quality_ceiling,
        ));
    }

    debug!(
        vars = n,
        rows = constraints.len(),
        "assembled linear program"
    );

    LpProgram {
        objective,
        var_bounds,
        constraints,
    }
}
