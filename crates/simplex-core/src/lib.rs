//! # Simplex Core
//!
//! Validated data model for constrained bond-portfolio optimization.
//!
//! This crate is the boundary between raw candidate data and the
//! optimizer: rows become typed [`Bond`] records, and
//! [`BondUniverse::new`] performs an exhaustive schema check so that
//! everything downstream operates on trusted data.
//!
//! ## Design Philosophy
//!
//! - **Validate once, at the boundary**: `BondUniverse` is valid by
//!   construction; no downstream re-checking.
//! - **Exhaustive diagnostics**: a failed validation reports every
//!   violating row in one pass, never just the first.
//! - **Explicit configuration**: [`PortfolioConfig`] is an immutable
//!   value passed to every entry point - no global default state.
//! - **Injected scales**: rating and liquidity label scores arrive via
//!   [`ScoreTable`] data; no scale is hardcoded here.
//!
//! ## Module Overview
//!
//! - [`error`] - [`SchemaError`] and the per-row violation records
//! - [`types`] - [`Bond`], [`BondUniverse`], [`PortfolioConfig`],
//!   [`Bounds`], [`ScoreTable`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

pub use error::{CoreResult, SchemaError, SchemaViolation};
pub use types::{validate, Bond, BondUniverse, Bounds, PortfolioConfig, ScoreTable};

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use simplex_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{CoreResult, SchemaError, SchemaViolation};
    pub use crate::types::{validate, Bond, BondUniverse, Bounds, PortfolioConfig, ScoreTable};
}
