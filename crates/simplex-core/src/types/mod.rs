//! Core data types: bonds, the validated universe, configuration and
//! injected score tables.

mod bond;
mod config;
mod scales;
mod universe;

pub use bond::Bond;
pub use config::{Bounds, PortfolioConfig};
pub use scales::ScoreTable;
pub use universe::{validate, BondUniverse};
