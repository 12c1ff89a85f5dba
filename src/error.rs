//! Simulation error types.

use thiserror::Error;

/// Errors raised while configuring or constructing a simulation.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Grid needs at least one row and one column.
    #[error("invalid dimensions {rows}x{columns}: need at least one row and one column")]
    InvalidDimension { rows: i64, columns: i64 },

    /// Seed count outside `0..=rows*columns`.
    #[error("invalid seed count {seeds}: must be between 0 and {capacity}")]
    InvalidSeedCount { seeds: i64, capacity: i64 },

    /// Command-line argument that does not parse.
    #[error("invalid value for {name}: {value:?}")]
    InvalidArgument { name: &'static str, value: String },

    /// OS entropy source failed.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] getrandom::Error),
}
