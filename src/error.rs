// error.rs - Error types for configuration and display

use thiserror::Error;

/// Raised when run parameters or an explicit lattice are out of range.
///
/// Every check happens before the sampler starts; the Metropolis loop itself
/// has no failure modes.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("lattice size must be positive, got {0}")]
    ZeroSize(usize),

    #[error("initial-state probability must lie in [0, 1], got {0}")]
    Threshold(f64),

    #[error("exchange constant must be finite and nonzero, got {0}")]
    Coupling(f64),

    #[error("inverse temperature must be finite and non-negative, got {0}")]
    Beta(f64),

    #[error("{field} must be positive")]
    ZeroDisplay { field: &'static str },

    #[error("lattice rows must form a square grid: row {row} has {len} cells, expected {expected}")]
    NotSquare { row: usize, len: usize, expected: usize },

    #[error("spin at ({row}, {col}) is {value}, expected +1 or -1")]
    BadSpin { row: usize, col: usize, value: i8 },
}

/// Failures of the visualization collaborator.
#[derive(Debug, Error)]
pub enum DisplayError {
    #[error("no frames to display")]
    NoFrames,

    #[error("display frame count must be positive")]
    NoDisplayFrames,

    #[error("i/o error while rendering: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error while writing trace: {0}")]
    Csv(#[from] csv::Error),
}
