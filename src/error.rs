//! Error types for grid access and construction.

use thiserror::Error;

/// Errors raised by grid access and (re)initialization.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// A write addressed a coordinate outside the grid.
    #[error("cell ({x}, {y}, {z}) is outside the grid")]
    OutOfBounds { x: i32, y: i32, z: i32 },
    /// Horizontal dimensions must both be positive.
    #[error("grid dimensions must be positive, got {size_x} x {size_z}")]
    InvalidDimension { size_x: i32, size_z: i32 },
}

impl GridError {
    /// Status code reported across the C ABI.
    pub fn code(&self) -> i32 {
        match self {
            GridError::OutOfBounds { .. } => 2,
            GridError::InvalidDimension { .. } => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, GridError>;
