//! Spatial-subsystem error type.

use thiserror::Error;

use lp_core::{Cell, LpError};

/// Errors produced by `lp-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("cell {cell} is outside the {side}³ grid")]
    OutOfBounds { cell: Cell, side: u32 },

    #[error("no path from {from} to {to}")]
    NoPath { from: Cell, to: Cell },

    #[error("cells {from} and {to} are not adjacent")]
    NotAdjacent { from: Cell, to: Cell },

    #[error("cell {0} is impassable")]
    Blocked(Cell),

    #[error("invalid cost {cost} for cell {cell}: must be finite and non-negative")]
    InvalidCost { cell: Cell, cost: f64 },

    #[error("a path must contain at least one cell")]
    EmptyPath,

    #[error(transparent)]
    Config(#[from] LpError),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
