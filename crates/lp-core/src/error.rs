//! Framework error type.
//!
//! Sub-crates define their own error enums (`SpatialError`, `ScheduleError`,
//! …) and wrap `LpError` where a configuration problem can surface.

use thiserror::Error;

/// The top-level error type for `lp-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum LpError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `lp-*` crates.
pub type LpResult<T> = Result<T, LpError>;
