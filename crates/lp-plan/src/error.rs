use lp_core::{Cell, LpError};
use lp_schedule::ScheduleError;
use lp_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(transparent)]
    Config(#[from] LpError),

    #[error("cost field side {got} does not match configured grid_size {expected}")]
    FieldSizeMismatch { expected: u32, got: u32 },

    #[error("configured wall {cell} is passable in the supplied cost field")]
    WallNotBlocked { cell: Cell },

    #[error("cost field construction failed: {0}")]
    Field(#[from] SpatialError),

    #[error("scheduling aborted: {0}")]
    Schedule(#[from] ScheduleError),

    #[cfg(feature = "parallel")]
    #[error("could not build solver thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

pub type PlanResult<T> = Result<T, PlanError>;
