use thiserror::Error;

use lp_core::{AgentId, Cell, Tick};

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error(
        "{agent} could not claim cell {cell} within {max_delay} ticks of nominal time {nominal}"
    )]
    Timeout {
        agent:     AgentId,
        cell:      Cell,
        nominal:   Tick,
        max_delay: u64,
    },
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
