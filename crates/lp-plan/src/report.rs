//! Per-run results: one outcome per agent request.

use lp_core::AgentId;
use lp_schedule::{ReservationTable, ScheduledPath};
use lp_spatial::{Path, SpatialError};

/// What happened to one agent request.
#[derive(Debug)]
pub enum AgentOutcome {
    /// A route was found and scheduled.
    Scheduled(ScheduledPath),
    /// No route: out-of-bounds endpoint or unreachable goal.
    Failed(SpatialError),
}

impl AgentOutcome {
    pub fn scheduled(&self) -> Option<&ScheduledPath> {
        match self {
            AgentOutcome::Scheduled(p) => Some(p),
            AgentOutcome::Failed(_)    => None,
        }
    }

    pub fn error(&self) -> Option<&SpatialError> {
        match self {
            AgentOutcome::Scheduled(_) => None,
            AgentOutcome::Failed(e)    => Some(e),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, AgentOutcome::Scheduled(_))
    }
}

/// Partial-success batch result.
///
/// `outcomes[i]` belongs to `AgentId(i)`, i.e. the i-th request.
#[derive(Debug)]
pub struct PlanReport {
    pub outcomes: Vec<AgentOutcome>,

    /// Claims made by the scheduler for the successful agents.
    pub reservations: ReservationTable,
}

impl PlanReport {
    /// Scheduled paths in request order, skipping failed agents.
    pub fn scheduled(&self) -> impl Iterator<Item = &ScheduledPath> + '_ {
        self.outcomes.iter().filter_map(AgentOutcome::scheduled)
    }

    /// `(agent, path)` for every successful agent, in request order.
    pub fn paths(&self) -> impl Iterator<Item = (AgentId, &Path)> + '_ {
        self.scheduled().map(|sp| (sp.agent(), sp.path()))
    }

    /// `(agent, error)` for every failed agent, in request order.
    pub fn failures(&self) -> impl Iterator<Item = (AgentId, &SpatialError)> + '_ {
        self.outcomes
            .iter()
            .enumerate()
            .filter_map(|(i, o)| o.error().map(|e| (AgentId(i as u32), e)))
    }

    pub fn success_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_scheduled()).count()
    }

    pub fn failure_count(&self) -> usize {
        self.outcomes.len() - self.success_count()
    }

    /// One entry per request: `Some(path)` if it was scheduled.
    pub fn into_paths(self) -> Vec<Option<Path>> {
        self.outcomes
            .into_iter()
            .map(|o| match o {
                AgentOutcome::Scheduled(sp) => Some(sp.into_path()),
                AgentOutcome::Failed(_)     => None,
            })
            .collect()
    }
}
