//! Planner observer trait for progress reporting and data collection.

use lp_core::AgentId;
use lp_schedule::Schedule;
use lp_spatial::{Path, SpatialError};

use crate::PlanReport;

/// Callbacks invoked by [`Planner::run`][crate::Planner::run] at key points
/// of the pipeline.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Callbacks always arrive on the calling
/// thread in request order, even when the solve phase ran in parallel.
///
/// # Example — failure counter
///
/// ```rust,ignore
/// struct FailureCounter(usize);
///
/// impl PlanObserver for FailureCounter {
///     fn on_agent_failed(&mut self, _agent: AgentId, _error: &SpatialError) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait PlanObserver {
    /// Called once per agent whose route was found, before scheduling.
    fn on_agent_solved(&mut self, _agent: AgentId, _path: &Path) {}

    /// Called once per agent whose route could not be found.
    fn on_agent_failed(&mut self, _agent: AgentId, _error: &SpatialError) {}

    /// Called once after all successful paths were scheduled.
    fn on_scheduled(&mut self, _schedule: &Schedule) {}

    /// Called once with the final report.
    fn on_plan_end(&mut self, _report: &PlanReport) {}
}

/// A [`PlanObserver`] that does nothing.
pub struct NoopObserver;

impl PlanObserver for NoopObserver {}
