//! The `Planner` struct and its solve-then-schedule pipeline.

use tracing::{info, warn};

use lp_core::{AgentId, AgentRequest, PlannerConfig};
use lp_schedule::ConflictScheduler;
use lp_spatial::{CostField, LatticeGraph, Path, Router, SpatialError, SpatialResult};

use crate::{AgentOutcome, PlanObserver, PlanReport, PlanResult};

/// The batch runner.
///
/// Holds the immutable cost field, the router, and the prioritized request
/// list.  [`run`](Self::run) can be called any number of times; each call is
/// independent and produces the same report.
///
/// Create via [`PlannerBuilder`][crate::PlannerBuilder].
pub struct Planner<R: Router> {
    /// Validated configuration (delay cap, thread count, …).
    pub config: PlannerConfig,

    /// Read-only cost landscape shared by every routing query.
    pub field: CostField,

    /// The routing algorithm.  Called once per agent.
    pub router: R,

    /// Agent requests in priority order.
    pub requests: Vec<AgentRequest>,
}

impl<R: Router> Planner<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Solve every request, schedule the successes, and report.
    ///
    /// Per-agent routing failures end up in the report.  Only a scheduler
    /// timeout (or a thread-pool failure) makes the whole run fail.
    pub fn run<O: PlanObserver>(&self, observer: &mut O) -> PlanResult<PlanReport> {
        info!(
            agents = self.requests.len(),
            side = self.field.side(),
            "planning"
        );

        // ── Phase 1: independent shortest paths ───────────────────────────
        let routes = self.solve_all()?;

        let mut solved: Vec<(AgentId, Path)> = Vec::with_capacity(routes.len());
        let mut failed: Vec<(AgentId, SpatialError)> = Vec::new();
        for (i, route) in routes.into_iter().enumerate() {
            let agent = AgentId(i as u32);
            match route {
                Ok(path) => {
                    observer.on_agent_solved(agent, &path);
                    solved.push((agent, path));
                }
                Err(e) => {
                    warn!(%agent, request = %self.requests[i], error = %e, "no route");
                    observer.on_agent_failed(agent, &e);
                    failed.push((agent, e));
                }
            }
        }

        // ── Phase 2: conflict resolution in priority order ────────────────
        let scheduler = ConflictScheduler::new(self.config.max_delay);
        let schedule = scheduler.schedule_agents(solved.iter().map(|(a, p)| (*a, p)))?;
        observer.on_scheduled(&schedule);

        info!(
            scheduled = schedule.paths.len(),
            failed = failed.len(),
            delayed = schedule.delayed_agents(),
            total_delay = schedule.total_delay(),
            "plan complete"
        );

        // ── Phase 3: merge back into request order ────────────────────────
        let mut merged: Vec<(AgentId, AgentOutcome)> = schedule
            .paths
            .into_iter()
            .map(|sp| (sp.agent(), AgentOutcome::Scheduled(sp)))
            .chain(failed.into_iter().map(|(a, e)| (a, AgentOutcome::Failed(e))))
            .collect();
        merged.sort_by_key(|(agent, _)| *agent);
        let outcomes = merged.into_iter().map(|(_, o)| o).collect();

        let report = PlanReport { outcomes, reservations: schedule.reservations };
        observer.on_plan_end(&report);
        Ok(report)
    }

    /// Route every request independently, in request order.
    ///
    /// With the `parallel` feature the requests are distributed over Rayon's
    /// pool (or a dedicated pool of `config.num_threads` workers); the result
    /// order is the same either way.
    pub fn solve_all(&self) -> PlanResult<Vec<SpatialResult<Path>>> {
        let graph = LatticeGraph::new(&self.field);
        let router = &self.router;

        #[cfg(not(feature = "parallel"))]
        {
            Ok(self
                .requests
                .iter()
                .map(|req| router.route(&graph, req.start, req.goal))
                .collect())
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            let solve = || {
                self.requests
                    .par_iter()
                    .map(|req| router.route(&graph, req.start, req.goal))
                    .collect::<Vec<_>>()
            };

            match self.config.num_threads {
                Some(n) => {
                    let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                    Ok(pool.install(solve))
                }
                None => Ok(solve()),
            }
        }
    }

    /// Route a single request.
    pub fn solve(&self, request: AgentRequest) -> SpatialResult<Path> {
        let graph = LatticeGraph::new(&self.field);
        self.router.route(&graph, request.start, request.goal)
    }
}
