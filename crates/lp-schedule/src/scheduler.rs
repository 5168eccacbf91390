//! Priority-ordered conflict scheduler.

use tracing::{debug, warn};

use lp_core::{AgentId, Cell, Tick};
use lp_spatial::Path;

use crate::{ReservationTable, ScheduleError, ScheduleResult};

// ── ScheduledPath ─────────────────────────────────────────────────────────────

/// One agent's path together with the effective tick reserved for each step.
///
/// `times[i]` is the effective time of `path.cells()[i]`; its nominal time is
/// `i`.  The cells are exactly those of the input path.  Only the scheduler
/// builds these, so `times` always has one entry per cell and no entry is
/// earlier than its nominal time.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledPath {
    agent: AgentId,
    path:  Path,
    times: Vec<Tick>,
}

impl ScheduledPath {
    #[inline]
    pub fn agent(&self) -> AgentId {
        self.agent
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Effective tick of every step, in path order.
    #[inline]
    pub fn times(&self) -> &[Tick] {
        &self.times
    }

    pub fn into_path(self) -> Path {
        self.path
    }

    /// `(cell, nominal, effective)` for every step, in path order.
    pub fn steps(&self) -> impl Iterator<Item = (Cell, Tick, Tick)> + '_ {
        self.path
            .cells()
            .iter()
            .zip(&self.times)
            .enumerate()
            .map(|(i, (&cell, &effective))| (cell, Tick::from(i), effective))
    }

    /// Ticks step `step` was pushed past its nominal time; 0 past the end.
    pub fn delay_at(&self, step: usize) -> u64 {
        self.times.get(step).map_or(0, |t| t.since(Tick::from(step)))
    }

    /// Sum of per-step delays.
    pub fn total_delay(&self) -> u64 {
        (0..self.times.len()).map(|i| self.delay_at(i)).sum()
    }

    /// Largest single-step delay.
    pub fn max_delay(&self) -> u64 {
        (0..self.times.len()).map(|i| self.delay_at(i)).max().unwrap_or(0)
    }

    pub fn is_delayed(&self) -> bool {
        self.total_delay() > 0
    }
}

// ── Schedule ──────────────────────────────────────────────────────────────────

/// The result of one [`ConflictScheduler::schedule`] call.
#[derive(Debug, Clone)]
pub struct Schedule {
    /// Scheduled paths in input (priority) order.
    pub paths: Vec<ScheduledPath>,

    /// Every claim made while scheduling.
    pub reservations: ReservationTable,
}

impl Schedule {
    /// The output paths in input order.  Cells are unchanged.
    pub fn into_paths(self) -> Vec<Path> {
        self.paths.into_iter().map(ScheduledPath::into_path).collect()
    }

    /// Number of agents with at least one delayed step.
    pub fn delayed_agents(&self) -> usize {
        self.paths.iter().filter(|p| p.is_delayed()).count()
    }

    pub fn total_delay(&self) -> u64 {
        self.paths.iter().map(ScheduledPath::total_delay).sum()
    }
}

// ── ConflictScheduler ─────────────────────────────────────────────────────────

/// Resolves same-cell/same-tick conflicts between independently computed
/// paths, giving precedence to earlier paths.
///
/// Holds no state between calls; each call uses a fresh
/// [`ReservationTable`], so scheduling the same input twice yields identical
/// effective times.
///
/// Scheduling is inherently sequential (read-modify-write on one table in a
/// fixed order) and is never parallelized.
#[derive(Copy, Clone, Debug)]
pub struct ConflictScheduler {
    /// Maximum one-tick increments allowed for a single step.
    pub max_delay: u64,
}

impl ConflictScheduler {
    pub fn new(max_delay: u64) -> Self {
        Self { max_delay }
    }

    /// Schedule `paths`; path `i` belongs to `AgentId(i)`.
    pub fn schedule(&self, paths: &[Path]) -> ScheduleResult<Schedule> {
        self.schedule_agents(
            paths
                .iter()
                .enumerate()
                .map(|(i, p)| (AgentId(i as u32), p)),
        )
    }

    /// Schedule `(agent, path)` pairs in iteration order.
    ///
    /// Used when some agents were dropped upstream (e.g. no route) so that
    /// errors still name the original agent.  A `Timeout` aborts the whole
    /// call; agents after the failing one are not scheduled.
    pub fn schedule_agents<'p, I>(&self, paths: I) -> ScheduleResult<Schedule>
    where
        I: IntoIterator<Item = (AgentId, &'p Path)>,
    {
        let mut table = ReservationTable::new();
        let mut out = Vec::new();

        for (agent, path) in paths {
            let times = self.claim_path(&mut table, agent, path)?;
            let scheduled = ScheduledPath { agent, path: path.clone(), times };
            if scheduled.is_delayed() {
                debug!(
                    %agent,
                    total_delay = scheduled.total_delay(),
                    max_delay = scheduled.max_delay(),
                    "path steps delayed"
                );
            }
            out.push(scheduled);
        }

        Ok(Schedule { paths: out, reservations: table })
    }

    /// Reserve one effective tick per step of `path`.
    ///
    /// Each step searches forward from its own nominal index; delays do not
    /// cascade to later steps.
    fn claim_path(
        &self,
        table: &mut ReservationTable,
        agent: AgentId,
        path:  &Path,
    ) -> ScheduleResult<Vec<Tick>> {
        let mut times = Vec::with_capacity(path.len());
        for (step, &cell) in path.cells().iter().enumerate() {
            let nominal = Tick::from(step);
            let mut t = nominal;
            while table.is_reserved(cell, t) {
                if t.since(nominal) >= self.max_delay {
                    warn!(%agent, %cell, %nominal, max_delay = self.max_delay, "scheduling timed out");
                    return Err(ScheduleError::Timeout {
                        agent,
                        cell,
                        nominal,
                        max_delay: self.max_delay,
                    });
                }
                t = t + 1;
            }
            table.reserve(cell, t);
            times.push(t);
        }
        Ok(times)
    }
}

impl Default for ConflictScheduler {
    fn default() -> Self {
        Self::new(1_024)
    }
}
