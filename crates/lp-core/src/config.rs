//! Planner configuration.
//!
//! Typically loaded from a TOML file by the application crate (requires the
//! `serde` feature) and handed to the cost-field constructor and the planner.
//! Missing fields fall back to [`PlannerConfig::default`], which reproduces
//! the reference drone scenario: a 101³ grid, 500 obstacle draws with weights
//! in `[5, 10]`, and three agents.

use crate::{AgentRequest, Cell, LpError, LpResult};

/// How obstacle weights are drawn from `[min_cost, max_cost]`.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CostSampling {
    /// Uniform real in `[min_cost, max_cost]`.
    #[default]
    Continuous,
    /// Uniform integer in `[ceil(min_cost), floor(max_cost)]`.
    Integral,
}

/// Top-level planner configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Grid side length N.  Cells are `[0, N)` on every axis.
    pub grid_size: u32,

    /// Number of obstacle draws.  Draws are with replacement, so fewer than
    /// `obstacle_count` distinct cells may end up weighted.
    pub obstacle_count: usize,

    /// Lower bound of the obstacle weight range.
    pub min_cost: f64,

    /// Upper bound of the obstacle weight range.
    pub max_cost: f64,

    pub sampling: CostSampling,

    /// Master RNG seed.  The same seed always produces the same field.
    pub seed: u64,

    /// Maximum number of one-tick delay increments the conflict scheduler
    /// may apply to a single path step before giving up.
    pub max_delay: u64,

    /// Worker thread count for the parallel solve phase.  `None` uses all
    /// logical cores.
    pub num_threads: Option<usize>,

    /// Impassable cells.
    pub blocked: Vec<Cell>,

    /// Agent requests in priority order.
    pub agents: Vec<AgentRequest>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            grid_size:      101,
            obstacle_count: 500,
            min_cost:       5.0,
            max_cost:       10.0,
            sampling:       CostSampling::Continuous,
            seed:           42,
            max_delay:      1_024,
            num_threads:    None,
            blocked:        Vec::new(),
            agents: vec![
                AgentRequest::new((0, 0, 0), (100, 100, 100)),
                AgentRequest::new((20, 30, 40), (80, 90, 60)),
                AgentRequest::new((0, 75, 55), (45, 34, 23)),
            ],
        }
    }
}

impl PlannerConfig {
    /// Total number of lattice cells, N³.
    #[inline]
    pub fn cell_count(&self) -> u64 {
        let n = self.grid_size as u64;
        n * n * n
    }

    /// Check every field for internal consistency.
    ///
    /// Agent endpoints are deliberately *not* checked here: an out-of-bounds
    /// request is a per-agent failure reported by the planner, not a reason
    /// to reject the whole run.
    pub fn validate(&self) -> LpResult<()> {
        if self.grid_size == 0 {
            return Err(LpError::Config("grid_size must be positive".into()));
        }
        // u32::MAX is reserved for CellId::INVALID.
        if self.cell_count() >= u32::MAX as u64 {
            return Err(LpError::Config(format!(
                "grid_size {} is too large: {} cells do not fit a u32 index",
                self.grid_size,
                self.cell_count()
            )));
        }
        if !self.min_cost.is_finite() || !self.max_cost.is_finite() {
            return Err(LpError::Config("cost range must be finite".into()));
        }
        if self.min_cost < 0.0 {
            return Err(LpError::Config(format!(
                "min_cost {} must be non-negative",
                self.min_cost
            )));
        }
        if self.min_cost > self.max_cost {
            return Err(LpError::Config(format!(
                "min_cost {} exceeds max_cost {}",
                self.min_cost, self.max_cost
            )));
        }
        if self.sampling == CostSampling::Integral && self.min_cost.ceil() > self.max_cost.floor() {
            return Err(LpError::Config(format!(
                "cost range [{}, {}] contains no integer",
                self.min_cost, self.max_cost
            )));
        }
        if self.num_threads == Some(0) {
            return Err(LpError::Config("num_threads must be positive".into()));
        }
        if let Some(cell) = self.blocked.iter().find(|c| !c.in_bounds(self.grid_size)) {
            return Err(LpError::Config(format!(
                "blocked cell {cell} is outside the {n}³ grid",
                n = self.grid_size
            )));
        }
        Ok(())
    }
}
