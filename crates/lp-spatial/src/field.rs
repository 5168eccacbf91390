//! Per-cell traversal costs and their builder.
//!
//! # Data layout
//!
//! Costs live in one flat `Vec<f64>` indexed by `CellId`:
//!
//! ```text
//! id = x + y*N + z*N²
//! ```
//!
//! so a cell lookup is two multiplies and a bounds check, with no per-cell
//! allocation and no hashing.  A parallel `Vec<bool>` marks impassable cells.
//! Both arrays are immutable once [`CostFieldBuilder::build`] returns.

use lp_core::{Cell, CellId, CostSampling, LpError, PlanRng, PlannerConfig};
use tracing::info;

use crate::{SpatialError, SpatialResult};

// ── CostField ─────────────────────────────────────────────────────────────────

/// Read-only traversal-cost landscape over an `N × N × N` lattice.
///
/// Every in-bounds cell has a finite, non-negative cost (0 unless an obstacle
/// or an explicit cost was placed there).  Do not construct directly; use
/// [`CostFieldBuilder`] or [`CostField::from_config`].
#[derive(Clone, Debug)]
pub struct CostField {
    side:    u32,
    costs:   Vec<f64>,
    blocked: Vec<bool>,
}

impl CostField {
    /// A field of side `side` where every cell costs 0.
    pub fn uniform(side: u32) -> Self {
        CostFieldBuilder::new(side).build()
    }

    /// Build the field described by `config`: blocked cells first, then
    /// `obstacle_count` random obstacle draws from `rng`.
    pub fn from_config(config: &PlannerConfig, rng: &mut PlanRng) -> SpatialResult<Self> {
        config.validate()?;

        let mut b = CostFieldBuilder::new(config.grid_size);
        for &cell in &config.blocked {
            b.block(cell)?;
        }
        b.scatter_obstacles(
            rng,
            config.obstacle_count,
            config.min_cost,
            config.max_cost,
            config.sampling,
        )?;
        let field = b.build();

        info!(
            side = field.side(),
            cells = field.cell_count(),
            weighted = field.weighted_count(),
            blocked = field.blocked_count(),
            "cost field built"
        );
        Ok(field)
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    /// Grid side length N.
    #[inline]
    pub fn side(&self) -> u32 {
        self.side
    }

    /// N³.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.costs.len()
    }

    #[inline]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.in_bounds(self.side)
    }

    // ── Index arithmetic ──────────────────────────────────────────────────

    /// Flat index of `cell`, or `OutOfBounds`.
    #[inline]
    pub fn id_of(&self, cell: Cell) -> SpatialResult<CellId> {
        if !self.contains(cell) {
            return Err(SpatialError::OutOfBounds { cell, side: self.side });
        }
        let n = self.side;
        Ok(CellId(cell.x as u32 + cell.y as u32 * n + cell.z as u32 * n * n))
    }

    /// Inverse of [`id_of`](Self::id_of).  `id` must come from this field.
    #[inline]
    pub fn cell_of(&self, id: CellId) -> Cell {
        let n = self.side;
        Cell::new(
            (id.0 % n) as i32,
            ((id.0 / n) % n) as i32,
            (id.0 / (n * n)) as i32,
        )
    }

    // ── Cost queries ──────────────────────────────────────────────────────

    /// Traversal cost of `cell`.  Always finite and `>= 0`.
    #[inline]
    pub fn cost(&self, cell: Cell) -> SpatialResult<f64> {
        self.id_of(cell).map(|id| self.costs[id.index()])
    }

    /// `true` if `cell` is impassable.
    #[inline]
    pub fn is_blocked(&self, cell: Cell) -> SpatialResult<bool> {
        self.id_of(cell).map(|id| self.blocked[id.index()])
    }

    #[inline]
    pub(crate) fn cost_at(&self, id: CellId) -> f64 {
        self.costs[id.index()]
    }

    #[inline]
    pub(crate) fn blocked_at(&self, id: CellId) -> bool {
        self.blocked[id.index()]
    }

    /// Number of cells with a strictly positive cost.
    pub fn weighted_count(&self) -> usize {
        self.costs.iter().filter(|&&c| c > 0.0).count()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

// ── CostFieldBuilder ──────────────────────────────────────────────────────────

/// Construct a [`CostField`] incrementally, then call [`build`](Self::build).
///
/// Explicit costs, blocked cells, and random obstacles may be added in any
/// order; a later assignment to the same cell overwrites an earlier one.
///
/// # Example
///
/// ```
/// use lp_core::{Cell, CostSampling, PlanRng};
/// use lp_spatial::CostFieldBuilder;
///
/// let mut b = CostFieldBuilder::new(8);
/// b.set_cost(Cell::new(1, 1, 1), 4.0).unwrap();
/// b.scatter_obstacles(&mut PlanRng::new(7), 10, 5.0, 10.0, CostSampling::Continuous).unwrap();
/// let field = b.build();
/// assert_eq!(field.cell_count(), 512);
/// ```
pub struct CostFieldBuilder {
    side:    u32,
    costs:   Vec<f64>,
    blocked: Vec<bool>,
}

impl CostFieldBuilder {
    /// Start from an all-zero field of side `side`.
    ///
    /// `side` must satisfy `side³ < u32::MAX`; [`PlannerConfig::validate`]
    /// checks this for configuration-driven construction.
    pub fn new(side: u32) -> Self {
        let n = side as usize;
        Self {
            side,
            costs:   vec![0.0; n * n * n],
            blocked: vec![false; n * n * n],
        }
    }

    fn index(&self, cell: Cell) -> SpatialResult<usize> {
        if !cell.in_bounds(self.side) {
            return Err(SpatialError::OutOfBounds { cell, side: self.side });
        }
        let n = self.side as usize;
        Ok(cell.x as usize + cell.y as usize * n + cell.z as usize * n * n)
    }

    /// Assign an explicit cost to one cell.
    pub fn set_cost(&mut self, cell: Cell, cost: f64) -> SpatialResult<()> {
        if !cost.is_finite() || cost < 0.0 {
            return Err(SpatialError::InvalidCost { cell, cost });
        }
        let i = self.index(cell)?;
        self.costs[i] = cost;
        Ok(())
    }

    /// Mark `cell` impassable.  Its cost is left untouched.
    pub fn block(&mut self, cell: Cell) -> SpatialResult<()> {
        let i = self.index(cell)?;
        self.blocked[i] = true;
        Ok(())
    }

    /// Draw `count` cells uniformly at random (with replacement) and give
    /// each a weight drawn uniformly from `[lo, hi]`.
    pub fn scatter_obstacles(
        &mut self,
        rng:      &mut PlanRng,
        count:    usize,
        lo:       f64,
        hi:       f64,
        sampling: CostSampling,
    ) -> SpatialResult<()> {
        if !(lo.is_finite() && hi.is_finite() && lo >= 0.0 && lo <= hi) {
            return Err(LpError::Config(format!("invalid obstacle cost range [{lo}, {hi}]")).into());
        }
        let (int_lo, int_hi) = (lo.ceil() as i64, hi.floor() as i64);
        if sampling == CostSampling::Integral && int_lo > int_hi {
            return Err(LpError::Config(format!("cost range [{lo}, {hi}] contains no integer")).into());
        }
        if self.side == 0 {
            return Ok(());
        }

        let side = self.side as i32;
        for _ in 0..count {
            let cell = Cell::new(
                rng.gen_range(0..side),
                rng.gen_range(0..side),
                rng.gen_range(0..side),
            );
            let weight = match sampling {
                CostSampling::Continuous => rng.gen_range(lo..=hi),
                CostSampling::Integral   => rng.gen_range(int_lo..=int_hi) as f64,
            };
            let i = self.index(cell)?;
            self.costs[i] = weight;
        }
        Ok(())
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    /// Consume the builder and produce an immutable [`CostField`].
    pub fn build(self) -> CostField {
        CostField {
            side:    self.side,
            costs:   self.costs,
            blocked: self.blocked,
        }
    }
}
