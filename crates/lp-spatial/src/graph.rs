//! Implicit 6-connected lattice graph over a [`CostField`].
//!
//! No edge is ever stored.  Neighbors are generated on demand from the six
//! axis-aligned unit offsets, and each edge weight is derived from the two
//! endpoint costs:
//!
//! ```text
//! weight(u, v) = 1 + cost(u) + cost(v)
//! ```
//!
//! The weight is symmetric and never below 1, so there are no zero-weight
//! cycles and Dijkstra's greedy relaxation stays correct.  Blocked cells have
//! no edges at all; boundary cells simply have fewer than six neighbors.

use lp_core::cell::AXIS_OFFSETS;
use lp_core::{Cell, CellId};

use crate::{CostField, SpatialError, SpatialResult};

/// Borrowed, zero-cost adjacency view of a [`CostField`].
///
/// `Copy`, so it can be handed to every routing worker without cloning the
/// field.
#[derive(Copy, Clone)]
pub struct LatticeGraph<'a> {
    field: &'a CostField,
}

impl<'a> LatticeGraph<'a> {
    pub fn new(field: &'a CostField) -> Self {
        Self { field }
    }

    #[inline]
    pub fn field(&self) -> &'a CostField {
        self.field
    }

    /// Up to six `(neighbor, edge_weight)` pairs for `cell`.
    ///
    /// Fails only if `cell` itself is out of bounds.  Candidates beyond the
    /// grid boundary and blocked cells are skipped; a blocked `cell` yields
    /// nothing.
    pub fn neighbors(&self, cell: Cell) -> SpatialResult<impl Iterator<Item = (Cell, f64)> + use<'a>> {
        let id = self.field.id_of(cell)?;
        let field = self.field;
        Ok(self.neighbor_ids(id).map(move |(n, w)| (field.cell_of(n), w)))
    }

    /// Number of passable neighbors of `cell`.
    pub fn degree(&self, cell: Cell) -> SpatialResult<usize> {
        Ok(self.neighbors(cell)?.count())
    }

    /// Weight of the edge `u — v`.
    ///
    /// `OutOfBounds` if either endpoint is outside the grid, `NotAdjacent` if
    /// the two cells are not one axis-aligned unit step apart, `Blocked` if
    /// either endpoint is impassable.
    pub fn edge_weight(&self, u: Cell, v: Cell) -> SpatialResult<f64> {
        let ui = self.field.id_of(u)?;
        let vi = self.field.id_of(v)?;
        if !u.is_adjacent(v) {
            return Err(SpatialError::NotAdjacent { from: u, to: v });
        }
        for (cell, id) in [(u, ui), (v, vi)] {
            if self.field.blocked_at(id) {
                return Err(SpatialError::Blocked(cell));
            }
        }
        Ok(self.weight_between(ui, vi))
    }

    // ── Index-level traversal (hot path) ──────────────────────────────────

    #[inline]
    fn weight_between(&self, u: CellId, v: CellId) -> f64 {
        1.0 + self.field.cost_at(u) + self.field.cost_at(v)
    }

    /// Index-level neighbor iterator used by the routers.  `id` must be a
    /// valid index into this graph's field.
    pub(crate) fn neighbor_ids(&self, id: CellId) -> impl Iterator<Item = (CellId, f64)> + use<'a> {
        let graph = *self;
        let field = self.field;
        let origin = field.cell_of(id);
        let passable = !field.blocked_at(id);

        AXIS_OFFSETS
            .into_iter()
            .filter(move |_| passable)
            .map(move |(dx, dy, dz)| origin.offset(dx, dy, dz))
            .filter_map(move |c| field.id_of(c).ok())
            .filter(move |&n| !field.blocked_at(n))
            .map(move |n| (n, graph.weight_between(id, n)))
    }
}
