//! Routing trait and the default Dijkstra implementation.
//!
//! # Pluggability
//!
//! `lp-plan` calls routing via the [`Router`] trait, so applications can swap
//! in custom implementations without touching the pipeline.  The default
//! [`DijkstraRouter`] is the reference; [`AStarRouter`] returns paths of the
//! same total weight while expanding fewer cells on large grids.
//!
//! # Determinism
//!
//! The frontier is a min-heap keyed by `(priority, CellId)`.  Equal-priority
//! candidates are therefore expanded in ascending flat-index order, and the
//! same field, start, and goal always yield the same path.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ordered_float::OrderedFloat;
use tracing::debug;

use lp_core::{Cell, CellId};

use crate::{LatticeGraph, SpatialError, SpatialResult};

// ── Path ──────────────────────────────────────────────────────────────────────

/// A non-empty sequence of cells where consecutive entries are adjacent.
///
/// Serialize-only: a `Path` can only be built through routing or
/// [`from_cells`](Self::from_cells), never decoded.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Path {
    cells:        Vec<Cell>,
    total_weight: f64,
}

impl Path {
    /// The one-cell path `[cell]` with weight 0.
    pub fn single(cell: Cell) -> Self {
        Self { cells: vec![cell], total_weight: 0.0 }
    }

    /// Validate `cells` against `graph` and compute the total weight.
    ///
    /// Fails with `EmptyPath`, `OutOfBounds`, `NotAdjacent`, or `Blocked`.
    pub fn from_cells(graph: &LatticeGraph<'_>, cells: Vec<Cell>) -> SpatialResult<Self> {
        let total_weight = Self::weigh(graph, &cells)?;
        Ok(Self { cells, total_weight })
    }

    /// Sum of consecutive edge weights along `cells`.
    pub fn weigh(graph: &LatticeGraph<'_>, cells: &[Cell]) -> SpatialResult<f64> {
        let Some(&first) = cells.first() else {
            return Err(SpatialError::EmptyPath);
        };
        graph.field().id_of(first)?;
        cells
            .windows(2)
            .map(|pair| graph.edge_weight(pair[0], pair[1]))
            .sum()
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Sum of edge weights from start to goal.
    #[inline]
    pub fn total_weight(&self) -> f64 {
        self.total_weight
    }

    #[inline]
    pub fn start(&self) -> Cell {
        self.cells[0]
    }

    #[inline]
    pub fn goal(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Number of cells (≥ 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a path holds at least its start cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn edge_count(&self) -> usize {
        self.cells.len() - 1
    }

    /// `true` if start and goal coincide.
    pub fn is_trivial(&self) -> bool {
        self.cells.len() == 1
    }

    /// `true` if every consecutive pair differs by one unit on one axis.
    pub fn is_connected(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

// ── Router trait ──────────────────────────────────────────────────────────────

/// Pluggable shortest-path engine.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so one router can be shared across
/// Rayon workers while agents are solved in parallel.
pub trait Router: Send + Sync {
    /// Compute a minimum-weight path from `from` to `to`.
    ///
    /// `from == to` yields the single-cell path.  Out-of-range endpoints fail
    /// with `OutOfBounds`; an unreachable goal fails with `NoPath` and no
    /// partial path.
    fn route(&self, graph: &LatticeGraph<'_>, from: Cell, to: Cell) -> SpatialResult<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Dijkstra's algorithm over the implicit lattice graph.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl Router for DijkstraRouter {
    fn route(&self, graph: &LatticeGraph<'_>, from: Cell, to: Cell) -> SpatialResult<Path> {
        search(graph, from, to, |_| 0.0)
    }
}

// ── AStarRouter ───────────────────────────────────────────────────────────────

/// A* with the Manhattan distance as heuristic.
///
/// Every edge weighs at least 1 and a unit step changes the Manhattan
/// distance by exactly 1, so the heuristic is consistent and the first time
/// the goal is settled its weight is optimal.
#[derive(Copy, Clone, Debug, Default)]
pub struct AStarRouter;

impl Router for AStarRouter {
    fn route(&self, graph: &LatticeGraph<'_>, from: Cell, to: Cell) -> SpatialResult<Path> {
        search(graph, from, to, |c| c.manhattan(to) as f64)
    }
}

// ── Search internals ──────────────────────────────────────────────────────────

fn search<H>(graph: &LatticeGraph<'_>, from: Cell, to: Cell, heuristic: H) -> SpatialResult<Path>
where
    H: Fn(Cell) -> f64,
{
    let field = graph.field();
    let src = field.id_of(from)?;
    let dst = field.id_of(to)?;

    if from == to {
        return Ok(Path::single(from));
    }
    if field.blocked_at(src) || field.blocked_at(dst) {
        return Err(SpatialError::NoPath { from, to });
    }

    let n = field.cell_count();
    // dist[v] = best known accumulated weight to reach v.
    let mut dist    = vec![f64::INFINITY; n];
    // prev[v] = predecessor on the best known path; INVALID for unreached cells.
    let mut prev    = vec![CellId::INVALID; n];
    let mut settled = vec![false; n];

    dist[src.index()] = 0.0;

    // Min-heap: (priority, cell).  Reverse makes BinaryHeap (max) behave as
    // min-heap; the CellId secondary key gives deterministic tie-breaking.
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, CellId)>> = BinaryHeap::new();
    heap.push(Reverse((OrderedFloat(heuristic(from)), src)));
    let mut expanded = 0usize;

    while let Some(Reverse((_, node))) = heap.pop() {
        if settled[node.index()] {
            continue;
        }
        settled[node.index()] = true;
        expanded += 1;

        if node == dst {
            let path = reconstruct(graph, &prev, src, dst, dist[dst.index()]);
            debug!(%from, %to, weight = path.total_weight(), cells = path.len(), expanded, "route found");
            return Ok(path);
        }

        let cost = dist[node.index()];
        for (neighbor, weight) in graph.neighbor_ids(node) {
            if settled[neighbor.index()] {
                continue;
            }
            let new_cost = cost + weight;
            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                prev[neighbor.index()] = node;
                let priority = new_cost + heuristic(field.cell_of(neighbor));
                heap.push(Reverse((OrderedFloat(priority), neighbor)));
            }
        }
    }

    debug!(%from, %to, expanded, "goal unreachable");
    Err(SpatialError::NoPath { from, to })
}

fn reconstruct(
    graph:  &LatticeGraph<'_>,
    prev:   &[CellId],
    src:    CellId,
    dst:    CellId,
    weight: f64,
) -> Path {
    let field = graph.field();
    let mut cells = vec![field.cell_of(dst)];
    let mut cur = dst;
    while cur != src {
        cur = prev[cur.index()];
        cells.push(field.cell_of(cur));
    }
    cells.reverse();
    Path { cells, total_weight: weight }
}
