//! `ReservationTable` — which timesteps each cell is already claimed at.
//!
//! Built incrementally by [`ConflictScheduler`](crate::ConflictScheduler), one
//! agent at a time in priority order, and scoped to a single `schedule` call.
//!
//! `BTreeSet` keeps each cell's ticks sorted so [`reserved_times`] iterates in
//! time order; the outer map is keyed by `Cell` with FxHash since lattice
//! coordinates are small integers.
//!
//! [`reserved_times`]: ReservationTable::reserved_times

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;

use lp_core::{Cell, Tick};

#[derive(Default, Clone, Debug)]
pub struct ReservationTable {
    inner: FxHashMap<Cell, BTreeSet<Tick>>,
    /// Cached total claim count for O(1) `len()`.
    total: usize,
}

impl ReservationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` if `(cell, tick)` is already claimed.
    #[inline]
    pub fn is_reserved(&self, cell: Cell, tick: Tick) -> bool {
        self.inner.get(&cell).is_some_and(|ticks| ticks.contains(&tick))
    }

    /// Claim `(cell, tick)`.  Returns `false` if it was already claimed.
    pub fn reserve(&mut self, cell: Cell, tick: Tick) -> bool {
        let inserted = self.inner.entry(cell).or_default().insert(tick);
        if inserted {
            self.total += 1;
        }
        inserted
    }

    /// Claimed ticks of `cell` in ascending order.
    pub fn reserved_times(&self, cell: Cell) -> impl Iterator<Item = Tick> + '_ {
        self.inner.get(&cell).into_iter().flat_map(|ticks| ticks.iter().copied())
    }

    /// Total number of `(cell, tick)` claims.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct cells with at least one claim.
    pub fn cell_count(&self) -> usize {
        self.inner.len()
    }
}
