//! Lattice coordinates and agent requests.
//!
//! `Cell` uses signed coordinates so that a candidate one step past the grid
//! boundary (`-1` or `N`) is representable and can be rejected as out of
//! bounds instead of wrapping around.

use std::fmt;

/// The six axis-aligned unit offsets of 6-connectivity, in a fixed order.
pub const AXIS_OFFSETS: [(i32, i32, i32); 6] = [
    (1, 0, 0),
    (-1, 0, 0),
    (0, 1, 0),
    (0, -1, 0),
    (0, 0, 1),
    (0, 0, -1),
];

/// An integer lattice coordinate `(x, y, z)`.
///
/// Ordered lexicographically by `(x, y, z)`.  Serialized as a `[x, y, z]`
/// array so configuration files stay compact.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[i32; 3]", into = "[i32; 3]"))]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Cell {
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The cell displaced by `(dx, dy, dz)`.  No bounds check.
    #[inline]
    pub fn offset(self, dx: i32, dy: i32, dz: i32) -> Cell {
        Cell::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// `true` if every coordinate lies in `[0, side)`.
    #[inline]
    pub fn in_bounds(self, side: u32) -> bool {
        let side = side as i64;
        [self.x, self.y, self.z]
            .iter()
            .all(|&c| (0..side).contains(&(c as i64)))
    }

    /// L1 distance.  Also the minimum number of edges between two cells.
    #[inline]
    pub fn manhattan(self, other: Cell) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) + self.z.abs_diff(other.z)
    }

    /// `true` if `other` differs by exactly one unit along exactly one axis.
    #[inline]
    pub fn is_adjacent(self, other: Cell) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<[i32; 3]> for Cell {
    fn from([x, y, z]: [i32; 3]) -> Self {
        Cell::new(x, y, z)
    }
}

impl From<Cell> for [i32; 3] {
    fn from(c: Cell) -> Self {
        [c.x, c.y, c.z]
    }
}

impl From<(i32, i32, i32)> for Cell {
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Cell::new(x, y, z)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

// ── AgentRequest ──────────────────────────────────────────────────────────────

/// One agent's routing request.  Its priority is its position in the request
/// list (index 0 is never delayed by anyone).
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentRequest {
    pub start: Cell,
    pub goal:  Cell,
}

impl AgentRequest {
    #[inline]
    pub fn new(start: impl Into<Cell>, goal: impl Into<Cell>) -> Self {
        Self { start: start.into(), goal: goal.into() }
    }

    /// `true` if the agent is already at its goal.
    #[inline]
    pub fn is_trivial(&self) -> bool {
        self.start == self.goal
    }
}

impl fmt::Display for AgentRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.goal)
    }
}
