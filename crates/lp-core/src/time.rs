//! Discrete schedule time.
//!
//! A path step's *nominal* time is its index in its own cell sequence; its
//! *effective* time is the (possibly delayed) tick actually reserved for it
//! by the conflict scheduler.  Both are expressed as a `Tick`.

use std::fmt;

/// A discrete timestep counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    /// Ticks elapsed from `earlier` to `self`; 0 if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl From<usize> for Tick {
    #[inline]
    fn from(step: usize) -> Tick {
        Tick(step as u64)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
