//! `lp-schedule` — cell/timestep reservations and conflict resolution.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`reservation`] | `ReservationTable` (`FxHashMap<Cell, BTreeSet<Tick>>`)    |
//! | [`scheduler`]   | `ConflictScheduler`, `Schedule`, `ScheduledPath`          |
//! | [`error`]       | `ScheduleError`, `ScheduleResult<T>`                      |
//!
//! # Delay model (summary)
//!
//! Paths are processed in priority order.  For step `i` of a path at cell `c`:
//!
//! ```text
//! nominal   = i
//! effective = smallest t >= nominal with (c, t) unreserved
//!             (at most nominal + max_delay, else Timeout)
//! reserve (c, effective)
//! ```
//!
//! The search for step `i + 1` starts again from its own nominal index: a
//! delay never carries forward to later steps of the same path, and the
//! cells a path visits are never changed.

pub mod error;
pub mod reservation;
pub mod scheduler;

#[cfg(test)]
mod tests;

pub use error::{ScheduleError, ScheduleResult};
pub use reservation::ReservationTable;
pub use scheduler::{ConflictScheduler, Schedule, ScheduledPath};
