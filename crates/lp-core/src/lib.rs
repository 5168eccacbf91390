//! `lp-core` — foundational types for the lattice planner.
//!
//! This crate is a dependency of every other `lp-*` crate.  It intentionally
//! has no `lp-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `CellId`                                   |
//! | [`cell`]        | `Cell` lattice coordinate, `AgentRequest`             |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `PlanRng` (seedable obstacle/placement RNG)           |
//! | [`config`]      | `PlannerConfig`, `CostSampling`                       |
//! | [`error`]       | `LpError`, `LpResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | `Serialize`/`Deserialize` on all public types (needed to load a `PlannerConfig` from TOML) |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::{AgentRequest, Cell};
pub use config::{CostSampling, PlannerConfig};
pub use error::{LpError, LpResult};
pub use ids::{AgentId, CellId};
pub use rng::PlanRng;
pub use time::Tick;
