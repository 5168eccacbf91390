//! `lp-spatial` — cost field, lattice graph, and routing.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`field`]   | `CostField` (flat per-cell costs), `CostFieldBuilder`       |
//! | [`graph`]   | `LatticeGraph` (implicit 6-connected adjacency)             |
//! | [`router`]  | `Router` trait, `Path`, `DijkstraRouter`, `AStarRouter`     |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize` on `Path` (cells as `[x, y, z]`).        |

pub mod error;
pub mod field;
pub mod graph;
pub mod router;


pub use error::{SpatialError, SpatialResult};
pub use field::{CostField, CostFieldBuilder};
pub use graph::LatticeGraph;
pub use router::{AStarRouter, DijkstraRouter, Path, Router};
