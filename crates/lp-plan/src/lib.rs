//! `lp-plan` — pipeline orchestrator for the lattice planner.
//!
//! # Pipeline
//!
//! ```text
//! CostField ──► LatticeGraph ──► Router::route   (once per agent, independent)
//!                                     │
//!                                     ▼
//!                         ConflictScheduler::schedule   (once, priority order)
//!                                     │
//!                                     ▼
//!                                PlanReport
//! ```
//!
//! ① **Solve** — every `AgentRequest` is routed independently (in parallel
//!   with the `parallel` feature).  A failure is recorded for that agent and
//!   never blocks the others.
//! ② **Schedule** — the successful paths are scheduled in request order.  A
//!   scheduler timeout is fatal for the whole batch.
//! ③ **Report** — one `AgentOutcome` per request, in request order.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the solve phase on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use lp_core::PlannerConfig;
//! use lp_plan::{NoopObserver, PlannerBuilder};
//! use lp_spatial::DijkstraRouter;
//!
//! let planner = PlannerBuilder::new(config, DijkstraRouter).build()?;
//! let report = planner.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod planner;
pub mod report;


pub use builder::PlannerBuilder;
pub use error::{PlanError, PlanResult};
pub use observer::{NoopObserver, PlanObserver};
pub use planner::Planner;
pub use report::{AgentOutcome, PlanReport};
