//! `lp-output` — renderers for scheduled lattice paths.
//!
//! | Feature   | Backend | Output                                   |
//! |-----------|---------|------------------------------------------|
//! | *(none)*  | CSV     | `paths.csv`, one row per path step       |
//! | *(none)*  | Text    | one line per agent, any `io::Write`      |
//! | `json`    | JSON    | one array of agent records, any `io::Write` |
//!
//! All backends implement [`PathRenderer`].  [`RenderObserver`] plugs any of
//! them into `lp_plan::Planner::run`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use lp_output::{CsvRenderer, RenderObserver};
//!
//! let mut obs = RenderObserver::new(CsvRenderer::new(Path::new("./output"))?);
//! let report = planner.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod text;
pub mod writer;

#[cfg(feature = "json")]
pub mod json;

#[cfg(test)]
mod tests;

pub use csv::CsvRenderer;
pub use error::{OutputError, OutputResult};
pub use observer::RenderObserver;
pub use row::{AgentPathRecord, PathStepRow};
pub use text::TextRenderer;
pub use writer::PathRenderer;

#[cfg(feature = "json")]
pub use json::JsonRenderer;
