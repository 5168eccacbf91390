//! The `PathRenderer` trait implemented by all backends.

use lp_schedule::ScheduledPath;

use crate::OutputResult;

/// The rendering collaborator: receives the final paths and decides how they
/// are displayed or persisted.
///
/// `render` may be called more than once; backends append.
pub trait PathRenderer {
    /// Render a batch of scheduled paths, in priority order.
    fn render(&mut self, paths: &[ScheduledPath]) -> OutputResult<()>;

    /// Flush and close the underlying sink.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
