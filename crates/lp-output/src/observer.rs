//! `RenderObserver<R>` — bridges `PlanObserver` to a `PathRenderer`.

use lp_plan::{PlanObserver, PlanReport};
use lp_schedule::Schedule;

use crate::writer::PathRenderer;
use crate::{OutputError, OutputResult};

/// A [`PlanObserver`] that hands the scheduled paths to any [`PathRenderer`]
/// and finishes it at the end of the run.
///
/// Errors from the renderer are stored internally because `PlanObserver`
/// methods have no return value.  After `planner.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RenderObserver<R: PathRenderer> {
    renderer:   R,
    last_error: Option<OutputError>,
}

impl<R: PathRenderer> RenderObserver<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer, last_error: None }
    }

    /// Take the stored render error (if any) after `planner.run()` returns.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner renderer (e.g. to inspect its buffer).
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<R: PathRenderer> PlanObserver for RenderObserver<R> {
    fn on_scheduled(&mut self, schedule: &Schedule) {
        let result = self.renderer.render(&schedule.paths);
        self.store_err(result);
    }

    fn on_plan_end(&mut self, _report: &PlanReport) {
        let result = self.renderer.finish();
        self.store_err(result);
    }
}
