//! Human-readable backend: one line per agent.

use std::io::Write;

use lp_schedule::ScheduledPath;

use crate::writer::PathRenderer;
use crate::OutputResult;

/// Writes lines of the form
///
/// ```text
/// AgentId(0)  steps=7  weight=6.00  delay=0  (0, 0, 0) -> (1, 0, 0) -> … -> (2, 2, 2)
/// ```
///
/// Delayed steps are suffixed with their effective tick, e.g. `(1, 1, 1)@T3`.
pub struct TextRenderer<W: Write> {
    out:      W,
    finished: bool,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PathRenderer for TextRenderer<W> {
    fn render(&mut self, paths: &[ScheduledPath]) -> OutputResult<()> {
        for sp in paths {
            write!(
                self.out,
                "{}  steps={}  weight={:.2}  delay={}  ",
                sp.agent(),
                sp.path().len(),
                sp.path().total_weight(),
                sp.total_delay(),
            )?;
            for (i, (cell, nominal, effective)) in sp.steps().enumerate() {
                if i > 0 {
                    write!(self.out, " -> ")?;
                }
                if effective == nominal {
                    write!(self.out, "{cell}")?;
                } else {
                    write!(self.out, "{cell}@{effective}")?;
                }
            }
            writeln!(self.out)?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}
