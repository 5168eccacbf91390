//! JSON backend (feature `json`).
//!
//! Records are buffered by `render` and written as one pretty-printed array
//! by `finish`.

use std::io::Write;

use lp_schedule::ScheduledPath;

use crate::row::AgentPathRecord;
use crate::writer::PathRenderer;
use crate::OutputResult;

pub struct JsonRenderer<W: Write> {
    out:      W,
    records:  Vec<AgentPathRecord>,
    finished: bool,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, records: Vec::new(), finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> PathRenderer for JsonRenderer<W> {
    fn render(&mut self, paths: &[ScheduledPath]) -> OutputResult<()> {
        self.records.extend(paths.iter().map(AgentPathRecord::from));
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        serde_json::to_writer_pretty(&mut self.out, &self.records)?;
        writeln!(self.out)?;
        self.out.flush()?;
        Ok(())
    }
}
