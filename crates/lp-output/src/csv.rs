//! CSV output backend.
//!
//! [`CsvRenderer::new`] creates `paths.csv` in the output directory with one
//! row per path step:
//!
//! ```text
//! agent_id,step,x,y,z,nominal_tick,effective_tick
//! ```

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;
use lp_schedule::ScheduledPath;

use crate::row::PathStepRow;
use crate::writer::PathRenderer;
use crate::OutputResult;

/// File name used by [`CsvRenderer::new`].
pub const PATHS_FILE: &str = "paths.csv";

const HEADER: [&str; 7] = ["agent_id", "step", "x", "y", "z", "nominal_tick", "effective_tick"];

/// Writes one CSV row per path step.
pub struct CsvRenderer<W: Write = File> {
    rows:     Writer<W>,
    finished: bool,
}

impl CsvRenderer<File> {
    /// Create (or truncate) `dir/paths.csv` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writer_inner(Writer::from_path(dir.join(PATHS_FILE))?)
    }
}

impl<W: Write> CsvRenderer<W> {
    /// Write CSV to an arbitrary sink (stdout, an in-memory buffer, …).
    pub fn from_writer(sink: W) -> OutputResult<Self> {
        Self::from_writer_inner(Writer::from_writer(sink))
    }

    fn from_writer_inner(mut rows: Writer<W>) -> OutputResult<Self> {
        rows.write_record(HEADER)?;
        Ok(Self { rows, finished: false })
    }

    /// Flush and return the underlying sink.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.rows.flush()?;
        self.rows.into_inner().map_err(|e| e.into_error().into())
    }

    fn write_row(&mut self, row: &PathStepRow) -> OutputResult<()> {
        self.rows.write_record(&[
            row.agent_id.to_string(),
            row.step.to_string(),
            row.x.to_string(),
            row.y.to_string(),
            row.z.to_string(),
            row.nominal_tick.to_string(),
            row.effective_tick.to_string(),
        ])?;
        Ok(())
    }
}

impl<W: Write> PathRenderer for CsvRenderer<W> {
    fn render(&mut self, paths: &[ScheduledPath]) -> OutputResult<()> {
        for sp in paths {
            for row in PathStepRow::rows_of(sp) {
                self.write_row(&row)?;
            }
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        Ok(())
    }
}
