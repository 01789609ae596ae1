//! Per-tick summary output.
//!
//! [`SimOutputObserver`] plugs into `run_ticks` / `run_to_completion` and
//! forwards every [`TickSummary`] to a [`SummaryWriter`].

use std::fs::File;
use std::io::Write;
use std::path::Path;

use pk_sim::{SimObserver, SimulationState, TickSummary};

use crate::row::TickSummaryRow;
use crate::{OutputError, OutputResult};

/// Sink for tick summary rows.
pub trait SummaryWriter {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Writes `tick_summaries.csv`.
pub struct CsvSummaryWriter<W: Write = File> {
    summaries: csv::Writer<W>,
    finished:  bool,
}

impl CsvSummaryWriter<File> {
    /// Create `tick_summaries.csv` in `dir` and write the header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Self::from_writer(File::create(dir.join("tick_summaries.csv"))?)
    }
}

impl<W: Write> CsvSummaryWriter<W> {
    pub fn from_writer(out: W) -> OutputResult<Self> {
        let mut summaries = csv::Writer::from_writer(out);
        summaries.write_record(TickSummaryRow::HEADER)?;
        Ok(Self { summaries, finished: false })
    }
}

impl<W: Write> SummaryWriter for CsvSummaryWriter<W> {
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(row.cells())?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.summaries.flush()?;
        Ok(())
    }
}

/// A [`SimObserver`] writing one row per tick to any [`SummaryWriter`].
///
/// Observer callbacks cannot fail, so write errors are stored and must be
/// checked with [`take_error`][Self::take_error] once the run returns.
pub struct SimOutputObserver<W: SummaryWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: SummaryWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Rows handed to the writer so far.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // First error wins.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: SummaryWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _state: &SimulationState) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
