//! The `ReportWriter` trait and its JSON and CSV backends.

use std::io::Write;

use crate::row::ParkgoerRow;
use crate::{OutputResult, Report};

/// Serializes a finished [`Report`] to some sink.
pub trait ReportWriter {
    fn write_report(&mut self, report: &Report) -> OutputResult<()>;

    /// Flush the underlying sink.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}

// ── JSON ──────────────────────────────────────────────────────────────────────

/// Writes the whole report as one JSON document.
pub struct JsonReportWriter<W: Write> {
    out:      W,
    pretty:   bool,
    finished: bool,
}

impl<W: Write> JsonReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, pretty: false, finished: false }
    }

    /// Indent the output.
    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for JsonReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> OutputResult<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, report)?;
        } else {
            serde_json::to_writer(&mut self.out, report)?;
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

// ── CSV ───────────────────────────────────────────────────────────────────────

/// Writes one row per parkgoer, exited first, then still in the park.
///
/// Columns: `id, people, privileges, spawned_at, exited, free, wait, busy`,
/// then `<label>_waited, <label>_served` for every activity in tick order.
pub struct CsvReportWriter<W: Write> {
    out:      csv::Writer<W>,
    finished: bool,
}

impl<W: Write> CsvReportWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out: csv::Writer::from_writer(out), finished: false }
    }
}

impl<W: Write> ReportWriter for CsvReportWriter<W> {
    fn write_report(&mut self, report: &Report) -> OutputResult<()> {
        let columns = || report.activities.iter();
        self.out.write_record(ParkgoerRow::header(columns()))?;

        let exited = report.parkgoers.exited.iter().map(|r| (r, true));
        let ongoing = report.parkgoers.ongoing.iter().map(|r| (r, false));
        for (record, has_exited) in exited.chain(ongoing) {
            let row = ParkgoerRow::new(record, has_exited, columns());
            self.out.write_record(row.cells())?;
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
