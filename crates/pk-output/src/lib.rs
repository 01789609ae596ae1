//! `pk-output`: reports and file output for parksim.
//!
//! | Module      | Contents                                                  |
//! |-------------|-----------------------------------------------------------|
//! | [`report`]  | `Report::build`, the record tree behind JSON export       |
//! | [`writer`]  | `ReportWriter`, `JsonReportWriter`, `CsvReportWriter`     |
//! | [`summary`] | `SimOutputObserver`, `CsvSummaryWriter` (`tick_summaries.csv`) |
//! | [`row`]     | flat CSV row types                                        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use pk_output::{CsvSummaryWriter, Report, SimOutputObserver};
//!
//! let mut obs = SimOutputObserver::new(CsvSummaryWriter::new(out_dir)?);
//! sim.run_to_completion(1_000, &mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//!
//! let report = Report::build(&sim);
//! report.export_json(&out_dir.join("record.json"))?;
//! report.export_csv(&out_dir.join("record.csv"))?;
//! ```

pub mod error;
pub mod report;
pub mod row;
pub mod summary;
pub mod writer;


pub use error::{OutputError, OutputResult};
pub use report::{
    ActivityRecord, ActivityRecords, ParkgoerRecord, ParkgoerRecords, ParkgoerSample, PrivilegeGroup,
    ProcessRecord, QueueRecord, Report, StationRecords, Visit,
};
pub use row::{ParkgoerRow, TickSummaryRow, VisitCells};
pub use summary::{CsvSummaryWriter, SimOutputObserver, SummaryWriter};
pub use writer::{CsvReportWriter, JsonReportWriter, ReportWriter};
