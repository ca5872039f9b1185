//! `office-output`: motion trace writers.
//!
//! | Type               | Role                                          |
//! |--------------------|-----------------------------------------------|
//! | [`TraceWriter`]    | backend trait                                 |
//! | [`CsvTraceWriter`] | `agent_poses.csv` + `arrivals.csv`            |
//! | [`TraceObserver`]  | `SessionObserver` that feeds a `TraceWriter`  |
//!
//! # Usage
//!
//! ```rust,ignore
//! use office_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut obs = TraceObserver::new(writer, 6); // every 6th frame
//! for _ in 0..frames {
//!     session.tick(1.0 / 60.0, &mut obs);
//! }
//! session.finish(&mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("trace error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{ArrivalRow, PoseRow};
pub use writer::TraceWriter;
