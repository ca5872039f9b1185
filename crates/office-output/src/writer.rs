//! The `TraceWriter` trait implemented by trace backends.

use crate::{ArrivalRow, OutputResult, PoseRow};

/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with `take_error`.
pub trait TraceWriter {
    fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()>;

    fn write_arrival(&mut self, row: &ArrivalRow) -> OutputResult<()>;

    /// Flush and close.  Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
