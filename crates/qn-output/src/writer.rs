//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, PoolSummaryRow, WaitSampleRow};

/// Trait implemented by output backends.
///
/// Errors are stored by [`SimOutputObserver`][crate::SimOutputObserver] and
/// retrieved with `take_error` after the run.
pub trait OutputWriter {
    /// Write a batch of completion samples.
    fn write_samples(&mut self, rows: &[WaitSampleRow]) -> OutputResult<()>;

    /// Write one row per pool.
    fn write_pool_summaries(&mut self, rows: &[PoolSummaryRow]) -> OutputResult<()>;

    /// Flush all underlying file handles.
    ///
    /// Idempotent.
    fn finish(&mut self) -> OutputResult<()>;
}
