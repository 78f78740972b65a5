//! The `OutputWriter` trait implemented by all backend writers.

use crate::{AgentMoodRow, OutputResult, TickSummaryRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`EngineOutputObserver::take_error`][crate::EngineOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a batch of per-agent mood rows.
    fn write_moods(&mut self, rows: &[AgentMoodRow]) -> OutputResult<()>;

    /// Write one tick summary row.
    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
