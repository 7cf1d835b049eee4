//! The `OutputWriter` trait implemented by backend writers.

use crate::{GateEventRow, MetricsRow, OutputResult};

/// A sink for the two row types.
///
/// Errors are stored by the observer and retrieved with
/// [`OutputObserver::take_error`][crate::OutputObserver::take_error].
pub trait OutputWriter {
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()>;

    fn write_gate_event(&mut self, row: &GateEventRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent: safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
