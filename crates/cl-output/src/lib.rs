//! `cl-output` — CSV time series of a comparison run.
//!
//! | File              | One row per                                          |
//! |-------------------|------------------------------------------------------|
//! | `metrics.csv`     | step × policy (`SimulationMetrics`)                  |
//! | `gate_events.csv` | exit state change                                    |
//!
//! Writers implement [`OutputWriter`] and are driven by [`OutputObserver`],
//! which implements `cl_sim::SimObserver`.  The files are a report, not a
//! checkpoint: a run cannot be resumed from them.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cl_output::{CsvObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./out"))?;
//! let mut obs = CsvObserver::new(writer);
//! driver.run("DFW", 250, 0.1, 30.0, &mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::{CsvObserver, OutputObserver};
pub use row::{GateEventRow, MetricsRow};
pub use writer::OutputWriter;
