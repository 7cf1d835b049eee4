//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `metrics.csv`
//! - `gate_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{GateEventRow, MetricsRow, OutputResult};

pub const METRICS_FILE: &str = "metrics.csv";
pub const GATE_EVENTS_FILE: &str = "gate_events.csv";

/// Writes run output to two CSV files.
pub struct CsvWriter {
    metrics:  Writer<File>,
    events:   Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Create `dir` if needed, open (truncating) both files and write the
    /// header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut metrics = Writer::from_path(dir.join(METRICS_FILE))?;
        metrics.write_record([
            "time",
            "policy",
            "agents_evacuated",
            "injuries",
            "deaths",
            "avg_density",
            "overcrowding_events",
        ])?;

        let mut events = Writer::from_path(dir.join(GATE_EVENTS_FILE))?;
        events.write_record(["time", "policy", "exit", "from", "to", "crowding"])?;

        Ok(Self { metrics, events, finished: false })
    }
}

impl OutputWriter for CsvWriter {
    fn write_metrics(&mut self, row: &MetricsRow) -> OutputResult<()> {
        self.metrics.write_record(&[
            format!("{:.3}", row.time),
            row.policy.label().to_owned(),
            row.agents_evacuated.to_string(),
            row.injuries.to_string(),
            row.deaths.to_string(),
            format!("{:.4}", row.avg_density),
            row.overcrowding_events.to_string(),
        ])?;
        Ok(())
    }

    fn write_gate_event(&mut self, row: &GateEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            format!("{:.3}", row.time),
            row.policy.label().to_owned(),
            row.exit.clone(),
            row.from.label().to_owned(),
            row.to.label().to_owned(),
            row.crowding.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.metrics.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
