//! `OutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use cl_core::Policy;
use cl_gating::GateTransition;
use cl_sim::{SimObserver, SimulationState};

use crate::row::{GateEventRow, MetricsRow};
use crate::writer::OutputWriter;
use crate::{CsvWriter, OutputError, OutputResult};

/// The observer most callers want.
pub type CsvObserver = OutputObserver<CsvWriter>;

/// A [`SimObserver`] that writes metrics and exit transitions to any
/// [`OutputWriter`] backend.
///
/// `SimObserver` callbacks cannot fail, so the first write error is parked
/// here and the rest of the run carries on.  Collect it with
/// [`take_error`][Self::take_error] once `Driver::run` returns.
pub struct OutputObserver<W: OutputWriter> {
    writer:      W,
    /// Exit labels of the current layout, indexed by `ExitId`.
    exit_labels: Vec<String>,
    last_error:  Option<OutputError>,
}

impl<W: OutputWriter> OutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            exit_labels: Vec::new(),
            last_error:  None,
        }
    }

    /// The first write error of the run, or `None` if every row landed.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Give back the writer, e.g. to read its files in a test.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_metrics(&mut self, state: &SimulationState) {
        for policy in Policy::ALL {
            let row = MetricsRow::new(policy, &state.run(policy).metrics);
            let result = self.writer.write_metrics(&row);
            self.store_err(result);
        }
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            self.last_error.get_or_insert(e);
        }
    }
}

impl<W: OutputWriter> SimObserver for OutputObserver<W> {
    fn on_init(&mut self, state: &SimulationState) {
        self.exit_labels = state.layout.exits.iter().map(|e| e.label.clone()).collect();
        self.write_metrics(state);
    }

    fn on_transition(&mut self, time: f32, policy: Policy, transition: &GateTransition) {
        let label = self
            .exit_labels
            .get(transition.exit.index())
            .cloned()
            .unwrap_or_else(|| transition.exit.to_string());
        let row = GateEventRow::new(time, policy, label, transition);
        let result = self.writer.write_gate_event(&row);
        self.store_err(result);
    }

    fn on_step(&mut self, state: &SimulationState) {
        self.write_metrics(state);
    }

    fn on_finish(&mut self, _state: &SimulationState) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
