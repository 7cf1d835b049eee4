//! Unit tests for cl-output.

#[cfg(test)]
mod helpers {
    use cl_core::{CrowdConfig, Rect};
    use cl_layout::{LayoutBuilder, VenueCatalog};
    use cl_sim::{Driver, DriverBuilder};

    /// One exit with a crowd spawned right next to it, so the adaptive run
    /// gates on the first step.
    pub fn crowded_driver() -> Driver {
        let layout = LayoutBuilder::new("ONE", 300.0, 300.0)
            .exit("South", Rect::new(120.0, 250.0, 60.0, 40.0))
            .spawn("S1", Rect::new(130.0, 200.0, 40.0, 20.0))
            .build();
        DriverBuilder::new(CrowdConfig::default())
            .provider(VenueCatalog::new(layout))
            .build()
            .unwrap()
    }

    pub fn read_rows(path: &std::path::Path) -> Vec<csv::StringRecord> {
        csv::Reader::from_path(path)
            .unwrap()
            .records()
            .map(|r| r.unwrap())
            .collect()
    }

    pub fn read_headers(path: &std::path::Path) -> Vec<String> {
        csv::Reader::from_path(path)
            .unwrap()
            .headers()
            .unwrap()
            .iter()
            .map(str::to_owned)
            .collect()
    }
}

// ── CSV writer ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_writer {
    use cl_core::{ExitId, Policy};
    use cl_gating::{ExitState, GateTransition};
    use cl_metrics::SimulationMetrics;

    use super::helpers::{read_headers, read_rows};
    use crate::csv::{GATE_EVENTS_FILE, METRICS_FILE};
    use crate::{CsvWriter, GateEventRow, MetricsRow, OutputWriter};

    #[test]
    fn headers_written_on_open() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(
            read_headers(&dir.path().join(METRICS_FILE)),
            ["time", "policy", "agents_evacuated", "injuries", "deaths", "avg_density", "overcrowding_events"]
        );
        assert_eq!(
            read_headers(&dir.path().join(GATE_EVENTS_FILE)),
            ["time", "policy", "exit", "from", "to", "crowding"]
        );
    }

    #[test]
    fn creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        CsvWriter::new(&nested).unwrap();
        assert!(nested.join(METRICS_FILE).exists());
    }

    #[test]
    fn rows_round_out_as_text() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let m = SimulationMetrics {
            time: 1.5,
            injuries: 2,
            deaths: 1,
            avg_density: 2.25,
            overcrowding_events: 3,
            agents_evacuated: 40,
        };
        w.write_metrics(&MetricsRow::new(Policy::Adaptive, &m)).unwrap();
        let t = GateTransition { exit: ExitId(1), from: ExitState::Open, to: ExitState::Closing, crowding: 17 };
        w.write_gate_event(&GateEventRow::new(1.5, Policy::Adaptive, "E2", &t)).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();

        let rows = read_rows(&dir.path().join(METRICS_FILE));
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "1.500");
        assert_eq!(&rows[0][1], "adaptive");
        assert_eq!(&rows[0][2], "40");
        assert_eq!(&rows[0][5], "2.2500");

        let events = read_rows(&dir.path().join(GATE_EVENTS_FILE));
        assert_eq!(events.len(), 1);
        assert_eq!(&events[0][2], "E2");
        assert_eq!(&events[0][3], "open");
        assert_eq!(&events[0][4], "closing");
        assert_eq!(&events[0][5], "17");
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer {
    use super::helpers::{crowded_driver, read_rows};
    use crate::csv::{GATE_EVENTS_FILE, METRICS_FILE};
    use crate::{CsvObserver, CsvWriter};

    #[test]
    fn run_writes_both_policies_every_step() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = CsvObserver::new(CsvWriter::new(dir.path()).unwrap());
        let mut driver = crowded_driver();
        let summary = driver.run("ONE", 20, 0.1, 1.0, &mut obs).unwrap();
        assert!(obs.take_error().is_none());

        let rows = read_rows(&dir.path().join(METRICS_FILE));
        // Initial row pair plus one pair per step.
        assert_eq!(rows.len(), 2 * (summary.ticks as usize + 1));
        assert_eq!(&rows[0][1], "baseline");
        assert_eq!(&rows[1][1], "adaptive");
        assert_eq!(&rows[0][0], "0.000");
    }

    #[test]
    fn gate_events_use_layout_labels() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = CsvObserver::new(CsvWriter::new(dir.path()).unwrap());
        crowded_driver().run("ONE", 20, 0.1, 1.0, &mut obs).unwrap();

        let events = read_rows(&dir.path().join(GATE_EVENTS_FILE));
        assert!(events.len() >= 2);
        assert_eq!(&events[0][0], "0.100");
        assert_eq!(&events[0][1], "adaptive");
        assert_eq!(&events[0][2], "South");
        assert_eq!(&events[0][4], "closing");
        assert_eq!(&events[1][4], "closed");
        assert!(events.iter().all(|r| &r[1] == "adaptive"));
    }

    #[test]
    fn take_error_clears() {
        let dir = tempfile::tempdir().unwrap();
        let mut obs = CsvObserver::new(CsvWriter::new(dir.path()).unwrap());
        assert!(obs.take_error().is_none());
        assert!(obs.take_error().is_none());
    }
}
