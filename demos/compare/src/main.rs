//! crowdleaf-compare — run the baseline and adaptive policies side by side
//! on one venue and print how they differ.
//!
//! ```text
//! crowdleaf-compare --venue DFW --agents 250 --dt 0.1 --duration 30 --out ./out
//! RUST_LOG=cl_gating=debug crowdleaf-compare --venue ATL   # watch exits cycle
//! ```

mod report;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use cl_core::{CrowdConfig, Policy};
use cl_gating::GateTransition;
use cl_layout::{VenueCatalog, DEFAULT_VENUE};
use cl_output::{CsvObserver, CsvWriter};
use cl_sim::{Driver, NoopObserver, SimObserver, SimulationState};

#[derive(Parser, Debug)]
#[command(
    name = "crowdleaf-compare",
    version,
    about = "Compare nearest-exit and adaptive exit-gating evacuation on one venue"
)]
struct Cli {
    /// Venue identifier (unknown ids fall back to the default venue).
    #[arg(long, default_value = DEFAULT_VENUE)]
    venue: String,

    /// Agents spawned in each run.
    #[arg(long, default_value_t = 250)]
    agents: usize,

    /// Seconds between steps.
    #[arg(long, default_value_t = 0.1)]
    dt: f32,

    /// Simulated seconds to run (stops early once both runs settle).
    #[arg(long, default_value_t = 30.0)]
    duration: f32,

    /// Override the RNG seed from the config.
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file with a (partial) `CrowdConfig`; missing fields keep defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for `metrics.csv` and `gate_events.csv`.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Use the neighbour grid for agent repulsion.
    #[arg(long)]
    neighbor_grid: bool,

    /// List the built-in venues and exit.
    #[arg(long)]
    list_venues: bool,
}

// ── Progress observer ─────────────────────────────────────────────────────────

/// Logs evacuation progress every few simulated seconds and forwards every
/// callback to `inner`.
struct Progress<O: SimObserver> {
    inner:    O,
    every:    f32,
    next_log: f32,
}

impl<O: SimObserver> Progress<O> {
    fn new(inner: O, every: f32) -> Self {
        Self { inner, every, next_log: every }
    }
}

impl<O: SimObserver> SimObserver for Progress<O> {
    fn on_init(&mut self, state: &SimulationState) {
        info!(
            venue = %state.layout.title,
            exits = state.layout.exit_count(),
            agents = state.agent_count,
            "populations spawned"
        );
        self.inner.on_init(state);
    }

    fn on_transition(&mut self, time: f32, policy: Policy, t: &GateTransition) {
        self.inner.on_transition(time, policy, t);
    }

    fn on_step(&mut self, state: &SimulationState) {
        if state.time + 1e-4 >= self.next_log {
            self.next_log += self.every;
            info!(
                time = state.time,
                baseline = state.baseline.metrics.agents_evacuated,
                adaptive = state.adaptive.metrics.agents_evacuated,
                "evacuated"
            );
        }
        self.inner.on_step(state);
    }

    fn on_finish(&mut self, state: &SimulationState) {
        self.inner.on_finish(state);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    if cli.list_venues {
        let catalog = VenueCatalog::builtin();
        for id in catalog.ids() {
            let marker = if id == DEFAULT_VENUE { " (default)" } else { "" };
            println!("{id}{marker}");
        }
        return Ok(());
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CrowdConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if cli.neighbor_grid {
        config.motion.neighbor_grid = true;
    }

    let mut driver = Driver::new(config).context("invalid simulation configuration")?;
    let started = Instant::now();

    let summary = match &cli.out {
        Some(dir) => {
            let writer = CsvWriter::new(dir)
                .with_context(|| format!("cannot create output files in {}", dir.display()))?;
            let mut observer = Progress::new(CsvObserver::new(writer), 5.0);
            let summary = driver.run(&cli.venue, cli.agents, cli.dt, cli.duration, &mut observer)?;
            if let Some(e) = observer.inner.take_error() {
                return Err(e).context("writing CSV output");
            }
            info!(dir = %dir.display(), "wrote metrics.csv and gate_events.csv");
            summary
        }
        None => {
            let mut observer = Progress::new(NoopObserver, 5.0);
            driver.run(&cli.venue, cli.agents, cli.dt, cli.duration, &mut observer)?
        }
    };

    let title = driver
        .state()
        .map(|s| format!("{} ({})", s.layout.title, s.layout.venue))
        .unwrap_or_else(|| cli.venue.clone());
    report::print_summary(&title, &summary, started.elapsed());
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn load_config(path: &Path) -> Result<CrowdConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    Ok(config)
}
