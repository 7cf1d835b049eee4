//! Side-by-side summary table.

use std::time::Duration;

use cl_metrics::{ComparisonSummary, PolicySummary};

pub fn print_summary(title: &str, s: &ComparisonSummary, wall: Duration) {
    let (b, a) = (&s.baseline, &s.adaptive);

    println!();
    println!("=== CrowdLeaf comparison: {title} ===");
    println!(
        "Agents: {}  |  Steps: {}  |  Simulated: {:.1}s  |  Wall: {:.2?}",
        s.agent_count,
        s.ticks,
        b.final_time.max(a.final_time),
        wall
    );
    println!();
    println!("{:<22} {:>12} {:>12} {:>12}", "", "baseline", "adaptive", "Δ");
    println!("{}", "-".repeat(61));
    row_i("agents evacuated", b.agents_evacuated, a.agents_evacuated, s.evacuated_delta());
    println!(
        "{:<22} {:>11.1}% {:>11.1}% {:>+11.1}%",
        "evacuation ratio",
        b.evacuation_ratio * 100.0,
        a.evacuation_ratio * 100.0,
        (a.evacuation_ratio - b.evacuation_ratio) * 100.0
    );
    row_i("injuries", b.injuries, a.injuries, s.injury_delta());
    row_i("deaths", b.deaths, a.deaths, s.death_delta());
    println!(
        "{:<22} {:>12.2} {:>12.2} {:>+12.2}",
        "peak avg density",
        b.peak_density,
        a.peak_density,
        s.peak_density_delta()
    );
    println!(
        "{:<22} {:>12} {:>12} {:>+12}",
        "overcrowded cell-ticks",
        b.total_overcrowding,
        a.total_overcrowding,
        s.overcrowding_delta()
    );
    println!("{:<22} {:>12} {:>12}", "cleared at", cleared(b), cleared(a));
}

fn row_i(label: &str, b: usize, a: usize, delta: i64) {
    println!("{label:<22} {b:>12} {a:>12} {delta:>+12}");
}

fn cleared(p: &PolicySummary) -> String {
    match p.cleared_at {
        Some(t) => format!("{t:.1}s"),
        None => "-".to_owned(),
    }
}
