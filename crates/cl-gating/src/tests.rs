//! Unit tests for cl-gating.

use cl_agent::Population;
use cl_core::{ExitId, GatingParams, Policy, Rect, Vec2};
use cl_layout::{ExitSpec, Layout, LayoutBuilder};

use crate::{Exit, ExitBank, ExitState};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn params() -> GatingParams {
    GatingParams::default() // T = 15, R = 5 s
}

fn exit_with(state: ExitState, crowding: u32, timer: f32) -> Exit {
    let spec = ExitSpec { label: "E1".into(), rect: Rect::new(0.0, 0.0, 10.0, 10.0) };
    let mut e = Exit::from_spec(ExitId(0), &spec);
    e.state = state;
    e.crowding_level = crowding;
    e.recovery_timer = timer;
    e
}

/// Two exits 420 units apart on a 500×200 canvas.
fn two_exit_layout() -> Layout {
    LayoutBuilder::new("TWO", 500.0, 200.0)
        .exit("E1", Rect::new(20.0, 170.0, 40.0, 30.0))
        .exit("E2", Rect::new(440.0, 170.0, 40.0, 30.0))
        .spawn("S", Rect::new(200.0, 20.0, 100.0, 20.0))
        .build()
}

// ── Single-exit transitions ───────────────────────────────────────────────────

#[cfg(test)]
mod transitions {
    use super::*;

    #[test]
    fn open_stays_open_at_threshold() {
        let mut e = exit_with(ExitState::Open, 15, 0.0);
        assert!(e.advance(0.1, &params()).is_none());
        assert_eq!(e.state, ExitState::Open);
    }

    #[test]
    fn open_closes_above_threshold_and_arms_timer() {
        let mut e = exit_with(ExitState::Open, 16, 0.0);
        let t = e.advance(0.1, &params()).unwrap();
        assert_eq!((t.from, t.to, t.crowding), (ExitState::Open, ExitState::Closing, 16));
        assert_eq!(e.recovery_timer, 5.0);
    }

    #[test]
    fn closing_is_one_tick_regardless_of_crowding() {
        for crowding in [0, 50] {
            let mut e = exit_with(ExitState::Closing, crowding, 5.0);
            e.advance(0.1, &params());
            assert_eq!(e.state, ExitState::Closed);
            assert_eq!(e.recovery_timer, 5.0, "closing does not consume recovery time");
        }
    }

    #[test]
    fn closed_counts_down() {
        let mut e = exit_with(ExitState::Closed, 40, 1.0);
        assert!(e.advance(0.25, &params()).is_none());
        assert_eq!(e.state, ExitState::Closed);
        assert!((e.recovery_timer - 0.75).abs() < 1e-6);
    }

    #[test]
    fn closed_reopens_when_timer_runs_out() {
        let mut e = exit_with(ExitState::Closed, 40, 0.25);
        let t = e.advance(0.25, &params()).unwrap();
        assert_eq!(t.to, ExitState::Reopening);
    }

    #[test]
    fn reopening_opens_below_half_threshold() {
        let mut e = exit_with(ExitState::Reopening, 7, 1.5);
        let t = e.advance(0.1, &params()).unwrap();
        assert_eq!(t.to, ExitState::Open);
        assert_eq!(e.recovery_timer, 0.0);
    }

    #[test]
    fn reopening_rearms_while_crowded() {
        // 0.5 · 15 = 7.5, so 8 is still too crowded.
        let mut e = exit_with(ExitState::Reopening, 8, 0.0);
        assert!(e.advance(0.1, &params()).is_none());
        assert_eq!(e.state, ExitState::Reopening);
        assert!((e.recovery_timer - 1.5).abs() < 1e-6);
    }

    #[test]
    fn admission_by_state() {
        assert!(ExitState::Open.admits());
        assert!(ExitState::Reopening.admits());
        assert!(!ExitState::Closing.admits());
        assert!(!ExitState::Closed.admits());
    }

    #[test]
    fn full_cycle_with_custom_params() {
        let p = GatingParams { threshold: 2, recovery_secs: 1.0, ..GatingParams::default() };
        let mut e = exit_with(ExitState::Open, 3, 0.0);
        let mut seen = vec![e.state];
        for _ in 0..8 {
            if e.advance(0.5, &p).is_some() {
                seen.push(e.state);
            }
            if e.state == ExitState::Reopening {
                e.crowding_level = 0;
            }
        }
        assert_eq!(
            seen,
            [ExitState::Open, ExitState::Closing, ExitState::Closed, ExitState::Reopening, ExitState::Open]
        );
    }
}

// ── ExitBank ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bank {
    use super::*;

    #[test]
    fn from_layout_starts_open() {
        let bank = ExitBank::from_layout(&two_exit_layout());
        assert_eq!(bank.len(), 2);
        assert!(bank.iter().all(|e| e.state == ExitState::Open && e.crowding_level == 0));
        assert_eq!(bank.get(ExitId(1)).unwrap().label, "E2");
    }

    #[test]
    fn ids_never_wrap_past_capacity() {
        let layout = (0..ExitId::CAPACITY + 2)
            .fold(LayoutBuilder::new("MANY", 100.0, 100.0), |b, i| {
                b.exit(format!("E{i}"), Rect::new(10.0, 80.0, 10.0, 10.0))
            })
            .build();
        let bank = ExitBank::from_layout(&layout);
        assert_eq!(bank.len(), ExitId::CAPACITY);
        let last = bank.exits.last().unwrap();
        assert_eq!(last.id, ExitId(u16::MAX - 1));
        assert_ne!(last.id, ExitId::INVALID);
        assert!(bank.iter().enumerate().all(|(i, e)| e.id.index() == i));
    }

    #[test]
    fn sensing_counts_present_agents_in_radius() {
        let mut bank = ExitBank::from_layout(&two_exit_layout());
        let c = bank.exits[0].center();
        let mut pop = Population::from_positions([
            c,
            c + Vec2::new(50.0, 0.0),
            c + Vec2::new(0.0, -99.0),
            c + Vec2::new(150.0, 0.0),
            c,
        ]);
        pop.agents[4].mark_evacuated();

        bank.sense(&pop, 100.0);
        assert_eq!(bank.exits[0].crowding_level, 3);
        assert_eq!(bank.exits[1].crowding_level, 0);
    }

    #[test]
    fn baseline_never_leaves_open() {
        let layout = two_exit_layout();
        let mut bank = ExitBank::from_layout(&layout);
        let c = bank.exits[0].center();
        let pop = Population::from_positions(std::iter::repeat_n(c, 40));
        for _ in 0..20 {
            let t = bank.update(&pop, 0.1, &params(), Policy::Baseline);
            assert!(t.is_empty());
        }
        assert_eq!(bank.exits[0].crowding_level, 40);
        assert_eq!(bank.exits[0].state, ExitState::Open);
    }

    #[test]
    fn adaptive_closes_crowded_exit_only() {
        let layout = two_exit_layout();
        let mut bank = ExitBank::from_layout(&layout);
        let c = bank.exits[0].center();
        let pop = Population::from_positions(std::iter::repeat_n(c, 20));

        let t = bank.update(&pop, 0.1, &params(), Policy::Adaptive);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].exit, ExitId(0));
        assert_eq!(bank.exits[0].state, ExitState::Closing);
        assert_eq!(bank.exits[1].state, ExitState::Open);
    }

    #[test]
    fn zero_dt_only_resenses() {
        let layout = two_exit_layout();
        let mut bank = ExitBank::from_layout(&layout);
        let c = bank.exits[0].center();
        let pop = Population::from_positions(std::iter::repeat_n(c, 20));

        assert!(bank.update(&pop, 0.0, &params(), Policy::Adaptive).is_empty());
        assert_eq!(bank.exits[0].crowding_level, 20);
        assert_eq!(bank.exits[0].state, ExitState::Open);
    }

    #[test]
    fn admitting_exit_at_skips_closed() {
        let layout = two_exit_layout();
        let mut bank = ExitBank::from_layout(&layout);
        let inside = bank.exits[0].center();
        assert_eq!(bank.admitting_exit_at(inside), Some(ExitId(0)));

        bank.exits[0].state = ExitState::Closed;
        assert_eq!(bank.admitting_exit_at(inside), None);

        bank.exits[0].state = ExitState::Reopening;
        assert_eq!(bank.admitting_exit_at(inside), Some(ExitId(0)));
    }
}
