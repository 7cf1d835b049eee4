//! Unit tests for cl-routing.

#[cfg(test)]
mod helpers {
    use cl_agent::Population;
    use cl_core::{Rect, Vec2};
    use cl_gating::ExitBank;
    use cl_layout::{Layout, LayoutBuilder};

    /// 600-wide hall with exits at the bottom-left and bottom-right corners.
    ///
    ///   E1 centre (50, 480)      E2 centre (550, 480)
    pub fn two_exits() -> (Layout, ExitBank) {
        let layout = LayoutBuilder::new("PAIR", 600.0, 500.0)
            .exit("E1", Rect::new(20.0, 460.0, 60.0, 40.0))
            .exit("E2", Rect::new(520.0, 460.0, 60.0, 40.0))
            .spawn("S", Rect::new(250.0, 20.0, 100.0, 40.0))
            .build();
        let bank = ExitBank::from_layout(&layout);
        (layout, bank)
    }

    /// Agents spread evenly across the hall at mid height.
    pub fn spread(n: usize) -> Population {
        Population::from_positions((0..n).map(|i| Vec2::new(10.0 + 580.0 * i as f32 / (n - 1) as f32, 250.0)))
    }
}

// ── NearestExit ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use cl_core::{ExitId, Policy, Vec2};
    use cl_agent::Agent;
    use cl_core::AgentId;
    use cl_gating::ExitState;

    use super::helpers::two_exits;
    use crate::{NearestExit, RouteQuery, Router};

    #[test]
    fn picks_closest_centre() {
        let (layout, bank) = two_exits();
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let left  = Agent::new(AgentId(0), Vec2::new(100.0, 300.0));
        let right = Agent::new(AgentId(1), Vec2::new(500.0, 300.0));
        assert_eq!(NearestExit.target(&left, &q), Some(ExitId(0)));
        assert_eq!(NearestExit.target(&right, &q), Some(ExitId(1)));
        assert_eq!(NearestExit.policy(), Policy::Baseline);
    }

    #[test]
    fn ignores_closed_state() {
        let (layout, mut bank) = two_exits();
        bank.exits[0].state = ExitState::Closed;
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let a = Agent::new(AgentId(0), Vec2::new(60.0, 400.0));
        assert_eq!(NearestExit.target(&a, &q), Some(ExitId(0)));
    }

    #[test]
    fn equidistant_goes_to_first() {
        let (layout, bank) = two_exits();
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let mid = Agent::new(AgentId(0), Vec2::new(300.0, 100.0));
        assert_eq!(NearestExit.target(&mid, &q), Some(ExitId(0)));
    }
}

// ── LeastCrowdedOpen ──────────────────────────────────────────────────────────

#[cfg(test)]
mod least_crowded {
    use cl_agent::Agent;
    use cl_core::{AgentId, ExitId, Policy, Vec2};
    use cl_gating::ExitState;

    use super::helpers::two_exits;
    use crate::{LeastCrowdedOpen, RouteQuery, Router};

    #[test]
    fn prefers_lower_crowding_over_distance() {
        let (layout, mut bank) = two_exits();
        bank.exits[0].crowding_level = 12;
        bank.exits[1].crowding_level = 3;
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let near_left = Agent::new(AgentId(0), Vec2::new(50.0, 440.0));
        assert_eq!(LeastCrowdedOpen.target(&near_left, &q), Some(ExitId(1)));
        assert_eq!(LeastCrowdedOpen.policy(), Policy::Adaptive);
    }

    #[test]
    fn ties_resolve_to_first_exit() {
        let (layout, bank) = two_exits();
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let far_right = Agent::new(AgentId(0), Vec2::new(590.0, 490.0));
        assert_eq!(LeastCrowdedOpen.target(&far_right, &q), Some(ExitId(0)));
    }

    #[test]
    fn skips_non_admitting_even_if_emptier() {
        let (layout, mut bank) = two_exits();
        bank.exits[0].state = ExitState::Closing;
        bank.exits[0].crowding_level = 0;
        bank.exits[1].crowding_level = 30;
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let a = Agent::new(AgentId(0), Vec2::new(40.0, 450.0));
        assert_eq!(LeastCrowdedOpen.target(&a, &q), Some(ExitId(1)));
    }

    #[test]
    fn reopening_counts_as_open() {
        let (layout, mut bank) = two_exits();
        bank.exits[0].state = ExitState::Closed;
        bank.exits[1].state = ExitState::Reopening;
        bank.exits[1].crowding_level = 9;
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let a = Agent::new(AgentId(0), Vec2::new(40.0, 450.0));
        assert_eq!(LeastCrowdedOpen.target(&a, &q), Some(ExitId(1)));
    }

    #[test]
    fn gridlock_falls_back_to_least_crowded_overall() {
        let (layout, mut bank) = two_exits();
        bank.exits[0].state = ExitState::Closed;
        bank.exits[0].crowding_level = 20;
        bank.exits[1].state = ExitState::Closing;
        bank.exits[1].crowding_level = 17;
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &[], time: 0.0 };
        let a = Agent::new(AgentId(0), Vec2::new(40.0, 450.0));
        assert_eq!(LeastCrowdedOpen.target(&a, &q), Some(ExitId(1)));
    }
}

// ── Mixed scenarios ───────────────────────────────────────────────────────────

#[cfg(test)]
mod scenarios {
    use cl_core::{ExitId, Policy};
    use cl_gating::ExitState;
    use cl_layout::LayoutBuilder;
    use cl_gating::ExitBank;

    use super::helpers::{spread, two_exits};
    use crate::{router_for, RouteQuery};

    #[test]
    fn closed_exit_attracts_only_baseline_agents() {
        let (layout, mut bank) = two_exits();
        bank.exits[0].state = ExitState::Closed;
        let pop = spread(40);
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &pop.agents, time: 1.0 };

        let adaptive = router_for(Policy::Adaptive);
        assert!(pop.iter().all(|a| adaptive.target(a, &q) == Some(ExitId(1))));

        let baseline = router_for(Policy::Baseline);
        let to_closed = pop.iter().filter(|a| baseline.target(a, &q) == Some(ExitId(0))).count();
        assert!(to_closed > 0 && to_closed < pop.len());
    }

    #[test]
    fn router_for_matches_policy() {
        for p in Policy::ALL {
            assert_eq!(router_for(p).policy(), p);
        }
    }

    #[test]
    fn no_exits_yields_none() {
        let layout = LayoutBuilder::new("BARE", 100.0, 100.0).build();
        let bank = ExitBank::from_layout(&layout);
        let pop = spread(3);
        let q = RouteQuery { layout: &layout, exits: &bank, agents: &pop.agents, time: 0.0 };
        for p in Policy::ALL {
            assert_eq!(router_for(p).target(&pop.agents[0], &q), None);
        }
    }
}
