//! Unit tests for cl-agent.

use cl_core::{Rect, SimRng, Vec2};
use cl_layout::{Layout, LayoutBuilder};

use crate::{Agent, Population, PopulationBuilder};

fn two_spawn_layout() -> Layout {
    LayoutBuilder::new("HALL", 200.0, 100.0)
        .exit("E1", Rect::new(80.0, 80.0, 40.0, 20.0))
        .spawn("S1", Rect::new(20.0, 20.0, 40.0, 20.0))
        .spawn("S2", Rect::new(140.0, 20.0, 40.0, 20.0))
        .build()
}

#[cfg(test)]
mod agent {
    use super::*;
    use cl_core::AgentId;

    #[test]
    fn new_agent_is_present_and_mobile() {
        let a = Agent::new(AgentId(0), Vec2::ZERO);
        assert!(a.is_present());
        assert!(a.is_mobile());
    }

    #[test]
    fn dead_agent_is_present_but_immobile() {
        let mut a = Agent::new(AgentId(0), Vec2::ZERO);
        a.mark_injured();
        a.mark_dead();
        assert!(a.is_present());
        assert!(!a.is_mobile());
    }

    #[test]
    fn evacuated_agent_is_gone() {
        let mut a = Agent::new(AgentId(0), Vec2::ZERO);
        a.mark_evacuated();
        assert!(!a.is_present());
        assert!(!a.is_mobile());
    }
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn round_robin_across_spawns() {
        let layout = two_spawn_layout();
        let mut rng = SimRng::new(1);
        let pop = PopulationBuilder::new(6).build(&layout, &mut rng).unwrap();

        for a in &pop.agents {
            let area = &layout.spawns[a.id.index() % 2].rect;
            assert!(area.contains(a.pos), "agent {} outside its spawn area", a.id);
        }
    }

    #[test]
    fn ids_are_sequential() {
        let layout = two_spawn_layout();
        let pop = PopulationBuilder::new(5).build(&layout, &mut SimRng::new(3)).unwrap();
        for (i, a) in pop.agents.iter().enumerate() {
            assert_eq!(a.id.index(), i);
        }
    }

    #[test]
    fn zero_jitter_stacks_on_centre() {
        let layout = two_spawn_layout();
        let pop = PopulationBuilder::new(2)
            .jitter_fraction(0.0)
            .build(&layout, &mut SimRng::new(9))
            .unwrap();
        assert_eq!(pop.agents[0].pos, layout.spawns[0].rect.center());
        assert_eq!(pop.agents[1].pos, layout.spawns[1].rect.center());
    }

    #[test]
    fn same_seed_same_positions() {
        let layout = two_spawn_layout();
        let a = PopulationBuilder::new(20).build(&layout, &mut SimRng::new(5)).unwrap();
        let b = PopulationBuilder::new(20).build(&layout, &mut SimRng::new(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn zero_agents_always_ok() {
        let layout = LayoutBuilder::new("EMPTY", 10.0, 10.0).build();
        let pop = PopulationBuilder::new(0).build(&layout, &mut SimRng::new(0)).unwrap();
        assert!(pop.is_empty());
    }

    #[test]
    fn agents_without_spawns_rejected() {
        let layout = LayoutBuilder::new("EMPTY", 10.0, 10.0).build();
        assert!(PopulationBuilder::new(3).build(&layout, &mut SimRng::new(0)).is_err());
    }

    #[test]
    fn count_beyond_id_range_rejected_before_spawning() {
        use cl_core::AgentId;
        use cl_layout::LayoutError;

        let layout = two_spawn_layout();
        let mut rng = SimRng::new(5);
        let err = PopulationBuilder::new(AgentId::CAPACITY + 1)
            .build(&layout, &mut rng)
            .unwrap_err();
        assert!(matches!(err, LayoutError::TooManyIds { what: "agents", .. }));

        // Nothing was drawn from the stream.
        assert_eq!(rng.next_u64(), SimRng::new(5).next_u64());
    }
}

#[cfg(test)]
mod population {
    use super::*;

    #[test]
    fn counts_follow_flags() {
        let mut pop = Population::from_positions([Vec2::ZERO; 4]);
        pop.agents[0].mark_evacuated();
        pop.agents[1].mark_injured();
        pop.agents[2].mark_injured();
        pop.agents[2].mark_dead();

        assert_eq!(pop.evacuated_count(), 1);
        assert_eq!(pop.injured_count(), 2);
        assert_eq!(pop.dead_count(), 1);
        assert_eq!(pop.present_count(), 3);
        assert!((pop.evacuation_ratio() - 0.25).abs() < 1e-6);
        assert!(!pop.is_settled());

        pop.agents[1].mark_evacuated();
        pop.agents[3].mark_evacuated();
        assert!(pop.is_settled());
    }

    #[test]
    fn empty_population_ratio_is_zero() {
        assert_eq!(Population::empty().evacuation_ratio(), 0.0);
        assert!(Population::empty().is_settled());
    }
}
