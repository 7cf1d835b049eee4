//! Unit tests for cl-layout.

use cl_core::{Rect, Vec2};

use crate::{Layout, LayoutBuilder};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// 200×100 hall with one exit cut into the bottom wall and one spawn area.
fn hall() -> Layout {
    LayoutBuilder::new("HALL", 200.0, 100.0)
        .perimeter(5.0, &[(80.0, 120.0)])
        .wall(Rect::new(90.0, 40.0, 20.0, 10.0))
        .exit("E1", Rect::new(80.0, 80.0, 40.0, 20.0))
        .spawn("S1", Rect::new(20.0, 20.0, 40.0, 20.0))
        .build()
}

fn rect_overlap(a: &Rect, b: &Rect) -> bool {
    a.x < b.x + b.width && b.x < a.x + a.width && a.y < b.y + b.height && b.y < a.y + a.height
}

#[cfg(test)]
mod builder {
    use super::*;

    #[test]
    fn perimeter_leaves_exit_opening() {
        let l = hall();
        // top, left, right, two bottom segments, one interior wall
        assert_eq!(l.walls.len(), 6);
        assert!(!l.collides(Vec2::new(100.0, 97.0), 1.0), "exit opening must be clear");
        assert!(l.collides(Vec2::new(40.0, 97.0), 1.0), "bottom wall left of the exit");
        assert!(l.collides(Vec2::new(160.0, 97.0), 1.0), "bottom wall right of the exit");
    }

    #[test]
    fn perimeter_without_openings_is_closed() {
        let l = LayoutBuilder::new("BOX", 50.0, 50.0).perimeter(2.0, &[]).build();
        assert_eq!(l.walls.len(), 4);
    }

    #[test]
    fn boarding_gate_is_also_spawn() {
        let l = LayoutBuilder::new("G", 100.0, 100.0)
            .boarding_gate("G1", Rect::new(10.0, 10.0, 20.0, 10.0))
            .build();
        assert_eq!(l.gates.len(), 1);
        assert_eq!(l.spawns.len(), 1);
        assert_eq!(l.gates[0].rect, l.spawns[0].rect);
    }
}

#[cfg(test)]
mod collision_queries {
    use super::*;

    #[test]
    fn wall_hit_respects_radius() {
        let l = hall();
        // Interior wall spans x 90..110, y 40..50.
        assert!(l.collides(Vec2::new(100.0, 38.0), 3.0));
        assert!(!l.collides(Vec2::new(100.0, 36.0), 3.0));
        assert!(!l.collides(Vec2::new(60.0, 60.0), 3.0));
    }

    #[test]
    fn overlapping_walls_lists_every_hit() {
        let l = hall();
        // Top-left corner touches both the top and the left perimeter walls.
        let hits = l.overlapping_walls(Vec2::new(3.0, 3.0), 1.0).count();
        assert_eq!(hits, 2);
    }
}

#[cfg(test)]
mod validation {
    use super::*;
    use crate::LayoutError;

    #[test]
    fn valid_hall_passes() {
        hall().validate().unwrap();
    }

    #[test]
    fn no_exits_rejected() {
        let l = LayoutBuilder::new("X", 100.0, 100.0)
            .spawn("S", Rect::new(10.0, 10.0, 10.0, 10.0))
            .build();
        assert_eq!(l.validate(), Err(LayoutError::NoExits { venue: "X".into() }));
    }

    #[test]
    fn no_spawns_rejected() {
        let l = LayoutBuilder::new("X", 100.0, 100.0)
            .exit("E", Rect::new(10.0, 10.0, 10.0, 10.0))
            .build();
        assert_eq!(l.validate(), Err(LayoutError::NoSpawnAreas { venue: "X".into() }));
    }

    #[test]
    fn degenerate_exit_rejected() {
        let l = LayoutBuilder::new("X", 100.0, 100.0)
            .exit("E", Rect::new(10.0, 10.0, 0.0, 10.0))
            .spawn("S", Rect::new(10.0, 10.0, 10.0, 10.0))
            .build();
        assert!(matches!(l.validate(), Err(LayoutError::DegenerateRect { what: "exit", .. })));
    }

    #[test]
    fn exit_count_limited_to_addressable_ids() {
        use cl_core::ExitId;

        let with_exits = |n: usize| {
            (0..n)
                .fold(LayoutBuilder::new("X", 100.0, 100.0), |b, i| {
                    b.exit(format!("E{i}"), Rect::new(10.0, 80.0, 10.0, 10.0))
                })
                .spawn("S", Rect::new(10.0, 10.0, 10.0, 10.0))
                .build()
        };
        with_exits(ExitId::CAPACITY).validate().unwrap();
        assert_eq!(
            with_exits(ExitId::CAPACITY + 1).validate(),
            Err(LayoutError::TooManyIds {
                venue: "X".into(),
                what:  "exits",
                count: ExitId::CAPACITY + 1,
                max:   ExitId::CAPACITY,
            })
        );
    }

    #[test]
    fn empty_canvas_rejected() {
        let l = LayoutBuilder::new("X", 0.0, 100.0).build();
        assert!(matches!(l.validate(), Err(LayoutError::EmptyCanvas { .. })));
    }
}

#[cfg(test)]
mod catalog {
    use super::*;
    use crate::{DEFAULT_VENUE, VenueCatalog, VenueProvider};

    #[test]
    fn builtin_has_five_terminals() {
        let c = VenueCatalog::builtin();
        let ids: Vec<&str> = c.ids().collect();
        assert_eq!(ids, ["DFW", "ATL", "DXB", "DEL", "IAD"]);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let c = VenueCatalog::builtin();
        let l = c.lookup("atl").unwrap();
        assert_eq!(l.venue, "ATL");
        assert_eq!(l.exit_count(), 2);
    }

    #[test]
    fn unknown_venue_falls_back_to_default() {
        let c = VenueCatalog::builtin();
        let r = c.resolve("NOPE");
        assert!(r.fell_back);
        assert_eq!(r.layout.venue, DEFAULT_VENUE);

        let r = c.resolve("DXB");
        assert!(!r.fell_back);
        assert_eq!(r.layout.venue, "DXB");
    }

    #[test]
    fn with_replaces_same_id() {
        let c = VenueCatalog::new(hall()).with(hall());
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn every_builtin_venue_is_valid() {
        let c = VenueCatalog::builtin();
        for id in c.ids() {
            let l = c.lookup(id).unwrap();
            l.validate().unwrap_or_else(|e| panic!("{id}: {e}"));
        }
    }

    #[test]
    fn spawn_areas_clear_of_walls() {
        let c = VenueCatalog::builtin();
        for id in c.ids() {
            let l = c.lookup(id).unwrap();
            for s in &l.spawns {
                for w in &l.walls {
                    assert!(
                        !rect_overlap(&s.rect, &w.rect.expanded(3.0)),
                        "{id}: spawn {} touches a wall",
                        s.label
                    );
                }
            }
        }
    }

    #[test]
    fn exit_centres_are_reachable() {
        let c = VenueCatalog::builtin();
        for id in c.ids() {
            let l = c.lookup(id).unwrap();
            for e in &l.exits {
                let top_mid = Vec2::new(e.rect.center().x, e.rect.y + 1.0);
                assert!(!l.collides(top_mid, 3.0), "{id}: exit {} is walled off", e.label);
                assert!(!l.collides(e.rect.center(), 3.0), "{id}: exit {} centre blocked", e.label);
            }
        }
    }
}
