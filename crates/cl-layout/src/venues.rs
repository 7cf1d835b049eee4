//! Venue provider trait and the built-in terminal catalog.
//!
//! Floor plans are static data: five airport terminals on a 600×500 canvas,
//! each with boarding gates along the top (which are also where passengers
//! spawn), exits cut into the bottom wall, and a few interior obstacles such
//! as check-in islands and counters.  Obstacles sit between exit columns so
//! that a pedestrian sliding along one always has a lateral component toward
//! its exit.

use cl_core::Rect;

use crate::{Layout, LayoutBuilder};

/// Venue used when a caller asks for an identifier the provider does not know.
pub const DEFAULT_VENUE: &str = "DFW";

const WIDTH: f32 = 600.0;
const HEIGHT: f32 = 500.0;
const WALL: f32 = 10.0;
const EXIT_WIDTH: f32 = 60.0;
const EXIT_DEPTH: f32 = 45.0;

// ── VenueProvider ─────────────────────────────────────────────────────────────

/// A layout together with how it was obtained.
#[derive(Clone, Debug)]
pub struct ResolvedVenue {
    pub layout:    Layout,
    /// `true` when the requested identifier was unknown and the default
    /// layout was substituted.
    pub fell_back: bool,
}

/// Source of venue geometry keyed by identifier.
///
/// An unknown identifier is not an error: [`resolve`](Self::resolve) falls
/// back to [`default_layout`](Self::default_layout).
pub trait VenueProvider: Send + Sync {
    /// Layout for `venue_id`, or `None` if the provider does not know it.
    fn lookup(&self, venue_id: &str) -> Option<Layout>;

    /// The designated fallback layout.
    fn default_layout(&self) -> Layout;

    fn resolve(&self, venue_id: &str) -> ResolvedVenue {
        match self.lookup(venue_id) {
            Some(layout) => ResolvedVenue { layout, fell_back: false },
            None => ResolvedVenue { layout: self.default_layout(), fell_back: true },
        }
    }
}

// ── VenueCatalog ──────────────────────────────────────────────────────────────

/// In-memory set of layouts with one designated default.
///
/// Lookups compare identifiers case-insensitively.
#[derive(Clone, Debug)]
pub struct VenueCatalog {
    venues:  Vec<Layout>,
    default: usize,
}

impl VenueCatalog {
    /// A catalog holding only `default`.  Add more with [`with`](Self::with).
    pub fn new(default: Layout) -> Self {
        Self { venues: vec![default], default: 0 }
    }

    /// Add `layout`, replacing any existing venue with the same identifier.
    pub fn with(mut self, layout: Layout) -> Self {
        match self.position(&layout.venue) {
            Some(i) => self.venues[i] = layout,
            None => self.venues.push(layout),
        }
        self
    }

    /// The five built-in airport terminals, defaulting to [`DEFAULT_VENUE`].
    pub fn builtin() -> Self {
        let venues: Vec<Layout> = PLANS.iter().map(VenuePlan::build).collect();
        let default = venues
            .iter()
            .position(|l| l.venue == DEFAULT_VENUE)
            .unwrap_or(0);
        Self { venues, default }
    }

    /// Identifiers in catalog order.
    pub fn ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.venues.iter().map(|l| l.venue.as_str())
    }

    pub fn len(&self) -> usize {
        self.venues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.venues.is_empty()
    }

    fn position(&self, venue_id: &str) -> Option<usize> {
        self.venues
            .iter()
            .position(|l| l.venue.eq_ignore_ascii_case(venue_id))
    }
}

impl Default for VenueCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl VenueProvider for VenueCatalog {
    fn lookup(&self, venue_id: &str) -> Option<Layout> {
        self.position(venue_id).map(|i| self.venues[i].clone())
    }

    fn default_layout(&self) -> Layout {
        self.venues[self.default].clone()
    }
}

// ── Built-in terminal data ────────────────────────────────────────────────────

struct VenuePlan {
    id:        &'static str,
    title:     &'static str,
    /// `(row centre y, gate centre xs)` per gate row.
    gate_rows: &'static [(f32, &'static [f32])],
    /// Gate rectangle `(width, height)`.
    gate_size: (f32, f32),
    /// Exit centre xs along the bottom wall.
    exits:     &'static [f32],
    /// Interior obstacles as `[x, y, width, height]`.
    obstacles: &'static [[f32; 4]],
}

const PLANS: &[VenuePlan] = &[
    VenuePlan {
        id:        "DFW",
        title:     "Dallas/Fort Worth Terminal D",
        gate_rows: &[(80.0, &[100.0, 200.0, 300.0, 400.0, 500.0])],
        gate_size: (60.0, 30.0),
        exits:     &[150.0, 300.0, 450.0],
        obstacles: &[
            [205.0, 250.0, 40.0, 40.0], // check-in island west
            [355.0, 250.0, 40.0, 40.0], // check-in island east
            [10.0, 200.0, 50.0, 15.0],  // service counter
            [540.0, 200.0, 50.0, 15.0], // service counter
        ],
    },
    VenuePlan {
        id:        "ATL",
        title:     "Atlanta Hartsfield-Jackson",
        gate_rows: &[(70.0, &[80.0, 160.0, 240.0, 320.0, 400.0, 480.0, 560.0])],
        gate_size: (50.0, 30.0),
        exits:     &[180.0, 420.0],
        obstacles: &[
            [280.0, 230.0, 40.0, 40.0], // central concourse kiosk
            [280.0, 340.0, 40.0, 30.0], // security booth
            [10.0, 200.0, 50.0, 15.0],
            [540.0, 200.0, 50.0, 15.0],
        ],
    },
    VenuePlan {
        id:        "DXB",
        title:     "Dubai International Terminal 3",
        gate_rows: &[
            (60.0, &[100.0, 220.0, 340.0, 460.0]),
            (140.0, &[100.0, 220.0, 340.0, 460.0]),
        ],
        gate_size: (50.0, 30.0),
        exits:     &[200.0, 360.0],
        obstacles: &[
            [260.0, 300.0, 40.0, 30.0], // checkpoint
            [500.0, 260.0, 80.0, 20.0], // duty-free counter
        ],
    },
    VenuePlan {
        id:        "DEL",
        title:     "Delhi Indira Gandhi Terminal 3",
        gate_rows: &[(80.0, &[120.0, 240.0, 360.0, 480.0])],
        gate_size: (50.0, 30.0),
        exits:     &[160.0, 440.0],
        obstacles: &[
            [280.0, 260.0, 40.0, 40.0], // central corridor pillar
            [270.0, 370.0, 60.0, 20.0], // checkpoint desk
        ],
    },
    VenuePlan {
        id:        "IAD",
        title:     "Washington Dulles",
        gate_rows: &[(90.0, &[100.0, 250.0, 400.0, 500.0])],
        gate_size: (50.0, 30.0),
        exits:     &[200.0, 400.0],
        obstacles: &[
            [280.0, 300.0, 40.0, 30.0], // checkpoint
        ],
    },
];

impl VenuePlan {
    fn build(&self) -> Layout {
        let openings: Vec<(f32, f32)> = self
            .exits
            .iter()
            .map(|&x| (x - EXIT_WIDTH * 0.5, x + EXIT_WIDTH * 0.5))
            .collect();

        let mut b = LayoutBuilder::new(self.id, WIDTH, HEIGHT)
            .title(self.title)
            .perimeter(WALL, &openings);

        for &[x, y, w, h] in self.obstacles {
            b = b.wall(Rect::new(x, y, w, h));
        }

        let (gw, gh) = self.gate_size;
        let mut n = 0;
        for &(y, xs) in self.gate_rows {
            for &x in xs {
                n += 1;
                b = b.boarding_gate(&format!("G{n}"), Rect::new(x - gw * 0.5, y - gh * 0.5, gw, gh));
            }
        }

        for (i, &x) in self.exits.iter().enumerate() {
            b = b.exit(
                format!("E{}", i + 1),
                Rect::new(x - EXIT_WIDTH * 0.5, HEIGHT - EXIT_DEPTH, EXIT_WIDTH, EXIT_DEPTH),
            );
        }

        b.build()
    }
}
