//! Venue layout representation and builder.
//!
//! # Spatial index
//!
//! Walls are the only geometry the motion engine queries on its hot path (up
//! to five overlap tests per agent per tick).  An R-tree (via `rstar`) over
//! the wall bounding boxes turns each test into a small envelope query
//! instead of a scan of every wall in the venue.

use rstar::{AABB, RTree, RTreeObject};

use cl_core::{ExitId, Rect, Vec2};

use crate::{LayoutError, LayoutResult};

// ── Geometry records ──────────────────────────────────────────────────────────

/// An impassable rectangle.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Wall {
    pub rect: Rect,
}

/// A boarding gate, drawn by the rendering layer.  Gates double as spawn
/// areas in the built-in venues but the core never reads them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gate {
    pub label: String,
    pub rect:  Rect,
}

/// Where pedestrians are placed when a run starts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpawnArea {
    pub label: String,
    pub rect:  Rect,
}

/// The static part of an exit: where it is and what it is called.  The
/// mutable control state lives in `cl_gating::Exit`, one per population.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExitSpec {
    pub label: String,
    pub rect:  Rect,
}

// ── R-tree wall entry ─────────────────────────────────────────────────────────

#[derive(Clone)]
struct WallEntry {
    envelope: AABB<[f32; 2]>,
    index:    usize,
}

impl RTreeObject for WallEntry {
    type Envelope = AABB<[f32; 2]>;
    fn envelope(&self) -> Self::Envelope {
        self.envelope
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

/// Immutable floor plan of one venue.
///
/// Do not construct directly; use [`LayoutBuilder`].  All vectors are `pub`
/// so the rendering layer can iterate them, but nothing in the core mutates
/// a `Layout` after `build()`.
#[derive(Clone)]
pub struct Layout {
    /// Short identifier the venue is looked up by (e.g. `"DFW"`).
    pub venue:  String,
    /// Human-readable name.
    pub title:  String,
    pub width:  f32,
    pub height: f32,

    pub walls:  Vec<Wall>,
    pub gates:  Vec<Gate>,
    pub exits:  Vec<ExitSpec>,
    pub spawns: Vec<SpawnArea>,

    wall_index: RTree<WallEntry>,
}

impl Layout {
    pub fn exit_count(&self) -> usize {
        self.exits.len()
    }

    pub fn exit(&self, id: ExitId) -> Option<&ExitSpec> {
        self.exits.get(id.index())
    }

    /// Index of the first wall (in R-tree order) that a circle of radius `r`
    /// at `p` overlaps under the expanded-radius test.
    pub fn wall_hit(&self, p: Vec2, r: f32) -> Option<usize> {
        let query = AABB::from_corners([p.x - r, p.y - r], [p.x + r, p.y + r]);
        self.wall_index
            .locate_in_envelope_intersecting(&query)
            .find(|e| self.walls[e.index].rect.overlaps_circle(p, r))
            .map(|e| e.index)
    }

    /// `true` if a circle of radius `r` at `p` overlaps any wall.
    #[inline]
    pub fn collides(&self, p: Vec2, r: f32) -> bool {
        self.wall_hit(p, r).is_some()
    }

    /// All walls a circle of radius `r` at `p` overlaps.
    pub fn overlapping_walls(&self, p: Vec2, r: f32) -> impl Iterator<Item = &Wall> + '_ {
        let query = AABB::from_corners([p.x - r, p.y - r], [p.x + r, p.y + r]);
        self.wall_index
            .locate_in_envelope_intersecting(&query)
            .map(|e| &self.walls[e.index])
            .filter(move |w| w.rect.overlaps_circle(p, r))
    }

    /// Check the preconditions the driver relies on: at least one exit, at
    /// least one spawn area, no more exits than `ExitId` can address, a
    /// non-empty canvas, and no degenerate rectangle.
    pub fn validate(&self) -> LayoutResult<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(LayoutError::EmptyCanvas {
                venue:  self.venue.clone(),
                width:  self.width,
                height: self.height,
            });
        }
        if self.exits.is_empty() {
            return Err(LayoutError::NoExits { venue: self.venue.clone() });
        }
        if self.spawns.is_empty() {
            return Err(LayoutError::NoSpawnAreas { venue: self.venue.clone() });
        }
        if self.exits.len() > ExitId::CAPACITY {
            return Err(LayoutError::TooManyIds {
                venue: self.venue.clone(),
                what:  "exits",
                count: self.exits.len(),
                max:   ExitId::CAPACITY,
            });
        }

        let degenerate = |what: &'static str, label: &str| LayoutError::DegenerateRect {
            venue: self.venue.clone(),
            what,
            label: label.to_owned(),
        };
        for (i, w) in self.walls.iter().enumerate() {
            if w.rect.is_degenerate() {
                return Err(degenerate("wall", &format!("#{i}")));
            }
        }
        if let Some(e) = self.exits.iter().find(|e| e.rect.is_degenerate()) {
            return Err(degenerate("exit", &e.label));
        }
        if let Some(s) = self.spawns.iter().find(|s| s.rect.is_degenerate()) {
            return Err(degenerate("spawn", &s.label));
        }
        if let Some(g) = self.gates.iter().find(|g| g.rect.is_degenerate()) {
            return Err(degenerate("gate", &g.label));
        }
        Ok(())
    }
}

impl std::fmt::Debug for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Layout")
            .field("venue", &self.venue)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("walls", &self.walls.len())
            .field("gates", &self.gates.len())
            .field("exits", &self.exits.len())
            .field("spawns", &self.spawns.len())
            .finish()
    }
}

// ── LayoutBuilder ─────────────────────────────────────────────────────────────

/// Accumulates rectangles, then builds the wall index in one bulk load.
///
/// `build()` does not validate: the driver calls [`Layout::validate`] when a
/// run starts so a bad venue fails before any agent moves.
///
/// # Example
///
/// ```rust
/// use cl_core::Rect;
/// use cl_layout::LayoutBuilder;
///
/// let layout = LayoutBuilder::new("HALL", 200.0, 100.0)
///     .perimeter(5.0, &[(80.0, 120.0)])
///     .exit("E1", Rect::new(80.0, 80.0, 40.0, 20.0))
///     .spawn("S1", Rect::new(20.0, 20.0, 40.0, 20.0))
///     .build();
///
/// assert!(layout.validate().is_ok());
/// ```
pub struct LayoutBuilder {
    venue:  String,
    title:  String,
    width:  f32,
    height: f32,
    walls:  Vec<Wall>,
    gates:  Vec<Gate>,
    exits:  Vec<ExitSpec>,
    spawns: Vec<SpawnArea>,
}

impl LayoutBuilder {
    pub fn new(venue: impl Into<String>, width: f32, height: f32) -> Self {
        let venue = venue.into();
        Self {
            title: venue.clone(),
            venue,
            width,
            height,
            walls:  Vec::new(),
            gates:  Vec::new(),
            exits:  Vec::new(),
            spawns: Vec::new(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn wall(mut self, rect: Rect) -> Self {
        self.walls.push(Wall { rect });
        self
    }

    pub fn gate(mut self, label: impl Into<String>, rect: Rect) -> Self {
        self.gates.push(Gate { label: label.into(), rect });
        self
    }

    pub fn exit(mut self, label: impl Into<String>, rect: Rect) -> Self {
        self.exits.push(ExitSpec { label: label.into(), rect });
        self
    }

    pub fn spawn(mut self, label: impl Into<String>, rect: Rect) -> Self {
        self.spawns.push(SpawnArea { label: label.into(), rect });
        self
    }

    /// A gate that is also a spawn area, which is how terminals fill up.
    pub fn boarding_gate(self, label: &str, rect: Rect) -> Self {
        self.gate(label, rect).spawn(label, rect)
    }

    /// Outer walls of thickness `t` around the canvas.  The bottom wall is
    /// split so that each `(x_start, x_end)` span in `bottom_openings` is left
    /// open for an exit.  Openings must be sorted and non-overlapping.
    pub fn perimeter(mut self, t: f32, bottom_openings: &[(f32, f32)]) -> Self {
        let (w, h) = (self.width, self.height);
        self.walls.push(Wall { rect: Rect::new(0.0, 0.0, w, t) });
        self.walls.push(Wall { rect: Rect::new(0.0, 0.0, t, h) });
        self.walls.push(Wall { rect: Rect::new(w - t, 0.0, t, h) });

        let mut cursor = 0.0;
        for &(start, end) in bottom_openings {
            if start > cursor {
                self.walls.push(Wall { rect: Rect::new(cursor, h - t, start - cursor, t) });
            }
            cursor = cursor.max(end);
        }
        if cursor < w {
            self.walls.push(Wall { rect: Rect::new(cursor, h - t, w - cursor, t) });
        }
        self
    }

    /// Bulk-load the wall R-tree and return the finished layout.
    pub fn build(self) -> Layout {
        let entries = self
            .walls
            .iter()
            .enumerate()
            .map(|(index, w)| {
                let min = w.rect.min();
                let max = w.rect.max();
                WallEntry {
                    envelope: AABB::from_corners([min.x, min.y], [max.x, max.y]),
                    index,
                }
            })
            .collect();

        Layout {
            venue:      self.venue,
            title:      self.title,
            width:      self.width,
            height:     self.height,
            walls:      self.walls,
            gates:      self.gates,
            exits:      self.exits,
            spawns:     self.spawns,
            wall_index: RTree::bulk_load(entries),
        }
    }
}
