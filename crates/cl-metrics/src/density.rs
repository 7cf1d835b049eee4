//! Occupancy grid over venue coordinates.

use rustc_hash::FxHashMap;

use cl_agent::Population;
use cl_core::Vec2;

/// Grid cell coordinates `(column, row)`.
pub type Cell = (i32, i32);

/// Number of present agents in each square cell of side `cell`.
///
/// Only occupied cells are stored.  Dead agents count: a body on the floor
/// takes up as much room as a standing one.
#[derive(Clone, Debug)]
pub struct DensityGrid {
    cell:   f32,
    counts: FxHashMap<Cell, u32>,
}

impl DensityGrid {
    pub fn new(cell: f32) -> Self {
        Self { cell, counts: FxHashMap::default() }
    }

    pub fn from_population(population: &Population, cell: f32) -> Self {
        let mut grid = Self::new(cell);
        for agent in population.present() {
            grid.add(agent.pos);
        }
        grid
    }

    pub fn add(&mut self, p: Vec2) {
        *self.counts.entry(self.cell_of(p)).or_insert(0) += 1;
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    #[inline]
    pub fn cell_of(&self, p: Vec2) -> Cell {
        ((p.x / self.cell).floor() as i32, (p.y / self.cell).floor() as i32)
    }

    /// Head count of the cell containing `p`.
    pub fn count_at(&self, p: Vec2) -> u32 {
        self.counts.get(&self.cell_of(p)).copied().unwrap_or(0)
    }

    pub fn occupied_cells(&self) -> usize {
        self.counts.len()
    }

    /// Agents counted in the grid.
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    /// Highest single-cell count, `0` for an empty grid.
    pub fn peak(&self) -> u32 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Mean head count over occupied cells; `0.0` when nothing is occupied.
    pub fn avg_density(&self) -> f32 {
        if self.counts.is_empty() {
            0.0
        } else {
            self.total() as f32 / self.counts.len() as f32
        }
    }

    /// Cells holding at least `threshold` agents.
    pub fn cells_at_least(&self, threshold: u32) -> u32 {
        self.counts.values().filter(|&&c| c >= threshold).count() as u32
    }

    /// `(cell, count)` for every occupied cell, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.counts.iter().map(|(&k, &v)| (k, v))
    }
}
