//! Tile graph for pathfinding
//!
//! A fixed grid of traversal nodes derived from the map, stored row-major.
//! The graph is built once by the map loader and read-only afterwards;
//! per-query filtering (zone avoidance, fuzz) lives in search policies so
//! the shared graph is never mutated.

use ahash::RandomState;
use serde::{Deserialize, Serialize};

use crate::core::config::AiConfig;
use crate::core::error::{AiError, Result};
use crate::core::types::{Rect, Vec2};
use crate::map::search::{search, ExactPolicy, SearchPath, SearchPolicy, SearchSpace};

/// Grid coordinates of one tile (column, row)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: i32,
    pub row: i32,
}

impl Cell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }
}

/// One cell of the traversal grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TileCell {
    pub walkable: bool,
    /// Base traversal cost for entering this cell
    pub cost: f32,
}

impl Default for TileCell {
    fn default() -> Self {
        Self { walkable: true, cost: 1.0 }
    }
}

/// A path across the tile grid
pub type TilePath = SearchPath<Cell>;

/// The traversal grid, row-major with stride-based indexing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileGraph {
    width: u32,
    height: u32,
    /// World units per tile edge
    tile_size: f32,
    cells: Vec<TileCell>,
    /// Lower bound on any walkable cell cost, kept for the heuristic.
    /// Only ever decreases, so it stays admissible if costs are raised.
    min_cost: f32,
    /// Seed for the fuzzy-path per-cell penalty, from [`AiConfig::fuzzy_seed`]
    fuzzy_seed: u64,
}

#[inline]
fn cell_count(width: u32, height: u32) -> usize {
    width as usize * height as usize
}

impl TileGraph {
    pub fn new(width: u32, height: u32, tile_size: f32) -> Self {
        Self {
            width,
            height,
            tile_size,
            cells: vec![TileCell::default(); cell_count(width, height)],
            min_cost: 1.0,
            fuzzy_seed: AiConfig::default().fuzzy_seed,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    pub fn fuzzy_seed(&self) -> u64 {
        self.fuzzy_seed
    }

    /// Map-load mutation only; wires [`AiConfig::fuzzy_seed`] into the graph
    /// so repeated fuzzy queries can differ between sessions.
    pub fn set_fuzzy_seed(&mut self, seed: u64) {
        self.fuzzy_seed = seed;
    }

    #[inline]
    fn index(&self, cell: Cell) -> usize {
        cell.row as usize * self.width as usize + cell.col as usize
    }

    #[inline]
    fn in_bounds(&self, col: i32, row: i32) -> bool {
        col >= 0 && row >= 0 && (col as u32) < self.width && (row as u32) < self.height
    }

    /// Bounds-checked lookup by grid index (not world coordinates)
    pub fn node_at(&self, col: i32, row: i32) -> Result<&TileCell> {
        if !self.in_bounds(col, row) {
            return Err(AiError::OutOfBounds {
                col,
                row,
                width: self.width,
                height: self.height,
            });
        }
        Ok(&self.cells[self.index(Cell::new(col, row))])
    }

    /// The cell containing a world coordinate, or `None` outside the extent
    pub fn node_at_world(&self, x: f32, y: f32) -> Option<Cell> {
        let col = (x / self.tile_size).floor() as i32;
        let row = (y / self.tile_size).floor() as i32;
        self.in_bounds(col, row).then_some(Cell::new(col, row))
    }

    /// Center of a cell in world coordinates
    pub fn cell_center(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.col as f32 + 0.5) * self.tile_size,
            (cell.row as f32 + 0.5) * self.tile_size,
        )
    }

    /// Map-load mutation only; the graph is read-only once handed to the AI.
    pub fn set_walkable(&mut self, col: i32, row: i32, walkable: bool) {
        if self.in_bounds(col, row) {
            let idx = self.index(Cell::new(col, row));
            self.cells[idx].walkable = walkable;
        }
    }

    /// Map-load mutation only.
    pub fn set_cost(&mut self, col: i32, row: i32, cost: f32) {
        if self.in_bounds(col, row) {
            let idx = self.index(Cell::new(col, row));
            self.cells[idx].cost = cost;
            if cost < self.min_cost {
                self.min_cost = cost;
            }
        }
    }

    /// Exact shortest path between two world positions.
    ///
    /// Empty path when both map to the same cell, `None` when either
    /// position is off-grid or no path exists.
    pub fn find_path(&self, start: Vec2, destination: Vec2) -> Option<TilePath> {
        let (s, d) = self.endpoints(start, destination)?;
        search(self, s, d, &ExactPolicy)
    }

    /// Shortest path that never enters any of the given zones.
    ///
    /// Cells whose center lies inside an avoided zone are excluded from
    /// expansion for this query only.
    pub fn find_path_avoiding_zones(
        &self,
        start: Vec2,
        destination: Vec2,
        zones_to_avoid: &[Rect],
    ) -> Option<TilePath> {
        let (s, d) = self.endpoints(start, destination)?;
        let policy = AvoidZonesPolicy { graph: self, zones: zones_to_avoid };
        search(self, s, d, &policy)
    }

    /// A deliberately imperfect path.
    ///
    /// `fuzziness` scales a deterministic per-cell penalty added to the
    /// cost function, so the search itself wanders; the result is one
    /// coherent path, not a detour stitched on afterwards. Zero fuzziness
    /// is cost-equal to [`find_path`], and the returned path's base cost
    /// never decreases as fuzziness grows. The penalty is deterministic
    /// for the graph's configured [`fuzzy_seed`](Self::fuzzy_seed).
    pub fn find_fuzzy_path(
        &self,
        start: Vec2,
        destination: Vec2,
        fuzziness: f32,
    ) -> Option<TilePath> {
        let (s, d) = self.endpoints(start, destination)?;
        let policy = FuzzyPolicy::new(fuzziness, self.fuzzy_seed);
        search(self, s, d, &policy)
    }

    fn endpoints(&self, start: Vec2, destination: Vec2) -> Option<(Cell, Cell)> {
        let s = self.node_at_world(start.x, start.y)?;
        let d = self.node_at_world(destination.x, destination.y)?;
        Some((s, d))
    }
}

impl SearchSpace for TileGraph {
    type Node = Cell;

    fn successors(&self, node: Cell) -> Vec<(Cell, f32)> {
        const OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
        let mut out = Vec::with_capacity(4);
        for (dc, dr) in OFFSETS {
            let col = node.col + dc;
            let row = node.row + dr;
            if !self.in_bounds(col, row) {
                continue;
            }
            let cell = Cell::new(col, row);
            let tile = self.cells[self.index(cell)];
            if tile.walkable {
                out.push((cell, tile.cost));
            }
        }
        out
    }

    fn heuristic(&self, node: Cell, goal: Cell) -> f32 {
        // Manhattan distance on a 4-connected grid, scaled by the cheapest
        // cell cost so it never overestimates.
        let dc = (node.col - goal.col).abs() as f32;
        let dr = (node.row - goal.row).abs() as f32;
        (dc + dr) * self.min_cost
    }
}

/// Excludes cells whose world position falls inside any avoided zone
struct AvoidZonesPolicy<'a> {
    graph: &'a TileGraph,
    zones: &'a [Rect],
}

impl SearchPolicy<Cell> for AvoidZonesPolicy<'_> {
    fn allows(&self, node: Cell) -> bool {
        let center = self.graph.cell_center(node);
        !self.zones.iter().any(|z| z.contains(center))
    }
}

/// Biases the cost function with a seeded per-cell penalty in [0, fuzziness)
struct FuzzyPolicy {
    fuzziness: f32,
    hasher: RandomState,
}

impl FuzzyPolicy {
    fn new(fuzziness: f32, seed: u64) -> Self {
        Self {
            fuzziness: fuzziness.max(0.0),
            hasher: RandomState::with_seeds(seed, seed ^ 0x9e37_79b9, seed.rotate_left(17), !seed),
        }
    }
}

impl SearchPolicy<Cell> for FuzzyPolicy {
    fn cost_bias(&self, node: Cell) -> f32 {
        if self.fuzziness == 0.0 {
            return 0.0;
        }
        let h = self.hasher.hash_one((node.col, node.row));
        // Map the hash onto [0, 1) and scale.
        let unit = (h >> 11) as f32 / (1u64 << 53) as f32;
        unit * self.fuzziness
    }
}
