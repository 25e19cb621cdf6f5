use rand::seq::SliceRandom;
use rand::Rng;

use super::snake::Position;

/// Rejection-sampling attempts before food placement falls back to a scan
/// of the free cells. Sampling degrades as the board fills up.
const SAMPLE_ATTEMPTS: usize = 100;

/// The fixed playfield: a columns x rows board of discrete cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
}

impl Grid {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }

    /// Check if a position is within the grid bounds
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.columns as i32 && pos.y >= 0 && pos.y < self.rows as i32
    }

    /// The center cell, where a fresh snake starts
    pub fn center(&self) -> Position {
        Position::new((self.columns / 2) as i32, (self.rows / 2) as i32)
    }

    pub fn cell_count(&self) -> usize {
        self.columns * self.rows
    }

    /// All cells not covered by `occupied`, scanned row by row
    pub fn free_cells(&self, occupied: &[Position]) -> Vec<Position> {
        let mut free = Vec::new();
        for y in 0..self.rows as i32 {
            for x in 0..self.columns as i32 {
                let pos = Position::new(x, y);
                if !occupied.contains(&pos) {
                    free.push(pos);
                }
            }
        }
        free
    }

    /// Pick a random cell not covered by `occupied`.
    ///
    /// Samples uniformly at random first; after `SAMPLE_ATTEMPTS` misses it
    /// switches to choosing among the scanned free cells, so placement stays
    /// uniform and bounded even on a nearly full board. Returns `None` only
    /// when no free cell exists.
    pub fn place_food<R: Rng>(&self, rng: &mut R, occupied: &[Position]) -> Option<Position> {
        for _ in 0..SAMPLE_ATTEMPTS {
            let pos = Position::new(
                rng.gen_range(0..self.columns) as i32,
                rng.gen_range(0..self.rows) as i32,
            );
            if !occupied.contains(&pos) {
                return Some(pos);
            }
        }

        self.free_cells(occupied).choose(rng).copied()
    }
}
