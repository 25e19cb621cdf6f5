use super::grid::Grid;

/// Configuration for one game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Width of the board in cells
    pub columns: usize,
    /// Height of the board in cells
    pub rows: usize,
    /// Snake length at the start of a run
    pub initial_snake_length: usize,

    // Difficulty curve
    /// Ticks per second at the start of a run
    pub initial_speed: u32,
    /// Ticks per second the ramp never exceeds
    pub max_speed: u32,
    /// How much the speed rises at each ramp step
    pub speed_increment: u32,
    /// Score interval between ramp steps
    pub points_per_speedup: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            columns: 30,
            rows: 20,
            initial_snake_length: 3,
            initial_speed: 10,
            max_speed: 25,
            speed_increment: 2,
            points_per_speedup: 5,
        }
    }
}

impl GameConfig {
    /// Create a configuration with a custom board size
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    /// Create a small board for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    pub fn grid(&self) -> Grid {
        Grid::new(self.columns, self.rows)
    }
}
