//! Random square mazes with a guaranteed route from corner to corner.
//!
//! Every cell is independently a wall with probability
//! [`GenConfig::obstacle_prob`]; the top-left start and bottom-right goal are
//! always open. Layouts without a route are thrown away and redrawn.

use maze_core::{Cell, Grid};
use maze_paths::is_reachable;
use rand::Rng;

use crate::error::{GenError, Result};

/// Parameters for [`MapGen::random_maze`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenConfig {
    /// Side length of the square maze.
    pub size: usize,
    /// Chance (0.0–1.0) that a cell is a wall.
    pub obstacle_prob: f64,
    /// How many layouts to draw before giving up.
    pub max_attempts: usize,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            size: 30,
            obstacle_prob: 0.3,
            max_attempts: 10_000,
        }
    }
}

impl GenConfig {
    /// Default config for a `size`×`size` maze.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(GenError::InvalidConfig("size must be positive".into()));
        }
        if !(0.0..=1.0).contains(&self.obstacle_prob) {
            return Err(GenError::InvalidConfig(format!(
                "obstacle probability {} is outside [0, 1]",
                self.obstacle_prob
            )));
        }
        if self.max_attempts == 0 {
            return Err(GenError::InvalidConfig(
                "max_attempts must be positive".into(),
            ));
        }
        Ok(())
    }
}

/// Maze generator driven by a caller-supplied RNG.
pub struct MapGen<R: Rng> {
    pub rng: R,
}

impl<R: Rng> MapGen<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw layouts until one has a route from start to goal.
    pub fn random_maze(&mut self, cfg: &GenConfig) -> Result<Grid> {
        cfg.validate()?;
        let n = cfg.size;
        let start = Cell::ZERO;
        let goal = Cell::new(n - 1, n - 1);

        for attempt in 1..=cfg.max_attempts {
            let mut walls: Vec<bool> = (0..n * n)
                .map(|_| self.rng.random_bool(cfg.obstacle_prob))
                .collect();
            walls[0] = false;
            walls[n * n - 1] = false;

            let grid = Grid::new(n, n, walls, start, goal)?;
            if is_solvable(&grid) {
                log::debug!(
                    "generated {n}x{n} maze with {} walls after {attempt} attempt(s)",
                    grid.wall_count()
                );
                return Ok(grid);
            }
            log::trace!("attempt {attempt}: {n}x{n} maze unsolvable, redrawing");
        }

        log::warn!(
            "gave up on {n}x{n} maze at obstacle probability {}",
            cfg.obstacle_prob
        );
        Err(GenError::Unsolvable {
            size: n,
            attempts: cfg.max_attempts,
        })
    }
}

/// Whether the goal can be reached from the start.
pub fn is_solvable(grid: &Grid) -> bool {
    is_reachable(grid, grid.start(), grid.goal())
}

/// Generate one maze with `rng`.
pub fn generate<R: Rng>(cfg: &GenConfig, rng: R) -> Result<Grid> {
    MapGen::new(rng).random_maze(cfg)
}
