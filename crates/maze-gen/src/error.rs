use thiserror::Error;

/// Errors raised by the maze generator.
#[derive(Debug, Error)]
pub enum GenError {
    /// The configuration cannot produce a maze.
    #[error("invalid generator config: {0}")]
    InvalidConfig(String),

    /// No solvable maze turned up within the attempt budget.
    #[error("no solvable {size}x{size} maze after {attempts} attempts")]
    Unsolvable { size: usize, attempts: usize },

    #[error(transparent)]
    Maze(#[from] maze_core::MazeError),
}

pub type Result<T> = std::result::Result<T, GenError>;
