//! Errors raised while building a [`Grid`](crate::Grid).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::geom::Cell;

/// Errors that can occur when constructing or loading a maze.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The layout does not contain exactly one start marker.
    #[error("maze must have exactly one start point, found {0}")]
    StartCount(usize),

    /// The layout does not contain exactly one goal marker.
    #[error("maze must have exactly one goal point, found {0}")]
    GoalCount(usize),

    /// Height or width is zero.
    #[error("maze has no cells")]
    Empty,

    /// The occupancy matrix cannot be reconciled with the requested size.
    #[error("occupancy matrix has {found} cells, expected {height}x{width}")]
    Shape {
        height: usize,
        width: usize,
        found: usize,
    },

    /// Start or goal lies outside the grid or on a wall.
    #[error("{role} {cell} is not a passable cell of the grid")]
    Endpoint { role: &'static str, cell: Cell },

    /// The maze file could not be read.
    #[error("cannot read maze file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MazeError {
    /// Whether the error describes bad maze content rather than an I/O
    /// failure.
    pub fn is_malformed(&self) -> bool {
        !matches!(self, MazeError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, MazeError>;
