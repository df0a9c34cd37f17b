//! **maze-core**: the maze model shared by the search, generator and CLI
//! crates.
//!
//! This crate provides the [`Grid`] occupancy model with its start and goal
//! cells, the [`Cell`] and [`Action`] geometry types, the text layout format
//! (`A` start, `B` goal, space open, anything else wall) and the [`Tile`]
//! classification used by renderers.

pub mod error;
pub mod geom;
pub mod grid;
pub mod tile;

pub use error::{MazeError, Result};
pub use geom::{Action, Cell};
pub use grid::Grid;
pub use tile::Tile;
