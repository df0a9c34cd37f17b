//! Informed and uninformed search over maze grids.
//!
//! This crate drives A*, Dijkstra (uniform-cost) and greedy best-first
//! search over a [`maze_core::Grid`]:
//!
//! - **Heuristics** ([`Distance`], or any `Fn(Cell, Cell) -> f64`)
//! - **Frontier** ([`Frontier`]): min-priority queue with FIFO tie-breaking
//!   and a per-state [`DuplicatePolicy`]
//! - **Engine** ([`solve`], [`Search`]): node arena, explored set, path
//!   reconstruction and statistics
//! - **BFS** reachability ([`is_reachable`], [`bfs_map`])
//!
//! ```
//! use maze_core::Grid;
//! use maze_paths::{Distance, Mode, solve};
//!
//! let grid = Grid::parse("A B").unwrap();
//! let result = solve(&grid, &Distance::Manhattan, Mode::Astar).unwrap();
//! assert_eq!(result.path_cost, 2);
//! ```

mod bfs;
mod distance;
mod error;
mod frontier;
mod heuristic;
mod node;
mod search;

pub use bfs::{bfs_map, is_reachable};
pub use distance::{euclidean, manhattan};
pub use error::{Result, SearchError};
pub use frontier::{DuplicatePolicy, Frontier};
pub use heuristic::{Distance, Heuristic};
pub use node::{NodeArena, NodeId, SearchNode};
pub use search::{Mode, Search, SearchResult, Status, solve};
