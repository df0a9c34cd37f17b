//! Random maze generation and search benchmarking.
//!
//! - **Generation** ([`MapGen`], [`generate`]): square random-obstacle mazes,
//!   redrawn until the corner-to-corner route exists.
//! - **Benchmarking** ([`compare`]): every search mode × heuristic on a set
//!   of grids, one [`Record`] per run.

pub mod bench;
pub mod error;
pub mod mapgen;

pub use bench::{Record, compare, table_header};
pub use error::{GenError, Result};
pub use mapgen::{GenConfig, MapGen, generate, is_solvable};
