//! Side-by-side comparison of search modes and heuristics.

use std::fmt;
use std::time::{Duration, Instant};

use maze_core::Grid;
use maze_paths::{Distance, DuplicatePolicy, Mode, Search, SearchError};

/// One (maze, mode, heuristic) measurement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Side length of the maze (its height for non-square grids).
    pub size: usize,
    pub mode: Mode,
    pub heuristic: Distance,
    pub nodes_expanded: usize,
    /// `None` when the goal was unreachable.
    pub path_cost: Option<u32>,
    pub elapsed: Duration,
}

impl Record {
    /// Path cost as printed in tables: a number or `inf`.
    pub fn cost_label(&self) -> String {
        match self.path_cost {
            Some(c) => c.to_string(),
            None => "inf".to_string(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>5} {:<9} {:<10} {:>8} {:>6} {:>12.6}",
            self.size,
            self.mode,
            self.heuristic,
            self.nodes_expanded,
            self.cost_label(),
            self.elapsed.as_secs_f64()
        )
    }
}

/// Run every `mode` with every `heuristic` on every grid.
///
/// A* and Dijkstra use `policy` for rediscovered states. Records come out
/// grid-major, then heuristic, then mode.
pub fn compare(
    grids: &[Grid],
    heuristics: &[Distance],
    modes: &[Mode],
    policy: DuplicatePolicy,
) -> Vec<Record> {
    let mut records = Vec::with_capacity(grids.len() * heuristics.len() * modes.len());
    for grid in grids {
        for &heuristic in heuristics {
            for &mode in modes {
                records.push(measure(grid, heuristic, mode, policy));
            }
        }
    }
    records
}

fn measure(grid: &Grid, heuristic: Distance, mode: Mode, policy: DuplicatePolicy) -> Record {
    let t0 = Instant::now();
    let outcome = Search::new(grid, &heuristic, mode).with_policy(policy).run();
    let (nodes_expanded, path_cost, elapsed) = match outcome {
        Ok(r) => (r.nodes_expanded, Some(r.path_cost), r.elapsed),
        Err(SearchError::NoPath { nodes_expanded }) => (nodes_expanded, None, t0.elapsed()),
        Err(e) => {
            log::error!("{mode}/{heuristic} search failed: {e}");
            (0, None, t0.elapsed())
        }
    };
    Record {
        size: grid.height(),
        mode,
        heuristic,
        nodes_expanded,
        path_cost,
        elapsed,
    }
}

/// Header line matching [`Record`]'s `Display` layout.
pub fn table_header() -> String {
    format!(
        "{:>5} {:<9} {:<10} {:>8} {:>6} {:>12}",
        "size", "algorithm", "heuristic", "expanded", "cost", "seconds"
    )
}
