//! The search engine shared by A*, Dijkstra and greedy best-first search.
//!
//! One skeleton serves all three modes; they differ only in how a node's
//! priority is computed and in how rediscovered states are handled:
//!
//! | Mode | Priority | Duplicates |
//! |---|---|---|
//! | [`Mode::Astar`] | `g + h` | [`DuplicatePolicy`] (cost-aware by default) |
//! | [`Mode::Dijkstra`] | `g` | [`DuplicatePolicy`] (simple by default) |
//! | [`Mode::Greedy`] | `h` | eager `visited` set, filled when a state is generated |
//!
//! Greedy's eager `visited` set never revisits a state even if a shorter
//! route to it shows up later, so greedy paths can be longer than optimal.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use maze_core::{Action, Cell, Grid};

use crate::error::{Result, SearchError};
use crate::frontier::{DuplicatePolicy, Frontier};
use crate::heuristic::Heuristic;
use crate::node::{NodeArena, NodeId, SearchNode};

// ---------------------------------------------------------------------------
// Mode / Status
// ---------------------------------------------------------------------------

/// Which algorithm [`Search`] runs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Mode {
    #[default]
    Astar,
    /// Uniform-cost search; the heuristic is ignored.
    Dijkstra,
    /// Greedy best-first search on the heuristic alone.
    Greedy,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Mode::Astar, Mode::Dijkstra, Mode::Greedy];

    pub const fn name(self) -> &'static str {
        match self {
            Mode::Astar => "astar",
            Mode::Dijkstra => "dijkstra",
            Mode::Greedy => "greedy",
        }
    }

    /// Duplicate handling used unless [`Search::with_policy`] overrides it.
    ///
    /// A* keeps the cheapest `g` per state so that tied `f` values cannot
    /// fix a longer route. With unit steps and FIFO ties Dijkstra discovers
    /// every state at its optimal `g`, so first-come is enough there.
    pub const fn default_policy(self) -> DuplicatePolicy {
        match self {
            Mode::Astar => DuplicatePolicy::CostAware,
            Mode::Dijkstra | Mode::Greedy => DuplicatePolicy::Simple,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Mode {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "astar" | "a*" => Ok(Mode::Astar),
            "dijkstra" | "ucs" => Ok(Mode::Dijkstra),
            "greedy" | "gbfs" => Ok(Mode::Greedy),
            _ => Err(SearchError::UnknownName {
                kind: "search mode",
                name: s.to_string(),
            }),
        }
    }
}

/// Lifecycle of a [`Search`]. `Solved` and `Exhausted` are terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Initialized,
    Running,
    Solved,
    Exhausted,
}

impl Status {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, Status::Solved | Status::Exhausted)
    }
}

// ---------------------------------------------------------------------------
// SearchResult
// ---------------------------------------------------------------------------

/// Outcome of a successful search.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Moves from the start to the goal; empty when start == goal.
    pub actions: Vec<Action>,
    /// Cell reached by each move, ending at the goal.
    pub cells: Vec<Cell>,
    /// Number of nodes popped from the frontier, goal included.
    pub nodes_expanded: usize,
    /// Number of unit steps on the path.
    pub path_cost: u32,
    pub elapsed: Duration,
    /// Expanded states in expansion order, goal excluded.
    pub explored: Vec<Cell>,
}

impl SearchResult {
    /// Whether the result describes the same search outcome as `other`,
    /// ignoring timing.
    pub fn same_outcome(&self, other: &SearchResult) -> bool {
        self.actions == other.actions
            && self.cells == other.cells
            && self.nodes_expanded == other.nodes_expanded
            && self.path_cost == other.path_cost
            && self.explored == other.explored
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// An incremental search over a [`Grid`].
///
/// The grid is only borrowed, never modified. Each `Search` owns its
/// frontier, explored set and node arena, so independent searches can run
/// on different threads over the same grid.
pub struct Search<'a, H: ?Sized> {
    grid: &'a Grid,
    heuristic: &'a H,
    mode: Mode,
    policy: DuplicatePolicy,
    frontier: Frontier,
    arena: NodeArena,
    explored: HashSet<Cell>,
    explored_order: Vec<Cell>,
    // best g per state (cost-aware policy)
    best_g: HashMap<Cell, u32>,
    // states already generated (greedy)
    visited: HashSet<Cell>,
    nodes_expanded: usize,
    status: Status,
    started: Option<Instant>,
    elapsed: Duration,
    solution: Option<NodeId>,
}

impl<'a, H: Heuristic + ?Sized> Search<'a, H> {
    /// Prepare a search from `grid.start()` to `grid.goal()`.
    pub fn new(grid: &'a Grid, heuristic: &'a H, mode: Mode) -> Self {
        Self {
            grid,
            heuristic,
            mode,
            policy: mode.default_policy(),
            frontier: Frontier::default(),
            arena: NodeArena::new(),
            explored: HashSet::new(),
            explored_order: Vec::new(),
            best_g: HashMap::new(),
            visited: HashSet::new(),
            nodes_expanded: 0,
            status: Status::Initialized,
            started: None,
            elapsed: Duration::ZERO,
            solution: None,
        }
    }

    /// Choose how A* and Dijkstra treat rediscovered states. Greedy search
    /// ignores this and always uses its `visited` set.
    ///
    /// Only takes effect before the first [`step`](Self::step).
    pub fn with_policy(mut self, policy: DuplicatePolicy) -> Self {
        if self.status == Status::Initialized {
            self.policy = policy;
        }
        self
    }

    #[inline]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }

    #[inline]
    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    /// States expanded so far, in expansion order.
    #[inline]
    pub fn explored(&self) -> &[Cell] {
        &self.explored_order
    }

    /// Live frontier entries.
    #[inline]
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    /// Expand one node and return the resulting status.
    ///
    /// Once a terminal status is reached further calls are no-ops.
    pub fn step(&mut self) -> Result<Status> {
        match self.status {
            Status::Solved | Status::Exhausted => return Ok(self.status),
            Status::Initialized => self.begin(),
            Status::Running => {}
        }

        if self.frontier.is_empty() {
            self.finish(Status::Exhausted);
            return Ok(self.status);
        }

        let node = self.frontier.pop_min()?;
        self.nodes_expanded += 1;
        let id = self.arena.push(node);
        log::trace!(
            "{}: expand {} g={} h={:.2}",
            self.mode,
            node.state,
            node.g,
            node.h
        );

        if node.state == self.grid.goal() {
            self.solution = Some(id);
            self.finish(Status::Solved);
            return Ok(self.status);
        }

        if self.explored.insert(node.state) {
            self.explored_order.push(node.state);
        }
        self.expand(id, &node);
        Ok(self.status)
    }

    /// Step until the search terminates.
    ///
    /// Fails with [`SearchError::NoPath`] if the goal is unreachable.
    pub fn run(mut self) -> Result<SearchResult> {
        loop {
            match self.step()? {
                Status::Solved => break,
                Status::Exhausted => {
                    return Err(SearchError::NoPath {
                        nodes_expanded: self.nodes_expanded,
                    });
                }
                Status::Initialized | Status::Running => {}
            }
        }
        self.result().ok_or(SearchError::NoPath {
            nodes_expanded: self.nodes_expanded,
        })
    }

    /// The solution, once the search is [`Status::Solved`].
    pub fn result(&self) -> Option<SearchResult> {
        let id = self.solution?;
        let (actions, cells) = self.arena.path_to(id);
        Some(SearchResult {
            actions,
            cells,
            nodes_expanded: self.nodes_expanded,
            path_cost: self.arena.get(id).g,
            elapsed: self.elapsed,
            explored: self.explored_order.clone(),
        })
    }

    fn begin(&mut self) {
        let start = self.grid.start();
        self.status = Status::Running;
        self.started = Some(Instant::now());
        self.frontier = Frontier::new(self.policy);

        let root = SearchNode::root(start, self.estimate(start));
        match (self.mode, self.policy) {
            (Mode::Greedy, _) => {
                self.visited.insert(start);
            }
            (_, DuplicatePolicy::CostAware) => {
                self.best_g.insert(start, 0);
            }
            (_, DuplicatePolicy::Simple) => {}
        }
        let priority = self.priority(&root);
        self.frontier.add(root, priority);

        log::debug!(
            "{} search {} -> {} on {}x{} grid ({} duplicates)",
            self.mode,
            start,
            self.grid.goal(),
            self.grid.height(),
            self.grid.width(),
            self.policy
        );
    }

    fn expand(&mut self, id: NodeId, node: &SearchNode) {
        let grid = self.grid;
        for (action, next) in grid.neighbors(node.state) {
            let fresh = match (self.mode, self.policy) {
                (Mode::Greedy, _) => self.visited.insert(next),
                (_, DuplicatePolicy::Simple) => {
                    !self.explored.contains(&next) && !self.frontier.contains(next)
                }
                (_, DuplicatePolicy::CostAware) => {
                    let g = node.g + 1;
                    match self.best_g.get(&next) {
                        Some(&best) if best <= g => false,
                        _ => {
                            self.best_g.insert(next, g);
                            true
                        }
                    }
                }
            };
            if !fresh {
                continue;
            }
            let child = SearchNode::child(id, node, action, next, self.estimate(next));
            let priority = self.priority(&child);
            self.frontier.add(child, priority);
        }
    }

    fn finish(&mut self, status: Status) {
        self.status = status;
        self.elapsed = self.started.map(|t| t.elapsed()).unwrap_or_default();
        match self.solution {
            Some(id) => log::debug!(
                "{} solved: cost {}, {} nodes expanded in {:?}",
                self.mode,
                self.arena.get(id).g,
                self.nodes_expanded,
                self.elapsed
            ),
            None => log::debug!(
                "{} exhausted the frontier after {} nodes",
                self.mode,
                self.nodes_expanded
            ),
        }
    }

    #[inline]
    fn estimate(&self, c: Cell) -> f64 {
        match self.mode {
            Mode::Dijkstra => 0.0,
            Mode::Astar | Mode::Greedy => self.heuristic.estimate(c, self.grid.goal()),
        }
    }

    #[inline]
    fn priority(&self, node: &SearchNode) -> f64 {
        match self.mode {
            Mode::Greedy => node.h,
            Mode::Astar | Mode::Dijkstra => node.f(),
        }
    }
}

/// Solve `grid` with `mode`, using [`Mode::default_policy`].
pub fn solve<H: Heuristic + ?Sized>(grid: &Grid, heuristic: &H, mode: Mode) -> Result<SearchResult> {
    Search::new(grid, heuristic, mode).run()
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use crate::heuristic::Distance;

    #[test]
    fn result_round_trip() {
        let g = Grid::parse("A B").unwrap();
        let r = solve(&g, &Distance::Manhattan, Mode::Astar).unwrap();
        let json = serde_json::to_string(&r).unwrap();
        assert!(json.contains("\"right\""));
        let back: SearchResult = serde_json::from_str(&json).unwrap();
        assert!(r.same_outcome(&back));
    }
}
