//! Min-priority frontier with duplicate-state tracking.
//!
//! Entries are keyed by `(priority, sequence)`: equal priorities come out in
//! insertion order, which keeps exploration order reproducible. At most one
//! live entry exists per state; entries superseded by a cheaper rediscovery
//! stay in the heap and are skipped when popped.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap};
use std::fmt;
use std::str::FromStr;

use maze_core::Cell;

use crate::error::{Result, SearchError};
use crate::node::SearchNode;

/// What [`Frontier::add`] does with a state that is already queued.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum DuplicatePolicy {
    /// The first discovery wins; later ones are dropped.
    #[default]
    Simple,
    /// A later discovery replaces the queued one if its `g` is strictly
    /// lower.
    CostAware,
}

impl DuplicatePolicy {
    pub const fn name(self) -> &'static str {
        match self {
            DuplicatePolicy::Simple => "simple",
            DuplicatePolicy::CostAware => "cost-aware",
        }
    }
}

impl fmt::Display for DuplicatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for DuplicatePolicy {
    type Err = SearchError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "simple" => Ok(DuplicatePolicy::Simple),
            "cost-aware" | "cost_aware" => Ok(DuplicatePolicy::CostAware),
            _ => Err(SearchError::UnknownName {
                kind: "duplicate policy",
                name: s.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Heap entry
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug)]
struct HeapEntry {
    priority: f64,
    seq: u64,
    node: SearchNode,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (priority, seq) first.
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Live entry bookkeeping for a queued state.
#[derive(Clone, Copy, Debug)]
struct Queued {
    seq: u64,
    g: u32,
}

// ---------------------------------------------------------------------------
// Frontier
// ---------------------------------------------------------------------------

/// Discovered but not yet expanded search nodes.
#[derive(Debug, Default)]
pub struct Frontier {
    policy: DuplicatePolicy,
    heap: BinaryHeap<HeapEntry>,
    queued: HashMap<Cell, Queued>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier with the given duplicate policy.
    pub fn new(policy: DuplicatePolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[inline]
    pub fn policy(&self) -> DuplicatePolicy {
        self.policy
    }

    /// Queue `node` under `priority`.
    ///
    /// Returns `false` if the node was rejected because its state is
    /// already queued (see [`DuplicatePolicy`]).
    pub fn add(&mut self, node: SearchNode, priority: f64) -> bool {
        let seq = self.next_seq;
        match self.queued.entry(node.state) {
            Entry::Vacant(e) => {
                e.insert(Queued { seq, g: node.g });
            }
            Entry::Occupied(mut e) => match self.policy {
                DuplicatePolicy::Simple => return false,
                DuplicatePolicy::CostAware => {
                    if node.g >= e.get().g {
                        return false;
                    }
                    e.insert(Queued { seq, g: node.g });
                }
            },
        }
        self.next_seq += 1;
        self.heap.push(HeapEntry {
            priority,
            seq,
            node,
        });
        true
    }

    /// Whether a live entry for `state` is queued.
    #[inline]
    pub fn contains(&self, state: Cell) -> bool {
        self.queued.contains_key(&state)
    }

    /// Number of live entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.queued.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.queued.is_empty()
    }

    /// Remove and return the live entry with the lowest priority, oldest
    /// first among equals.
    pub fn pop_min(&mut self) -> Result<SearchNode> {
        while let Some(entry) = self.heap.pop() {
            let state = entry.node.state;
            // Skip superseded entries.
            if self.queued.get(&state).is_some_and(|q| q.seq == entry.seq) {
                self.queued.remove(&state);
                return Ok(entry.node);
            }
        }
        Err(SearchError::FrontierEmpty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(row: usize, col: usize, g: u32) -> SearchNode {
        SearchNode {
            g,
            ..SearchNode::root(Cell::new(row, col), 0.0)
        }
    }

    #[test]
    fn pops_lowest_priority_first() {
        let mut f = Frontier::new(DuplicatePolicy::Simple);
        f.add(node(0, 0, 0), 5.0);
        f.add(node(0, 1, 0), 1.5);
        f.add(node(0, 2, 0), 3.0);
        let order: Vec<_> = (0..3).map(|_| f.pop_min().unwrap().state.col).collect();
        assert_eq!(order, vec![1, 2, 0]);
        assert!(f.is_empty());
    }

    #[test]
    fn ties_are_fifo() {
        let mut f = Frontier::new(DuplicatePolicy::Simple);
        for col in [4, 2, 9, 0] {
            f.add(node(0, col, 0), 1.0);
        }
        let order: Vec<_> = (0..4).map(|_| f.pop_min().unwrap().state.col).collect();
        assert_eq!(order, vec![4, 2, 9, 0]);
    }

    #[test]
    fn simple_policy_keeps_first() {
        let mut f = Frontier::new(DuplicatePolicy::Simple);
        assert!(f.add(node(1, 1, 5), 5.0));
        assert!(!f.add(node(1, 1, 2), 2.0));
        assert_eq!(f.len(), 1);
        assert_eq!(f.pop_min().unwrap().g, 5);
    }

    #[test]
    fn cost_aware_replaces_on_strict_improvement() {
        let mut f = Frontier::new(DuplicatePolicy::CostAware);
        assert!(f.add(node(1, 1, 5), 5.0));
        assert!(!f.add(node(1, 1, 5), 5.0));
        assert!(f.add(node(1, 1, 2), 2.0));
        f.add(node(0, 0, 3), 3.0);
        assert_eq!(f.len(), 2);

        let first = f.pop_min().unwrap();
        assert_eq!((first.state, first.g), (Cell::new(1, 1), 2));
        assert_eq!(f.pop_min().unwrap().state, Cell::new(0, 0));
        // The superseded g=5 entry is discarded, not returned.
        assert_eq!(f.pop_min(), Err(SearchError::FrontierEmpty));
    }

    #[test]
    fn state_can_be_requeued_after_pop() {
        let mut f = Frontier::new(DuplicatePolicy::Simple);
        f.add(node(2, 2, 1), 1.0);
        assert!(f.contains(Cell::new(2, 2)));
        f.pop_min().unwrap();
        assert!(!f.contains(Cell::new(2, 2)));
        assert!(f.add(node(2, 2, 0), 0.0));
    }

    #[test]
    fn pop_empty_fails() {
        let mut f = Frontier::new(DuplicatePolicy::default());
        assert!(matches!(f.pop_min(), Err(SearchError::FrontierEmpty)));
    }

    #[test]
    fn policy_names_parse() {
        assert_eq!("cost-aware".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::CostAware));
        assert_eq!("SIMPLE".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Simple));
        assert!("lazy".parse::<DuplicatePolicy>().is_err());
    }
}
