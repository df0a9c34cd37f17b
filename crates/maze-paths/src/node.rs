use maze_core::{Action, Cell};

/// Stable handle to a node stored in a [`NodeArena`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One discovered search state.
///
/// Nodes are never mutated after creation; a cheaper rediscovery of the same
/// state produces a fresh node.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SearchNode {
    pub state: Cell,
    /// Expanded node this one was generated from; `None` for the root.
    pub parent: Option<NodeId>,
    /// Move taken from the parent; `None` for the root.
    pub action: Option<Action>,
    /// Path cost from the start.
    pub g: u32,
    /// Heuristic estimate to the goal.
    pub h: f64,
}

impl SearchNode {
    /// The root node at `state`.
    pub fn root(state: Cell, h: f64) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            g: 0,
            h,
        }
    }

    /// A successor of the expanded node `parent`, one unit step further.
    pub fn child(parent: NodeId, from: &SearchNode, action: Action, state: Cell, h: f64) -> Self {
        Self {
            state,
            parent: Some(parent),
            action: Some(action),
            g: from.g + 1,
            h,
        }
    }

    /// `g + h`.
    #[inline]
    pub fn f(&self) -> f64 {
        self.g as f64 + self.h
    }
}

/// Append-only storage for expanded nodes.
///
/// Parent links are arena indices, so reconstructing a path is a walk over
/// plain integers.
#[derive(Debug, Default, Clone)]
pub struct NodeArena {
    nodes: Vec<SearchNode>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `node` and return its handle.
    pub fn push(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    #[inline]
    pub fn get(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Actions and cells from the root to `id`, excluding the root cell.
    pub fn path_to(&self, id: NodeId) -> (Vec<Action>, Vec<Cell>) {
        let mut actions = Vec::new();
        let mut cells = Vec::new();
        let mut node = self.get(id);
        while let (Some(parent), Some(action)) = (node.parent, node.action) {
            actions.push(action);
            cells.push(node.state);
            node = self.get(parent);
        }
        actions.reverse();
        cells.reverse();
        (actions, cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_to_walks_parents() {
        let mut arena = NodeArena::new();
        let root = SearchNode::root(Cell::new(0, 0), 2.0);
        let r = arena.push(root);
        let a = SearchNode::child(r, &root, Action::Down, Cell::new(1, 0), 1.0);
        let ai = arena.push(a);
        let b = SearchNode::child(ai, &a, Action::Right, Cell::new(1, 1), 0.0);
        let bi = arena.push(b);

        assert_eq!(arena.get(bi).g, 2);
        assert_eq!(arena.get(bi).f(), 2.0);
        let (actions, cells) = arena.path_to(bi);
        assert_eq!(actions, vec![Action::Down, Action::Right]);
        assert_eq!(cells, vec![Cell::new(1, 0), Cell::new(1, 1)]);
    }

    #[test]
    fn root_path_is_empty() {
        let mut arena = NodeArena::new();
        let r = arena.push(SearchNode::root(Cell::new(3, 3), 0.0));
        let (actions, cells) = arena.path_to(r);
        assert!(actions.is_empty());
        assert!(cells.is_empty());
        assert_eq!(arena.len(), 1);
    }
}
