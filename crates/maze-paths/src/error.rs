//! Search failures.

use thiserror::Error;

/// Errors returned by the search engine and its frontier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The frontier ran dry before the goal was dequeued.
    #[error("no path from start to goal ({nodes_expanded} states explored)")]
    NoPath { nodes_expanded: usize },

    /// `pop_min` was called on an empty frontier.
    #[error("pop from an empty frontier")]
    FrontierEmpty,

    /// A mode, policy or heuristic name did not parse.
    #[error("unknown {kind} `{name}`")]
    UnknownName { kind: &'static str, name: String },
}

pub type Result<T> = std::result::Result<T, SearchError>;
