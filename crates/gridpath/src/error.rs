use std::fmt;

use gridpath_core::{Bounds, Cell};

/// Result of a search that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A path from start to goal, both included.
    Found(Vec<Cell>),
    /// Every reachable cell was expanded without reaching the goal.
    NotFound,
    /// The observer asked the search to stop.
    Cancelled,
}

impl SearchOutcome {
    /// Whether a path was found.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }

    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }

    /// Consume the outcome, returning the path if one was found.
    pub fn into_path(self) -> Option<Vec<Cell>> {
        match self {
            Self::Found(path) => Some(path),
            _ => None,
        }
    }
}

/// Invalid search requests. Detected before the search starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// Start or goal lies outside the grid.
    OutOfBounds { cell: Cell, bounds: Bounds },
    /// Start or goal is blocked and the endpoint policy rejects it.
    BlockedEndpoint { cell: Cell },
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { cell, bounds } => {
                write!(f, "search: endpoint {cell} is outside the {bounds} grid")
            }
            Self::BlockedEndpoint { cell } => write!(f, "search: endpoint {cell} is blocked"),
        }
    }
}

impl std::error::Error for SearchError {}
