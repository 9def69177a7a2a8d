use std::fmt;

use gridpath_core::{EndpointError, Pos};

/// Errors that prevent a search from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// The endpoints are missing, duplicated, equal, off-grid or blocked.
    InvalidEndpoints(EndpointError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEndpoints(e) => write!(f, "invalid endpoints: {e}"),
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidEndpoints(e) => Some(e),
        }
    }
}

impl From<EndpointError> for SearchError {
    fn from(e: EndpointError) -> Self {
        Self::InvalidEndpoints(e)
    }
}

/// Errors when building a [`Path`](crate::Path) from a cell list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// A path needs both endpoints; holds the number of cells given.
    TooShort(usize),
    /// Two consecutive cells are not 4-adjacent.
    Gap { from: Pos, to: Pos },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort(n) => write!(f, "path needs at least 2 cells, got {n}"),
            Self::Gap { from, to } => write!(f, "path steps from {from} to non-adjacent {to}"),
        }
    }
}

impl std::error::Error for PathError {}
