use std::fmt;

use crate::cell::CellKind;
use crate::geom::Pos;

/// Why a pair of search endpoints was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndpointError {
    /// The position lies outside an `n`×`n` grid.
    OutOfBounds { pos: Pos, size: usize },
    /// Start and end are the same cell.
    Same(Pos),
    /// An endpoint sits on a barrier.
    Barrier(Pos),
    /// No cell of this kind exists on the grid.
    Missing(CellKind),
    /// More than one cell of this kind exists on the grid.
    Duplicate { kind: CellKind, first: Pos, second: Pos },
}

impl fmt::Display for EndpointError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, size } => {
                write!(f, "endpoint {pos} is outside the {size}x{size} grid")
            }
            Self::Same(p) => write!(f, "start and end are the same cell {p}"),
            Self::Barrier(p) => write!(f, "endpoint {p} is a barrier"),
            Self::Missing(kind) => write!(f, "grid has no {kind:?} cell"),
            Self::Duplicate {
                kind,
                first,
                second,
            } => write!(f, "grid has several {kind:?} cells: {first} and {second}"),
        }
    }
}

impl std::error::Error for EndpointError {}
