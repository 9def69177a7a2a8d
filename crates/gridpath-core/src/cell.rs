//! The [`Cell`] type and its two orthogonal tags.
//!
//! A cell's structural role ([`CellKind`]) is owned by whoever edits the
//! grid and stays fixed for the duration of a search. Search progress
//! ([`SearchMark`]) is owned by the engine and is cleared between runs.
//! The combined seven-valued [`CellState`] is derived from the two.

use crate::geom::Pos;

/// Structural role of a cell, set by the caller.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    #[default]
    Empty,
    Start,
    End,
    Barrier,
}

impl CellKind {
    /// Whether a search may step onto a cell of this kind.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Barrier)
    }
}

/// Transient search progress, written by the engine.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMark {
    #[default]
    Unmarked,
    Frontier,
    Visited,
    Path,
}

/// The observable state of a cell, as a renderer would see it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Empty,
    Frontier,
    Visited,
    Barrier,
    Start,
    End,
    Path,
}

impl CellState {
    /// Combine a kind and a mark. Any non-empty kind wins.
    pub const fn of(kind: CellKind, mark: SearchMark) -> Self {
        match (kind, mark) {
            (CellKind::Start, _) => Self::Start,
            (CellKind::End, _) => Self::End,
            (CellKind::Barrier, _) => Self::Barrier,
            (CellKind::Empty, SearchMark::Unmarked) => Self::Empty,
            (CellKind::Empty, SearchMark::Frontier) => Self::Frontier,
            (CellKind::Empty, SearchMark::Visited) => Self::Visited,
            (CellKind::Empty, SearchMark::Path) => Self::Path,
        }
    }

    /// Single-character glyph used by the ASCII form of a grid.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Frontier => 'o',
            Self::Visited => 'x',
            Self::Barrier => '#',
            Self::Start => 'S',
            Self::End => 'E',
            Self::Path => '*',
        }
    }
}

/// One addressable unit of a grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Pos,
    pub kind: CellKind,
    pub mark: SearchMark,
}

impl Cell {
    /// An empty, unmarked cell at `pos`.
    #[inline]
    pub const fn new(pos: Pos) -> Self {
        Self {
            pos,
            kind: CellKind::Empty,
            mark: SearchMark::Unmarked,
        }
    }

    /// Set the kind (builder).
    #[inline]
    pub const fn with_kind(mut self, kind: CellKind) -> Self {
        self.kind = kind;
        self
    }

    /// Position of the cell. Fixed at construction.
    #[inline]
    pub const fn pos(&self) -> Pos {
        self.pos
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.pos.row
    }

    #[inline]
    pub const fn col(&self) -> usize {
        self.pos.col
    }

    /// The derived seven-valued state.
    #[inline]
    pub const fn state(&self) -> CellState {
        CellState::of(self.kind, self.mark)
    }

    #[inline]
    pub const fn is_passable(&self) -> bool {
        self.kind.is_passable()
    }

    /// Back to Empty and Unmarked.
    #[inline]
    pub fn reset(&mut self) {
        self.kind = CellKind::Empty;
        self.mark = SearchMark::Unmarked;
    }
}
