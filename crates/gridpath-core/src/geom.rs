//! The [`Pos`] type: a `(row, col)` address on a square grid.

use std::fmt;

// ---------------------------------------------------------------------------
// Pos
// ---------------------------------------------------------------------------

/// A cell address. Rows grow downward, columns grow rightward, both
/// 0-indexed.
///
/// Ordering is row-major, so sorting a set of positions yields the same
/// order as iterating the grid.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The cell one row below. Never fails; bounds are the grid's concern.
    #[inline]
    pub const fn down(self) -> Self {
        Self::new(self.row + 1, self.col)
    }

    /// The cell one row above, or `None` on row 0.
    #[inline]
    pub fn up(self) -> Option<Self> {
        self.row.checked_sub(1).map(|row| Self::new(row, self.col))
    }

    /// The cell one column to the left, or `None` on column 0.
    #[inline]
    pub fn left(self) -> Option<Self> {
        self.col.checked_sub(1).map(|col| Self::new(self.row, col))
    }

    /// The cell one column to the right.
    #[inline]
    pub const fn right(self) -> Self {
        Self::new(self.row, self.col + 1)
    }

    /// Whether `other` shares an edge with `self`.
    #[inline]
    pub fn is_adjacent(self, other: Pos) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Pos {
    #[inline]
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_at_origin() {
        let p = Pos::ZERO;
        assert_eq!(p.up(), None);
        assert_eq!(p.left(), None);
        assert_eq!(p.down(), Pos::new(1, 0));
        assert_eq!(p.right(), Pos::new(0, 1));
    }

    #[test]
    fn row_major_order() {
        let mut v = vec![Pos::new(1, 0), Pos::new(0, 2), Pos::new(0, 1)];
        v.sort();
        assert_eq!(v, vec![Pos::new(0, 1), Pos::new(0, 2), Pos::new(1, 0)]);
    }

    #[test]
    fn adjacency() {
        let p = Pos::new(2, 2);
        assert!(p.is_adjacent(Pos::new(1, 2)));
        assert!(p.is_adjacent(Pos::new(2, 3)));
        assert!(!p.is_adjacent(Pos::new(3, 3)));
        assert!(!p.is_adjacent(p));
    }

    #[test]
    fn display() {
        assert_eq!(Pos::new(3, 7).to_string(), "(3, 7)");
    }
}
