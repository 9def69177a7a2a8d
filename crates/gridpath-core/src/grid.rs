//! The [`Grid`] type: an `n`×`n` square of [`Cell`]s.
//!
//! The grid owns its cells exclusively. Callers edit cell kinds between
//! searches; the search engine writes [`SearchMark`]s during a run.
//! Neighbors are derived from the live cell kinds on every query, so
//! barrier edits never leave stale adjacency behind.

use std::ops::{Index, IndexMut};

use crate::cell::{Cell, CellKind, CellState, SearchMark};
use crate::error::EndpointError;
use crate::geom::Pos;

/// A square grid of [`Cell`]s stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
}

impl Grid {
    /// Build an `n`×`n` grid of empty, unmarked cells.
    pub fn build(n: usize) -> Self {
        let mut cells = Vec::with_capacity(n * n);
        for row in 0..n {
            for col in 0..n {
                cells.push(Cell::new(Pos::new(row, col)));
            }
        }
        Self { cells, size: n }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Pos) -> bool {
        p.row < self.size && p.col < self.size
    }

    // -----------------------------------------------------------------------
    // Coordinate helpers
    // -----------------------------------------------------------------------

    /// Flat row-major index of `p`, or `None` if out of range.
    #[inline]
    pub fn index_of(&self, p: Pos) -> Option<usize> {
        self.contains(p).then(|| p.row * self.size + p.col)
    }

    /// Position of the flat index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.len()`.
    #[inline]
    pub fn pos_of(&self, i: usize) -> Pos {
        self.cells[i].pos()
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// The cell at `p`, or `None` if out of range.
    #[inline]
    pub fn get(&self, p: Pos) -> Option<&Cell> {
        let i = self.index_of(p)?;
        Some(&self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of range.
    #[inline]
    pub fn get_mut(&mut self, p: Pos) -> Option<&mut Cell> {
        let i = self.index_of(p)?;
        Some(&mut self.cells[i])
    }

    /// Derived state at `p`.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of range.
    #[inline]
    pub fn state(&self, p: Pos) -> CellState {
        self[p].state()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// Positions of every cell whose derived state equals `state`, row-major.
    pub fn positions(&self, state: CellState) -> Vec<Pos> {
        self.cells
            .iter()
            .filter(|c| c.state() == state)
            .map(Cell::pos)
            .collect()
    }

    /// Count cells whose derived state equals `state`.
    pub fn count(&self, state: CellState) -> usize {
        self.cells.iter().filter(|c| c.state() == state).count()
    }

    // -----------------------------------------------------------------------
    // Neighbors
    // -----------------------------------------------------------------------

    /// Append the passable orthogonal neighbors of `p` into `buf`, in the
    /// fixed order down, up, left, right. The caller clears `buf`.
    pub fn neighbors_into(&self, p: Pos, buf: &mut Vec<Pos>) {
        let candidates = [Some(p.down()), p.up(), p.left(), Some(p.right())];
        for n in candidates.into_iter().flatten() {
            if self.get(n).is_some_and(Cell::is_passable) {
                buf.push(n);
            }
        }
    }

    /// The passable orthogonal neighbors of `p` (down, up, left, right).
    pub fn neighbors_of(&self, p: Pos) -> Vec<Pos> {
        let mut buf = Vec::with_capacity(4);
        self.neighbors_into(p, &mut buf);
        buf
    }

    // -----------------------------------------------------------------------
    // Edits
    // -----------------------------------------------------------------------

    /// Overwrite the state at `p`.
    ///
    /// Structural states (Empty, Start, End, Barrier) replace the kind and
    /// clear the mark. Progress states (Frontier, Visited, Path) replace
    /// only the mark. Uniqueness of Start and End is not enforced here;
    /// see [`set_start`](Self::set_start) and [`set_end`](Self::set_end).
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of range.
    pub fn set_state(&mut self, p: Pos, state: CellState) {
        match state {
            CellState::Frontier => self[p].mark = SearchMark::Frontier,
            CellState::Visited => self[p].mark = SearchMark::Visited,
            CellState::Path => self[p].mark = SearchMark::Path,
            CellState::Empty => self.set_kind(p, CellKind::Empty),
            CellState::Start => self.set_kind(p, CellKind::Start),
            CellState::End => self.set_kind(p, CellKind::End),
            CellState::Barrier => self.set_kind(p, CellKind::Barrier),
        }
    }

    /// Overwrite the kind at `p`, clearing its mark.
    ///
    /// # Panics
    ///
    /// Panics if `p` is out of range.
    pub fn set_kind(&mut self, p: Pos, kind: CellKind) {
        let cell = &mut self[p];
        cell.kind = kind;
        cell.mark = SearchMark::Unmarked;
    }

    /// Make `p` the start cell. A previous start cell becomes Empty.
    pub fn set_start(&mut self, p: Pos) {
        self.place_unique(p, CellKind::Start);
    }

    /// Make `p` the end cell. A previous end cell becomes Empty.
    pub fn set_end(&mut self, p: Pos) {
        self.place_unique(p, CellKind::End);
    }

    /// Make `p` a barrier.
    pub fn set_barrier(&mut self, p: Pos) {
        self.set_kind(p, CellKind::Barrier);
    }

    /// Return `p` to Empty and Unmarked.
    pub fn reset(&mut self, p: Pos) {
        self[p].reset();
    }

    /// Return every cell to Empty and Unmarked.
    pub fn reset_all(&mut self) {
        for c in self.cells.iter_mut() {
            c.reset();
        }
    }

    /// Drop every search mark, keeping cell kinds.
    pub fn clear_marks(&mut self) {
        for c in self.cells.iter_mut() {
            c.mark = SearchMark::Unmarked;
        }
    }

    fn place_unique(&mut self, p: Pos, kind: CellKind) {
        // Checked before demoting so a bad index leaves the grid untouched.
        assert!(self.contains(p), "index out of range: {p} in {0}x{0} grid", self.size);
        for c in self.cells.iter_mut().filter(|c| c.kind == kind) {
            c.reset();
        }
        self.set_kind(p, kind);
    }

    // -----------------------------------------------------------------------
    // Endpoints
    // -----------------------------------------------------------------------

    /// Locate the unique Start and End cells.
    pub fn endpoints(&self) -> Result<(Pos, Pos), EndpointError> {
        Ok((self.unique(CellKind::Start)?, self.unique(CellKind::End)?))
    }

    /// Check that `start` and `end` are usable as search endpoints: both in
    /// range, distinct, and passable, on a grid holding at most one Start
    /// and at most one End cell.
    ///
    /// The endpoint cells need not carry the Start/End kinds themselves.
    pub fn validate_endpoints(&self, start: Pos, end: Pos) -> Result<(), EndpointError> {
        for p in [start, end] {
            match self.get(p) {
                None => {
                    return Err(EndpointError::OutOfBounds {
                        pos: p,
                        size: self.size,
                    });
                }
                Some(c) if !c.is_passable() => return Err(EndpointError::Barrier(p)),
                Some(_) => {}
            }
        }
        if start == end {
            return Err(EndpointError::Same(start));
        }
        self.at_most_one(CellKind::Start)?;
        self.at_most_one(CellKind::End)?;
        Ok(())
    }

    fn unique(&self, kind: CellKind) -> Result<Pos, EndpointError> {
        self.at_most_one(kind)?.ok_or(EndpointError::Missing(kind))
    }

    fn at_most_one(&self, kind: CellKind) -> Result<Option<Pos>, EndpointError> {
        let mut found = self.cells.iter().filter(|c| c.kind == kind).map(Cell::pos);
        let Some(first) = found.next() else {
            return Ok(None);
        };
        match found.next() {
            Some(second) => Err(EndpointError::Duplicate {
                kind,
                first,
                second,
            }),
            None => Ok(Some(first)),
        }
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    #[inline]
    fn index(&self, p: Pos) -> &Cell {
        match self.index_of(p) {
            Some(i) => &self.cells[i],
            None => panic!("index out of range: {p} in {0}x{0} grid", self.size),
        }
    }
}

impl IndexMut<Pos> for Grid {
    #[inline]
    fn index_mut(&mut self, p: Pos) -> &mut Cell {
        match self.index_of(p) {
            Some(i) => &mut self.cells[i],
            None => panic!("index out of range: {p} in {0}x{0} grid", self.size),
        }
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
