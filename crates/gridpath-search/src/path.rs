use gridpath_core::Pos;

use crate::error::PathError;

/// A shortest path, ordered from start to end, both included.
///
/// Consecutive cells are 4-adjacent and there are always at least two.
/// Deserialization checks both.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawPath"))]
pub struct Path {
    cells: Vec<Pos>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    cells: Vec<Pos>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPath> for Path {
    type Error = PathError;

    fn try_from(raw: RawPath) -> Result<Self, Self::Error> {
        Self::try_from(raw.cells)
    }
}

impl TryFrom<Vec<Pos>> for Path {
    type Error = PathError;

    fn try_from(cells: Vec<Pos>) -> Result<Self, Self::Error> {
        if cells.len() < 2 {
            return Err(PathError::TooShort(cells.len()));
        }
        if let Some(w) = cells.windows(2).find(|w| !w[0].is_adjacent(w[1])) {
            return Err(PathError::Gap { from: w[0], to: w[1] });
        }
        Ok(Self { cells })
    }
}

impl Path {
    /// Wrap a start→end cell sequence. Callers guarantee at least two cells.
    pub(crate) fn new(cells: Vec<Pos>) -> Self {
        debug_assert!(cells.len() >= 2);
        Self { cells }
    }

    /// First cell.
    pub fn start(&self) -> Pos {
        self.cells[0]
    }

    /// Last cell.
    pub fn end(&self) -> Pos {
        self.cells[self.cells.len() - 1]
    }

    /// Number of moves, i.e. cells minus one.
    pub fn edges(&self) -> usize {
        self.cells.len() - 1
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`; a path holds at least its two endpoints.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn as_slice(&self) -> &[Pos] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pos> {
        self.cells.iter()
    }

    pub fn into_vec(self) -> Vec<Pos> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Pos;
    type IntoIter = std::slice::Iter<'a, Pos>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Outcome of a search that ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathResult {
    /// The end cell was reached.
    Found(Path),
    /// The frontier ran dry without reaching the end cell.
    NoPathExists,
    /// The stop flag or the expansion ceiling ended the search early.
    Cancelled,
}

impl PathResult {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::Found(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_cells_checks_length() {
        assert_eq!(Path::try_from(vec![]), Err(PathError::TooShort(0)));
        assert_eq!(
            Path::try_from(vec![Pos::new(2, 2)]),
            Err(PathError::TooShort(1))
        );
        let p = Path::try_from(vec![Pos::new(2, 2), Pos::new(2, 3)]).unwrap();
        assert_eq!(p.edges(), 1);
        assert!(!p.is_empty());
    }

    #[test]
    fn from_cells_checks_adjacency() {
        let cells = vec![Pos::new(0, 0), Pos::new(0, 1), Pos::new(1, 2)];
        assert_eq!(
            Path::try_from(cells),
            Err(PathError::Gap {
                from: Pos::new(0, 1),
                to: Pos::new(1, 2),
            })
        );
    }
}
