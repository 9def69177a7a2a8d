//! Text form of a [`Grid`].
//!
//! One line per row, one character per cell:
//!
//! | Char | Meaning |
//! |---|---|
//! | `.` | empty |
//! | `#` | barrier |
//! | `S` | start |
//! | `E` | end |
//!
//! Rendering additionally shows search marks: `o` frontier, `x` visited,
//! `*` path. Marks are transient and are not accepted by the parser.

use std::fmt;
use std::str::FromStr;

use crate::cell::CellKind;
use crate::geom::Pos;
use crate::grid::Grid;

/// Errors that can occur when parsing a grid from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input contains no rows.
    Empty,
    /// A row's width differs from the number of rows.
    NotSquare { row: usize, width: usize, rows: usize },
    /// A character outside `.#SE` was found.
    InvalidChar { ch: char, pos: Pos },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("grid text has no rows"),
            Self::NotSquare { row, width, rows } => write!(
                f,
                "grid is not square: row {row} has {width} cells but there are {rows} rows"
            ),
            Self::InvalidChar { ch, pos } => {
                write!(f, "invalid grid character '{ch}' at {pos}")
            }
        }
    }
}

impl std::error::Error for ParseError {}

fn kind_of(ch: char) -> Option<CellKind> {
    match ch {
        '.' => Some(CellKind::Empty),
        '#' => Some(CellKind::Barrier),
        'S' => Some(CellKind::Start),
        'E' => Some(CellKind::End),
        _ => None,
    }
}

impl Grid {
    /// Parse a grid from its text form.
    ///
    /// Surrounding whitespace on each line is ignored, as are blank lines,
    /// so maps can be written as indented string literals. Several `S` or
    /// `E` cells are accepted here; [`Grid::endpoints`] reports them.
    pub fn from_ascii(s: &str) -> Result<Self, ParseError> {
        let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if rows.is_empty() {
            return Err(ParseError::Empty);
        }
        let n = rows.len();
        let mut grid = Grid::build(n);
        for (row, line) in rows.iter().enumerate() {
            let width = line.chars().count();
            if width != n {
                return Err(ParseError::NotSquare {
                    row,
                    width,
                    rows: n,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Pos::new(row, col);
                let kind = kind_of(ch).ok_or(ParseError::InvalidChar { ch, pos })?;
                grid.set_kind(pos, kind);
            }
        }
        Ok(grid)
    }
}

impl FromStr for Grid {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ascii(s)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.iter().as_slice().chunks(self.size().max(1)) {
            for cell in row {
                write!(f, "{}", cell.state().glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
