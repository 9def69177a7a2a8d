//! **gridpath-core** — the square grid model searched by `gridpath-search`.
//!
//! A [`Grid`] owns `n`×`n` [`Cell`]s addressed by [`Pos`]. Every cell
//! carries two independent tags: a caller-owned [`CellKind`] (empty, start,
//! end, barrier) and an engine-owned [`SearchMark`] (frontier, visited,
//! path). The seven-valued [`CellState`] a renderer displays is derived
//! from both.

pub mod ascii;
pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use ascii::ParseError;
pub use cell::{Cell, CellKind, CellState, SearchMark};
pub use error::EndpointError;
pub use geom::Pos;
pub use grid::Grid;
