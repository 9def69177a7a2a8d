//! Deterministic A* shortest-path search over a [`gridpath_core::Grid`].
//!
//! Movement is 4-directional at unit cost and the heuristic is
//! [`manhattan`] distance, so every path returned is a shortest one.
//! Ties are broken reproducibly: neighbors are relaxed in the order down,
//! up, left, right, and equal-priority frontier entries leave in the order
//! they entered.
//!
//! A search reports progress through a step callback and leaves
//! [`SearchMark`](gridpath_core::SearchMark)s on the grid (frontier,
//! visited, path) for a renderer to draw. Marks from a previous run are
//! cleared when the next run starts.
//!
//! ```
//! use gridpath_core::{Grid, Pos};
//! use gridpath_search::{find_path, PathResult};
//!
//! let mut grid = Grid::build(3);
//! let result = find_path(&mut grid, Pos::new(0, 0), Pos::new(2, 2), |_| {}).unwrap();
//! let PathResult::Found(path) = result else { panic!() };
//! assert_eq!(path.edges(), 4);
//! ```

mod astar;
mod config;
mod distance;
mod error;
mod frontier;
mod path;

pub use astar::{AStar, find_path, search};
pub use config::{Context, SearchConfig};
pub use distance::manhattan;
pub use error::{PathError, SearchError};
pub use path::{Path, PathResult};
