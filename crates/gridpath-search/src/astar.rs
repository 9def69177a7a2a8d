//! A* shortest-path search with observable progress.
//!
//! The search writes [`SearchMark`]s into the grid as it runs so that a
//! step callback can render progress. All scoring state lives in a
//! per-call search state and is dropped when the call returns.

use gridpath_core::{EndpointError, Grid, Pos, SearchMark};

use crate::config::SearchConfig;
use crate::distance::manhattan;
use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::path::{Path, PathResult};

/// Sentinel cost for cells not reached yet.
const UNREACHABLE: usize = usize::MAX;

// ---------------------------------------------------------------------------
// Per-call search state
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct Node {
    /// Best known cost from the start.
    g: usize,
    /// `g` plus the heuristic to the end.
    f: usize,
    /// Predecessor on the best known path. `None` for the start and for
    /// unreached cells.
    parent: Option<usize>,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: UNREACHABLE,
            f: UNREACHABLE,
            parent: None,
        }
    }
}

struct SearchState {
    nodes: Vec<Node>,
    frontier: Frontier,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            nodes: vec![Node::default(); len],
            frontier: Frontier::new(len),
        }
    }
}

// ---------------------------------------------------------------------------
// AStar
// ---------------------------------------------------------------------------

/// Runs A* searches under a [`SearchConfig`].
///
/// Expansion order is fully deterministic: neighbors are relaxed down, up,
/// left, right, and equal-priority frontier entries pop in insertion order.
/// Re-running on an unedited grid yields the same path.
#[derive(Clone, Debug, Default)]
pub struct AStar {
    config: SearchConfig,
}

impl AStar {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search between the grid's unique Start and End cells.
    pub fn search<F>(&self, grid: &mut Grid, on_step: F) -> Result<PathResult, SearchError>
    where
        F: FnMut(&Grid),
    {
        let (start, end) = grid
            .endpoints()
            .inspect_err(|e| log::warn!("search rejected: {e}"))?;
        self.find_path(grid, start, end, on_step)
    }

    /// Compute a shortest path from `start` to `end`.
    ///
    /// `on_step` is called once after each dequeued cell has had its
    /// neighbors relaxed, and once per intermediate cell while the path is
    /// traced back from `end`. It sees the grid with the marks written so
    /// far.
    ///
    /// Endpoints are validated before anything is written to the grid:
    /// both must be in range, distinct and passable, and the grid may hold
    /// at most one Start and at most one End cell. The endpoints themselves
    /// need not carry those kinds. Once validated, marks left by an earlier
    /// run are cleared. Marks written before an early stop are left in
    /// place.
    pub fn find_path<F>(
        &self,
        grid: &mut Grid,
        start: Pos,
        end: Pos,
        mut on_step: F,
    ) -> Result<PathResult, SearchError>
    where
        F: FnMut(&Grid),
    {
        grid.validate_endpoints(start, end)
            .inspect_err(|e| log::warn!("search rejected: {e}"))?;
        let si = index(grid, start)?;
        let ei = index(grid, end)?;
        grid.clear_marks();

        log::debug!(
            "a* from {start} to {end} on {0}x{0} grid",
            grid.size()
        );

        let mut st = SearchState::new(grid.len());
        st.nodes[si].g = 0;
        st.nodes[si].f = manhattan(start, end);
        st.frontier.push(si, st.nodes[si].f);

        let mut nbuf = Vec::with_capacity(4);
        let mut expanded = 0usize;

        while !st.frontier.is_empty() {
            if self.config.should_stop(expanded) {
                log::debug!("a* stopped after {expanded} expansions");
                return Ok(PathResult::Cancelled);
            }
            let Some(ci) = st.frontier.pop() else {
                break;
            };
            expanded += 1;

            if ci == ei {
                let path = trace_back(grid, &st.nodes, si, ei, &mut on_step);
                grid[end].mark = SearchMark::Unmarked;
                log::debug!(
                    "a* found {} edge path after {expanded} expansions",
                    path.edges()
                );
                return Ok(PathResult::Found(path));
            }

            let cp = grid.pos_of(ci);
            let tentative_g = st.nodes[ci].g + 1;
            log::trace!(
                "expand {cp} g={} frontier={}",
                st.nodes[ci].g,
                st.frontier.len()
            );

            nbuf.clear();
            grid.neighbors_into(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = grid.index_of(np) else {
                    continue;
                };
                let node = &mut st.nodes[ni];
                if tentative_g >= node.g {
                    continue;
                }
                node.parent = Some(ci);
                node.g = tentative_g;
                node.f = tentative_g + manhattan(np, end);

                if !st.frontier.contains(ni) {
                    st.frontier.push(ni, node.f);
                    grid[np].mark = SearchMark::Frontier;
                }
            }

            on_step(grid);

            if ci != si {
                grid[cp].mark = SearchMark::Visited;
            }
        }

        log::debug!("a* exhausted frontier after {expanded} expansions, no path");
        Ok(PathResult::NoPathExists)
    }
}

fn index(grid: &Grid, p: Pos) -> Result<usize, SearchError> {
    grid.index_of(p).ok_or_else(|| {
        EndpointError::OutOfBounds {
            pos: p,
            size: grid.size(),
        }
        .into()
    })
}

/// Walk predecessors from `ei` back to `si`, marking the cells in between.
fn trace_back<F>(grid: &mut Grid, nodes: &[Node], si: usize, ei: usize, on_step: &mut F) -> Path
where
    F: FnMut(&Grid),
{
    let mut cells = vec![grid.pos_of(ei)];
    let mut cur = nodes[ei].parent;
    while let Some(ci) = cur.filter(|&ci| ci != si) {
        let p = grid.pos_of(ci);
        grid[p].mark = SearchMark::Path;
        on_step(grid);
        cells.push(p);
        cur = nodes[ci].parent;
    }
    cells.push(grid.pos_of(si));
    cells.reverse();
    Path::new(cells)
}

// ---------------------------------------------------------------------------
// Shorthands
// ---------------------------------------------------------------------------

/// [`AStar::find_path`] with the default configuration.
pub fn find_path<F>(
    grid: &mut Grid,
    start: Pos,
    end: Pos,
    on_step: F,
) -> Result<PathResult, SearchError>
where
    F: FnMut(&Grid),
{
    AStar::default().find_path(grid, start, end, on_step)
}

/// [`AStar::search`] with the default configuration.
pub fn search<F>(grid: &mut Grid, on_step: F) -> Result<PathResult, SearchError>
where
    F: FnMut(&Grid),
{
    AStar::default().search(grid, on_step)
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use gridpath_core::{CellKind, CellState};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::config::Context;

    fn p(row: usize, col: usize) -> Pos {
        Pos::new(row, col)
    }

    fn run(grid: &mut Grid, start: Pos, end: Pos) -> PathResult {
        find_path(grid, start, end, |_| {}).unwrap()
    }

    fn found(result: PathResult) -> Path {
        match result {
            PathResult::Found(path) => path,
            other => panic!("expected a path, got {other:?}"),
        }
    }

    /// Endpoints match, every step is orthogonal, no cell is a barrier.
    fn assert_walkable(grid: &Grid, path: &Path, start: Pos, end: Pos) {
        assert_eq!(path.start(), start);
        assert_eq!(path.end(), end);
        for w in path.as_slice().windows(2) {
            assert!(w[0].is_adjacent(w[1]), "{} -> {} is not a step", w[0], w[1]);
        }
        for &c in path {
            assert!(grid[c].is_passable(), "{c} is a barrier");
        }
    }

    /// Reference distances from `start` by breadth-first search, indexed like
    /// the grid. Unreachable cells hold `usize::MAX`.
    fn bfs_distances(grid: &Grid, start: Pos) -> Vec<usize> {
        let mut dist = vec![usize::MAX; grid.len()];
        let mut queue = VecDeque::new();
        dist[grid.index_of(start).unwrap()] = 0;
        queue.push_back(start);
        while let Some(c) = queue.pop_front() {
            let d = dist[grid.index_of(c).unwrap()];
            for n in grid.neighbors_of(c) {
                let ni = grid.index_of(n).unwrap();
                if dist[ni] == usize::MAX {
                    dist[ni] = d + 1;
                    queue.push_back(n);
                }
            }
        }
        dist
    }

    #[test]
    fn canonical_route_on_3x3() {
        let mut g = Grid::build(3);
        let path = found(run(&mut g, p(0, 0), p(2, 2)));
        assert_eq!(
            path.as_slice(),
            &[p(0, 0), p(1, 0), p(2, 0), p(2, 1), p(2, 2)]
        );
    }

    #[test]
    fn marks_after_success() {
        let mut g = Grid::build(3);
        g.set_start(p(0, 0));
        g.set_end(p(2, 2));
        found(search(&mut g, |_| {}).unwrap());
        assert_eq!(g.to_string(), "Sxx\n*xx\n**E\n");
        assert_eq!(g[p(0, 0)].mark, SearchMark::Unmarked);
        assert_eq!(g[p(2, 2)].mark, SearchMark::Unmarked);
    }

    #[test]
    fn unmarked_endpoints_still_search() {
        // Endpoints need not carry Start/End kinds when passed explicitly.
        let mut g = Grid::build(3);
        found(run(&mut g, p(0, 0), p(2, 2)));
        assert_eq!(g.state(p(0, 0)), CellState::Empty);
        assert_eq!(g.state(p(2, 2)), CellState::Empty);
        assert_eq!(g.count(CellState::Path), 3);
    }

    #[test]
    fn one_step_per_expansion_and_per_path_cell() {
        let mut g = Grid::build(3);
        let mut steps = 0;
        found(find_path(&mut g, p(0, 0), p(2, 2), |_| steps += 1).unwrap());
        // 8 cells expanded before the end is dequeued, 3 intermediate path cells.
        assert_eq!(steps, 11);
    }

    #[test]
    fn callback_sees_progress() {
        let mut g = Grid::build(3);
        let mut frontier_sizes = Vec::new();
        found(
            find_path(&mut g, p(0, 0), p(2, 2), |grid| {
                frontier_sizes.push(grid.count(CellState::Frontier));
            })
            .unwrap(),
        );
        // After expanding the start, its two neighbors are queued.
        assert_eq!(frontier_sizes[0], 2);
    }

    #[test]
    fn open_5x5_corner_to_corner_is_optimal() {
        let mut g = Grid::build(5);
        let path = found(run(&mut g, p(0, 0), p(4, 4)));
        assert_eq!(path.edges(), 8);
        assert_walkable(&g, &path, p(0, 0), p(4, 4));
    }

    #[test]
    fn open_grid_paths_match_manhattan() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..40 {
            let n = rng.random_range(2..10);
            let start = p(rng.random_range(0..n), rng.random_range(0..n));
            let end = p(rng.random_range(0..n), rng.random_range(0..n));
            if start == end {
                continue;
            }
            let mut g = Grid::build(n);
            let path = found(run(&mut g, start, end));
            assert_eq!(path.edges(), manhattan(start, end));
            assert_walkable(&g, &path, start, end);
        }
    }

    #[test]
    fn enclosed_start_has_no_path() {
        let mut g = Grid::from_ascii(
            "
            S.#..
            ..#..
            ###..
            .....
            ....E
            ",
        )
        .unwrap();
        let result = search(&mut g, |_| {}).unwrap();
        assert_eq!(result, PathResult::NoPathExists);
        assert_eq!(g.count(CellState::Path), 0);
        assert_eq!(g.positions(CellState::Visited), vec![p(0, 1), p(1, 0), p(1, 1)]);
        assert_eq!(g.count(CellState::Frontier), 0);
        assert_eq!(g.state(p(3, 3)), CellState::Empty);
    }

    #[test]
    fn barrier_next_to_start_forces_detour() {
        let mut g = Grid::build(4);
        let (start, end) = (p(0, 0), p(0, 3));
        assert_eq!(found(run(&mut g, start, end)).edges(), 3);

        g.set_barrier(p(0, 1));
        let path = found(run(&mut g, start, end));
        assert!(path.edges() > 3);
        assert_eq!(path.edges(), 5);
        assert_walkable(&g, &path, start, end);
    }

    #[test]
    fn rerun_on_unedited_grid_is_identical() {
        let mut g = Grid::from_ascii(
            "
            S.....
            .##.#.
            ...#..
            .#...#
            .#.#..
            ...#.E
            ",
        )
        .unwrap();
        let first = found(search(&mut g, |_| {}).unwrap());
        let after_first = g.clone();

        let second = found(search(&mut g, |_| {}).unwrap());
        assert_eq!(first, second);
        assert_eq!(g, after_first);
    }

    #[test]
    fn marks_from_previous_run_are_cleared() {
        let mut g = Grid::build(4);
        found(run(&mut g, p(0, 0), p(3, 3)));
        assert_eq!(g.count(CellState::Path), 5);

        let mut frontier_at_first_step = None;
        let path = found(
            find_path(&mut g, p(0, 0), p(0, 1), |grid| {
                frontier_at_first_step.get_or_insert(grid.count(CellState::Frontier));
            })
            .unwrap(),
        );
        assert_eq!(g.count(CellState::Path), path.len() - 2);
        assert_eq!(frontier_at_first_step, Some(2));

        let mut fresh = Grid::build(4);
        found(run(&mut fresh, p(0, 0), p(0, 1)));
        assert_eq!(g, fresh);
    }

    #[test]
    fn rejected_call_keeps_previous_marks() {
        let mut g = Grid::build(4);
        found(run(&mut g, p(0, 0), p(3, 3)));
        let before = g.clone();
        assert!(find_path(&mut g, p(1, 1), p(1, 1), |_| {}).is_err());
        assert_eq!(g, before);
    }

    #[test]
    fn duplicate_endpoint_kinds_rejected() {
        let mut g = Grid::build(3);
        g.set_kind(p(0, 2), CellKind::End);
        g.set_kind(p(2, 0), CellKind::End);
        let before = g.clone();
        assert_eq!(
            find_path(&mut g, p(0, 0), p(2, 2), |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointError::Duplicate {
                kind: CellKind::End,
                first: p(0, 2),
                second: p(2, 0),
            }))
        );
        assert_eq!(g, before);
    }

    #[test]
    fn same_endpoints_rejected_without_mutation() {
        let mut g = Grid::build(3);
        g.set_barrier(p(1, 1));
        let before = g.clone();
        let mut steps = 0;
        let err = find_path(&mut g, p(0, 2), p(0, 2), |_| steps += 1).unwrap_err();
        assert_eq!(err, SearchError::InvalidEndpoints(EndpointError::Same(p(0, 2))));
        assert_eq!(g, before);
        assert_eq!(steps, 0);
    }

    #[test]
    fn bad_endpoints_rejected() {
        let mut g = Grid::build(3);
        g.set_barrier(p(1, 1));
        assert_eq!(
            find_path(&mut g, p(0, 0), p(1, 1), |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointError::Barrier(p(1, 1))))
        );
        assert_eq!(
            find_path(&mut g, p(0, 0), p(0, 3), |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointError::OutOfBounds {
                pos: p(0, 3),
                size: 3,
            }))
        );
        assert_eq!(
            search(&mut g, |_| {}),
            Err(SearchError::InvalidEndpoints(EndpointError::Missing(
                CellKind::Start
            )))
        );
    }

    #[test]
    fn error_source_is_endpoint_error() {
        use std::error::Error;
        let err = SearchError::from(EndpointError::Same(p(1, 1)));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("same cell"));
    }

    #[test]
    fn cancelled_before_first_expansion() {
        let ctx = Context::new();
        ctx.cancel();
        let astar = AStar::new(SearchConfig::new().with_cancel(ctx));
        let mut g = Grid::build(4);
        let mut steps = 0;
        let result = astar.find_path(&mut g, p(0, 0), p(3, 3), |_| steps += 1).unwrap();
        assert_eq!(result, PathResult::Cancelled);
        assert_eq!(steps, 0);
        assert_eq!(g, Grid::build(4));
    }

    #[test]
    fn cancelled_from_step_callback() {
        let ctx = Context::new();
        let astar = AStar::new(SearchConfig::new().with_cancel(ctx.clone()));
        let mut g = Grid::build(6);
        let mut steps = 0;
        let result = astar
            .find_path(&mut g, p(0, 0), p(5, 5), |_| {
                steps += 1;
                if steps == 2 {
                    ctx.cancel();
                }
            })
            .unwrap();
        assert_eq!(result, PathResult::Cancelled);
        assert_eq!(steps, 2);
        assert!(g.count(CellState::Visited) > 0);
    }

    #[test]
    fn expansion_ceiling_stops_search() {
        let astar = AStar::new(SearchConfig::new().with_max_expansions(3));
        let mut g = Grid::build(8);
        let mut steps = 0;
        let result = astar.find_path(&mut g, p(0, 0), p(7, 7), |_| steps += 1).unwrap();
        assert_eq!(result, PathResult::Cancelled);
        assert_eq!(steps, 3);
    }

    #[test]
    fn random_obstacles_agree_with_bfs() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..60 {
            let n = rng.random_range(4..14);
            let mut g = Grid::build(n);
            for row in 0..n {
                for col in 0..n {
                    if rng.random_bool(0.3) {
                        g.set_barrier(p(row, col));
                    }
                }
            }
            let start = p(rng.random_range(0..n), rng.random_range(0..n));
            let end = p(rng.random_range(0..n), rng.random_range(0..n));
            if start == end {
                continue;
            }
            g.set_start(start);
            g.set_end(end);

            let dist = bfs_distances(&g, start);
            let shortest = dist[g.index_of(end).unwrap()];
            match search(&mut g, |_| {}).unwrap() {
                PathResult::Found(path) => {
                    assert_ne!(shortest, usize::MAX, "a* found a path bfs did not");
                    assert_walkable(&g, &path, start, end);
                    assert_eq!(path.edges(), shortest);
                    assert_eq!(g.count(CellState::Path), path.len() - 2);
                }
                PathResult::NoPathExists => {
                    assert_eq!(shortest, usize::MAX);
                    assert_eq!(g.count(CellState::Path), 0);
                    assert_eq!(g.count(CellState::Frontier), 0);
                    for (i, &d) in dist.iter().enumerate() {
                        let c = g.pos_of(i);
                        if d != usize::MAX && c != start {
                            assert_eq!(g.state(c), CellState::Visited, "{c} reachable");
                        }
                    }
                }
                PathResult::Cancelled => panic!("default config never cancels"),
            }
        }
    }
}
