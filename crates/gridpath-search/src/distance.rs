use gridpath_core::Pos;

/// Manhattan (L1) distance between two positions.
///
/// Admissible and consistent for 4-directional movement at unit cost.
#[inline]
pub fn manhattan(a: Pos, b: Pos) -> usize {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col)
}
