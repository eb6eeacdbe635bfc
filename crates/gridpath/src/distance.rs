use gridpath_core::Cell;

/// Manhattan (L1) distance between two cells.
#[inline]
pub fn manhattan(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs() + (a.col - b.col).abs()
}

/// Chebyshev (L∞) distance between two cells.
#[inline]
pub fn chebyshev(a: Cell, b: Cell) -> i32 {
    (a.row - b.row).abs().max((a.col - b.col).abs())
}

/// Cost of walking `path` under the search's step cost: every step costs the
/// Manhattan distance it covers, so a diagonal step costs 2.
pub fn path_cost(path: &[Cell]) -> i32 {
    path.windows(2).map(|w| manhattan(w[0], w[1])).sum()
}
