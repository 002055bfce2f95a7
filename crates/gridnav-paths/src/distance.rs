use gridnav_core::Point;

/// Manhattan (L1) distance between two points.
///
/// Exact shortest-path length on an unobstructed 4-connected grid, so it is
/// admissible and consistent for unit-cost cardinal moves.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}
