use gridnav_core::{Grid, Point};

/// Whether `path` is a walkable route from `start` to `goal` on `grid`.
///
/// The path must begin at `start` and end at `goal`, every step must be a
/// single cardinal move, and every cell after the start must be open. The
/// start itself may be blocked, matching the search rules. An empty path is
/// never valid.
pub fn is_valid_path(grid: &Grid, path: &[Point], start: Point, goal: Point) -> bool {
    let (Some(&first), Some(&last)) = (path.first(), path.last()) else {
        return false;
    };
    if first != start || last != goal || !grid.contains(start) {
        return false;
    }
    path.windows(2)
        .all(|w| w[0].is_adjacent_4(w[1]) && grid.is_open(w[1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::parse_map;

    fn grid() -> Grid {
        parse_map("1...\n..1.").unwrap().grid
    }

    #[test]
    fn accepts_walkable_route() {
        let path = [Point::new(1, 0), Point::new(2, 0), Point::new(3, 0), Point::new(3, 1)];
        assert!(is_valid_path(&grid(), &path, Point::new(1, 0), Point::new(3, 1)));
    }

    #[test]
    fn accepts_blocked_start() {
        let path = [Point::new(0, 0), Point::new(0, 1)];
        assert!(is_valid_path(&grid(), &path, Point::new(0, 0), Point::new(0, 1)));
    }

    #[test]
    fn rejects_bad_routes() {
        let g = grid();
        let (s, e) = (Point::new(1, 1), Point::new(3, 1));
        // Through a wall.
        assert!(!is_valid_path(&g, &[s, Point::new(2, 1), e], s, e));
        // Diagonal step.
        assert!(!is_valid_path(&g, &[s, Point::new(2, 0), Point::new(3, 1)], s, e));
        // Wrong endpoints.
        assert!(!is_valid_path(&g, &[s, Point::new(1, 0)], s, e));
        // Empty.
        assert!(!is_valid_path(&g, &[], s, e));
        // Off the grid.
        let off = Point::new(4, 1);
        assert!(!is_valid_path(&g, &[e, off], e, off));
    }
}
