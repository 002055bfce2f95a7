//! Obstacle proximity: a risk score for cells close to walls.

use gridnav_core::{Grid, Point};

/// Default scan depth for [`obstacle_proximity`].
pub const DEFAULT_MAX_DISTANCE: u32 = 5;

/// Score how close `p` sits to blocked cells.
///
/// Scans outward from `p` along each cardinal direction for up to
/// `max_distance` steps. The first blocked cell found at distance `d` adds
/// `1/d` and ends the scan in that direction. Leaving the grid ends the scan
/// with no contribution. The result lies in `[0, 4]`, and is `0` for points
/// outside the grid.
pub fn obstacle_proximity(grid: &Grid, p: Point, max_distance: u32) -> f64 {
    if !grid.contains(p) {
        return 0.0;
    }
    let mut total = 0.0;
    for dir in Point::CARDINALS {
        let mut q = p;
        for d in 1..=max_distance {
            q = q + dir;
            match grid.at(q) {
                None => break,
                Some(t) if t.is_blocked() => {
                    total += 1.0 / f64::from(d);
                    break;
                }
                Some(_) => {}
            }
        }
    }
    total
}
