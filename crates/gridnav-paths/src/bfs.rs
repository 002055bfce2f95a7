use std::collections::VecDeque;

use gridnav_core::{Grid, Point};

/// Length in cells of a shortest 4-connected path from `start` to `goal`,
/// found by breadth-first search.
///
/// Follows the same rules as [`find_path`](crate::find_path): a blocked goal
/// is unreachable, a blocked start is still expanded, and `start == goal`
/// counts as one cell. Returns `None` if either point is out of bounds or
/// no path exists.
pub fn bfs_distance(grid: &Grid, start: Point, goal: Point) -> Option<usize> {
    let start_idx = grid.index(start)?;
    let goal_idx = grid.index(goal)?;
    if grid.is_blocked(goal) {
        return None;
    }

    let mut dist: Vec<Option<usize>> = vec![None; grid.len()];
    dist[start_idx] = Some(0);
    let mut queue: VecDeque<usize> = VecDeque::from([start_idx]);

    while let Some(ci) = queue.pop_front() {
        let Some(d) = dist[ci] else {
            continue;
        };
        if ci == goal_idx {
            return Some(d + 1);
        }
        for np in grid.point(ci).neighbors_4() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if grid.is_blocked(np) || dist[ni].is_some() {
                continue;
            }
            dist[ni] = Some(d + 1);
            queue.push_back(ni);
        }
    }
    None
}
