//! A* search over 4-connected occupancy grids.

use gridnav_core::{Grid, Point};

use crate::cost::CostModel;
use crate::error::PathError;
use crate::frontier::Frontier;

/// Sentinel cost for cells not reached yet.
const UNVISITED: i32 = i32::MAX;
/// Sentinel parent for the start cell.
const NO_PARENT: usize = usize::MAX;

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped and expanded (the goal pop is not counted).
    pub expanded: usize,
    /// Entries pushed onto the frontier, including the start.
    pub pushed: u64,
    /// Popped entries discarded because a cheaper cost was already known.
    pub stale_skipped: usize,
}

/// Per-call search state, indexed by the grid's flat cell index.
struct SearchState {
    best_cost: Vec<i32>,
    parent: Vec<usize>,
    frontier: Frontier,
}

impl SearchState {
    fn new(len: usize) -> Self {
        Self {
            best_cost: vec![UNVISITED; len],
            parent: vec![NO_PARENT; len],
            frontier: Frontier::new(),
        }
    }

    /// Walk parent links back from `goal` and return the path start→goal.
    fn reconstruct(&self, grid: &Grid, goal: usize) -> Vec<Point> {
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != NO_PARENT {
            path.push(grid.point(ci));
            ci = self.parent[ci];
        }
        path.reverse();
        path
    }
}

/// Compute a path from `start` to `goal` using A* with 4-directional
/// unit-cost moves.
///
/// Returns the path including both endpoints, or an empty path if the goal
/// cannot be reached. A blocked goal is never reachable; a blocked start is
/// still expanded. When `start == goal` (and the cell is open) the result is
/// `[start]`.
///
/// With an admissible model such as [`Manhattan`](crate::Manhattan) the path
/// is a shortest one.
///
/// # Errors
///
/// [`PathError`] if `start` or `goal` lies outside the grid.
pub fn find_path<M: CostModel + ?Sized>(
    grid: &Grid,
    start: Point,
    goal: Point,
    model: &M,
) -> Result<Vec<Point>, PathError> {
    find_path_with_stats(grid, start, goal, model).map(|(path, _)| path)
}

/// Like [`find_path`], also returning [`SearchStats`].
pub fn find_path_with_stats<M: CostModel + ?Sized>(
    grid: &Grid,
    start: Point,
    goal: Point,
    model: &M,
) -> Result<(Vec<Point>, SearchStats), PathError> {
    let bounds = grid.bounds();
    let start_idx = grid
        .index(start)
        .ok_or(PathError::StartOutOfBounds { start, bounds })?;
    let goal_idx = grid
        .index(goal)
        .ok_or(PathError::GoalOutOfBounds { goal, bounds })?;

    let mut stats = SearchStats::default();

    if grid.is_blocked(goal) {
        log::debug!("astar: goal {goal} is blocked");
        return Ok((Vec::new(), stats));
    }
    if start_idx == goal_idx {
        return Ok((vec![start], stats));
    }

    let mut state = SearchState::new(grid.len());
    state.best_cost[start_idx] = 0;
    state.frontier.push(0.0, start_idx, 0);

    let found = 'search: loop {
        let Some(current) = state.frontier.pop() else {
            break 'search false;
        };
        let ci = current.idx;

        if current.g > state.best_cost[ci] {
            stats.stale_skipped += 1;
            log::trace!(
                "astar: stale entry for {} (g {} > {})",
                grid.point(ci),
                current.g,
                state.best_cost[ci]
            );
            continue;
        }

        if ci == goal_idx {
            break 'search true;
        }

        stats.expanded += 1;
        let new_cost = state.best_cost[ci] + 1;
        for np in grid.point(ci).neighbors_4() {
            let Some(ni) = grid.index(np) else {
                continue;
            };
            if grid.is_blocked(np) || new_cost >= state.best_cost[ni] {
                continue;
            }
            state.best_cost[ni] = new_cost;
            state.parent[ni] = ci;
            let priority = f64::from(new_cost) + model.estimate(grid, goal, np);
            state.frontier.push(priority, ni, new_cost);
        }
    };

    stats.pushed = state.frontier.pushed();

    if !found {
        log::debug!(
            "astar: no path {start} -> {goal} ({} expanded)",
            stats.expanded
        );
        return Ok((Vec::new(), stats));
    }

    let path = state.reconstruct(grid, goal_idx);
    log::debug!(
        "astar: path {start} -> {goal} with {} cells ({} expanded, {} stale)",
        path.len(),
        stats.expanded,
        stats.stale_skipped
    );
    Ok((path, stats))
}

/// A grid bound to a cost model, for repeated queries on the same map.
#[derive(Debug, Clone)]
pub struct Pathfinder<'g, M> {
    grid: &'g Grid,
    model: M,
}

impl<'g, M: CostModel> Pathfinder<'g, M> {
    pub fn new(grid: &'g Grid, model: M) -> Self {
        Self { grid, model }
    }

    #[inline]
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    #[inline]
    pub fn model(&self) -> &M {
        &self.model
    }

    /// See [`find_path`].
    pub fn find(&self, start: Point, goal: Point) -> Result<Vec<Point>, PathError> {
        find_path(self.grid, start, goal, &self.model)
    }
}
