//! Cost models: the heuristics that order A* exploration.

use std::fmt;
use std::str::FromStr;

use gridnav_core::{Grid, Point};

use crate::distance::manhattan;
use crate::proximity::{DEFAULT_MAX_DISTANCE, obstacle_proximity};

/// A heuristic estimate between two cells.
///
/// The search calls `estimate(grid, goal, candidate)`: the goal comes first
/// and the cell being added to the frontier second. Implementations must
/// return a non-negative, finite value.
pub trait CostModel {
    fn estimate(&self, grid: &Grid, a: Point, b: Point) -> f64;
}

impl<F> CostModel for F
where
    F: Fn(&Grid, Point, Point) -> f64,
{
    #[inline]
    fn estimate(&self, grid: &Grid, a: Point, b: Point) -> f64 {
        self(grid, a, b)
    }
}

/// Plain Manhattan distance. Admissible and consistent for unit-cost
/// 4-directional moves, so paths found with it are shortest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl CostModel for Manhattan {
    #[inline]
    fn estimate(&self, _grid: &Grid, a: Point, b: Point) -> f64 {
        f64::from(manhattan(a, b))
    }
}

/// Manhattan distance plus a penalty for hugging walls.
///
/// `estimate(a, b) = manhattan(a, b) + proximity(a) + 5 * proximity(b)`.
///
/// The weighting is asymmetric: the second argument gets five times the
/// weight, and at the search call site that is the candidate cell. The
/// estimate can exceed the true remaining cost, so paths are valid but not
/// necessarily shortest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ObstacleAware {
    /// Scan depth passed to [`obstacle_proximity`].
    pub max_distance: u32,
}

impl ObstacleAware {
    /// Weight of the first argument's proximity.
    pub const ORIGIN_WEIGHT: f64 = 1.0;
    /// Weight of the second argument's proximity.
    pub const CANDIDATE_WEIGHT: f64 = 5.0;

    pub const fn new(max_distance: u32) -> Self {
        Self { max_distance }
    }
}

impl Default for ObstacleAware {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DISTANCE)
    }
}

impl CostModel for ObstacleAware {
    fn estimate(&self, grid: &Grid, a: Point, b: Point) -> f64 {
        f64::from(manhattan(a, b))
            + Self::ORIGIN_WEIGHT * obstacle_proximity(grid, a, self.max_distance)
            + Self::CANDIDATE_WEIGHT * obstacle_proximity(grid, b, self.max_distance)
    }
}

/// Caller-side selector between the built-in cost models.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Heuristic {
    /// [`Manhattan`].
    #[default]
    Manhattan,
    /// [`ObstacleAware`] with the default scan depth.
    ObstacleAware,
}

impl CostModel for Heuristic {
    fn estimate(&self, grid: &Grid, a: Point, b: Point) -> f64 {
        match self {
            Self::Manhattan => Manhattan.estimate(grid, a, b),
            Self::ObstacleAware => ObstacleAware::default().estimate(grid, a, b),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Manhattan => f.write_str("manhattan"),
            Self::ObstacleAware => f.write_str("obstacle-aware"),
        }
    }
}

/// Returned when a heuristic name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownHeuristic(pub String);

impl fmt::Display for UnknownHeuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown heuristic '{}' (expected manhattan or obstacle-aware)",
            self.0
        )
    }
}

impl std::error::Error for UnknownHeuristic {}

impl FromStr for Heuristic {
    type Err = UnknownHeuristic;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" | "plain" => Ok(Self::Manhattan),
            "obstacle-aware" | "obstacle" => Ok(Self::ObstacleAware),
            _ => Err(UnknownHeuristic(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridnav_core::parse_map;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn manhattan_ignores_grid() {
        let m = parse_map("111\n1.1\n111").unwrap();
        let open = Grid::new(3, 3).unwrap();
        let (a, b) = (Point::new(0, 0), Point::new(2, 1));
        assert_eq!(Manhattan.estimate(&m.grid, a, b), 3.0);
        assert_eq!(Manhattan.estimate(&open, a, b), 3.0);
    }

    #[test]
    fn obstacle_aware_on_open_grid_equals_manhattan() {
        let grid = Grid::new(20, 20).unwrap();
        let (a, b) = (Point::new(7, 7), Point::new(12, 9));
        assert_eq!(ObstacleAware::default().estimate(&grid, a, b), 7.0);
    }

    #[test]
    fn obstacle_aware_weights_second_argument_five_times() {
        // `a` sits next to one wall, `b` in open space far from walls.
        let m = parse_map(
            "\
1............
.............
.............
.............
.............
.............
.............",
        )
        .unwrap();
        let model = ObstacleAware::new(1);
        let near = Point::new(1, 0);
        let far = Point::new(8, 4);
        let base = f64::from(manhattan(near, far));
        assert!(close(model.estimate(&m.grid, near, far), base + 1.0));
        assert!(close(model.estimate(&m.grid, far, near), base + 5.0));
    }

    #[test]
    fn obstacle_aware_matches_formula() {
        let m = parse_map("11111\n1...1\n11111").unwrap();
        let (a, b) = (Point::new(3, 1), Point::new(1, 1));
        let expected = 2.0
            + obstacle_proximity(&m.grid, a, 5)
            + 5.0 * obstacle_proximity(&m.grid, b, 5);
        assert!(close(ObstacleAware::default().estimate(&m.grid, a, b), expected));
        // (1,1): walls at distance 1 up, down and left; right wall at 3.
        assert!(close(expected, 2.0 + (3.0 + 1.0 / 3.0) * 6.0));
    }

    #[test]
    fn heuristic_dispatches_to_models() {
        let m = parse_map("11111\n1...1\n11111").unwrap();
        let (a, b) = (Point::new(3, 1), Point::new(1, 1));
        assert_eq!(
            Heuristic::Manhattan.estimate(&m.grid, a, b),
            Manhattan.estimate(&m.grid, a, b)
        );
        assert_eq!(
            Heuristic::ObstacleAware.estimate(&m.grid, a, b),
            ObstacleAware::default().estimate(&m.grid, a, b)
        );
    }

    #[test]
    fn closures_and_trait_objects_are_cost_models() {
        let grid = Grid::new(4, 4).unwrap();
        let zero = |_: &Grid, _: Point, _: Point| 0.0;
        assert_eq!(zero.estimate(&grid, Point::ZERO, Point::new(3, 3)), 0.0);
        let by_ref: &dyn CostModel = &Manhattan;
        assert_eq!(by_ref.estimate(&grid, Point::ZERO, Point::new(3, 3)), 6.0);
    }

    #[test]
    fn heuristic_parse_and_display() {
        assert_eq!("manhattan".parse(), Ok(Heuristic::Manhattan));
        assert_eq!("Plain".parse(), Ok(Heuristic::Manhattan));
        assert_eq!(" obstacle-aware ".parse(), Ok(Heuristic::ObstacleAware));
        assert_eq!("obstacle".parse(), Ok(Heuristic::ObstacleAware));
        let err = "euclid".parse::<Heuristic>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown heuristic 'euclid' (expected manhattan or obstacle-aware)"
        );
        for h in [Heuristic::Manhattan, Heuristic::ObstacleAware] {
            assert_eq!(h.to_string().parse(), Ok(h));
        }
    }
}
