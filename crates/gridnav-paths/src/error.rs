use std::fmt;

use gridnav_core::{Point, Range};

/// Invalid input to a path search.
///
/// An unreachable goal is not an error: searches return an empty path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathError {
    /// The start point lies outside the grid.
    StartOutOfBounds { start: Point, bounds: Range },
    /// The goal point lies outside the grid.
    GoalOutOfBounds { goal: Point, bounds: Range },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds { start, bounds } => {
                write!(f, "start {start} is outside grid bounds {bounds}")
            }
            Self::GoalOutOfBounds { goal, bounds } => {
                write!(f, "goal {goal} is outside grid bounds {bounds}")
            }
        }
    }
}

impl std::error::Error for PathError {}
