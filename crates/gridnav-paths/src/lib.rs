//! Shortest-path search on occupancy grids.
//!
//! [`find_path`] runs A* over a [`Grid`](gridnav_core::Grid) with
//! 4-directional unit-cost moves. Exploration order comes from a pluggable
//! [`CostModel`]. Two models are built in:
//!
//! | Model | Estimate | Shortest paths |
//! |---|---|---|
//! | [`Manhattan`] | L1 distance | yes |
//! | [`ObstacleAware`] | L1 distance plus wall-proximity penalty | no |
//!
//! [`Heuristic`] selects between them at runtime. [`bfs_distance`] and
//! [`is_valid_path`] are reference checks for search results.
//!
//! Every search owns its state, so concurrent searches over a shared grid
//! are safe.

mod astar;
mod bfs;
mod cost;
mod distance;
mod error;
mod frontier;
mod proximity;
mod validate;

pub use astar::{Pathfinder, SearchStats, find_path, find_path_with_stats};
pub use bfs::bfs_distance;
pub use cost::{CostModel, Heuristic, Manhattan, ObstacleAware, UnknownHeuristic};
pub use distance::manhattan;
pub use error::PathError;
pub use proximity::{DEFAULT_MAX_DISTANCE, obstacle_proximity};
pub use validate::is_valid_path;
