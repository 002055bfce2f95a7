//! **gridnav-core** — core types for grid navigation.
//!
//! This crate provides the types shared across the *gridnav* crates:
//! geometry primitives, the immutable occupancy grid searched by
//! `gridnav-paths`, and loading of text maps.

pub mod geom;
pub mod grid;
pub mod map;

pub use geom::{Point, Range};
pub use grid::{Grid, GridError, Tile};
pub use map::{DEMO_MAP, MapError, MapText, parse_map};
