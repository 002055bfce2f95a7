//! Text maps: rows of characters where `'1'` is a wall.
//!
//! Every other character is open floor. A `'P'` marks the agent's initial
//! position.

use std::fmt;

use crate::geom::Point;
use crate::grid::{Grid, GridError, Tile};

/// Character for a blocked cell.
pub const WALL: char = '1';
/// Character marking the agent's initial position.
pub const MARKER: char = 'P';
/// Character used when rendering open cells.
pub const FLOOR: char = '.';
/// Character used when overlaying a path.
pub const PATH: char = '*';

/// The 16x12 demo level: two walled-off blocks inside a bordered room.
pub const DEMO_MAP: &str = "\
1111111111111111
1..............1
1...........P..1
1..1111........1
1..1..1........1
1..1111........1
1..............1
1........11111.1
1........1...1.1
1........11111.1
1..............1
1111111111111111";

/// A parsed text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapText {
    pub grid: Grid,
    /// First `'P'` in row-major order, if any.
    pub marker: Option<Point>,
}

/// Errors that can occur when parsing a text map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    /// The text contains no rows.
    Empty,
    /// A row's width differs from the first row's.
    InconsistentWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The rows do not form a valid grid.
    Grid(GridError),
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "map: no rows"),
            Self::InconsistentWidth {
                row,
                expected,
                found,
            } => write!(
                f,
                "map: row {row} has width {found}, expected {expected}"
            ),
            Self::Grid(e) => write!(f, "map: {e}"),
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for MapError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Parse a text map.
///
/// Empty lines before the first row and after the last row are skipped, and
/// a trailing `'\r'` is dropped from each row. Spaces inside rows are open
/// cells. All rows must have the same width.
pub fn parse_map(text: &str) -> Result<MapText, MapError> {
    let mut rows: Vec<Vec<char>> = text
        .lines()
        .map(|l| l.trim_end_matches('\r').chars().collect())
        .collect();
    let lead = rows.iter().take_while(|r| r.is_empty()).count();
    rows.drain(..lead);
    while rows.last().is_some_and(|r| r.is_empty()) {
        rows.pop();
    }
    let Some(first) = rows.first() else {
        return Err(MapError::Empty);
    };
    let width = first.len();
    if let Some((row, r)) = rows.iter().enumerate().find(|(_, r)| r.len() != width) {
        return Err(MapError::InconsistentWidth {
            row,
            expected: width,
            found: r.len(),
        });
    }

    let mut grid = Grid::new(width as i32, rows.len() as i32)?;
    let mut marker = None;
    for (y, row) in rows.iter().enumerate() {
        for (x, &ch) in row.iter().enumerate() {
            let p = Point::new(x as i32, y as i32);
            if ch == WALL {
                grid.set(p, Tile::Blocked);
            } else if ch == MARKER && marker.is_none() {
                marker = Some(p);
            }
        }
    }
    Ok(MapText { grid, marker })
}

impl Grid {
    /// Render the grid as text, one row per line, using [`WALL`] and [`FLOOR`].
    pub fn to_text(&self) -> String {
        self.render_path(&[])
    }

    /// Render the grid as text with the cells of `path` drawn as [`PATH`].
    ///
    /// Path cells outside the grid are ignored.
    pub fn render_path(&self, path: &[Point]) -> String {
        let w = self.width() as usize;
        let mut chars: Vec<char> = self
            .iter()
            .map(|(_, t)| if t.is_blocked() { WALL } else { FLOOR })
            .collect();
        for &p in path {
            if let Some(i) = self.index(p) {
                chars[i] = PATH;
            }
        }
        let mut out = String::with_capacity(chars.len() + self.height() as usize);
        for (i, row) in chars.chunks(w).enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROOM: &str = "\
11111
1...1
11111";

    #[test]
    fn parse_room() {
        let m = parse_map(ROOM).unwrap();
        assert_eq!(m.grid.size(), Point::new(5, 3));
        assert_eq!(m.marker, None);
        assert_eq!(m.grid.count(Tile::Blocked), 12);
        assert!(m.grid.is_open(Point::new(2, 1)));
        assert!(m.grid.is_blocked(Point::new(0, 1)));
    }

    #[test]
    fn parse_demo_map_marker() {
        let m = parse_map(DEMO_MAP).unwrap();
        assert_eq!(m.grid.size(), Point::new(16, 12));
        assert_eq!(m.marker, Some(Point::new(12, 2)));
        assert!(m.grid.is_open(Point::new(12, 2)));
        // Interior of the upper-left block is open but enclosed.
        assert!(m.grid.is_open(Point::new(4, 4)));
        assert!(m.grid.is_blocked(Point::new(3, 4)));
    }

    #[test]
    fn any_non_wall_is_open() {
        let m = parse_map("1a\n #").unwrap();
        assert!(m.grid.is_blocked(Point::new(0, 0)));
        assert!(m.grid.is_open(Point::new(1, 0)));
        assert!(m.grid.is_open(Point::new(0, 1)));
        assert!(m.grid.is_open(Point::new(1, 1)));
    }

    #[test]
    fn crlf_rows_are_accepted() {
        let m = parse_map("111\r\n1.1\r\n111\r\n").unwrap();
        assert_eq!(m.grid.size(), Point::new(3, 3));
    }

    #[test]
    fn edge_spaces_are_open_cells() {
        let m = parse_map("  1\n..1\n11 ").unwrap();
        assert_eq!(m.grid.size(), Point::new(3, 3));
        assert!(m.grid.is_open(Point::new(0, 0)));
        assert!(m.grid.is_open(Point::new(1, 0)));
        assert!(m.grid.is_blocked(Point::new(2, 0)));
        assert!(m.grid.is_open(Point::new(2, 2)));
        assert_eq!(m.grid.count(Tile::Blocked), 4);
    }

    #[test]
    fn blank_lines_around_rows_are_skipped() {
        let m = parse_map("\n\n1.\n.1\n\n").unwrap();
        assert_eq!(m.grid.size(), Point::new(2, 2));
        assert!(m.grid.is_blocked(Point::new(0, 0)));
    }

    #[test]
    fn inconsistent_width_is_rejected() {
        let err = parse_map("111\n11\n111").unwrap_err();
        assert_eq!(
            err,
            MapError::InconsistentWidth {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert!(err.to_string().contains("row 1"));
    }

    #[test]
    fn empty_text_is_rejected() {
        assert_eq!(parse_map(""), Err(MapError::Empty));
        assert_eq!(parse_map("\n\r\n\n"), Err(MapError::Empty));
    }

    #[test]
    fn render_round_trips_walls() {
        let m = parse_map(ROOM).unwrap();
        assert_eq!(m.grid.to_text(), ROOM);
    }

    #[test]
    fn render_path_overlay() {
        let m = parse_map(ROOM).unwrap();
        let path = [Point::new(1, 1), Point::new(2, 1), Point::new(9, 9)];
        assert_eq!(m.grid.render_path(&path), "11111\n1**.1\n11111");
    }
}
