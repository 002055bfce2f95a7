//! Plan a route across the demo map and print it.
//!
//! Usage: `gridnav-demo <goal-x> <goal-y> [manhattan|obstacle-aware]`
//!
//! The route starts at the map's `P` marker. With no heuristic given, both
//! built-in heuristics are run so their routes can be compared.

use std::error::Error;
use std::fmt;
use std::process::ExitCode;

use gridnav_core::{DEMO_MAP, Point, parse_map};
use gridnav_paths::{Heuristic, find_path_with_stats};

#[derive(Debug)]
struct UsageError(String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\nusage: gridnav-demo <goal-x> <goal-y> [manhattan|obstacle-aware]",
            self.0
        )
    }
}

impl Error for UsageError {}

fn parse_coord(arg: Option<String>, name: &str) -> Result<i32, UsageError> {
    let s = arg.ok_or_else(|| UsageError(format!("missing {name}")))?;
    s.parse()
        .map_err(|_| UsageError(format!("{name} must be an integer, got '{s}'")))
}

fn run() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let goal = Point::new(
        parse_coord(args.next(), "goal-x")?,
        parse_coord(args.next(), "goal-y")?,
    );
    let heuristics = match args.next() {
        Some(name) => vec![name.parse::<Heuristic>()?],
        None => vec![Heuristic::Manhattan, Heuristic::ObstacleAware],
    };

    let map = parse_map(DEMO_MAP)?;
    let start = map
        .marker
        .ok_or_else(|| UsageError("demo map has no start marker".into()))?;

    for h in heuristics {
        let (path, stats) = find_path_with_stats(&map.grid, start, goal, &h)?;
        println!("{h}: {start} -> {goal}");
        if path.is_empty() {
            println!("no path");
        } else {
            println!(
                "{} cells, {} expanded, {} pushed",
                path.len(),
                stats.expanded,
                stats.pushed
            );
            println!("{}", map.grid.render_path(&path));
        }
        println!();
    }
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gridnav-demo: {e}");
            ExitCode::FAILURE
        }
    }
}
