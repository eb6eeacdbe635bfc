//! Searches the reference map with both connectivities and prints the paths.
//!
//! Run: cargo run --bin reference

use gridpath::{Connectivity, EventLog, Pathfinder, SearchConfig};
use gridpath_core::{Cell, Grid};
use gridpath_demos::{REFERENCE_MAP, init_logging, summary};

fn main() {
    init_logging();

    let base: Grid = match REFERENCE_MAP.parse() {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let start = Cell::new(0, 0);
    let goal = Cell::new(0, 2);

    for conn in [Connectivity::Four, Connectivity::Eight] {
        let mut grid = base.clone();
        let mut events = EventLog::new();
        let mut pf = Pathfinder::new(SearchConfig::new(conn));
        match pf.find_path_observed(&mut grid, start, goal, &mut events) {
            Ok(outcome) => {
                println!("{conn:?}: {}", summary(&outcome, pf.last_stats()));
                let path = outcome.into_path().unwrap_or_default();
                let cells: Vec<String> = path.iter().map(|c| c.to_string()).collect();
                println!("{}", cells.join(" "));
                println!("{}\n", base.render_path(&path));
                log::info!("{} events recorded", events.events().len());
            }
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }
}
