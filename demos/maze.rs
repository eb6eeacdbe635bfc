//! Random obstacle map demo, printing a few search frames.
//!
//! Run: cargo run --bin maze -- --rows 20 --cols 60 --density 35 --seed 7 --moves four

use clap::Parser;
use gridpath::{Connectivity, Pathfinder, SearchConfig};
use gridpath_core::Cell;
use gridpath_demos::{MazeArgs, TraceRenderer, init_logging, random_obstacles, summary};

fn main() {
    init_logging();

    let args = MazeArgs::parse();
    let conn: Connectivity = args.moves.into();
    let start = Cell::new(0, 0);
    let goal = Cell::new(args.rows - 1, args.cols - 1);
    let mut grid = match random_obstacles(args.rows, args.cols, args.density, args.seed, &[start, goal]) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("Error: obstacle density {}%: {e}", args.density);
            std::process::exit(1);
        }
    };
    log::info!(
        "{}x{} map, {}% obstacles, seed {}, {conn:?}",
        args.rows,
        args.cols,
        args.density,
        args.seed
    );

    let every = (args.cell_count() / 4).max(1);
    let mut renderer = TraceRenderer::new(&grid, every);
    let mut pf = Pathfinder::new(SearchConfig::new(conn));
    let outcome = match pf.find_path_observed(&mut grid, start, goal, &mut renderer) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    for (i, frame) in renderer.frames().iter().enumerate() {
        println!("frame {}:\n{frame}\n", i + 1);
    }
    renderer.finish(&outcome);
    println!("{}\n{}", summary(&outcome, pf.last_stats()), renderer.render());
}
