//! Shared pieces of the gridpath demos: logger setup, a text renderer that
//! follows a search step by step, and seeded obstacle maps.

use clap::{Parser, ValueEnum};
use gridpath::{Connectivity, SearchObserver, SearchOutcome, SearchStats};
use gridpath_core::{Cell, Grid, Occupancy};
use rand::SeedableRng;
use rand::distr::{Bernoulli, BernoulliError, Distribution};

/// Map searched by the `reference` demo: column 1 is a wall with a single
/// gap on row 3.
pub const REFERENCE_MAP: &str = "\
.#...
.#.#.
.#.#.
.....
.#...";

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install `env_logger`. The filter comes from `GRIDPATH_LOG` (for example
/// `debug` or `gridpath=trace`) and defaults to `info`.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("GRIDPATH_LOG", "info")).init();
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Neighbor connectivity as spelled on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Moves {
    /// Orthogonal steps only.
    Four,
    /// Orthogonal and diagonal steps.
    Eight,
}

impl From<Moves> for Connectivity {
    fn from(m: Moves) -> Self {
        match m {
            Moves::Four => Connectivity::Four,
            Moves::Eight => Connectivity::Eight,
        }
    }
}

/// Search a random obstacle map from the top-left to the bottom-right corner.
#[derive(Parser, Debug)]
#[command(name = "maze", about, long_about = None)]
pub struct MazeArgs {
    /// Number of rows
    #[arg(short, long, default_value_t = 16, value_parser = clap::value_parser!(i32).range(1..))]
    pub rows: i32,

    /// Number of columns
    #[arg(short, long, default_value_t = 40, value_parser = clap::value_parser!(i32).range(1..))]
    pub cols: i32,

    /// Percentage of blocked cells
    #[arg(short, long, default_value_t = 30, value_parser = clap::value_parser!(u32).range(0..=100))]
    pub density: u32,

    /// Seed for the obstacle map
    #[arg(short, long, default_value_t = 42)]
    pub seed: u64,

    /// Neighbor connectivity
    #[arg(short, long, value_enum, default_value_t = Moves::Eight)]
    pub moves: Moves,
}

impl MazeArgs {
    /// Number of cells in the map.
    pub fn cell_count(&self) -> usize {
        (self.rows.max(0) as usize).saturating_mul(self.cols.max(0) as usize)
    }
}

/// Build a `rows × cols` grid where each cell is blocked with probability
/// `density_percent / 100`. `keep_open` cells are always open. Densities above
/// 100 are an error.
pub fn random_obstacles(
    rows: i32,
    cols: i32,
    density_percent: u32,
    seed: u64,
    keep_open: &[Cell],
) -> Result<Grid, BernoulliError> {
    let blocked = Bernoulli::from_ratio(density_percent, 100)?;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    Ok(Grid::from_fn(rows, cols, |c| {
        if !keep_open.contains(&c) && blocked.sample(&mut rng) {
            Occupancy::Blocked
        } else {
            Occupancy::Open
        }
    }))
}

// ---------------------------------------------------------------------------
// TraceRenderer
// ---------------------------------------------------------------------------

/// Observer that mirrors the search onto a private copy of the grid and
/// renders it as text: `+` for frontier cells and `*` for expanded ones.
///
/// A frame is captured every `every` expansions.
pub struct TraceRenderer {
    canvas: Vec<Vec<char>>,
    every: usize,
    expanded: usize,
    frames: Vec<String>,
}

impl TraceRenderer {
    pub fn new(grid: &Grid, every: usize) -> Self {
        let canvas = grid
            .to_string()
            .lines()
            .map(|l| l.chars().collect())
            .collect();
        Self {
            canvas,
            every: every.max(1),
            expanded: 0,
            frames: Vec::new(),
        }
    }

    fn paint(&mut self, c: Cell, ch: char) {
        if let Some(slot) = self
            .canvas
            .get_mut(c.row as usize)
            .and_then(|row| row.get_mut(c.col as usize))
        {
            *slot = ch;
        }
    }

    /// Current state of the canvas.
    pub fn render(&self) -> String {
        self.canvas
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Draw the final path over the canvas.
    pub fn finish(&mut self, outcome: &SearchOutcome) {
        if let Some(path) = outcome.path() {
            for (i, &c) in path.iter().enumerate() {
                let ch = if i == 0 {
                    'S'
                } else if i + 1 == path.len() {
                    'G'
                } else {
                    'o'
                };
                self.paint(c, ch);
            }
        }
    }

    /// Frames captured so far.
    pub fn frames(&self) -> &[String] {
        &self.frames
    }
}

impl SearchObserver for TraceRenderer {
    fn on_expand(&mut self, cell: Cell) {
        self.paint(cell, '*');
        self.expanded += 1;
        if self.expanded % self.every == 0 {
            self.frames.push(self.render());
        }
    }

    fn on_enqueue(&mut self, cell: Cell) {
        self.paint(cell, '+');
    }
}

/// One-line summary of a finished search.
pub fn summary(outcome: &SearchOutcome, stats: SearchStats) -> String {
    let head = match outcome {
        SearchOutcome::Found(path) => format!("path of {} cells", path.len()),
        SearchOutcome::NotFound => "no path".to_string(),
        SearchOutcome::Cancelled => "cancelled".to_string(),
    };
    format!(
        "{head} ({} expanded, {} enqueued, {} discarded, peak frontier {})",
        stats.expanded, stats.enqueued, stats.discarded, stats.peak_frontier
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpath::{Pathfinder, SearchConfig};

    #[test]
    fn random_obstacles_is_seeded() {
        let keep = [Cell::new(0, 0), Cell::new(9, 9)];
        let a = random_obstacles(10, 10, 40, 3, &keep).unwrap();
        let b = random_obstacles(10, 10, 40, 3, &keep).unwrap();
        assert_eq!(a, b);
        assert!(a.is_open(Cell::new(0, 0)));
        assert!(a.is_open(Cell::new(9, 9)));
        let empty = random_obstacles(4, 4, 0, 1, &[]).unwrap();
        assert_eq!(empty.count(Occupancy::Blocked), 0);
        let full = random_obstacles(4, 4, 100, 1, &[]).unwrap();
        assert_eq!(full.count(Occupancy::Blocked), 16);
        assert!(random_obstacles(4, 4, 101, 1, &[]).is_err());
    }

    #[test]
    fn maze_args_defaults_and_values() {
        let args = MazeArgs::try_parse_from(["maze"]).unwrap();
        assert_eq!((args.rows, args.cols, args.density, args.seed), (16, 40, 30, 42));
        assert_eq!(Connectivity::from(args.moves), Connectivity::Eight);

        let args =
            MazeArgs::try_parse_from(["maze", "-r", "5", "-c", "7", "--moves", "four"]).unwrap();
        assert_eq!((args.rows, args.cols), (5, 7));
        assert_eq!(Connectivity::from(args.moves), Connectivity::Four);
        assert_eq!(args.cell_count(), 35);
    }

    #[test]
    fn maze_args_reject_bad_values() {
        for bad in [
            &["maze", "--rows", "abc"][..],
            &["maze", "--rows", "0"][..],
            &["maze", "--density", "101"][..],
            &["maze", "--moves", "fuor"][..],
            &["maze", "5"][..],
        ] {
            assert!(MazeArgs::try_parse_from(bad.iter().copied()).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn cell_count_does_not_overflow() {
        let args = MazeArgs::try_parse_from([
            "maze",
            "--rows",
            "2147483647",
            "--cols",
            "2147483647",
        ])
        .unwrap();
        assert_eq!(args.cell_count(), 2147483647usize.saturating_mul(2147483647));
    }

    #[test]
    fn renderer_follows_the_search() {
        let mut grid: Grid = REFERENCE_MAP.parse().unwrap();
        let mut renderer = TraceRenderer::new(&grid, 1);
        let mut pf = Pathfinder::new(SearchConfig::new(Connectivity::Eight));
        let outcome = pf
            .find_path_observed(&mut grid, Cell::new(0, 0), Cell::new(0, 2), &mut renderer)
            .unwrap();
        assert!(outcome.is_found());
        assert_eq!(renderer.frames().len(), pf.last_stats().expanded);
        assert!(renderer.frames()[0].starts_with('*'));

        renderer.finish(&outcome);
        let out = renderer.render();
        assert!(out.starts_with('S'));
        assert_eq!(out.lines().next().map(|l| l.chars().nth(2)), Some(Some('G')));
        assert_eq!(out.lines().nth(3).map(|l| l.chars().nth(1)), Some(Some('o')));
    }

    #[test]
    fn summary_mentions_counts() {
        let stats = SearchStats {
            expanded: 3,
            enqueued: 4,
            discarded: 1,
            peak_frontier: 2,
        };
        assert_eq!(
            summary(&SearchOutcome::NotFound, stats),
            "no path (3 expanded, 4 enqueued, 1 discarded, peak frontier 2)"
        );
    }
}
