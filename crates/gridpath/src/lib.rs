//! Best-first A\* search over occupancy grids.
//!
//! The search runs on a [`Grid`](gridpath_core::Grid) of open and blocked
//! cells and marks every cell it expands as visited. Neighbors follow a
//! [`Connectivity`] (4-way or 8-way), each step costs the Manhattan distance
//! it covers and the heuristic is the Manhattan distance to the goal.
//!
//! Two entry points are provided:
//!
//! - [`find_path`] for one-off searches with the default policies.
//! - [`Pathfinder`], which owns a [`SearchConfig`] and reuses its node arena
//!   and frontier between searches, and accepts a [`SearchObserver`] that is
//!   told about every expanded and enqueued cell.
//!
//! ```
//! use gridpath::{Connectivity, SearchOutcome, find_path};
//! use gridpath_core::{Cell, Grid};
//!
//! let mut grid: Grid = "...\n...\n...".parse().unwrap();
//! let outcome = find_path(&mut grid, Cell::new(0, 0), Cell::new(2, 2), Connectivity::Eight).unwrap();
//! assert_eq!(
//!     outcome,
//!     SearchOutcome::Found(vec![Cell::new(0, 0), Cell::new(1, 1), Cell::new(2, 2)])
//! );
//! ```

mod astar;
mod config;
mod distance;
mod error;
mod frontier;
mod neighbors;
mod observer;
mod pathfinder;

pub use astar::find_path;
pub use config::{ClosedCells, EndpointPolicy, GoalAcceptance, SearchConfig};
pub use distance::{chebyshev, manhattan, path_cost};
pub use error::{SearchError, SearchOutcome};
pub use neighbors::Connectivity;
pub use observer::{CancelToken, Cancellable, EventLog, SearchEvent, SearchObserver};
pub use pathfinder::{Pathfinder, SearchStats};
