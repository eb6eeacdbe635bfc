use gridpath_core::{Cell, Grid, Occupancy};

use crate::config::{ClosedCells, EndpointPolicy, GoalAcceptance, SearchConfig};
use crate::distance::manhattan;
use crate::error::{SearchError, SearchOutcome};
use crate::neighbors::Connectivity;
use crate::observer::SearchObserver;
use crate::pathfinder::{Pathfinder, SearchStats, SlotState};

/// Search `grid` for a path from `start` to `goal` with the default policies.
///
/// Expanded cells are marked [`Occupancy::Visited`] in `grid`; call
/// [`Grid::reset_visited`] before searching the same grid again.
pub fn find_path(
    grid: &mut Grid,
    start: Cell,
    goal: Cell,
    connectivity: Connectivity,
) -> Result<SearchOutcome, SearchError> {
    Pathfinder::new(SearchConfig::new(connectivity)).find_path(grid, start, goal)
}

impl Pathfinder {
    /// Search `grid` for a path from `start` to `goal`.
    pub fn find_path(
        &mut self,
        grid: &mut Grid,
        start: Cell,
        goal: Cell,
    ) -> Result<SearchOutcome, SearchError> {
        self.find_path_observed(grid, start, goal, &mut ())
    }

    /// Search `grid` for a path from `start` to `goal`, reporting every
    /// expanded and enqueued cell to `observer`.
    ///
    /// Endpoints are validated before anything is touched: out-of-bounds
    /// endpoints are an error, blocked ones are rejected or forced open
    /// depending on [`SearchConfig::endpoints`]. The observer is polled for
    /// cancellation before every frontier pop.
    pub fn find_path_observed<O: SearchObserver + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start: Cell,
        goal: Cell,
        observer: &mut O,
    ) -> Result<SearchOutcome, SearchError> {
        let bounds = grid.bounds();
        for cell in [start, goal] {
            if !bounds.contains(cell) {
                return Err(SearchError::OutOfBounds { cell, bounds });
            }
        }
        match self.config.endpoints {
            EndpointPolicy::Reject => {
                for cell in [start, goal] {
                    if grid.at(cell) == Some(Occupancy::Blocked) {
                        return Err(SearchError::BlockedEndpoint { cell });
                    }
                }
            }
            EndpointPolicy::ForceOpen => {
                grid.set(start, Occupancy::Open);
                grid.set(goal, Occupancy::Open);
            }
        }

        self.stats = SearchStats::default();
        if start == goal {
            return Ok(SearchOutcome::Found(vec![start]));
        }

        log::debug!(
            "search {start} -> {goal} on {bounds} grid ({:?})",
            self.config
        );
        self.reset(bounds);
        let outcome = self.run(grid, start, goal, observer);
        let s = self.stats;
        match &outcome {
            SearchOutcome::Found(path) => log::debug!(
                "path of {} cells found: {} expanded, {} enqueued, {} discarded",
                path.len(),
                s.expanded,
                s.enqueued,
                s.discarded
            ),
            SearchOutcome::NotFound => log::debug!(
                "no path: frontier exhausted after {} expansions",
                s.expanded
            ),
            SearchOutcome::Cancelled => {
                log::debug!("search cancelled after {} expansions", s.expanded)
            }
        }
        Ok(outcome)
    }

    fn run<O: SearchObserver + ?Sized>(
        &mut self,
        grid: &mut Grid,
        start: Cell,
        goal: Cell,
        observer: &mut O,
    ) -> SearchOutcome {
        let bounds = grid.bounds();
        let connectivity = self.config.connectivity;
        let reopen = self.config.closed_cells == ClosedCells::Reopen;
        let on_discovery = self.config.goal_acceptance == GoalAcceptance::OnDiscovery;

        let Some(start_idx) = bounds.index(start) else {
            return SearchOutcome::NotFound;
        };
        let root = self.alloc(start, None, 0.0, 0.0);
        self.open(start_idx, root);

        loop {
            if observer.is_cancelled() {
                return SearchOutcome::Cancelled;
            }
            let Some(entry) = self.frontier.pop() else {
                return SearchOutcome::NotFound;
            };
            let current = self.nodes[entry.node.0];
            let Some(ci) = bounds.index(current.location) else {
                continue;
            };

            // Skip evicted and already expanded entries.
            match self.slot(ci) {
                Some(slot) if slot.node == entry.node && slot.state == SlotState::Open => {}
                _ => continue,
            }

            self.slots[ci].state = SlotState::Closed;
            grid.set(current.location, Occupancy::Visited);
            self.stats.expanded += 1;
            log::trace!(
                "expand {} g={} h={} f={}",
                current.location,
                current.g,
                current.h,
                current.f
            );
            observer.on_expand(current.location);

            if !on_discovery && current.location == goal {
                return SearchOutcome::Found(self.path_to(entry.node));
            }

            for next in connectivity.neighbors(current.location, |n| bounds.contains(n)) {
                let Some(ni) = bounds.index(next) else {
                    continue;
                };
                let passable = match grid.at(next) {
                    Some(Occupancy::Open) => true,
                    // Only cells closed by this search may be reopened;
                    // cells visited by an earlier search stay impassable.
                    Some(Occupancy::Visited) => reopen && self.slot(ni).is_some(),
                    _ => false,
                };
                if !passable {
                    continue;
                }

                if on_discovery && next == goal {
                    let mut path = self.path_to(entry.node);
                    path.push(goal);
                    return SearchOutcome::Found(path);
                }

                let g = current.g + f64::from(manhattan(current.location, next));
                let h = f64::from(manhattan(next, goal));
                if let Some(slot) = self.slot(ni) {
                    if self.nodes[slot.node.0].f <= g + h {
                        self.stats.discarded += 1;
                        continue;
                    }
                }

                let id = self.alloc(next, Some(entry.node), g, h);
                self.open(ni, id);
                self.stats.enqueued += 1;
                observer.on_enqueue(next);
            }
        }
    }
}
