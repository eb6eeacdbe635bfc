use gridpath_core::{Bounds, Cell};

use crate::config::SearchConfig;
use crate::frontier::{Frontier, NodeId, SearchNode};

/// Counters for the last search run by a [`Pathfinder`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells popped from the frontier and marked visited.
    pub expanded: usize,
    /// Nodes inserted into the frontier, the start node excluded.
    pub enqueued: usize,
    /// Discovered nodes dropped because their cell already had one with a
    /// lower or equal `f`.
    pub discarded: usize,
    /// Largest frontier size seen, evicted entries included.
    pub peak_frontier: usize,
}

// ---------------------------------------------------------------------------
// Per-cell bookkeeping
// ---------------------------------------------------------------------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum SlotState {
    Open,
    Closed,
}

/// Best known node for one cell. Only valid when `generation` matches the
/// pathfinder's current generation.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Slot {
    pub(crate) generation: u32,
    pub(crate) node: NodeId,
    pub(crate) state: SlotState,
}

impl Default for Slot {
    fn default() -> Self {
        Self {
            generation: 0,
            node: NodeId::NONE,
            state: SlotState::Open,
        }
    }
}

// ---------------------------------------------------------------------------
// Pathfinder
// ---------------------------------------------------------------------------

/// Reusable A\* searcher.
///
/// `Pathfinder` owns its configuration together with the node arena, the
/// frontier and a per-cell slot table, so repeated searches on grids of the
/// same size incur no allocations after warm-up.
pub struct Pathfinder {
    pub(crate) config: SearchConfig,
    pub(crate) nodes: Vec<SearchNode>,
    pub(crate) slots: Vec<Slot>,
    pub(crate) frontier: Frontier,
    pub(crate) generation: u32,
    pub(crate) next_seq: u64,
    pub(crate) stats: SearchStats,
}

impl Default for Pathfinder {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Pathfinder {
    /// Create a new `Pathfinder` with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            nodes: Vec::new(),
            slots: Vec::new(),
            frontier: Frontier::default(),
            generation: 0,
            next_seq: 0,
            stats: SearchStats::default(),
        }
    }

    /// Configuration used by the next search.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the configuration. The caches are kept.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Counters of the most recent search.
    pub fn last_stats(&self) -> SearchStats {
        self.stats
    }

    /// Prepare the caches for a search on a grid of the given bounds.
    ///
    /// The slot table is only cleared when it has to grow or when the
    /// generation counter wraps; otherwise bumping the generation makes every
    /// old slot stale.
    pub(crate) fn reset(&mut self, bounds: Bounds) {
        self.nodes.clear();
        self.frontier.clear();
        self.next_seq = 0;
        self.generation = self.generation.wrapping_add(1);
        let len = bounds.len();
        if self.generation == 0 || self.slots.len() < len {
            self.slots.clear();
            self.slots.resize(len, Slot::default());
            self.generation = 1;
        }
    }

    /// Allocate a node in the arena.
    pub(crate) fn alloc(
        &mut self,
        location: Cell,
        parent: Option<NodeId>,
        g: f64,
        h: f64,
    ) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(SearchNode {
            location,
            parent,
            g,
            h,
            f: g + h,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        id
    }

    /// Make `id` the retained node for cell index `idx` and push it onto the
    /// frontier. Any node previously retained for the cell becomes stale.
    pub(crate) fn open(&mut self, idx: usize, id: NodeId) {
        self.slots[idx] = Slot {
            generation: self.generation,
            node: id,
            state: SlotState::Open,
        };
        self.frontier.push(&self.nodes[id.0], id);
        self.stats.peak_frontier = self.stats.peak_frontier.max(self.frontier.len());
    }

    /// The retained slot for cell index `idx`, if the current search has one.
    pub(crate) fn slot(&self, idx: usize) -> Option<Slot> {
        let slot = self.slots[idx];
        (slot.generation == self.generation).then_some(slot)
    }

    /// Walk parent handles from `id` back to the start.
    pub(crate) fn path_to(&self, id: NodeId) -> Vec<Cell> {
        let mut path = Vec::new();
        let mut cur = Some(id);
        while let Some(id) = cur {
            let node = &self.nodes[id.0];
            path.push(node.location);
            cur = node.parent;
        }
        path.reverse();
        path
    }
}
