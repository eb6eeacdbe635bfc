use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridpath_core::Cell;

/// Handle into the node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct NodeId(pub(crate) usize);

impl NodeId {
    pub(crate) const NONE: Self = Self(usize::MAX);
}

/// One candidate path endpoint.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SearchNode {
    pub(crate) location: Cell,
    pub(crate) parent: Option<NodeId>,
    pub(crate) g: f64,
    pub(crate) h: f64,
    pub(crate) f: f64,
    /// Insertion order, used to break ties on `f`.
    pub(crate) seq: u64,
}

/// Heap entry, ordered by `(f, seq)` so that `BinaryHeap` (a max-heap) pops
/// the smallest `f` first and, among equal `f`, the earliest insertion.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry {
    pub(crate) f: f64,
    pub(crate) seq: u64,
    pub(crate) node: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Open set. Evicted nodes are not removed from the heap; the caller skips
/// entries whose node is no longer the one retained for its cell.
#[derive(Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
}

impl Frontier {
    pub(crate) fn push(&mut self, node: &SearchNode, id: NodeId) {
        self.heap.push(Entry {
            f: node.f,
            seq: node.seq,
            node: id,
        });
    }

    pub(crate) fn pop(&mut self) -> Option<Entry> {
        self.heap.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }
}
