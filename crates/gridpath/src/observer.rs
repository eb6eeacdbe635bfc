use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use gridpath_core::Cell;

/// Receives search progress. Every method has a no-op default.
///
/// Observers only ever see cells by value: the search holds the grid and the
/// frontier for its whole duration, so an observer cannot change them.
pub trait SearchObserver {
    /// A cell was popped from the frontier and marked visited.
    fn on_expand(&mut self, _cell: Cell) {}

    /// A newly discovered cell was inserted into the frontier.
    fn on_enqueue(&mut self, _cell: Cell) {}

    /// Polled before every frontier pop. Returning `true` ends the search
    /// with [`SearchOutcome::Cancelled`](crate::SearchOutcome::Cancelled).
    fn is_cancelled(&self) -> bool {
        false
    }
}

/// The null observer.
impl SearchObserver for () {}

impl<O: SearchObserver + ?Sized> SearchObserver for &mut O {
    fn on_expand(&mut self, cell: Cell) {
        (**self).on_expand(cell);
    }

    fn on_enqueue(&mut self, cell: Cell) {
        (**self).on_enqueue(cell);
    }

    fn is_cancelled(&self) -> bool {
        (**self).is_cancelled()
    }
}

/// A single observed search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchEvent {
    Expanded(Cell),
    Enqueued(Cell),
}

impl SearchEvent {
    /// The cell the event is about.
    pub fn cell(self) -> Cell {
        match self {
            Self::Expanded(c) | Self::Enqueued(c) => c,
        }
    }
}

/// Observer that records every event in order, for replaying a search.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<SearchEvent>,
}

impl EventLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events.
    pub fn events(&self) -> &[SearchEvent] {
        &self.events
    }

    /// Expanded cells, in expansion order.
    pub fn expanded(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::Expanded(c) => Some(c),
            SearchEvent::Enqueued(_) => None,
        })
    }

    /// Enqueued cells, in insertion order.
    pub fn enqueued(&self) -> impl Iterator<Item = Cell> + '_ {
        self.events.iter().filter_map(|e| match *e {
            SearchEvent::Enqueued(c) => Some(c),
            SearchEvent::Expanded(_) => None,
        })
    }

    /// Drop every recorded event.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SearchObserver for EventLog {
    fn on_expand(&mut self, cell: Cell) {
        self.events.push(SearchEvent::Expanded(cell));
    }

    fn on_enqueue(&mut self, cell: Cell) {
        self.events.push(SearchEvent::Enqueued(cell));
    }
}

/// Shared cancellation flag. Clones share the same flag, and it can be set
/// from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// A token that is not cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Clear the flag so the token can be used for another search.
    pub fn reset(&self) {
        self.0.store(false, Ordering::Relaxed);
    }
}

/// Wraps an observer so that a [`CancelToken`] can stop the search.
#[derive(Debug, Clone)]
pub struct Cancellable<O> {
    inner: O,
    token: CancelToken,
}

impl<O: SearchObserver> Cancellable<O> {
    /// Wrap `inner`; the search stops once `token` is cancelled.
    pub fn new(inner: O, token: CancelToken) -> Self {
        Self { inner, token }
    }

    /// The wrapped observer.
    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Unwrap the observer.
    pub fn into_inner(self) -> O {
        self.inner
    }
}

impl<O: SearchObserver> SearchObserver for Cancellable<O> {
    fn on_expand(&mut self, cell: Cell) {
        self.inner.on_expand(cell);
    }

    fn on_enqueue(&mut self, cell: Cell) {
        self.inner.on_enqueue(cell);
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled() || self.inner.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_log_keeps_order() {
        let mut log = EventLog::new();
        log.on_expand(Cell::new(0, 0));
        log.on_enqueue(Cell::new(0, 1));
        log.on_enqueue(Cell::new(1, 0));
        log.on_expand(Cell::new(0, 1));
        assert_eq!(log.events().len(), 4);
        assert_eq!(
            log.expanded().collect::<Vec<_>>(),
            vec![Cell::new(0, 0), Cell::new(0, 1)]
        );
        assert_eq!(
            log.enqueued().collect::<Vec<_>>(),
            vec![Cell::new(0, 1), Cell::new(1, 0)]
        );
        assert_eq!(log.events()[1].cell(), Cell::new(0, 1));
        log.clear();
        assert!(log.events().is_empty());
    }

    #[test]
    fn token_clones_share_state() {
        let token = CancelToken::new();
        let other = token.clone();
        assert!(!token.is_cancelled());
        other.cancel();
        assert!(token.is_cancelled());
        token.reset();
        assert!(!other.is_cancelled());
    }

    #[test]
    fn token_can_be_set_from_another_thread() {
        let token = CancelToken::new();
        let remote = token.clone();
        std::thread::spawn(move || remote.cancel()).join().unwrap();
        assert!(token.is_cancelled());
    }

    #[test]
    fn cancellable_forwards_events() {
        let token = CancelToken::new();
        let mut obs = Cancellable::new(EventLog::new(), token.clone());
        obs.on_expand(Cell::new(2, 2));
        assert!(!obs.is_cancelled());
        token.cancel();
        assert!(obs.is_cancelled());
        assert_eq!(obs.inner().events(), &[SearchEvent::Expanded(Cell::new(2, 2))]);
        assert_eq!(obs.into_inner().events().len(), 1);
    }
}
