use std::sync::Arc;

use block_dag::Graph;
use log::debug;
use parking_lot::Mutex;

/// Identifies one of possibly overlapping layout computations. Later tickets compare greater.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub struct Ticket(u64);

/// Holds the result of the most recently started computation that has completed.
///
/// A result is discarded if a computation started after it has already completed.
#[derive(Debug)]
pub struct LatestLayout<R> {
    state: Mutex<State<R>>,
}

#[derive(Debug)]
struct State<R> {
    next_ticket: u64,
    completed: Option<Ticket>,
    graph: Option<Arc<Graph<R>>>,
}

impl<R> Default for LatestLayout<R> {
    fn default() -> Self {
        Self {
            state: Mutex::new(State {
                next_ticket: 0,
                completed: None,
                graph: None,
            }),
        }
    }
}

impl<R> LatestLayout<R> {
    #[must_use]
    pub fn begin(&self) -> Ticket {
        let mut state = self.state.lock();
        let ticket = Ticket(state.next_ticket);
        state.next_ticket += 1;
        ticket
    }

    /// Stores `graph` unless a newer computation has already completed.
    /// Returns whether `graph` was stored.
    pub fn complete(&self, ticket: Ticket, graph: Arc<Graph<R>>) -> bool {
        let mut state = self.state.lock();

        if state.completed.is_some_and(|completed| completed > ticket) {
            debug!("discarding layout superseded by a newer one (ticket: {ticket:?})");
            return false;
        }

        state.completed = Some(ticket);
        state.graph = Some(graph);

        true
    }

    #[must_use]
    pub fn latest(&self) -> Option<Arc<Graph<R>>> {
        self.state.lock().graph.clone()
    }
}
