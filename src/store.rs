//! A minimal synchronous store.
//!
//! The engine does not assume any particular action-dispatch framework —
//! it only needs something that holds an immutable state snapshot, applies
//! the reducer to dispatched actions, and lets observers dispatch further
//! actions in response to state changes. [`NavigationStore`] is the
//! smallest such host, suitable both for tests and for embedding under a
//! larger application store.
//!
//! Dispatches are serialized through an internal queue: observers never see
//! a half-applied transition, and actions they enqueue run strictly after
//! the one that triggered them.

use crate::action::NavigationAction;
use crate::reducer::reduce;
use crate::state::NavigationState;
use crate::watchdog::{CompletionWatchdog, RecoveryPolicy};
use std::collections::VecDeque;
use std::time::Instant;

/// An observer notified with each published snapshot. Any actions it
/// returns are enqueued and dispatched next.
pub type Observer = Box<dyn FnMut(&NavigationState) -> Vec<NavigationAction>>;

/// Owns the state snapshot, the reducer loop, and the completion watchdog.
pub struct NavigationStore {
    state: NavigationState,
    watchdog: CompletionWatchdog,
    observers: Vec<Observer>,
    queue: VecDeque<NavigationAction>,
    draining: bool,
}

impl NavigationStore {
    /// A store with default state and the default recovery policy.
    pub fn new() -> Self {
        Self::with_policy(RecoveryPolicy::default())
    }

    /// A store with an explicit watchdog recovery policy.
    pub fn with_policy(policy: RecoveryPolicy) -> Self {
        Self {
            state: NavigationState::default(),
            watchdog: CompletionWatchdog::with_policy(policy),
            observers: Vec::new(),
            queue: VecDeque::new(),
            draining: false,
        }
    }

    /// The current published snapshot.
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Number of routing cycles currently awaiting completion.
    pub fn pending_completions(&self) -> usize {
        self.watchdog.pending()
    }

    /// Register an observer. It is invoked after every applied action with
    /// the frozen snapshot; returned actions are dispatched in order.
    pub fn subscribe<F>(&mut self, observer: F)
    where
        F: FnMut(&NavigationState) -> Vec<NavigationAction> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Dispatch an action, stamping deadlines with the current time.
    pub fn dispatch(&mut self, action: NavigationAction) {
        self.dispatch_at(action, Instant::now());
    }

    /// Dispatch an action with an explicit clock, for deterministic tests
    /// and hosts that own their own time source.
    pub fn dispatch_at(&mut self, action: NavigationAction, now: Instant) {
        self.queue.push_back(action);
        self.drain(now);
    }

    /// Give the watchdog a chance to report expired completions, feeding
    /// its error and recovery actions back through the reducer.
    pub fn tick(&mut self, now: Instant) {
        let actions = self.watchdog.poll(now);
        for action in actions {
            self.dispatch_at(action, now);
        }
    }

    fn drain(&mut self, now: Instant) {
        // a dispatch issued from inside an observer lands on the queue and
        // is picked up by the drain already running
        if self.draining {
            return;
        }
        self.draining = true;
        while let Some(action) = self.queue.pop_front() {
            let previous = std::mem::take(&mut self.state);
            self.state = reduce(previous, &action);
            self.watchdog.observe(&action, &self.state, now);
            for observer in &mut self.observers {
                let follow_ups = observer(&self.state);
                self.queue.extend(follow_ups);
            }
        }
        self.draining = false;
    }
}

impl Default for NavigationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MAIN_SCENE;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_dispatch_applies_reducer() {
        let mut store = NavigationStore::new();
        store.dispatch(NavigationAction::begin_routing("/settings/"));
        assert_eq!(
            store.state().route(MAIN_SCENE, false).unwrap().path,
            "/settings/"
        );
    }

    #[test]
    fn test_observer_sees_every_snapshot() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_by_observer = Rc::clone(&seen);

        let mut store = NavigationStore::new();
        store.subscribe(move |state| {
            let path = state.route(MAIN_SCENE, false).unwrap().path.clone();
            seen_by_observer.borrow_mut().push(path);
            Vec::new()
        });

        store.dispatch(NavigationAction::begin_routing("/a/"));
        store.dispatch(NavigationAction::begin_routing("/a/b/"));
        assert_eq!(*seen.borrow(), vec!["/a/", "/a/b/"]);
    }

    #[test]
    fn test_observer_follow_up_actions_are_serialized() {
        // a presentation-layer stand-in: completes any incomplete main route
        let mut store = NavigationStore::new();
        store.subscribe(|state| {
            let route = state.route(MAIN_SCENE, false).unwrap();
            if route.completed {
                Vec::new()
            } else {
                vec![NavigationAction::complete_routing()]
            }
        });

        store.dispatch(NavigationAction::begin_routing("/settings/"));
        let route = store.state().route(MAIN_SCENE, false).unwrap();
        assert_eq!(route.path, "/settings/");
        assert!(route.completed);
        assert_eq!(store.pending_completions(), 0);
    }
}
