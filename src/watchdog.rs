//! Completion failure detection.
//!
//! Every begin-routing leaves its route with `completed = false` and the
//! presentation layer is expected to dispatch a completion once the leaf
//! waypoint is actually on screen. [`CompletionWatchdog`] is the middleware
//! half of that handshake: it tracks a deadline per `(scene, is_detail)`
//! pair and, when one elapses, emits the actions that record a
//! [`NavigationError::RouteCompletionFailed`] and — under the default
//! [`RecoveryPolicy`] — force the route back to a known-good state.
//!
//! The watchdog owns no timer. The host drives it with explicit instants
//! ([`observe`](CompletionWatchdog::observe) after each dispatch,
//! [`poll`](CompletionWatchdog::poll) from whatever scheduling facility it
//! has), which keeps the engine synchronous and the tests deterministic.
//!
//! A new begin-routing for a pair supersedes any prior pending deadline —
//! only the latest incomplete cycle is meaningful.

use crate::action::NavigationAction;
use crate::error::NavigationError;
use crate::state::NavigationState;
use crate::warn_log;
use indexmap::IndexMap;
use std::time::Instant;

/// What the watchdog does after recording a completion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecoveryPolicy {
    /// Record the error and route back to `/`, unanimated.
    #[default]
    RedirectToRoot,
    /// Only record the error; leave recovery to the application.
    RecordOnly,
}

/// Deadline table for the begin/complete handshake.
#[derive(Debug)]
pub struct CompletionWatchdog {
    deadlines: IndexMap<(String, bool), Instant>,
    policy: RecoveryPolicy,
}

impl CompletionWatchdog {
    /// A watchdog with the default redirect-to-root recovery.
    pub fn new() -> Self {
        Self::with_policy(RecoveryPolicy::default())
    }

    /// A watchdog with an explicit recovery policy.
    pub fn with_policy(policy: RecoveryPolicy) -> Self {
        Self {
            deadlines: IndexMap::new(),
            policy,
        }
    }

    /// The configured recovery policy.
    pub fn policy(&self) -> RecoveryPolicy {
        self.policy
    }

    /// Number of routing cycles currently awaiting completion.
    pub fn pending(&self) -> usize {
        self.deadlines.len()
    }

    /// Observe a dispatched action and the state the reducer produced from
    /// it.
    ///
    /// Begin actions arm (or supersede) the pair's deadline — but only when
    /// the route actually has an incomplete cycle, so a skipped or invalid
    /// request never arms a timeout nobody will complete. Completion and
    /// scene removal cancel.
    pub fn observe(&mut self, action: &NavigationAction, state: &NavigationState, now: Instant) {
        match action {
            NavigationAction::BeginRouting {
                scene, is_detail, ..
            }
            | NavigationAction::BeginPop {
                scene, is_detail, ..
            } => {
                let pending = state
                    .route(scene, *is_detail)
                    .is_some_and(|route| !route.completed);
                let key = (scene.clone(), *is_detail);
                if pending {
                    self.deadlines
                        .insert(key, now + state.options.completion_timeout());
                } else {
                    self.deadlines.shift_remove(&key);
                }
            }
            NavigationAction::CompleteRouting { scene, is_detail } => {
                self.deadlines.shift_remove(&(scene.clone(), *is_detail));
            }
            NavigationAction::RemoveRoute { scene } => {
                self.deadlines.shift_remove(&(scene.clone(), false));
                self.deadlines.shift_remove(&(scene.clone(), true));
            }
            _ => {}
        }
    }

    /// Collect every expired deadline and produce the actions that record
    /// and recover from the failures.
    pub fn poll(&mut self, now: Instant) -> Vec<NavigationAction> {
        let expired: Vec<(String, bool)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(key, _)| key.clone())
            .collect();

        let mut actions = Vec::new();
        for (scene, is_detail) in expired {
            self.deadlines.shift_remove(&(scene.clone(), is_detail));
            let kind = if is_detail { "detail" } else { "primary" };
            warn_log!(
                "scene '{}' {} route never completed routing",
                scene,
                kind
            );
            actions.push(NavigationAction::SetError {
                error: NavigationError::RouteCompletionFailed,
                message: Some(format!(
                    "scene '{scene}' {kind} route never completed routing"
                )),
            });
            if self.policy == RecoveryPolicy::RedirectToRoot {
                actions.push(NavigationAction::BeginRouting {
                    path: "/".to_string(),
                    scene,
                    is_detail,
                    skip_if_ancestor: false,
                    animate: false,
                });
            }
        }
        actions
    }
}

impl Default for CompletionWatchdog {
    fn default() -> Self {
        Self::new()
    }
}
