//! Route state and its transitions.
//!
//! A [`Route`] is the navigational state of one route (primary or detail)
//! of one scene: the active canonical path, the leg chain resolved from it,
//! the branch caches anchored below it, and the completion flag for the
//! begin/complete handshake.
//!
//! All transitions are total — they never fail, but may be no-ops. A
//! transition that applies returns the path the route actually moved to so
//! the reducer can log it; `None` means the state is unchanged.

use crate::cache::{refresh_caches, resolve_from_caches, CachingPolicy, RouteCache, RouteCaches};
use crate::legs::LegChain;
use crate::path::{normalize, split_leg, ROOT};
use serde::{Deserialize, Serialize};

/// Navigational state of one route of one scene.
///
/// Created empty (`path = "/"`) when a scene is first referenced; the path
/// and leg chain are replaced wholesale on every successful begin-routing,
/// while caches persist across routing cycles subject to eviction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Canonical absolute path, always slash-terminated.
    pub path: String,
    /// The leg chain resolved from `path`; both of its views are rebuilt
    /// together and never individually mutated.
    #[serde(flatten)]
    pub chain: LegChain,
    /// Branch caches keyed by anchor path.
    pub caches: RouteCaches,
    /// Whether the presentation layer confirmed the current routing cycle.
    #[serde(default)]
    pub completed: bool,
    /// Whether the current routing cycle was requested with animation.
    /// Transient presentation metadata, not part of the persisted layout.
    #[serde(skip)]
    pub animating: bool,
}

impl Route {
    /// An idle route at the root path.
    pub fn new() -> Self {
        Self {
            path: ROOT.to_string(),
            chain: LegChain::build(ROOT),
            caches: RouteCaches::new(),
            completed: false,
            animating: false,
        }
    }

    /// Begin routing to `path` (absolute or relative to the current path).
    ///
    /// The request is normalized, then filtered through cache-aware
    /// resolution. With `skip_if_ancestor` set, a request resolving to an
    /// ancestor of (or equal to) the current path is a no-op — used to
    /// avoid redundant resets when re-navigating to an already-active
    /// ancestor.
    pub(crate) fn begin_routing(
        &mut self,
        path: &str,
        skip_if_ancestor: bool,
        animate: bool,
    ) -> Option<String> {
        let Ok(resolved) = normalize(path, &self.path) else {
            return None;
        };
        let resolved = resolve_from_caches(&resolved, &self.path, &self.caches);
        if skip_if_ancestor && self.path.starts_with(&resolved) {
            return None;
        }
        self.route_to(&resolved, animate);
        Some(resolved)
    }

    /// Pop to an ancestor of the current path.
    ///
    /// A request that does not resolve to a leg on the current chain is a
    /// no-op — you cannot pop to a path you were never on. With
    /// `preserve_branch` the route keeps the popped-to leg's active child
    /// branch (or a deeper cached one) instead of discarding everything
    /// below the target.
    pub(crate) fn begin_pop(
        &mut self,
        path: &str,
        preserve_branch: bool,
        animate: bool,
    ) -> Option<String> {
        let Ok(resolved) = normalize(path, &self.path) else {
            return None;
        };
        if !self.path.starts_with(&resolved) {
            return None;
        }
        let target = if preserve_branch {
            match self.chain.leg_below(&resolved) {
                Some(leg) => resolve_from_caches(&leg.path(), &self.path, &self.caches),
                // popping to the current leaf itself
                None => resolved,
            }
        } else {
            resolved
        };
        self.route_to(&target, animate);
        Some(target)
    }

    /// The presentation layer's confirmation that the visual transition for
    /// the current routing cycle finished.
    pub(crate) fn complete_routing(&mut self) {
        self.completed = true;
        self.animating = false;
    }

    /// Register a branch cache for `path`. Idempotent: an existing entry at
    /// the same anchor is left untouched.
    pub(crate) fn begin_caching(&mut self, path: &str, policy: CachingPolicy) -> bool {
        let Ok(resolved) = normalize(path, &self.path) else {
            return false;
        };
        let Some(cache) = RouteCache::anchored_for(&resolved, policy) else {
            return false;
        };
        self.caches.entry(cache.path.clone()).or_insert(cache);
        true
    }

    /// Remove the branch cache registered for `path`. Idempotent.
    pub(crate) fn stop_caching(&mut self, path: &str) -> bool {
        let Ok(resolved) = normalize(path, &self.path) else {
            return false;
        };
        match split_leg(&resolved) {
            Some((anchor, _)) => self.caches.shift_remove(anchor).is_some(),
            None => false,
        }
    }

    fn route_to(&mut self, path: &str, animate: bool) {
        let chain = LegChain::build(path);
        refresh_caches(&mut self.caches, &chain, path);
        self.path = path.to_string();
        self.chain = chain;
        self.completed = false;
        self.animating = animate;
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::new()
    }
}
