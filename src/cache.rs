//! Branch caching.
//!
//! A [`RouteCache`] remembers, per anchor path, the last fully resolved path
//! below each of the anchor's child components. When a later navigation
//! jumps to one of those children from *outside* the anchor's subtree, the
//! remembered branch is substituted — "jump to tab X" restores the last
//! sub-path the user was at within tab X instead of resetting to its root.
//!
//! Cache state is touched implicitly in exactly one place:
//! [`refresh_caches`] runs once per successful begin-routing and performs
//! the snapshot update and the policy-driven eviction in a single pass.
//! Explicit stop-caching removes an entry unconditionally at any time.
//!
//! Eviction is semantic, not capacity-based: an entry survives for as long
//! as its [`CachingPolicy`] liveness condition holds against the route's
//! current leg chain.

use crate::legs::LegChain;
use crate::path::{split_leg, ROOT};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// How long a cache entry stays alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CachingPolicy {
    /// Never evicted implicitly; only stop-caching removes it.
    Forever,
    /// Kept while the anchor path is the active path or an ancestor of it.
    WhileActive,
    /// Same liveness test, but against the anchor's source path (one level
    /// above the anchor).
    WhileParentActive,
}

/// Per-route caches, keyed by anchor path.
pub type RouteCaches = IndexMap<String, RouteCache>;

/// A memo of previously active sub-branches below one anchor path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteCache {
    /// Eviction policy governing this entry.
    pub policy: CachingPolicy,
    /// The leg path one level above the anchor.
    pub source_path: String,
    /// The anchor path this cache is registered at.
    pub path: String,
    /// Map from a child component value to the previously active full
    /// resolved path below it.
    pub snapshots: IndexMap<String, String>,
}

impl RouteCache {
    /// Build the cache entry a begin-caching request for `path` registers.
    ///
    /// The entry anchors at the *parent* of `path` — snapshots are recorded
    /// per sibling component, which is what makes the later jump-to-child
    /// lookup line up. Returns `None` for the root path, which has no
    /// parent to anchor at.
    pub(crate) fn anchored_for(path: &str, policy: CachingPolicy) -> Option<Self> {
        let (anchor, _) = split_leg(path)?;
        let source_path = split_leg(anchor).map_or(ROOT, |(parent, _)| parent);
        Some(Self {
            policy,
            source_path: source_path.to_string(),
            path: anchor.to_string(),
            snapshots: IndexMap::new(),
        })
    }
}

/// Cache-aware resolution of a requested absolute path.
///
/// If `requested` is already a prefix of (or equal to) `active_path`, it is
/// used unchanged — the cache only rewrites *external* jumps. Otherwise the
/// request's parent is looked up as a cache anchor and the final component
/// as a snapshot key; on a hit the remembered full path is substituted.
pub(crate) fn resolve_from_caches(
    requested: &str,
    active_path: &str,
    caches: &RouteCaches,
) -> String {
    if active_path.starts_with(requested) {
        return requested.to_string();
    }
    if let Some((parent, component)) = split_leg(requested) {
        if let Some(remembered) = caches
            .get(parent)
            .and_then(|cache| cache.snapshots.get(component))
        {
            crate::trace_log!(
                "cache at '{}' substitutes '{}' for '{}'",
                parent,
                remembered,
                requested
            );
            return remembered.clone();
        }
    }
    requested.to_string()
}

/// The single implicit cache pass, run once per successful begin-routing
/// after the new leg chain is built.
///
/// First the snapshot update: the cache anchored at the deepest leg path
/// still present on the new chain records `snapshots[next component] =
/// new_path`. Then eviction: every entry whose policy's liveness condition
/// no longer holds against the new chain is dropped.
pub(crate) fn refresh_caches(caches: &mut RouteCaches, chain: &LegChain, new_path: &str) {
    let deepest_anchor = chain
        .ordered_leg_paths
        .iter()
        .rev()
        .map(String::as_str)
        .chain(std::iter::once(ROOT))
        .find(|candidate| caches.contains_key(*candidate));

    if let Some(anchor) = deepest_anchor {
        if let Some(component) = chain.leg_below(anchor).map(|leg| leg.component.clone()) {
            if let Some(cache) = caches.get_mut(anchor) {
                cache.snapshots.insert(component, new_path.to_string());
            }
        }
    }

    caches.retain(|anchor, cache| {
        let probe = match cache.policy {
            CachingPolicy::Forever => return true,
            CachingPolicy::WhileActive => anchor.as_str(),
            CachingPolicy::WhileParentActive => cache.source_path.as_str(),
        };
        new_path == probe || chain.legs_by_path.contains_key(probe)
    });
}
