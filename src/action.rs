//! The action vocabulary.
//!
//! Actions are the only way routing state changes: a caller describes its
//! navigation intent as a value, the store funnels it through the reducer,
//! and observers read the resulting snapshot. Actions are plain serializable
//! data so they can be logged, replayed, or shipped across a process
//! boundary.

use crate::cache::CachingPolicy;
use crate::error::NavigationError;
use crate::scene::PersistedLayout;
use crate::state::{NavigationOptions, MAIN_SCENE};
use serde::{Deserialize, Serialize};

/// A navigation intent dispatched into the reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum NavigationAction {
    /// Begin routing one route of a scene to a path.
    #[serde(rename_all = "camelCase")]
    BeginRouting {
        /// Requested path, absolute or relative to the route's current path.
        path: String,
        /// Target scene name.
        scene: String,
        /// Whether the detail route is targeted instead of the primary one.
        is_detail: bool,
        /// Skip the transition when the resolved path is an ancestor of the
        /// current one.
        skip_if_ancestor: bool,
        /// Whether the presentation layer should animate the transition.
        animate: bool,
    },
    /// Pop one route of a scene to an ancestor path.
    #[serde(rename_all = "camelCase")]
    BeginPop {
        /// Ancestor path to pop to.
        path: String,
        /// Target scene name.
        scene: String,
        /// Whether the detail route is targeted.
        is_detail: bool,
        /// Keep the popped-to leg's active (or cached) child branch.
        preserve_branch: bool,
        /// Whether the presentation layer should animate the transition.
        animate: bool,
    },
    /// The presentation layer confirms the routing transition finished.
    #[serde(rename_all = "camelCase")]
    CompleteRouting {
        /// Target scene name.
        scene: String,
        /// Whether the detail route is targeted.
        is_detail: bool,
    },
    /// Restore a scene from a persisted layout.
    #[serde(rename_all = "camelCase")]
    AddRoute {
        /// Scene name to restore into.
        scene: String,
        /// The persisted route pair.
        layout: PersistedLayout,
    },
    /// Tear a scene down.
    #[serde(rename_all = "camelCase")]
    RemoveRoute {
        /// Scene name to remove.
        scene: String,
    },
    /// Register a branch cache.
    #[serde(rename_all = "camelCase")]
    BeginCaching {
        /// Path whose parent anchors the cache.
        path: String,
        /// Target scene name.
        scene: String,
        /// Whether the detail route is targeted.
        is_detail: bool,
        /// Eviction policy for the entry.
        policy: CachingPolicy,
    },
    /// Remove a branch cache.
    #[serde(rename_all = "camelCase")]
    StopCaching {
        /// The path the cache was registered for.
        path: String,
        /// Target scene name.
        scene: String,
        /// Whether the detail route is targeted.
        is_detail: bool,
    },
    /// Replace the engine-wide options.
    #[serde(rename_all = "camelCase")]
    SetOptions {
        /// The new options record.
        options: NavigationOptions,
    },
    /// Record a navigation error.
    #[serde(rename_all = "camelCase")]
    SetError {
        /// Error kind.
        error: NavigationError,
        /// Optional human-readable message.
        message: Option<String>,
    },
}

impl NavigationAction {
    /// Begin routing the main scene's primary route, animated, without the
    /// ancestor skip.
    pub fn begin_routing(path: impl Into<String>) -> Self {
        Self::BeginRouting {
            path: path.into(),
            scene: MAIN_SCENE.to_string(),
            is_detail: false,
            skip_if_ancestor: false,
            animate: true,
        }
    }

    /// Pop the main scene's primary route, discarding the branch below the
    /// target.
    pub fn begin_pop(path: impl Into<String>) -> Self {
        Self::BeginPop {
            path: path.into(),
            scene: MAIN_SCENE.to_string(),
            is_detail: false,
            preserve_branch: false,
            animate: true,
        }
    }

    /// Confirm completion for the main scene's primary route.
    pub fn complete_routing() -> Self {
        Self::CompleteRouting {
            scene: MAIN_SCENE.to_string(),
            is_detail: false,
        }
    }

    /// Record an error without a message.
    pub fn set_error(error: NavigationError) -> Self {
        Self::SetError {
            error,
            message: None,
        }
    }
}
