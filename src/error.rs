//! Navigation errors.
//!
//! Error kinds are data, not exceptions — the engine never throws. Malformed
//! input is absorbed as a silent no-op transition, and the kinds below are
//! surfaced purely as state (`last_navigation_error` /
//! `last_navigation_error_message`) for the UI or middleware to react to.
//!
//! [`NavigationError::RouteCompletionFailed`] is the only kind produced by
//! the engine's own protocol (the completion watchdog); the others are
//! reserved for collaborating layers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a recorded navigation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavigationError {
    /// Unclassified failure reported by a collaborating layer.
    Unknown,
    /// A scene lookup failed at the view layer.
    SceneNotFound,
    /// A routing transition never received its completion handshake.
    RouteCompletionFailed,
}

impl NavigationError {
    /// Check if this is the engine-produced completion failure.
    pub fn is_completion_failure(&self) -> bool {
        matches!(self, Self::RouteCompletionFailed)
    }
}

impl fmt::Display for NavigationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown => write!(f, "unknown navigation error"),
            Self::SceneNotFound => write!(f, "scene not found"),
            Self::RouteCompletionFailed => write!(f, "route completion failed"),
        }
    }
}
