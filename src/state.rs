//! Root navigation state.
//!
//! [`NavigationState`] is the single authoritative value tracking every
//! scene's routing state. It is owned by whatever external store the
//! application uses; the engine only produces new values of it via the
//! reducer and never mutates a published snapshot.

use crate::error::NavigationError;
use crate::route::Route;
use crate::scene::Scene;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Name of the default scene that always exists unless explicitly removed.
pub const MAIN_SCENE: &str = "main";

/// Engine-wide options, set via
/// [`NavigationAction::SetOptions`](crate::NavigationAction::SetOptions).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationOptions {
    /// How long a begun routing cycle may stay incomplete before the
    /// watchdog reports it failed, in milliseconds.
    pub completion_timeout_ms: u64,
    /// Default animation flag for navigation requests that don't specify
    /// one.
    pub animate: bool,
}

impl NavigationOptions {
    /// The completion timeout as a [`Duration`].
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_millis(self.completion_timeout_ms)
    }
}

impl Default for NavigationOptions {
    fn default() -> Self {
        Self {
            completion_timeout_ms: 5_000,
            animate: true,
        }
    }
}

/// The root state value owned by the external store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    /// Engine-wide options.
    pub options: NavigationOptions,
    /// Every live scene, keyed by name.
    pub scene_by_name: IndexMap<String, Scene>,
    /// Kind of the most recently recorded navigation error.
    pub last_navigation_error: Option<NavigationError>,
    /// Human-readable message accompanying the last error.
    pub last_navigation_error_message: Option<String>,
}

impl NavigationState {
    /// Look up a scene by name.
    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scene_by_name.get(name)
    }

    /// Look up one route of a scene.
    pub fn route(&self, scene: &str, is_detail: bool) -> Option<&Route> {
        self.scene(scene).map(|s| s.route_for(is_detail))
    }

    /// Get a scene, creating it on first reference.
    pub(crate) fn scene_mut(&mut self, name: &str) -> &mut Scene {
        self.scene_by_name
            .entry(name.to_string())
            .or_insert_with(|| Scene::new(name))
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        let mut scene_by_name = IndexMap::new();
        scene_by_name.insert(MAIN_SCENE.to_string(), Scene::new(MAIN_SCENE));
        Self {
            options: NavigationOptions::default(),
            scene_by_name,
            last_navigation_error: None,
            last_navigation_error_message: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_has_main_scene() {
        let state = NavigationState::default();
        assert!(state.scene(MAIN_SCENE).is_some());
        assert_eq!(state.scene_by_name.len(), 1);
        assert!(state.last_navigation_error.is_none());
    }

    #[test]
    fn test_scene_created_on_first_reference() {
        let mut state = NavigationState::default();
        assert!(state.scene("aux").is_none());

        state.scene_mut("aux");
        assert!(state.scene("aux").is_some());
        assert_eq!(state.scene("aux").unwrap().route.path, "/");
    }

    #[test]
    fn test_default_options() {
        let options = NavigationOptions::default();
        assert_eq!(options.completion_timeout(), Duration::from_millis(5_000));
        assert!(options.animate);
    }
}
