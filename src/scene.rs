//! Scenes and the persisted layout snapshot.
//!
//! A [`Scene`] is one named navigational surface (a window, typically) with
//! an independent primary and detail route. Exactly one scene exists per
//! distinct name in use; the registry lives on
//! [`NavigationState`](crate::NavigationState).
//!
//! [`PersistedLayout`] is the serialized form used for scene restoration:
//! it round-trips through serialize → deserialize → apply without loss, so
//! a process restart can resume exactly where a scene left off.

use crate::route::Route;
use serde::{Deserialize, Serialize};

/// One named navigational surface with a primary and a detail route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    /// The scene's unique name.
    pub name: String,
    /// The primary route.
    pub route: Route,
    /// The detail route.
    pub detail_route: Route,
}

impl Scene {
    /// A fresh scene with both routes idle at the root path.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            route: Route::new(),
            detail_route: Route::new(),
        }
    }

    /// Whether either route is currently animating.
    pub fn animate(&self) -> bool {
        self.route.animating || self.detail_route.animating
    }

    /// The requested route of this scene.
    pub fn route_for(&self, is_detail: bool) -> &Route {
        if is_detail {
            &self.detail_route
        } else {
            &self.route
        }
    }

    pub(crate) fn route_mut(&mut self, is_detail: bool) -> &mut Route {
        if is_detail {
            &mut self.detail_route
        } else {
            &mut self.route
        }
    }
}

/// Serialized snapshot of a scene's routes, used for scene save/restore.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedLayout {
    /// The primary route snapshot.
    pub primary_route: Route,
    /// The detail route snapshot.
    pub detail_route: Route,
}

impl PersistedLayout {
    /// Capture the layout of a scene for persistence.
    pub fn capture(scene: &Scene) -> Self {
        Self {
            primary_route: scene.route.clone(),
            detail_route: scene.detail_route.clone(),
        }
    }

    /// Rebuild a scene from a restored layout.
    pub fn apply(self, name: impl Into<String>) -> Scene {
        Scene {
            name: name.into(),
            route: self.primary_route,
            detail_route: self.detail_route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_scene_routes_are_idle() {
        let scene = Scene::new("main");
        assert_eq!(scene.route.path, "/");
        assert_eq!(scene.detail_route.path, "/");
        assert!(!scene.animate());
    }

    #[test]
    fn test_animate_is_derived_from_either_route() {
        let mut scene = Scene::new("main");
        scene.route_mut(false).begin_routing("/a/", false, true).unwrap();
        assert!(scene.animate());

        scene.route_mut(false).complete_routing();
        assert!(!scene.animate());

        scene.route_mut(true).begin_routing("/b/", false, true).unwrap();
        assert!(scene.animate());
    }

    #[test]
    fn test_layout_capture_apply() {
        let mut scene = Scene::new("aux");
        scene
            .route_mut(false)
            .begin_routing("/settings/profile/", false, false)
            .unwrap();
        scene.route_mut(false).complete_routing();

        let restored = PersistedLayout::capture(&scene).apply("aux");
        assert_eq!(restored.route.path, "/settings/profile/");
        assert_eq!(restored.route, scene.route);
        assert_eq!(restored, scene);
    }
}
