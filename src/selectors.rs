//! Pure read selectors.
//!
//! The view layer never reaches into routing internals; it derives what it
//! needs from a snapshot through these functions. Each is a pure
//! `(state) -> derived` mapping, so any subscription/diff mechanism the
//! application uses can compare outputs across snapshots.

use crate::error::NavigationError;
use crate::legs::Leg;
use crate::route::Route;
use crate::scene::Scene;
use crate::state::NavigationState;

/// The scene with the given name, if it exists.
pub fn scene<'a>(state: &'a NavigationState, name: &str) -> Option<&'a Scene> {
    state.scene(name)
}

/// One route of a scene.
pub fn route<'a>(state: &'a NavigationState, name: &str, is_detail: bool) -> Option<&'a Route> {
    state.route(name, is_detail)
}

/// The active canonical path of one route of a scene.
pub fn active_path<'a>(state: &'a NavigationState, name: &str, is_detail: bool) -> Option<&'a str> {
    state.route(name, is_detail).map(|r| r.path.as_str())
}

/// Whether the presentation layer confirmed the route's current cycle.
pub fn is_completed(state: &NavigationState, name: &str, is_detail: bool) -> bool {
    state
        .route(name, is_detail)
        .is_some_and(|route| route.completed)
}

/// Whether either of the scene's routes is currently animating.
pub fn is_animating(state: &NavigationState, name: &str) -> bool {
    state.scene(name).is_some_and(Scene::animate)
}

/// The leg directly below `path` on a route's active chain.
pub fn next_leg<'a>(route: &'a Route, path: &str) -> Option<&'a Leg> {
    route.chain.leg_below(path)
}

/// The most recently recorded navigation error, with its message.
pub fn last_error(state: &NavigationState) -> Option<(NavigationError, Option<&str>)> {
    state
        .last_navigation_error
        .map(|error| (error, state.last_navigation_error_message.as_deref()))
}
