//! The navigation reducer.
//!
//! [`reduce`] is the sole mutator of routing state: a pure, synchronous
//! function from a state value and an action to a new state value. The
//! external store serializes dispatches, so from the engine's perspective
//! every transition is atomic and total-ordered — there is no locking
//! because there is no concurrent mutation by design.
//!
//! The reducer never fails. Malformed input (an unresolvable path, a pop to
//! a path the route was never on) is absorbed as a silent no-op, because a
//! routing engine must never crash the UI.

use crate::action::NavigationAction;
use crate::state::NavigationState;
use crate::{debug_log, trace_log};

/// Apply one action to the navigation state, producing the next state.
///
/// Scenes are created on first reference; the `"main"` scene exists from
/// the start (see [`NavigationState::default`]).
pub fn reduce(state: NavigationState, action: &NavigationAction) -> NavigationState {
    let mut state = state;
    match action {
        NavigationAction::BeginRouting {
            path,
            scene,
            is_detail,
            skip_if_ancestor,
            animate,
        } => {
            let route = state.scene_mut(scene).route_mut(*is_detail);
            match route.begin_routing(path, *skip_if_ancestor, *animate) {
                Some(resolved) => {
                    debug_log!(
                        "scene '{}' {} route begins routing to '{}'",
                        scene,
                        route_kind(*is_detail),
                        resolved
                    );
                }
                None => {
                    trace_log!(
                        "scene '{}' {} route ignored begin routing '{}'",
                        scene,
                        route_kind(*is_detail),
                        path
                    );
                }
            }
        }

        NavigationAction::BeginPop {
            path,
            scene,
            is_detail,
            preserve_branch,
            animate,
        } => {
            let route = state.scene_mut(scene).route_mut(*is_detail);
            match route.begin_pop(path, *preserve_branch, *animate) {
                Some(resolved) => {
                    debug_log!(
                        "scene '{}' {} route pops to '{}'",
                        scene,
                        route_kind(*is_detail),
                        resolved
                    );
                }
                None => {
                    trace_log!(
                        "scene '{}' {} route ignored pop to '{}'",
                        scene,
                        route_kind(*is_detail),
                        path
                    );
                }
            }
        }

        NavigationAction::CompleteRouting { scene, is_detail } => {
            let route = state.scene_mut(scene).route_mut(*is_detail);
            route.complete_routing();
            debug_log!(
                "scene '{}' {} route completed routing to '{}'",
                scene,
                route_kind(*is_detail),
                route.path
            );
        }

        NavigationAction::AddRoute { scene, layout } => {
            debug_log!("restoring scene '{}'", scene);
            state
                .scene_by_name
                .insert(scene.clone(), layout.clone().apply(scene.as_str()));
        }

        NavigationAction::RemoveRoute { scene } => {
            debug_log!("removing scene '{}'", scene);
            state.scene_by_name.shift_remove(scene);
        }

        NavigationAction::BeginCaching {
            path,
            scene,
            is_detail,
            policy,
        } => {
            let route = state.scene_mut(scene).route_mut(*is_detail);
            if route.begin_caching(path, *policy) {
                trace_log!("scene '{}' caching below '{}'", scene, path);
            }
        }

        NavigationAction::StopCaching {
            path,
            scene,
            is_detail,
        } => {
            let route = state.scene_mut(scene).route_mut(*is_detail);
            if route.stop_caching(path) {
                trace_log!("scene '{}' stopped caching below '{}'", scene, path);
            }
        }

        NavigationAction::SetOptions { options } => {
            state.options = options.clone();
        }

        NavigationAction::SetError { error, message } => {
            debug_log!("navigation error recorded: {} ({:?})", error, message);
            state.last_navigation_error = Some(*error);
            state.last_navigation_error_message = message.clone();
        }
    }
    state
}

fn route_kind(is_detail: bool) -> &'static str {
    if is_detail {
        "detail"
    } else {
        "primary"
    }
}
