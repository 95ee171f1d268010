//! Integration tests for the routing lifecycle: begin/complete, ancestor
//! skips, pops, and branch caching across whole navigation sequences.

use scene_router::{
    reduce, CachingPolicy, NavigationAction, NavigationState, NavigationStore, MAIN_SCENE,
};

fn dispatch(state: NavigationState, actions: &[NavigationAction]) -> NavigationState {
    actions.iter().fold(state, reduce)
}

fn begin(path: &str) -> NavigationAction {
    NavigationAction::begin_routing(path)
}

fn begin_caching(path: &str, policy: CachingPolicy) -> NavigationAction {
    NavigationAction::BeginCaching {
        path: path.to_string(),
        scene: MAIN_SCENE.to_string(),
        is_detail: false,
        policy,
    }
}

#[test]
fn begin_then_complete_round_trip() {
    let state = NavigationState::default();
    assert_eq!(state.route(MAIN_SCENE, false).unwrap().path, "/");

    let state = reduce(state, &begin("/settings/profile/"));
    let route = state.route(MAIN_SCENE, false).unwrap();
    assert_eq!(route.path, "/settings/profile/");
    assert_eq!(
        route.chain.ordered_leg_paths,
        vec!["/settings/", "/settings/profile/"]
    );
    assert!(!route.completed);

    let state = reduce(state, &NavigationAction::complete_routing());
    assert!(state.route(MAIN_SCENE, false).unwrap().completed);
}

#[test]
fn leg_chain_answers_next_segment_lookups() {
    let state = reduce(NavigationState::default(), &begin("/a/b/c/"));
    let route = state.route(MAIN_SCENE, false).unwrap();

    assert_eq!(
        route.chain.ordered_leg_paths,
        vec!["/a/", "/a/b/", "/a/b/c/"]
    );
    assert_eq!(route.chain.legs_by_path["/a/"].component, "b");
    assert_eq!(route.chain.legs_by_path["/a/"].parent_path, "/a/");
}

#[test]
fn skip_if_ancestor_is_a_noop() {
    let state = reduce(NavigationState::default(), &begin("/a/b/"));
    let state = reduce(state, &NavigationAction::complete_routing());

    let state = reduce(
        state,
        &NavigationAction::BeginRouting {
            path: "/a/".to_string(),
            scene: MAIN_SCENE.to_string(),
            is_detail: false,
            skip_if_ancestor: true,
            animate: true,
        },
    );
    let route = state.route(MAIN_SCENE, false).unwrap();
    assert_eq!(route.path, "/a/b/");
    // the skipped transition did not reset the completion handshake
    assert!(route.completed);
}

#[test]
fn pop_preserves_the_active_branch() {
    let state = reduce(
        NavigationState::default(),
        &begin("/tabs/settings/profile/"),
    );
    let state = reduce(
        state,
        &NavigationAction::BeginPop {
            path: "/tabs/".to_string(),
            scene: MAIN_SCENE.to_string(),
            is_detail: false,
            preserve_branch: true,
            animate: false,
        },
    );
    assert_eq!(
        state.route(MAIN_SCENE, false).unwrap().path,
        "/tabs/settings/"
    );
}

#[test]
fn pop_without_preserve_discards_the_branch() {
    let state = reduce(
        NavigationState::default(),
        &begin("/tabs/settings/profile/"),
    );
    let state = reduce(state, &NavigationAction::begin_pop("/tabs/"));
    assert_eq!(state.route(MAIN_SCENE, false).unwrap().path, "/tabs/");
}

#[test]
fn pop_to_a_path_never_visited_is_a_noop() {
    let state = reduce(NavigationState::default(), &begin("/tabs/settings/"));
    let state = reduce(state, &NavigationAction::begin_pop("/onboarding/"));
    assert_eq!(
        state.route(MAIN_SCENE, false).unwrap().path,
        "/tabs/settings/"
    );
}

#[test]
fn cached_branch_is_restored_on_tab_switch() {
    let state = dispatch(
        NavigationState::default(),
        &[
            begin_caching("/tabs/settings/", CachingPolicy::WhileActive),
            begin("/tabs/settings/profile/"),
            begin("/tabs/home/"),
            begin("/tabs/settings/"),
        ],
    );
    // jumping back to the settings tab restores the cached deeper branch
    assert_eq!(
        state.route(MAIN_SCENE, false).unwrap().path,
        "/tabs/settings/profile/"
    );
}

#[test]
fn while_parent_active_cache_is_evicted_when_source_leaves() {
    let state = dispatch(
        NavigationState::default(),
        &[
            begin_caching("/tabs/settings/detail/", CachingPolicy::WhileParentActive),
            begin("/tabs/settings/detail/inner/"),
            // "/tabs/" is still an ancestor: the cache survives
            begin("/tabs/home/"),
        ],
    );
    assert!(!state.route(MAIN_SCENE, false).unwrap().caches.is_empty());

    // once "/tabs/" is no longer an ancestor, the cache is gone, and a
    // later jump back gets the bare branch instead of the remembered one
    let state = dispatch(
        state,
        &[begin("/onboarding/"), begin("/tabs/settings/detail/")],
    );
    let route = state.route(MAIN_SCENE, false).unwrap();
    assert!(route.caches.is_empty());
    assert_eq!(route.path, "/tabs/settings/detail/");
}

#[test]
fn stop_caching_removes_the_memo() {
    let state = dispatch(
        NavigationState::default(),
        &[
            begin_caching("/tabs/settings/", CachingPolicy::Forever),
            begin("/tabs/settings/profile/"),
            NavigationAction::StopCaching {
                path: "/tabs/settings/".to_string(),
                scene: MAIN_SCENE.to_string(),
                is_detail: false,
            },
            begin("/tabs/home/"),
            begin("/tabs/settings/"),
        ],
    );
    assert_eq!(
        state.route(MAIN_SCENE, false).unwrap().path,
        "/tabs/settings/"
    );
}

#[test]
fn scenes_route_independently() {
    let mut store = NavigationStore::new();
    store.dispatch(NavigationAction::begin_routing("/main-content/"));
    store.dispatch(NavigationAction::BeginRouting {
        path: "/inspector/".to_string(),
        scene: "aux".to_string(),
        is_detail: false,
        skip_if_ancestor: false,
        animate: false,
    });
    store.dispatch(NavigationAction::BeginRouting {
        path: "/inspector/detail/".to_string(),
        scene: "aux".to_string(),
        is_detail: true,
        skip_if_ancestor: false,
        animate: false,
    });

    let state = store.state();
    assert_eq!(state.route(MAIN_SCENE, false).unwrap().path, "/main-content/");
    assert_eq!(state.route("aux", false).unwrap().path, "/inspector/");
    assert_eq!(state.route("aux", true).unwrap().path, "/inspector/detail/");
}

#[test]
fn relative_navigation_resolves_against_current_path() {
    let state = dispatch(
        NavigationState::default(),
        &[begin("/tabs/settings/"), begin("profile")],
    );
    assert_eq!(
        state.route(MAIN_SCENE, false).unwrap().path,
        "/tabs/settings/profile/"
    );

    let state = reduce(state, &begin("../account"));
    assert_eq!(
        state.route(MAIN_SCENE, false).unwrap().path,
        "/tabs/settings/account/"
    );
}
