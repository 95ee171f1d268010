//! Scene save/restore: the persisted layout must survive
//! serialize → deserialize → apply without loss.

use scene_router::{
    reduce, CachingPolicy, NavigationAction, NavigationState, PersistedLayout, MAIN_SCENE,
};

fn populated_state() -> NavigationState {
    [
        NavigationAction::BeginCaching {
            path: "/tabs/settings/".to_string(),
            scene: MAIN_SCENE.to_string(),
            is_detail: false,
            policy: CachingPolicy::WhileActive,
        },
        NavigationAction::begin_routing("/tabs/settings/profile/"),
        NavigationAction::complete_routing(),
        NavigationAction::BeginRouting {
            path: "/inspector/".to_string(),
            scene: MAIN_SCENE.to_string(),
            is_detail: true,
            skip_if_ancestor: false,
            animate: false,
        },
    ]
    .iter()
    .fold(NavigationState::default(), reduce)
}

#[test]
fn layout_round_trips_through_json() {
    let state = populated_state();
    let layout = PersistedLayout::capture(state.scene(MAIN_SCENE).unwrap());

    let json = serde_json::to_string(&layout).unwrap();
    let restored: PersistedLayout = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, layout);

    // re-serializing the restored value is byte-for-byte identical
    let json_again = serde_json::to_string(&restored).unwrap();
    assert_eq!(json_again, json);
}

#[test]
fn layout_uses_the_documented_field_names() {
    let state = populated_state();
    let layout = PersistedLayout::capture(state.scene(MAIN_SCENE).unwrap());
    let json = serde_json::to_value(&layout).unwrap();

    let primary = &json["primaryRoute"];
    assert_eq!(primary["path"], "/tabs/settings/profile/");
    assert!(primary["legsByPath"].is_object());
    assert!(primary["orderedLegPaths"].is_array());
    assert!(primary["caches"].is_object());
    assert_eq!(primary["completed"], true);

    assert_eq!(
        primary["legsByPath"]["/tabs/"]["component"],
        "settings"
    );
    assert_eq!(
        primary["caches"]["/tabs/"]["policy"],
        "whileActive"
    );
    assert_eq!(json["detailRoute"]["path"], "/inspector/");
}

#[test]
fn restored_scene_resumes_where_it_left_off() {
    let state = populated_state();
    let layout = PersistedLayout::capture(state.scene(MAIN_SCENE).unwrap());
    let json = serde_json::to_string(&layout).unwrap();

    // a fresh process restores the scene through the add-route action
    let restored_layout: PersistedLayout = serde_json::from_str(&json).unwrap();
    let fresh = reduce(
        NavigationState::default(),
        &NavigationAction::AddRoute {
            scene: MAIN_SCENE.to_string(),
            layout: restored_layout,
        },
    );

    let route = fresh.route(MAIN_SCENE, false).unwrap();
    assert_eq!(route.path, "/tabs/settings/profile/");
    assert!(route.completed);
    assert_eq!(fresh.route(MAIN_SCENE, true).unwrap().path, "/inspector/");

    // the restored cache still rewrites external jumps
    let fresh = reduce(fresh, &NavigationAction::begin_routing("/tabs/home/"));
    let fresh = reduce(fresh, &NavigationAction::begin_routing("/tabs/settings/"));
    assert_eq!(
        fresh.route(MAIN_SCENE, false).unwrap().path,
        "/tabs/settings/profile/"
    );
}

#[test]
fn minimal_payload_without_completion_flag_deserializes() {
    let json = r#"{
        "primaryRoute": {
            "path": "/a/",
            "legsByPath": {
                "/": { "parentPath": "/", "component": "a", "index": 1 }
            },
            "orderedLegPaths": ["/a/"],
            "caches": {}
        },
        "detailRoute": {
            "path": "/",
            "legsByPath": {},
            "orderedLegPaths": ["/"],
            "caches": {}
        }
    }"#;

    let layout: PersistedLayout = serde_json::from_str(json).unwrap();
    assert_eq!(layout.primary_route.path, "/a/");
    assert!(!layout.primary_route.completed);
    assert_eq!(layout.detail_route.path, "/");
}
