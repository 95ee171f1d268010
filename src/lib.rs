//! # scene-router
//!
//! A hierarchical, path-addressed routing state engine for a view tree
//! organized into named scenes, each with an independent primary and detail
//! route.
//!
//! The engine is deliberately small and synchronous: a caller describes a
//! navigation intent as a [`NavigationAction`], the pure
//! [`reduce`](crate::reducer::reduce) function turns it into a new
//! [`NavigationState`] snapshot, and observers read the frozen snapshot —
//! nothing here renders, animates, or touches a platform presentation
//! container.
//!
//! ## Core pieces
//!
//! - [`normalize`] — canonical, slash-terminated absolute paths with
//!   URL-style `.`/`..` resolution.
//! - [`LegChain`] — a path decomposed once per navigation into an ordered
//!   chain of [`Leg`]s, keyed by parent path for O(1) "what follows P"
//!   lookups.
//! - [`RouteCache`] — policy-driven branch memos that let "jump to tab X"
//!   restore the last sub-path the user was at within tab X.
//! - [`Route`] / [`Scene`] / [`NavigationState`] — the state model, with a
//!   [`PersistedLayout`] snapshot for scene restoration.
//! - [`reduce`] — the sole mutator; malformed input is a silent no-op,
//!   never a crash.
//! - [`CompletionWatchdog`] — detects routing transitions whose completion
//!   handshake never arrives and emits recovery actions.
//!
//! ## Example
//!
//! ```
//! use scene_router::{NavigationAction, NavigationStore};
//!
//! let mut store = NavigationStore::new();
//! store.dispatch(NavigationAction::begin_routing("/settings/profile/"));
//!
//! let route = store.state().route("main", false).unwrap();
//! assert_eq!(route.path, "/settings/profile/");
//! assert_eq!(
//!     route.chain.ordered_leg_paths,
//!     vec!["/settings/", "/settings/profile/"]
//! );
//!
//! store.dispatch(NavigationAction::complete_routing());
//! assert!(store.state().route("main", false).unwrap().completed);
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod cache;
pub mod error;
pub mod legs;
pub mod logging;
pub mod path;
pub mod reducer;
pub mod route;
pub mod scene;
pub mod selectors;
pub mod state;
pub mod store;
pub mod watchdog;
pub mod waypoint;

pub use action::NavigationAction;
pub use cache::{CachingPolicy, RouteCache, RouteCaches};
pub use error::NavigationError;
pub use legs::{Leg, LegChain};
pub use path::{normalize, split_leg, PathError, ROOT};
pub use reducer::reduce;
pub use route::Route;
pub use scene::{PersistedLayout, Scene};
pub use state::{NavigationOptions, NavigationState, MAIN_SCENE};
pub use store::{NavigationStore, Observer};
pub use watchdog::{CompletionWatchdog, RecoveryPolicy};
pub use waypoint::{resolve_waypoint, Waypoint, WaypointMatcher};
