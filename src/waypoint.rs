//! Explicit waypoint context for the view boundary.
//!
//! A waypoint is the logical navigational position a composing view is
//! associated with. Rather than an ambient lookup threaded invisibly
//! through the view tree, the context here is an explicit value: each
//! routing-aware node takes its [`Waypoint`] as an input and derives the
//! waypoint for its children with [`child`](Waypoint::child).
//!
//! [`WaypointMatcher`] describes the kinds of waypoint a node can resolve —
//! a fixed name, a parameterized segment, or an arbitrary predicate — and
//! [`resolve_waypoint`] is the single function that applies one against a
//! route's leg chain.

use crate::route::Route;
use std::fmt;
use std::sync::Arc;

/// The navigational position handed to a composing view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Waypoint {
    path: String,
}

impl Waypoint {
    /// The root waypoint, where composition starts.
    pub fn root() -> Self {
        Self {
            path: crate::path::ROOT.to_string(),
        }
    }

    /// The waypoint's canonical absolute path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Derive the waypoint a child node composed under `component` receives.
    pub fn child(&self, component: &str) -> Self {
        Self {
            path: format!("{}{}/", self.path, component),
        }
    }

    /// Whether this waypoint lies on the route's active path.
    pub fn is_active_in(&self, route: &Route) -> bool {
        route.path.starts_with(&self.path)
    }

    /// The component of the leg directly below this waypoint on the
    /// route's active chain, if any.
    pub fn next_component<'a>(&self, route: &'a Route) -> Option<&'a str> {
        route
            .chain
            .leg_below(&self.path)
            .map(|leg| leg.component.as_str())
    }
}

impl Default for Waypoint {
    fn default() -> Self {
        Self::root()
    }
}

/// How a routing-aware node decides whether a path component is meant for
/// it.
#[derive(Clone)]
pub enum WaypointMatcher {
    /// Matches one fixed component value.
    Named(String),
    /// Matches any component, binding it under `key`.
    Parameterized {
        /// The parameter name the component value binds to.
        key: String,
    },
    /// Matches components the predicate accepts.
    Predicate(Arc<dyn Fn(&str) -> bool + Send + Sync>),
}

impl WaypointMatcher {
    /// Matcher for a fixed component value.
    pub fn named(component: impl Into<String>) -> Self {
        Self::Named(component.into())
    }

    /// Matcher binding any component under a parameter name.
    pub fn parameterized(key: impl Into<String>) -> Self {
        Self::Parameterized { key: key.into() }
    }

    /// Matcher accepting whatever the predicate accepts.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self::Predicate(Arc::new(predicate))
    }

    /// Whether this matcher accepts a component value.
    pub fn matches(&self, component: &str) -> bool {
        match self {
            Self::Named(name) => name == component,
            Self::Parameterized { .. } => !component.is_empty(),
            Self::Predicate(predicate) => predicate(component),
        }
    }

    /// The `(key, value)` binding a parameterized matcher extracts from a
    /// component.
    pub fn bind(&self, component: &str) -> Option<(String, String)> {
        match self {
            Self::Parameterized { key } if self.matches(component) => {
                Some((key.clone(), component.to_string()))
            }
            _ => None,
        }
    }
}

impl fmt::Debug for WaypointMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Self::Parameterized { key } => {
                f.debug_struct("Parameterized").field("key", key).finish()
            }
            Self::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

/// Resolve one matcher at a waypoint against a route's active chain.
///
/// Returns the child waypoint to descend into when the next component
/// below `waypoint` is one the matcher accepts.
pub fn resolve_waypoint(
    matcher: &WaypointMatcher,
    waypoint: &Waypoint,
    route: &Route,
) -> Option<Waypoint> {
    let component = waypoint.next_component(route)?;
    matcher
        .matches(component)
        .then(|| waypoint.child(component))
}
