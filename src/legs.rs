//! Leg chain construction.
//!
//! A [`Leg`] is one resolved segment of a route path, identified by the path
//! of its **parent**. Whenever a route begins routing to a new path, the
//! whole chain is rebuilt once and consumers index into it — nothing walks
//! the path string again at read time.
//!
//! The two views of a chain are always rebuilt together:
//!
//! - `legs_by_path` maps a parent path to the leg that extends it, which is
//!   what lets a consumer ask "given I am at path P, what is the next leg
//!   below P?" in O(1).
//! - `ordered_leg_paths` lists every leg's own absolute path root-to-leaf;
//!   its final entry is always the full input path.
//!
//! # Example
//!
//! For path `/tabs/settings/profile/` the chain is:
//!
//! ```text
//! ordered_leg_paths = ["/tabs/", "/tabs/settings/", "/tabs/settings/profile/"]
//! legs_by_path["/"]               → Leg { component: "tabs" }
//! legs_by_path["/tabs/"]          → Leg { component: "settings" }
//! legs_by_path["/tabs/settings/"] → Leg { component: "profile" }
//! ```

use crate::path::ROOT;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One segment of a route path.
///
/// Legs form a strict chain: leg *i*'s [`path`](Self::path) equals leg
/// *i+1*'s `parent_path`. They are rebuilt wholesale on every routing
/// transition and never mutated in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leg {
    /// Absolute path of this segment's parent.
    pub parent_path: String,
    /// The segment's own textual value; empty for the root leg.
    pub component: String,
    /// Ordinal depth, root leg is 0.
    pub index: usize,
}

impl Leg {
    fn root() -> Self {
        Self {
            parent_path: ROOT.to_string(),
            component: String::new(),
            index: 0,
        }
    }

    /// The leg's own absolute path: `parent_path` for the root leg,
    /// `parent_path + component + "/"` otherwise.
    pub fn path(&self) -> String {
        if self.component.is_empty() {
            self.parent_path.clone()
        } else {
            format!("{}{}/", self.parent_path, self.component)
        }
    }

    fn append(&self, component: &str) -> Self {
        Self {
            parent_path: self.path(),
            component: component.to_string(),
            index: self.index + 1,
        }
    }
}

/// The resolved chain of legs for one canonical path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegChain {
    /// Map from a parent path to the leg that extends it.
    pub legs_by_path: IndexMap<String, Leg>,
    /// Every leg's own absolute path, root-to-leaf. The last entry is
    /// always the full path the chain was built from.
    pub ordered_leg_paths: Vec<String>,
}

impl LegChain {
    /// Build the chain for a canonical path.
    ///
    /// The root path `/` yields `ordered_leg_paths == ["/"]` and an empty
    /// `legs_by_path`.
    pub fn build(path: &str) -> Self {
        let mut legs_by_path = IndexMap::new();
        let mut ordered_leg_paths = Vec::new();

        let mut current = Leg::root();
        for component in path.split('/').filter(|c| !c.is_empty()) {
            let next = current.append(component);
            ordered_leg_paths.push(next.path());
            legs_by_path.insert(current.path(), next.clone());
            current = next;
        }

        // ordered_leg_paths.last() == path, even when the input is the bare
        // root or carries an empty segment
        if ordered_leg_paths.last().map(String::as_str) != Some(path) {
            ordered_leg_paths.push(path.to_string());
        }

        Self {
            legs_by_path,
            ordered_leg_paths,
        }
    }

    /// The leg directly below `path`, if `path` is on this chain and not
    /// its leaf.
    pub fn leg_below(&self, path: &str) -> Option<&Leg> {
        self.legs_by_path.get(path)
    }

    /// Number of legs on the chain.
    pub fn len(&self) -> usize {
        self.ordered_leg_paths.len()
    }

    /// `true` only for a chain that was never built (the `Default` value).
    pub fn is_empty(&self) -> bool {
        self.ordered_leg_paths.is_empty()
    }

    /// The deepest leg path — always the full path the chain was built from.
    pub fn leaf(&self) -> Option<&str> {
        self.ordered_leg_paths.last().map(String::as_str)
    }
}
