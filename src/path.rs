//! Path normalization.
//!
//! Every path the engine stores is **canonical**: absolute, starting and
//! ending with `/`. Incoming navigation requests may be relative
//! (`"settings"`, `"../profile"`) or absolute (`"/tabs/settings/"`), and are
//! resolved against the route's current path using standard hierarchical URL
//! resolution — `..` pops a segment, `.` is a no-op, an absolute path ignores
//! the base.
//!
//! Resolution is delegated to the [`url`] crate under a synthetic `nav:`
//! origin, so dot-segment handling matches RFC 3986 exactly. A path the URL
//! parser cannot resolve surfaces as [`PathError::InvalidPath`]; callers
//! treat that as "no navigation occurs", never as a crash.
//!
//! # Examples
//!
//! ```
//! use scene_router::normalize;
//!
//! assert_eq!(normalize("profile", "/settings/").unwrap(), "/settings/profile/");
//! assert_eq!(normalize("../home", "/settings/profile/").unwrap(), "/settings/home/");
//! assert_eq!(normalize("/tabs/", "/anywhere/").unwrap(), "/tabs/");
//! ```

use thiserror::Error;
use url::Url;

/// The canonical root path.
pub const ROOT: &str = "/";

/// Failure to turn a navigation request into a canonical absolute path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathError {
    /// The underlying URL resolution could not produce a well-formed
    /// absolute path.
    #[error("cannot resolve '{path}' against base '{base}'")]
    InvalidPath {
        /// The requested path.
        path: String,
        /// The base it was resolved against.
        base: String,
    },
}

/// Resolve `path` against `base_path` into a canonical, slash-terminated
/// absolute path.
///
/// `base_path` is expected to be canonical already (the engine only ever
/// passes a route's current path). An absolute `path` ignores the base
/// except for dot-segment resolution against `/`.
pub fn normalize(path: &str, base_path: &str) -> Result<String, PathError> {
    let invalid = || PathError::InvalidPath {
        path: path.to_string(),
        base: base_path.to_string(),
    };

    let resolved = Url::parse("nav:///")
        .and_then(|origin| origin.join(base_path))
        .and_then(|base| base.join(path))
        .map_err(|_| invalid())?;

    let mut canonical = resolved.path().to_string();
    if !canonical.starts_with('/') {
        canonical.insert(0, '/');
    }
    if !canonical.ends_with('/') {
        canonical.push('/');
    }
    Ok(canonical)
}

/// Split a canonical path into its parent path and final component.
///
/// Returns `None` for the root path (it has no parent) and for paths that
/// are not slash-terminated.
///
/// # Examples
///
/// ```
/// use scene_router::split_leg;
///
/// assert_eq!(split_leg("/tabs/settings/"), Some(("/tabs/", "settings")));
/// assert_eq!(split_leg("/tabs/"), Some(("/", "tabs")));
/// assert_eq!(split_leg("/"), None);
/// ```
pub fn split_leg(path: &str) -> Option<(&str, &str)> {
    let trimmed = path.strip_suffix('/')?;
    if trimmed.is_empty() {
        return None;
    }
    let cut = trimmed.rfind('/')? + 1;
    Some((&path[..cut], &trimmed[cut..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_absolute_idempotent() {
        assert_eq!(normalize("/", "/").unwrap(), "/");
        assert_eq!(normalize("/tabs/", "/").unwrap(), "/tabs/");
        assert_eq!(
            normalize("/tabs/settings/", "/elsewhere/").unwrap(),
            "/tabs/settings/"
        );
    }

    #[test]
    fn test_normalize_relative() {
        assert_eq!(normalize("settings", "/tabs/").unwrap(), "/tabs/settings/");
        assert_eq!(
            normalize("settings/profile", "/tabs/").unwrap(),
            "/tabs/settings/profile/"
        );
    }

    #[test]
    fn test_normalize_dot_segments() {
        assert_eq!(normalize(".", "/tabs/settings/").unwrap(), "/tabs/settings/");
        assert_eq!(normalize("..", "/tabs/settings/").unwrap(), "/tabs/");
        assert_eq!(
            normalize("../home", "/tabs/settings/").unwrap(),
            "/tabs/home/"
        );
        assert_eq!(normalize("/a/../b/", "/tabs/").unwrap(), "/b/");
    }

    #[test]
    fn test_normalize_above_root_clamps() {
        // URL resolution clamps at the root rather than failing
        assert_eq!(normalize("../../..", "/a/").unwrap(), "/");
    }

    #[test]
    fn test_normalize_empty_path_keeps_base() {
        assert_eq!(normalize("", "/tabs/settings/").unwrap(), "/tabs/settings/");
    }

    #[test]
    fn test_normalize_always_slash_terminated() {
        assert_eq!(normalize("/tabs/settings", "/").unwrap(), "/tabs/settings/");
        assert_eq!(normalize("settings", "/tabs/").unwrap(), "/tabs/settings/");
    }

    #[test]
    fn test_split_leg() {
        assert_eq!(split_leg("/tabs/settings/"), Some(("/tabs/", "settings")));
        assert_eq!(split_leg("/tabs/"), Some(("/", "tabs")));
        assert_eq!(split_leg("/"), None);
        assert_eq!(split_leg("/tabs"), None);
    }
}
