//! Path-prefix routing to the remote origin.

use crate::api::error::ApiError;
use crate::config::RemoteConfig;

/// True if `path` is `prefix` itself or lies below it.
///
/// `/auth` matches `/auth` and `/auth/token`, not `/authors`.
pub fn prefix_matches(prefix: &str, path: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
        None => false,
    }
}

/// Resolves request paths against the remote origin.
#[derive(Debug, Clone)]
pub struct RouteTable {
    origin: String,
    prefixes: Vec<String>,
}

impl RouteTable {
    pub fn new(origin: impl Into<String>, prefixes: Vec<String>) -> Self {
        let origin = origin.into().trim_end_matches('/').to_string();
        Self { origin, prefixes }
    }

    pub fn from_config(remote: &RemoteConfig) -> Self {
        Self::new(remote.origin.clone(), remote.route_prefixes.clone())
    }

    /// Absolute URL for `path`, or `UnroutedPath` when no prefix covers it.
    pub fn resolve(&self, path: &str) -> Result<String, ApiError> {
        if self.prefixes.iter().any(|prefix| prefix_matches(prefix, path)) {
            Ok(format!("{}{}", self.origin, path))
        } else {
            Err(ApiError::UnroutedPath {
                path: path.to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> RouteTable {
        RouteTable::from_config(&RemoteConfig::default())
    }

    #[test]
    fn routed_path_resolves_against_origin() {
        assert_eq!(
            table().resolve("/auth/token").unwrap(),
            "https://ctflife-demo.zeabur.app/auth/token"
        );
        assert_eq!(
            table().resolve("/course_content").unwrap(),
            "https://ctflife-demo.zeabur.app/course_content"
        );
    }

    #[test]
    fn prefix_must_end_on_segment_boundary() {
        assert!(matches!(
            table().resolve("/usersettings"),
            Err(ApiError::UnroutedPath { .. })
        ));
        assert!(table().resolve("/users/me").is_ok());
        assert!(table().resolve("/users?id=3").is_ok());
    }

    #[test]
    fn unknown_path_is_unrouted() {
        assert!(table().resolve("/static/logo.png").is_err());
    }

    #[test]
    fn trailing_slash_on_origin_is_trimmed() {
        let table = RouteTable::new("http://127.0.0.1:9000/", vec!["/auth".to_string()]);
        assert_eq!(table.resolve("/auth/token").unwrap(), "http://127.0.0.1:9000/auth/token");
    }
}
