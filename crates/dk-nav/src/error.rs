//! Error types for the dk-nav crate.
//!
//! Two error classes exist in this crate, with different severities:
//!
//! # Error Recovery Strategy
//!
//! - **Table errors** ([`RouteTableError`]): Fatal - returned from
//!   [`Router::new`](crate::Router::new) so an ambiguous route table never
//!   reaches a running state.
//! - **Navigation errors** ([`NavigationError`]): Recoverable - reported to
//!   the caller; the active route and history stay unchanged.

/// Errors detected while constructing a route table.
///
/// A route set with a duplicate path or name is a configuration defect, not
/// a runtime condition: resolution over such a table would be ambiguous, so
/// construction fails instead of deferring the problem to first navigation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RouteTableError {
    /// Two routes share the same path.
    #[error("duplicate route path '{0}' in route table")]
    DuplicatePath(String),

    /// Two routes share the same name.
    #[error("duplicate route name '{0}' in route table")]
    DuplicateName(String),
}

/// Errors produced by navigation requests.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum NavigationError {
    /// No route matches the requested path.
    ///
    /// Contains the path that failed to resolve. The application stays in
    /// its previous valid state.
    #[error("no route matches path '{0}'")]
    NotFound(String),
}

impl NavigationError {
    /// Returns the path that failed to resolve.
    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound(path) => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_path_display() {
        let err = RouteTableError::DuplicatePath("/json".to_owned());
        assert_eq!(err.to_string(), "duplicate route path '/json' in route table");
    }

    #[test]
    fn test_duplicate_name_display() {
        let err = RouteTableError::DuplicateName("home".to_owned());
        assert!(err.to_string().contains("home"));
    }

    #[test]
    fn test_not_found_path() {
        let err = NavigationError::NotFound("/missing".to_owned());
        assert_eq!(err.path(), "/missing");
        assert_eq!(err.to_string(), "no route matches path '/missing'");
    }
}
