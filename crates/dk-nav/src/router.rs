//! The router: exact-match path resolution and committing navigation.
//!
//! The router owns an ordered, immutable set of [`Route`] entries plus a
//! path index for O(1) lookup. Resolution ([`Router::resolve`]) is a pure
//! read; navigation ([`Router::navigate`]) commits the resolved route as
//! active and records the path in the [`History`]. Back/forward traversal
//! re-resolves the path stored at the new cursor position.

use rustc_hash::{FxBuildHasher, FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::error::{NavigationError, RouteTableError};
use crate::history::History;
use crate::route::Route;

/// A path-to-component router with navigation history.
///
/// The route set is fixed at construction and validated there: duplicate
/// paths or names fail fast with [`RouteTableError`] instead of producing an
/// ambiguous table. Matching is exact; there are no wildcard or
/// parameterized segments.
///
/// Between a navigation request and its commit the router is logically
/// "resolving"; with a static table that window closes inside the same call,
/// so failure simply leaves the previous active route in place.
///
/// # Examples
///
/// ```
/// use dk_nav::{Route, Router};
///
/// let mut router = Router::new([
///     Route::new("/", "home", 'h'),
///     Route::new("/json", "json-formatter", 'j'),
/// ])?;
///
/// router.navigate("/json")?;
/// assert_eq!(router.active(), Some(&'j'));
/// assert!(router.navigate("/missing").is_err());
/// assert_eq!(router.active(), Some(&'j')); // Unchanged after failure
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Router<C> {
    /// Route entries in registration order.
    routes: Vec<Route<C>>,

    /// Exact-match index from path to position in `routes`.
    by_path: FxHashMap<String, usize>,

    /// Back/forward history of committed paths.
    history: History,

    /// Index of the committed active route, if any.
    active: Option<usize>,
}

impl<C> Router<C> {
    /// Constructs a router from an ordered sequence of routes.
    ///
    /// # Errors
    ///
    /// Returns [`RouteTableError::DuplicatePath`] or
    /// [`RouteTableError::DuplicateName`] if the sequence repeats a path or
    /// name. This is a configuration defect surfaced at startup, never a
    /// runtime condition.
    pub fn new(routes: impl IntoIterator<Item = Route<C>>) -> Result<Self, RouteTableError> {
        let routes: Vec<Route<C>> = routes.into_iter().collect();

        let mut by_path = FxHashMap::with_capacity_and_hasher(routes.len(), FxBuildHasher);
        let mut names = FxHashSet::with_capacity_and_hasher(routes.len(), FxBuildHasher);

        for (index, route) in routes.iter().enumerate() {
            if by_path.insert(route.path().to_owned(), index).is_some() {
                return Err(RouteTableError::DuplicatePath(route.path().to_owned()));
            }
            if !names.insert(route.name().to_owned()) {
                return Err(RouteTableError::DuplicateName(route.name().to_owned()));
            }
        }

        debug!(routes = routes.len(), "route table constructed");

        Ok(Self {
            routes,
            by_path,
            history: History::new(),
            active: None,
        })
    }

    /// Looks up the component bound to `path`.
    ///
    /// Pure read: neither the active route nor the history changes.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotFound`] if no route matches exactly.
    pub fn resolve(&self, path: &str) -> Result<&C, NavigationError> {
        self.by_path
            .get(path)
            .map(|&index| self.routes[index].component())
            .ok_or_else(|| NavigationError::NotFound(path.to_owned()))
    }

    /// Requests a transition to `path`.
    ///
    /// On success the path is pushed onto the history (discarding any
    /// forward entries) and the resolved route becomes active. On failure
    /// the router stays exactly as it was and the caller gets the error.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotFound`] if no route matches.
    pub fn navigate(&mut self, path: &str) -> Result<&C, NavigationError> {
        let Some(index) = self.by_path.get(path).copied() else {
            debug!(path, "navigation rejected: no matching route");
            return Err(NavigationError::NotFound(path.to_owned()));
        };

        self.history.push(path);
        self.active = Some(index);
        debug!(path, route = self.routes[index].name(), "navigation committed");

        Ok(self.routes[index].component())
    }

    /// Moves one history entry back and re-resolves the path there.
    ///
    /// Returns `None` when there is no earlier entry.
    pub fn back(&mut self) -> Option<&C> {
        let path = self.history.back()?.to_owned();
        self.commit_resolved(&path)
    }

    /// Moves one history entry forward and re-resolves the path there.
    ///
    /// Returns `None` when there is no later entry.
    pub fn forward(&mut self) -> Option<&C> {
        let path = self.history.forward()?.to_owned();
        self.commit_resolved(&path)
    }

    /// Returns the active component, if a navigation has committed.
    #[must_use]
    pub fn active(&self) -> Option<&C> {
        self.active.map(|index| self.routes[index].component())
    }

    /// Returns the active route entry, if a navigation has committed.
    #[must_use]
    pub fn active_route(&self) -> Option<&Route<C>> {
        self.active.map(|index| &self.routes[index])
    }

    /// Returns the path at the history cursor, if any.
    #[must_use]
    pub fn current_path(&self) -> Option<&str> {
        self.history.current()
    }

    /// Returns the registered routes in registration order.
    #[must_use]
    pub fn routes(&self) -> &[Route<C>] {
        &self.routes
    }

    /// Returns the navigation history.
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if the route table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Commits the route for a path taken from the history.
    ///
    /// History entries only exist for paths that once resolved, and the
    /// table is immutable, so the lookup cannot fail in practice; the
    /// fallback leaves the active route unchanged.
    fn commit_resolved(&mut self, path: &str) -> Option<&C> {
        let Some(index) = self.by_path.get(path).copied() else {
            warn!(path, "history entry no longer resolves");
            return None;
        };
        self.active = Some(index);
        Some(self.routes[index].component())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tool_router() -> Router<&'static str> {
        Router::new([
            Route::new("/", "home", "HomePage"),
            Route::new("/json", "json-formatter", "JsonPage"),
            Route::new("/hash", "hash-calculator", "HashPage"),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_returns_bound_component() {
        let router = tool_router();
        assert_eq!(router.resolve("/").unwrap(), &"HomePage");
        assert_eq!(router.resolve("/json").unwrap(), &"JsonPage");
        assert_eq!(router.resolve("/hash").unwrap(), &"HashPage");
    }

    #[test]
    fn test_resolve_unknown_path_is_not_found() {
        let router = tool_router();
        let err = router.resolve("/unknown").unwrap_err();
        assert!(matches!(err, NavigationError::NotFound(ref p) if p == "/unknown"));
    }

    #[test]
    fn test_resolve_is_exact_match_only() {
        let router = tool_router();
        assert!(router.resolve("/json/").is_err());
        assert!(router.resolve("/js").is_err());
        assert!(router.resolve("json").is_err());
        assert!(router.resolve("").is_err());
    }

    #[test]
    fn test_resolve_does_not_mutate_state() {
        let mut router = tool_router();
        router.navigate("/json").unwrap();

        assert!(router.resolve("/unknown").is_err());
        assert!(router.resolve("/hash").is_ok());

        assert_eq!(router.active(), Some(&"JsonPage"));
        assert_eq!(router.current_path(), Some("/json"));
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_navigate_commits_active_route() {
        let mut router = tool_router();
        assert_eq!(router.active(), None);

        let component = router.navigate("/hash").unwrap();
        assert_eq!(component, &"HashPage");
        assert_eq!(router.active(), Some(&"HashPage"));
        assert_eq!(router.active_route().map(Route::name), Some("hash-calculator"));
        assert_eq!(router.current_path(), Some("/hash"));
    }

    #[test]
    fn test_navigate_failure_leaves_state_unchanged() {
        let mut router = tool_router();
        router.navigate("/").unwrap();

        let err = router.navigate("/nope").unwrap_err();
        assert!(matches!(err, NavigationError::NotFound(_)));
        assert_eq!(router.active(), Some(&"HomePage"));
        assert_eq!(router.current_path(), Some("/"));
        assert_eq!(router.history().len(), 1);
    }

    #[test]
    fn test_back_restores_previous_route() {
        let mut router = tool_router();
        router.navigate("/hash").unwrap();
        router.navigate("/json").unwrap();

        assert_eq!(router.back(), Some(&"HashPage"));
        assert_eq!(router.active(), Some(&"HashPage"));
        assert_eq!(router.current_path(), Some("/hash"));
    }

    #[test]
    fn test_back_at_oldest_entry_returns_none() {
        let mut router = tool_router();
        router.navigate("/").unwrap();

        assert_eq!(router.back(), None);
        assert_eq!(router.active(), Some(&"HomePage"));
    }

    #[test]
    fn test_forward_after_back() {
        let mut router = tool_router();
        router.navigate("/").unwrap();
        router.navigate("/json").unwrap();

        router.back();
        assert_eq!(router.forward(), Some(&"JsonPage"));
        assert_eq!(router.current_path(), Some("/json"));
        assert_eq!(router.forward(), None);
    }

    #[test]
    fn test_navigate_after_back_discards_forward() {
        let mut router = tool_router();
        router.navigate("/").unwrap();
        router.navigate("/json").unwrap();
        router.back();

        router.navigate("/hash").unwrap();
        assert_eq!(router.history().len(), 2);
        assert_eq!(router.forward(), None);
        assert_eq!(router.active(), Some(&"HashPage"));
    }

    #[test]
    fn test_duplicate_path_fails_at_construction() {
        let result = Router::new([
            Route::new("/json", "json-formatter", ()),
            Route::new("/json", "other", ()),
        ]);
        assert!(matches!(
            result.unwrap_err(),
            RouteTableError::DuplicatePath(ref p) if p == "/json"
        ));
    }

    #[test]
    fn test_duplicate_name_fails_at_construction() {
        let result = Router::new([
            Route::new("/a", "home", ()),
            Route::new("/b", "home", ()),
        ]);
        assert!(matches!(
            result.unwrap_err(),
            RouteTableError::DuplicateName(ref n) if n == "home"
        ));
    }

    #[test]
    fn test_empty_table_is_allowed_but_never_resolves() {
        let router: Router<()> = Router::new([]).unwrap();
        assert!(router.is_empty());
        assert!(router.resolve("/").is_err());
    }

    #[test]
    fn test_routes_preserve_registration_order() {
        let router = tool_router();
        let names: Vec<&str> = router.routes().iter().map(Route::name).collect();
        assert_eq!(names, ["home", "json-formatter", "hash-calculator"]);
        assert_eq!(router.len(), 3);
    }

    #[test]
    fn test_full_navigation_scenario() {
        // route table = [/, /json, /hash]
        let mut router = tool_router();

        assert_eq!(router.resolve("/json").unwrap(), &"JsonPage");
        assert!(router.resolve("/unknown").is_err());

        router.navigate("/hash").unwrap();
        router.navigate("/json").unwrap();
        router.back();

        assert_eq!(router.current_path(), Some("/hash"));
        assert_eq!(router.active(), Some(&"HashPage"));
    }
}
