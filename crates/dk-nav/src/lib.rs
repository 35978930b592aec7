//! Path-based routing, navigation history, and UI state store for devkit.
//!
//! This crate is the navigation core of the application. It is pure: no I/O,
//! no terminal dependency, no async. The TUI shell drives it from its event
//! loop; tests drive it directly.
//!
//! # Overview
//!
//! The main entry point is [`Router`], which combines:
//!
//! - [`Route`]: a static binding from a path to a component, identified by a
//!   unique name
//! - [`History`]: a linear back/forward stack of visited paths
//! - exact-match resolution over an `FxHashMap` path index
//!
//! Alongside it lives [`UiStateStore`], the session-scoped UI flag store
//! (currently a single dark-mode boolean) with a subscribe/notify observer
//! interface.
//!
//! # Example
//!
//! ```
//! use dk_nav::{Route, Router};
//!
//! let mut router = Router::new([
//!     Route::new("/", "home", "HomePage"),
//!     Route::new("/json", "json-formatter", "JsonPage"),
//! ])?;
//!
//! // Exact-match lookup, no side effects
//! assert_eq!(router.resolve("/json")?, &"JsonPage");
//!
//! // Committing navigation with history
//! router.navigate("/")?;
//! router.navigate("/json")?;
//! assert_eq!(router.back(), Some(&"HomePage"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error Model
//!
//! - [`RouteTableError`]: duplicate path or name in the table. Fatal,
//!   surfaced at construction so an ambiguous table never starts serving.
//! - [`NavigationError`]: a path with no matching route. Recoverable; the
//!   active route and history are left untouched.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod error;
pub mod history;
pub mod route;
pub mod router;
pub mod store;

pub use error::{NavigationError, RouteTableError};
pub use history::History;
pub use route::Route;
pub use router::Router;
pub use store::{ObserverId, UiStateStore};
