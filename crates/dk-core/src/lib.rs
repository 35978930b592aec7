//! Core configuration and tool engines for devkit.
//!
//! This crate provides the foundational pieces shared by the TUI shell and
//! the CLI:
//!
//! - Configuration structures with serde defaults
//! - The configuration error type
//! - The JSON formatting engine used by the formatter page
//! - The digest engine used by the hash calculator page
//!
//! Nothing in this crate knows about terminals, routing, or rendering.

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod digest;
pub mod error;
pub mod format;

pub use config::{ColorScheme, Config, FormatConfig, HashConfig, TuiConfig};
pub use digest::{digest_hex, HashAlgorithm};
pub use error::ConfigError;
pub use format::{format_json, minify_json, FormatError};
