//! # Generator Module
//!
//! Code-generation helpers for file-based Echo route handlers. The module
//! derives everything from two inputs: an HTTP method and a URL path pattern.
//!
//! ## Overview
//!
//! ```text
//! (method, path) → RouteConfig → registration line → routes file
//! ```
//!
//! 1. **Config derivation** ([`config`]) - maps `(method, path)` to a
//!    [`RouteConfig`]: canonical method, route filename stem, handler
//!    function name, and reverse-route name.
//! 2. **Insertion** ([`insert`]) - splices exactly one registration line
//!    into existing file content, immediately before the marker comment,
//!    unless the route is already registered.
//! 3. **Project layer** ([`project`]) - reads and writes the routes file on
//!    disk, scaffolds new ones, and turns a missing marker into a hard error
//!    instead of a silent no-op.
//! 4. **Templates** ([`templates`]) - Askama templates for whole-file assets
//!    (routes-file skeleton, toast widget script). The one-line registration
//!    template is a plain format string; no templating engine is involved.
//!
//! Derivation and insertion are pure functions over in-memory strings; only
//! the project layer touches the file system.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use routegen::{add_route, RouteConfig};
//!
//! let config = RouteConfig::derive("post", "/users");
//! add_route(Path::new("internal/web/routes.go"), &config)?;
//! ```

pub mod config;
pub mod error;
pub mod insert;
pub mod project;
pub mod templates;

pub use config::{to_pascal_case, RouteConfig, PARAM_SENTINEL};
pub use error::AddRouteError;
pub use insert::{
    insert_route, registration_line, registration_signature, InsertOutcome, ROUTE_MARKER,
};
pub use project::{add_route, scaffold_routes_file};
pub use templates::{write_routes_file, write_toast_asset, RoutesFileTemplate};
