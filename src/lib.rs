//! # routegen
//!
//! **routegen** is a scaffolding companion for Echo-style web applications
//! that keep one handler file per route. Given an HTTP method and a URL path
//! pattern it derives the route's metadata (handler filename stem, Go
//! function name, reverse-route name) and splices a registration line into
//! the application's routes file at a marker comment.
//!
//! ## Architecture
//!
//! - **[`generator`]** - route config derivation, idempotent line insertion,
//!   routes-file scaffolding, and Askama templates for generated assets
//! - **[`toast`]** - configuration for the toast notification widget script
//!   the scaffolded application serves
//! - **[`cli`]** - `clap`-derived command-line interface
//!
//! ## Wire format
//!
//! The generated registration line and the insertion marker are shared with
//! the generated Go source ecosystem and are reproduced byte-for-byte:
//!
//! ```text
//! e.GET("/users/:id", routes.Users).Name = "users";
//! /* insert new routes here */
//! ```
//!
//! ## Example
//!
//! ```
//! use routegen::{insert_route, InsertOutcome, RouteConfig};
//!
//! let config = RouteConfig::derive("delete", "/users/:id");
//! assert_eq!(config.func_name, "UsersDelete");
//! assert_eq!(config.route_filename, "users.[id].DELETE");
//!
//! let content = "func addRoutes(e *echo.Echo) {\n\t/* insert new routes here */\n}\n";
//! let (updated, outcome) = insert_route(content, &config);
//! assert_eq!(outcome, InsertOutcome::Inserted);
//! assert!(updated.contains("routes.UsersDelete"));
//! ```

pub mod cli;
pub mod generator;
pub mod toast;

pub use generator::{
    add_route, insert_route, registration_line, registration_signature, scaffold_routes_file,
    AddRouteError, InsertOutcome, RouteConfig, ROUTE_MARKER,
};
pub use toast::{ToastConfig, ToastKind};
