use std::fs;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use super::config::RouteConfig;
use super::error::AddRouteError;
use super::insert::{insert_route, InsertOutcome};
use super::templates::write_routes_file;

/// Add a route registration to a routes file on disk
///
/// Reads the file, splices the registration line for `config` in before the
/// insertion marker, and writes the result back. If the route is already
/// registered the file is left untouched and the call succeeds.
///
/// # Errors
///
/// * [`AddRouteError::MalformedPath`] if the config's function name is empty
///   (path with no static segments)
/// * [`AddRouteError::MarkerNotFound`] if the file has no insertion marker
/// * I/O errors reading or writing the file
pub fn add_route(routes_path: &Path, config: &RouteConfig) -> anyhow::Result<InsertOutcome> {
    if config.func_name.is_empty() {
        return Err(AddRouteError::MalformedPath {
            path: config.path.clone(),
        }
        .into());
    }

    let content = fs::read_to_string(routes_path)
        .with_context(|| format!("Failed to read routes file {routes_path:?}"))?;
    let (updated, outcome) = insert_route(&content, config);

    match outcome {
        InsertOutcome::Inserted => {
            fs::write(routes_path, updated)
                .with_context(|| format!("Failed to write routes file {routes_path:?}"))?;
            info!(
                method = %config.method,
                path = %config.path,
                func = %config.func_name,
                "registered route"
            );
        }
        InsertOutcome::AlreadyRegistered => {
            info!(
                method = %config.method,
                path = %config.path,
                "route already registered, leaving file untouched"
            );
        }
        InsertOutcome::MarkerNotFound => {
            return Err(AddRouteError::MarkerNotFound {
                file: routes_path.to_path_buf(),
            }
            .into());
        }
    }
    Ok(outcome)
}

/// Scaffold a fresh routes file carrying the insertion marker
///
/// # Errors
///
/// Returns an error if rendering or file writing fails.
pub fn scaffold_routes_file(
    routes_path: &Path,
    package: &str,
    routes_import: &str,
    force: bool,
) -> anyhow::Result<()> {
    write_routes_file(routes_path, package, routes_import, force)?;
    info!(file = ?routes_path, package, "scaffolded routes file");
    Ok(())
}
