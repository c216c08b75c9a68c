use askama::Template;
use std::fs;
use std::path::Path;

use anyhow::Context;

use crate::toast::{ToastConfig, ToastKind};

/// Template data for scaffolding a fresh routes file
///
/// The rendered file is a valid, empty registration block ending in the
/// insertion marker, ready for `routegen add` to splice lines into.
#[derive(Template)]
#[template(path = "routes.go.txt", escape = "none")]
pub struct RoutesFileTemplate<'a> {
    /// Go package name for the generated file (e.g. `web`)
    pub package: &'a str,
    /// Import path of the package holding the handler functions
    pub routes_import: &'a str,
}

/// Template data for the toast widget script
#[derive(Template)]
#[template(path = "toast.js.txt", escape = "none")]
struct ToastJsTemplate<'a> {
    config: &'a ToastConfig,
    kinds: &'static [ToastKind],
}

pub(crate) fn render_toast_js(config: &ToastConfig) -> askama::Result<String> {
    ToastJsTemplate {
        config,
        kinds: &ToastKind::ALL,
    }
    .render()
}

/// Write a scaffolded routes file
///
/// # Arguments
///
/// * `path` - Output file path
/// * `package` - Go package name for the file
/// * `routes_import` - Import path of the handlers package
/// * `force` - Overwrite an existing file
///
/// # Errors
///
/// Returns an error if rendering or file writing fails.
pub fn write_routes_file(
    path: &Path,
    package: &str,
    routes_import: &str,
    force: bool,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing routes file: {path:?} (use --force to overwrite)");
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {parent:?}"))?;
    }
    let rendered = RoutesFileTemplate {
        package,
        routes_import,
    }
    .render()?;
    fs::write(path, rendered).with_context(|| format!("Failed to write routes file {path:?}"))?;
    println!("✅ Generated routes file: {path:?}");
    Ok(())
}

/// Write the toast widget script asset
///
/// # Arguments
///
/// * `path` - Output file path (typically under the app's public directory)
/// * `config` - Widget configuration (container id, timings, colors)
/// * `force` - Overwrite an existing file
///
/// # Errors
///
/// Returns an error if rendering or file writing fails.
pub fn write_toast_asset(path: &Path, config: &ToastConfig, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing toast asset: {path:?} (use --force to overwrite)");
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {parent:?}"))?;
    }
    let rendered = config.render()?;
    fs::write(path, rendered).with_context(|| format!("Failed to write toast asset {path:?}"))?;
    println!("✅ Generated toast asset: {path:?}");
    Ok(())
}
