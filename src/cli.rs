use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::generator::{add_route, scaffold_routes_file, write_toast_asset, RouteConfig};
use crate::toast::ToastConfig;

#[derive(Parser)]
#[command(name = "routegen")]
#[command(about = "Route scaffolding for file-based Echo handlers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Derive and print the route config for a method and path
    Config {
        #[arg(short, long)]
        method: String,

        #[arg(short, long)]
        path: String,

        /// Print the config as JSON instead of a field listing
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Insert a route registration into a routes file
    Add {
        #[arg(short, long)]
        method: String,

        #[arg(short, long)]
        path: String,

        #[arg(short, long, default_value = "internal/web/routes.go")]
        routes_file: PathBuf,
    },
    /// Scaffold a fresh routes file carrying the insertion marker
    Init {
        #[arg(short, long, default_value = "internal/web/routes.go")]
        routes_file: PathBuf,

        /// Go package name for the generated file
        #[arg(long, default_value = "web")]
        package: String,

        /// Import path of the package holding the handler functions
        #[arg(long)]
        routes_import: String,

        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
    /// Emit the toast notification widget script
    Toast {
        #[arg(short, long, default_value = "internal/web/public/toast.js")]
        out: PathBuf,

        /// Id of the container element toasts are appended to
        #[arg(long, default_value = "toast-container")]
        container_id: String,

        /// Auto-dismiss delay in milliseconds
        #[arg(long, default_value_t = 5000)]
        dismiss_after_ms: u32,

        #[arg(short, long, default_value_t = false)]
        force: bool,
    },
}

pub fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Config { method, path, json } => {
            let config = RouteConfig::derive(method, path);
            if *json {
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else {
                println!("method:         {}", config.method);
                println!("path:           {}", config.path);
                println!("route filename: {}", config.route_filename);
                println!("func name:      {}", config.func_name);
                println!("reverse name:   {}", config.reverse_name);
            }
        }
        Commands::Add {
            method,
            path,
            routes_file,
        } => {
            let config = RouteConfig::derive(method, path);
            add_route(routes_file, &config)?;
        }
        Commands::Init {
            routes_file,
            package,
            routes_import,
            force,
        } => {
            scaffold_routes_file(routes_file, package, routes_import, *force)?;
        }
        Commands::Toast {
            out,
            container_id,
            dismiss_after_ms,
            force,
        } => {
            let config = ToastConfig {
                container_id: container_id.clone(),
                dismiss_after_ms: *dismiss_after_ms,
                ..ToastConfig::default()
            };
            write_toast_asset(out, &config, *force)?;
        }
    }
    Ok(())
}
