//! Admin server for a Hugo site.
//!
//! Features:
//! - Serves the generated site from the public directory
//! - Routes everything under the admin prefix to the content editor or the
//!   file manager
//! - Redirects the settings page to the site config file
//! - Detailed logging with color-coded request IDs

use anyhow::Context;
use hugo_admin::{AppState, app, cli::Cli};
use std::sync::Arc;
use tracing::{Level, info};

/// Main entry point that configures and runs the admin server
///
/// Sets up:
/// - Structured logging
/// - Shared application state
/// - Admin routing and the public site fallback
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let args: Cli = argh::from_env();
    let root = args
        .root
        .canonicalize()
        .with_context(|| format!("site root {:?} is not accessible", args.root))?;
    let public_dir = args.public_dir.unwrap_or_else(|| root.join("public"));

    let state = Arc::new(AppState::new(&args.base_url, root.clone(), public_dir));

    info!("Editing site sources in: {:?}", root);
    info!("Serving generated site from: {:?}", state.public_dir);
    info!("Admin interface under: {}/", state.base_url);
    info!("Server running on: http://{}", args.bind);

    let listener = tokio::net::TcpListener::bind(args.bind)
        .await
        .with_context(|| format!("failed to bind {}", args.bind))?;
    axum::serve(listener, app(state))
        .await
        .context("server error")?;

    Ok(())
}
