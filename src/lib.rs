//! hugo-admin library - admin routing in front of a Hugo site.

pub mod cli;
pub mod colors;
pub mod error;
pub mod extensions;
pub mod file_manager;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

use axum::{Router, middleware as axum_middleware, routing::get};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

/// Builds the application: the admin router in front of the public site.
///
/// Layers run outside-in: request logging, then admin routing, then the
/// site fallback as the next handler.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .fallback(get(handlers::serve_site))
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::route_requests,
        ))
        .layer(axum_middleware::from_fn(middleware::log_requests))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

pub use state::AppState;
