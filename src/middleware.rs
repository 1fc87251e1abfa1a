//! Request logging and admin routing middleware.

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};
use nanoid::nanoid;
use std::{sync::Arc, time::Instant};
use tracing::{debug, info};

use crate::colors::colored_id;
use crate::handlers::{self, log_done};
use crate::router::{Route, classify};
use crate::state::AppState;

/// Middleware that logs incoming requests and assigns them unique colored IDs
///
/// This middleware:
/// 1. Generates a short nanoid for each request
/// 2. Records the start time for latency calculation
/// 3. Logs the initial request with colored ID
/// 4. Stores the ID and start time in request extensions for downstream handlers
pub async fn log_requests(mut req: Request<Body>, next: Next) -> Response {
    let id = nanoid!(5);
    let method = req.method().clone();
    let uri = req.uri().clone();

    req.extensions_mut().insert(id.clone());
    req.extensions_mut().insert(Instant::now());

    info!("{} → {} {}", colored_id(&id), method, uri.path());
    next.run(req).await
}

/// Admin router: sends each request under the base URL to its handler and
/// everything else down the chain to `next`.
pub async fn route_requests(
    State(state): State<Arc<AppState>>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let route = classify(req.method(), req.uri(), &state);
    let id = req.extensions().get::<String>().cloned().unwrap_or_default();
    let start_time = req
        .extensions()
        .get::<Instant>()
        .copied()
        .unwrap_or_else(Instant::now);
    debug!("{} routed to {:?}", colored_id(&id), route);

    let label = route.label();
    let response = match route {
        Route::Next => return next.run(req).await,
        Route::Settings => handlers::settings_redirect(&state).await,
        Route::GitApi => handlers::git_api(),
        Route::ContentGet(path) => handlers::content_get(&path).await.into_response(),
        Route::ContentPost(path) => handlers::content_post(&path, req.into_body())
            .await
            .into_response(),
        Route::FileManager => state.file_manager.serve(req).await.into_response(),
    };

    log_done(&id, label, response.status(), start_time);
    response
}
