//! HTTP request handlers.

use axum::{
    body::{Body, Bytes},
    extract::{Extension, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Redirect, Response},
};
use http_body_util::LengthLimitError;
use std::{
    error::Error as _,
    io::ErrorKind,
    path::{Component, Path},
    sync::Arc,
    time::Instant,
};
use tokio::fs;
use tracing::info;

use crate::colors::{colored_id, colored_label};
use crate::error::HugoError;
use crate::router::{decoded_path, settings_location};
use crate::state::AppState;

/// Largest content file body a POST may carry.
pub const MAX_CONTENT_BYTES: usize = 4 * 1024 * 1024;

/// Logs the outcome of a request against its id.
pub(crate) fn log_done(id: &str, label: &str, status: StatusCode, start_time: Instant) {
    info!(
        "{} ← {} {} ({}ms)",
        colored_id(id),
        colored_label(label),
        status,
        start_time.elapsed().as_millis()
    );
}

fn not_found(err: std::io::Error, path: &Path) -> HugoError {
    if err.kind() == ErrorKind::NotFound {
        HugoError::NotFound(path.to_path_buf())
    } else {
        HugoError::Io(err)
    }
}

fn file_response(path: &Path, content: Vec<u8>) -> Response {
    let mime_type = mime_guess::from_path(path).first_or_octet_stream();
    let mut response = Response::new(Body::from(content));
    if let Ok(value) = HeaderValue::from_str(mime_type.as_ref()) {
        response.headers_mut().insert(header::CONTENT_TYPE, value);
    }
    response
}

/// Rejects rewritten paths that climb out of the root with `..`.
fn ensure_contained(path: &Path) -> Result<(), HugoError> {
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        return Err(HugoError::Forbidden(path.to_path_buf()));
    }
    Ok(())
}

/// Serves the generated site for requests outside the admin prefix
///
/// This is the end of the middleware chain:
/// - Automatic index.html serving for directory requests
/// - Correct MIME type detection using file extension
/// - Latency logged against the request id
pub async fn serve_site(
    State(state): State<Arc<AppState>>,
    Extension(id): Extension<String>,
    Extension(start_time): Extension<Instant>,
    uri: Uri,
) -> Result<Response, StatusCode> {
    let path = decoded_path(&uri);
    let path = path.trim_start_matches('/');
    let mut file_path = state.public_dir.join(path);

    if file_path.components().any(|c| matches!(c, Component::ParentDir)) {
        log_done(&id, "SITE", StatusCode::NOT_FOUND, start_time);
        return Err(StatusCode::NOT_FOUND);
    }

    if file_path.is_dir() {
        file_path.push("index.html");
    }

    match fs::read(&file_path).await {
        Ok(content) => {
            let response = file_response(&file_path, content);
            log_done(&id, "SITE", response.status(), start_time);
            Ok(response)
        }
        Err(_) => {
            log_done(&id, "SITE", StatusCode::NOT_FOUND, start_time);
            Err(StatusCode::NOT_FOUND)
        }
    }
}

/// Returns the raw source of a content file.
pub async fn content_get(path: &Path) -> Result<Response, HugoError> {
    ensure_contained(path)?;
    let content = fs::read(path).await.map_err(|e| not_found(e, path))?;
    Ok(file_response(path, content))
}

/// Replaces a content file with the request body.
///
/// The parent directory has to exist already. Bodies over
/// [`MAX_CONTENT_BYTES`] are refused before anything is written.
pub async fn content_post(path: &Path, body: Body) -> Result<Response, HugoError> {
    ensure_contained(path)?;
    let bytes: Bytes = axum::body::to_bytes(body, MAX_CONTENT_BYTES)
        .await
        .map_err(|e| {
            if e.source().is_some_and(|s| s.is::<LengthLimitError>()) {
                HugoError::TooLarge(MAX_CONTENT_BYTES)
            } else {
                HugoError::Body(e)
            }
        })?;
    fs::write(path, &bytes).await.map_err(|e| not_found(e, path))?;
    info!("saved {} ({} bytes)", path.display(), bytes.len());
    Ok(StatusCode::OK.into_response())
}

/// 307 to the site config file under the base URL.
pub async fn settings_redirect(state: &AppState) -> Response {
    Redirect::temporary(&settings_location(state).await).into_response()
}

/// Git integration is not implemented; the request is accepted and dropped.
pub fn git_api() -> Response {
    StatusCode::OK.into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn test_content_get_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = content_get(&dir.path().join("missing.md")).await.unwrap_err();
        assert!(matches!(err, HugoError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_content_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");

        let response = content_post(&path, Body::from("{\"draft\":true}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\"draft\":true}");

        let response = content_get(&path).await.unwrap();
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );
    }

    #[tokio::test]
    async fn test_content_post_over_limit_keeps_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");
        std::fs::write(&path, "# original").unwrap();

        let body = Body::from(vec![b'x'; MAX_CONTENT_BYTES + 1]);
        let err = content_post(&path, body).await.unwrap_err();
        assert!(matches!(err, HugoError::TooLarge(_)));
        assert_eq!(err.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# original");
    }

    #[tokio::test]
    async fn test_content_post_at_limit_is_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("post.md");

        let body = Body::from(vec![b'x'; MAX_CONTENT_BYTES]);
        let response = content_post(&path, body).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(std::fs::metadata(&path).unwrap().len(), MAX_CONTENT_BYTES as u64);
    }

    #[tokio::test]
    async fn test_content_rejects_parent_dir() {
        let path = PathBuf::from("/srv/site/../../etc/passwd.json");
        let err = content_get(&path).await.unwrap_err();
        assert!(matches!(err, HugoError::Forbidden(_)));
    }

    #[tokio::test]
    async fn test_settings_redirect_prefers_yaml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "").unwrap();
        std::fs::write(dir.path().join("config.yaml"), "").unwrap();
        let state = AppState::new("/admin", dir.path().to_path_buf(), dir.path().join("public"));

        let response = settings_redirect(&state).await;
        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/admin/config.yaml"
        );
    }

    #[test]
    fn test_git_api_is_a_no_op() {
        assert_eq!(git_api().status(), StatusCode::OK);
    }
}
