//! Generic file manager for everything under the base URL that isn't
//! content editing: raw files, downloads and other methods.

use axum::{
    body::Body,
    http::{HeaderValue, Request, Uri, header},
    response::Response,
};
use std::path::PathBuf;
use tower::ServiceExt;
use tower_http::services::ServeDir;

use crate::error::HugoError;
use crate::router::{decoded_path, query_flag};

/// Path (below the base URL) reserved for the file manager's own assets.
pub const ASSETS_URL: &str = "/_filemanagerinternal";

/// Serves the site root below the base URL.
#[derive(Debug, Clone)]
pub struct FileManager {
    base_url: String,
    serve_dir: ServeDir,
}

impl FileManager {
    pub fn new(base_url: impl Into<String>, root: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            serve_dir: ServeDir::new(root.into()),
        }
    }

    /// Serves `req` from the root directory after stripping the base URL.
    ///
    /// Only GET and HEAD are answered with content; any other method gets
    /// `405 Method Not Allowed`. With `download=true` in the query a
    /// successful response is marked as an attachment.
    pub async fn serve(&self, mut req: Request<Body>) -> Result<Response, HugoError> {
        let download = query_flag(req.uri(), "download");
        let file_name = decoded_path(req.uri())
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();

        *req.uri_mut() = self.strip_base(req.uri())?;

        let response = match self.serve_dir.clone().oneshot(req).await {
            Ok(response) => response,
            Err(never) => match never {},
        };
        let mut response = response.map(Body::new);

        if download && response.status().is_success() && !file_name.is_empty() {
            let disposition = format!("attachment; filename=\"{}\"", file_name.replace('"', ""));
            if let Ok(value) = HeaderValue::from_str(&disposition) {
                response
                    .headers_mut()
                    .insert(header::CONTENT_DISPOSITION, value);
            }
        }

        Ok(response)
    }

    /// Strips the base from the decoded path, the same path the router
    /// classified, and re-encodes what is left segment by segment.
    fn strip_base(&self, uri: &Uri) -> Result<Uri, HugoError> {
        let path = decoded_path(uri);
        let relative = path
            .strip_prefix(self.base_url.as_str())
            .unwrap_or(&path[..])
            .trim_start_matches('/');
        let relative = relative
            .split('/')
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/");

        let rewritten = match uri.query() {
            Some(query) => format!("/{}?{}", relative, query),
            None => format!("/{}", relative),
        };
        Ok(rewritten.parse()?)
    }
}
