//! Request classification for the admin prefix.
//!
//! Everything here is a pure function of the request line and [`AppState`],
//! except [`detect_config_format`] which stats the root directory.

use axum::http::{Method, Uri};
use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use crate::extensions::{extension_of, is_content_extension};
use crate::file_manager::ASSETS_URL;
use crate::state::AppState;

/// Site config formats, probed in this order.
pub const CONFIG_FORMATS: [&str; 3] = ["yaml", "json", "toml"];

/// Where a request goes. First matching rule in [`classify`] wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Outside the base URL: next handler in the chain.
    Next,
    /// `{base}/settings/`: redirect to the site config file.
    Settings,
    /// POST `{base}/api/git/...`: accepted, not implemented.
    GitApi,
    /// Content file read, with the request path rewritten onto the root.
    ContentGet(PathBuf),
    /// Content file save, with the request path rewritten onto the root.
    ContentPost(PathBuf),
    /// Anything else under the base URL.
    FileManager,
}

impl Route {
    pub fn label(&self) -> &'static str {
        match self {
            Route::Next => "SITE",
            Route::Settings => "SETTINGS",
            Route::GitApi => "GIT",
            Route::ContentGet(_) | Route::ContentPost(_) => "CONTENT",
            Route::FileManager => "FILES",
        }
    }
}

/// Percent-decoded request path, falling back to the raw path when the
/// decoded bytes are not UTF-8.
pub fn decoded_path(uri: &Uri) -> Cow<'_, str> {
    urlencoding::decode(uri.path()).unwrap_or(Cow::Borrowed(uri.path()))
}

/// True when the first `key` parameter of the query string is exactly `true`.
pub fn query_flag(uri: &Uri, key: &str) -> bool {
    uri.query().is_some_and(|query| {
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .is_some_and(|(_, v)| v == "true")
    })
}

/// An empty base URL matches every path.
fn under_base(path: &str, base: &str) -> bool {
    base.is_empty() || path.starts_with(base)
}

/// Decides which handler serves the request.
pub fn classify(method: &Method, uri: &Uri, state: &AppState) -> Route {
    let path = decoded_path(uri);
    let base = state.base_url.as_str();

    if !under_base(&path, base) {
        return Route::Next;
    }

    if path == format!("{}/settings/", base) {
        return Route::Settings;
    }

    if path.starts_with(&format!("{}/api/git/", base)) && method == Method::POST {
        return Route::GitApi;
    }

    if should_handle(method, uri, state) {
        let filename = rewrite_path(&path, state);
        return match *method {
            Method::GET => Route::ContentGet(filename),
            Method::POST => Route::ContentPost(filename),
            _ => Route::FileManager,
        };
    }

    Route::FileManager
}

/// Whether the request targets a content file the editor handles.
pub fn should_handle(method: &Method, uri: &Uri, state: &AppState) -> bool {
    if method != Method::GET && method != Method::POST {
        return false;
    }

    let path = decoded_path(uri);
    if path.starts_with(&format!("{}{}", state.base_url, ASSETS_URL)) {
        return false;
    }

    // raw files and downloads belong to the file manager
    if query_flag(uri, "raw") || query_flag(uri, "download") {
        return false;
    }

    extension_of(&path).is_some_and(is_content_extension)
}

/// Maps a request path under the base URL onto the root directory.
pub fn rewrite_path(path: &str, state: &AppState) -> PathBuf {
    let relative = path.strip_prefix(state.base_url.as_str()).unwrap_or(path);
    state.root.join(relative.trim_start_matches('/'))
}

/// First config format present in `root`, or `None`.
///
/// Probe failures count as absent.
pub async fn detect_config_format(root: &Path) -> Option<&'static str> {
    for format in CONFIG_FORMATS {
        let candidate = root.join(format!("config.{}", format));
        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            return Some(format);
        }
    }
    None
}

/// Redirect target for the settings page.
///
/// Without any config file this is `{base}/config.` with an empty extension.
pub async fn settings_location(state: &AppState) -> String {
    let format = detect_config_format(&state.root).await.unwrap_or_default();
    format!("{}/config.{}", state.base_url, format)
}
