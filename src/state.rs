//! Shared application state.

use std::path::PathBuf;

use crate::file_manager::FileManager;

/// Per-process configuration, read-only once the server starts
#[derive(Debug, Clone)]
pub struct AppState {
    /// URL prefix the admin router owns (e.g. "/admin"), without trailing slash
    pub base_url: String,
    /// Site source directory the admin edits (holds config.* and content/)
    pub root: PathBuf,
    /// Generated site served to everything outside `base_url`
    pub public_dir: PathBuf,
    pub file_manager: FileManager,
}

impl AppState {
    pub fn new(base_url: &str, root: PathBuf, public_dir: PathBuf) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let file_manager = FileManager::new(base_url.clone(), root.clone());
        Self {
            base_url,
            root,
            public_dir,
            file_manager,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let state = AppState::new("/admin/", "/srv/site".into(), "/srv/site/public".into());
        assert_eq!(state.base_url, "/admin");

        let state = AppState::new("/", "/srv/site".into(), "/srv/site/public".into());
        assert_eq!(state.base_url, "");
    }
}
