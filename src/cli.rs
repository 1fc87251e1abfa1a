//! Command-line interface configuration.

use argh::FromArgs;
use std::{net::SocketAddr, path::PathBuf};

/// Admin server for a Hugo site: edits the site sources under a URL prefix
/// and serves the generated site everywhere else
#[derive(Debug, FromArgs)]
pub struct Cli {
    /// path to the site root holding config.* and content/ (e.g. 'blog/')
    #[argh(option)]
    pub root: PathBuf,

    /// URL prefix of the admin interface (default: '/admin')
    #[argh(option, long = "base-url", default = "String::from(\"/admin\")")]
    pub base_url: String,

    /// directory of the generated site (default: '<root>/public')
    #[argh(option, long = "public-dir")]
    pub public_dir: Option<PathBuf>,

    /// server bind address (default: '127.0.0.1:8000')
    #[argh(option, default = "\"127.0.0.1:8000\".parse().unwrap()")]
    pub bind: SocketAddr,
}
