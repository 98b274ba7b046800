//! Static Files Config

use std::path::PathBuf;

use clap::Args;

/// Where the storefront pages and uploaded images live.
#[derive(Debug, Args)]
pub struct StorageConfig {
    /// Directory holding `shop.html`, `admin.html` and their assets
    #[arg(long, env = "PUBLIC_DIR", default_value = "public")]
    pub public_dir: PathBuf,

    /// Directory uploaded images are written to and served from
    #[arg(long, env = "UPLOADS_DIR", default_value = "public/uploads")]
    pub uploads_dir: PathBuf,
}
