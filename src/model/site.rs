use std::path::PathBuf;

use super::catalog::Catalog;
use super::config::SiteConfig;

/// A fully loaded portfolio site
#[derive(Debug)]
pub struct Site {
    /// Root directory of the site (parent of `portfolio/`)
    pub root: PathBuf,
    /// Path to the `portfolio/` directory; media paths resolve against it
    pub portfolio_dir: PathBuf,
    /// Parsed site.toml
    pub config: SiteConfig,
    /// Parsed projects.toml
    pub catalog: Catalog,
}
