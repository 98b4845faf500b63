use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::model::catalog::{Catalog, DuplicateIdError};
use crate::model::config::SiteConfig;
use crate::model::project::ProjectRecord;
use crate::model::site::Site;

/// Error type for site I/O operations
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("not a folio site: no portfolio/site.toml found")]
    NotASite,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {file}: {source}")]
    ParseError {
        file: &'static str,
        source: toml::de::Error,
    },
    #[error("invalid projects.toml: {0}")]
    DuplicateId(#[from] DuplicateIdError),
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),
}

/// On-disk shape of projects.toml
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    projects: Vec<ProjectRecord>,
}

/// Discover the site by walking up from the given directory, looking for
/// a `portfolio/` subdirectory holding a site.toml.
pub fn discover_site(start: &Path) -> Result<PathBuf, CatalogError> {
    let mut current = start.to_path_buf();
    loop {
        let portfolio_dir = current.join("portfolio");
        if portfolio_dir.is_dir() && portfolio_dir.join("site.toml").exists() {
            return Ok(current);
        }
        if !current.pop() {
            return Err(CatalogError::NotASite);
        }
    }
}

/// Load a complete site from the given root directory.
///
/// A missing projects.toml loads as an empty catalog.
pub fn load_site(root: &Path) -> Result<Site, CatalogError> {
    let portfolio_dir = root.join("portfolio");
    if !portfolio_dir.is_dir() {
        return Err(CatalogError::NotASite);
    }

    let config_text = read_file(&portfolio_dir.join("site.toml"))?;
    let config: SiteConfig =
        toml::from_str(&config_text).map_err(|source| CatalogError::ParseError {
            file: "site.toml",
            source,
        })?;

    let catalog_path = portfolio_dir.join("projects.toml");
    let catalog = if catalog_path.exists() {
        parse_catalog(&read_file(&catalog_path)?)?
    } else {
        log::info!("no projects.toml in {}", portfolio_dir.display());
        Catalog::default()
    };
    log::debug!("loaded {} projects", catalog.len());

    Ok(Site {
        root: root.to_path_buf(),
        portfolio_dir,
        config,
        catalog,
    })
}

/// Parse the text of a projects.toml into an ordered catalog.
pub fn parse_catalog(text: &str) -> Result<Catalog, CatalogError> {
    let file: CatalogFile = toml::from_str(text).map_err(|source| CatalogError::ParseError {
        file: "projects.toml",
        source,
    })?;
    Ok(Catalog::from_records(file.projects)?)
}

/// Resolve a media `src` against the portfolio directory.
pub fn asset_path(portfolio_dir: &Path, src: &str) -> PathBuf {
    portfolio_dir.join(src)
}

fn read_file(path: &Path) -> Result<String, CatalogError> {
    fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}
