use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::config::ThemeName;

/// Persisted UI preference (written to portfolio/.state.json)
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct UiState {
    /// Last theme chosen with the toggle; absent until the first toggle
    #[serde(default)]
    pub theme: Option<ThemeName>,
}

/// Read .state.json from the portfolio directory
pub fn read_ui_state(portfolio_dir: &Path) -> Option<UiState> {
    let path = portfolio_dir.join(".state.json");
    let content = fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            log::warn!("ignoring malformed {}: {}", path.display(), e);
            None
        }
    }
}

/// Write .state.json to the portfolio directory
pub fn write_ui_state(portfolio_dir: &Path, state: &UiState) -> io::Result<()> {
    let path = portfolio_dir.join(".state.json");
    let content = serde_json::to_string_pretty(state)?;
    atomic_write(&path, content.as_bytes())
}

/// Resolve the theme to start with: saved preference first, then the config default.
pub fn effective_theme(portfolio_dir: &Path, config_default: ThemeName) -> ThemeName {
    read_ui_state(portfolio_dir)
        .and_then(|s| s.theme)
        .unwrap_or(config_default)
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or(Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
