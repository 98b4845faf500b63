use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Configuration from site.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteInfo,
    #[serde(default)]
    pub contact: ContactConfig,
    #[serde(default)]
    pub lightbox: LightboxConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    #[serde(default)]
    pub tagline: String,
}

/// Contact block. Submission goes through a third-party form relay;
/// folio only displays where to reach out.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactConfig {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub form_endpoint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightboxConfig {
    /// Loading delay between opening a project and mounting its content.
    /// Default: see src/cli/handlers/templates/site.toml
    #[serde(default = "default_render_delay_ms")]
    pub render_delay_ms: u64,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        LightboxConfig {
            render_delay_ms: default_render_delay_ms(),
        }
    }
}

/// Default: see src/cli/handlers/templates/site.toml
fn default_render_delay_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct UiConfig {
    /// Theme used when no preference has been saved yet
    #[serde(default)]
    pub theme: ThemeName,
    /// Hex color overrides, applied on top of either palette
    #[serde(default)]
    pub colors: HashMap<String, String>,
}

/// The single persisted UI preference
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
    #[default]
    Dark,
    Light,
}

impl ThemeName {
    pub fn toggled(self) -> Self {
        match self {
            ThemeName::Dark => ThemeName::Light,
            ThemeName::Light => ThemeName::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeName::Dark => "dark",
            ThemeName::Light => "light",
        }
    }
}

impl fmt::Display for ThemeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dark" => Ok(ThemeName::Dark),
            "light" => Ok(ThemeName::Light),
            other => Err(format!("unknown theme \"{}\" (expected dark or light)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: SiteConfig = toml::from_str("[site]\nname = \"Ada\"\n").unwrap();
        assert_eq!(config.site.name, "Ada");
        assert_eq!(config.site.tagline, "");
        assert_eq!(config.lightbox.render_delay_ms, 300);
        assert_eq!(config.ui.theme, ThemeName::Dark);
        assert!(config.contact.email.is_none());
    }

    #[test]
    fn theme_parses_lowercase() {
        let config: SiteConfig =
            toml::from_str("[site]\nname = \"Ada\"\n\n[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.ui.theme, ThemeName::Light);
        assert_eq!("dark".parse::<ThemeName>(), Ok(ThemeName::Dark));
        assert!("Dark".parse::<ThemeName>().is_err());
    }

    #[test]
    fn theme_toggle_is_an_involution() {
        assert_eq!(ThemeName::Dark.toggled(), ThemeName::Light);
        assert_eq!(ThemeName::Light.toggled().toggled(), ThemeName::Light);
    }
}
