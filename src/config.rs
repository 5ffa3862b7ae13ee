use std::path::Path;

use crate::error::Error;
use crate::resolver::LinkTarget;

/// Extension configuration loaded from `.apiref.toml`.
/// Controls the role name and where resolved links point.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory under the documentation root holding generated API pages.
    pub api_dir: String,
    /// File extension of generated API pages, without the leading dot.
    pub page_extension: String,
    /// Name the role is registered under.
    pub role_name: String,
}

/// Raw TOML structure for `.apiref.toml`.
#[derive(serde::Deserialize)]
struct ApirefTomlConfig {
    #[serde(default = "default_api_dir")]
    api_dir: String,
    #[serde(default = "default_page_extension")]
    page_extension: String,
    #[serde(default = "default_role_name")]
    role_name: String,
}

/// Default API page directory.
fn default_api_dir() -> String {
    "api".to_string()
}

/// Default API page extension.
fn default_page_extension() -> String {
    "html".to_string()
}

/// Default role name.
fn default_role_name() -> String {
    "api".to_string()
}

impl Default for Config {
    /// The stock layout: an `api` role linking into `api/**/*.html`.
    fn default() -> Self {
        Self {
            api_dir: default_api_dir(),
            page_extension: default_page_extension(),
            role_name: default_role_name(),
        }
    }
}

impl Config {
    /// Load config from `.apiref.toml` in the given root directory.
    /// Returns the stock defaults if the file doesn't exist.
    /// Returns an error if the file exists but is malformed — never silently
    /// falls back to defaults when the user wrote a config file.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if reading fails (other than not-found),
    /// or `Error::TomlDe` if the TOML is malformed.
    pub fn load(root: &Path) -> Result<Self, Error> {
        let path = root.join(".apiref.toml");
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(Error::Io(e)),
        };

        let raw: ApirefTomlConfig = toml::from_str(&content)?;
        Ok(Self {
            api_dir: raw.api_dir,
            page_extension: raw.page_extension,
            role_name: raw.role_name,
        })
    }

    /// The link target the resolver should aim resolved URIs at.
    pub fn link_target(&self) -> LinkTarget {
        LinkTarget {
            api_dir: self.api_dir.clone(),
            extension: self.page_extension.clone(),
        }
    }
}
