//! Viewer configuration.
//! Reads rxcatalog.toml from the current directory or the path in RXCATALOG_CONFIG.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::CatalogSource;
use crate::error::SourceError;
use crate::render::{Banner, Format};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "RXCATALOG_CONFIG";

/// Config file looked up in the current directory when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "rxcatalog.toml";

/// Contents of `rxcatalog.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// `[catalog]` table.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// `[display]` table.
    #[serde(default)]
    pub display: DisplayConfig,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog file to load instead of the embedded catalog.
    pub path: Option<PathBuf>,
}

/// How sections are rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Output format, `text` unless set.
    #[serde(default)]
    pub format: Format,
    /// Print the title block above each section.
    #[serde(default = "default_banner")]
    pub banner: bool,
    /// Banner title.
    #[serde(default = "default_title")]
    pub title: String,
    /// Banner line under the title.
    #[serde(default = "default_tagline")]
    pub tagline: String,
}

fn default_banner()  -> bool   { true }
fn default_title()   -> String { Banner::default().title }
fn default_tagline() -> String { Banner::default().tagline }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: Format::default(),
            banner: default_banner(),
            title: default_title(),
            tagline: default_tagline(),
        }
    }
}

impl DisplayConfig {
    /// The banner to print, or `None` when banners are switched off.
    #[must_use]
    pub fn banner(&self) -> Option<Banner> {
        self.banner.then(|| Banner {
            title: self.title.clone(),
            tagline: self.tagline.clone(),
        })
    }
}

impl ViewerConfig {
    /// Parses a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::TomlDecode` on malformed TOML.
    pub fn from_toml_str(text: &str) -> Result<Self, SourceError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads a config file.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Io` if the file cannot be read, or
    /// `SourceError::TomlDecode` if it is malformed.
    pub fn from_path(path: &Path) -> Result<Self, SourceError> {
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::from_toml_str(&text)?;
        // Relative catalog paths are relative to the config file.
        if let (Some(catalog), Some(dir)) = (config.catalog.path.as_mut(), path.parent()) {
            if catalog.is_relative() {
                *catalog = dir.join(&*catalog);
            }
        }
        Ok(config)
    }

    /// Loads configuration.
    ///
    /// An explicit path must exist. Otherwise `RXCATALOG_CONFIG` is consulted,
    /// then `rxcatalog.toml` in the current directory; when neither names a
    /// file, defaults apply.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if a named config file cannot be read or parsed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, SourceError> {
        if let Some(path) = explicit {
            return Self::from_path(path);
        }

        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => return Self::from_path(Path::new(path.trim())),
            Ok(_) => warn!("{CONFIG_ENV} is set but empty, ignoring"),
            Err(_) => {}
        }

        let default = Path::new(DEFAULT_CONFIG_FILE);
        if default.exists() {
            return Self::from_path(default);
        }

        debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// The catalog source this config points at.
    ///
    /// # Errors
    ///
    /// Returns a [`SourceError`] if the configured file cannot be read or decoded.
    pub fn catalog_source(&self) -> Result<CatalogSource, SourceError> {
        match &self.catalog.path {
            Some(path) => CatalogSource::from_path(path),
            None => CatalogSource::embedded(),
        }
    }
}
