//! Catalog sources: the raw, unvalidated content a store is loaded from.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SourceError;
use crate::record::{Disease, Drug, RecordKey, Target, Update};

const EMBEDDED_CATALOG: &str = include_str!("../../data/catalog.json");

/// Keys of the records shown when a category is selected without a key.
///
/// A kind without an entry features its first record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Featured {
    /// Drug shown for the Drug category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug: Option<RecordKey>,

    /// Target shown for the Target category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<RecordKey>,

    /// Disease shown for the Disease category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disease: Option<RecordKey>,
}

/// Serialized form of a catalog.
///
/// Sources are plain data: nothing is checked until the source is handed to
/// [`CatalogStore::load`](crate::CatalogStore::load).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSource {
    /// Drug records in declaration order.
    #[serde(default)]
    pub drugs: Vec<Drug>,

    /// Target records in declaration order.
    #[serde(default)]
    pub targets: Vec<Target>,

    /// Disease records in declaration order.
    #[serde(default)]
    pub diseases: Vec<Disease>,

    /// Update records in any order; the store sorts them newest first.
    #[serde(default)]
    pub updates: Vec<Update>,

    /// Records to feature per category.
    #[serde(default)]
    pub featured: Featured,
}

/// On-disk encodings a catalog source can be read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFormat {
    /// `.json` files.
    Json,
    /// `.toml` files.
    Toml,
}

impl CatalogFormat {
    /// Picks the format from a file extension, case-insensitively.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            _ => None,
        }
    }
}

impl fmt::Display for CatalogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

impl CatalogSource {
    /// The catalog compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Json` if the embedded document is malformed.
    pub fn embedded() -> Result<Self, SourceError> {
        super::from_json(EMBEDDED_CATALOG)
    }

    /// Reads a catalog file, choosing the decoder from its extension.
    ///
    /// # Errors
    ///
    /// - `SourceError::UnsupportedFormat` if the extension is not `.json` or `.toml`
    /// - `SourceError::Io` if the file cannot be read
    /// - `SourceError::Json` / `SourceError::TomlDecode` if decoding fails
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let format = CatalogFormat::from_path(path).ok_or_else(|| SourceError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;
        let text = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), %format, bytes = text.len(), "read catalog source");
        Self::parse(&text, format)
    }

    /// Decodes a catalog from text in the given format.
    ///
    /// # Errors
    ///
    /// Returns the decoder's error wrapped in [`SourceError`].
    pub fn parse(text: &str, format: CatalogFormat) -> Result<Self, SourceError> {
        match format {
            CatalogFormat::Json => super::from_json(text),
            CatalogFormat::Toml => super::from_toml(text),
        }
    }

    /// Encodes this source in the given format.
    ///
    /// # Errors
    ///
    /// Returns the encoder's error wrapped in [`SourceError`].
    pub fn encode(&self, format: CatalogFormat) -> Result<String, SourceError> {
        match format {
            CatalogFormat::Json => super::to_json_pretty(self),
            CatalogFormat::Toml => super::to_toml(self),
        }
    }

    /// Total number of records across all kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.drugs.len() + self.targets.len() + self.diseases.len() + self.updates.len()
    }

    /// Returns true if the source holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
