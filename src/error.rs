//! Error types for rxcatalog.
//!
//! All errors are strongly typed using thiserror, one enum per concern,
//! wrapped by [`CatalogError`] at the crate boundary.

use std::path::PathBuf;

use thiserror::Error;

use crate::navigator::Category;
use crate::record::{RecordKey, RecordKind};

/// Errors raised while loading a catalog. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Duplicate {kind} key '{key}'")]
    DuplicateKey {
        kind: RecordKind,
        key: RecordKey,
    },

    #[error("{from_kind} '{from_key}' field '{field}' references unknown {to_kind} '{key}'")]
    DanglingReference {
        from_kind: RecordKind,
        from_key: RecordKey,
        field: &'static str,
        to_kind: RecordKind,
        key: RecordKey,
    },

    #[error("{kind} '{key}' lists {to_kind} '{duplicate}' more than once in '{field}'")]
    DuplicateReference {
        kind: RecordKind,
        key: RecordKey,
        field: &'static str,
        to_kind: RecordKind,
        duplicate: RecordKey,
    },

    #[error("Required field '{field}' is missing on {kind} '{key}'")]
    MissingField {
        kind: RecordKind,
        key: String,
        field: String,
    },

    #[error("{kind} name '{name}' has no letters or digits to build a key from")]
    EmptyKey {
        kind: RecordKind,
        name: String,
    },

    #[error("Field '{field}' exceeds maximum length of {max_length}")]
    FieldTooLong {
        field: String,
        max_length: usize,
    },

    #[error("Featured {kind} '{key}' does not exist")]
    UnresolvedFeatured {
        kind: RecordKind,
        key: RecordKey,
    },
}

/// Lookup failures at query time.
#[derive(Debug, Error)]
pub enum NotFoundError {
    #[error("{kind} not found: {key}")]
    Record {
        kind: RecordKind,
        key: RecordKey,
    },

    #[error("Catalog has no {kind} records")]
    EmptyKind {
        kind: RecordKind,
    },
}

impl NotFoundError {
    /// Kind of the record that could not be found.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Record { kind, .. } | Self::EmptyKind { kind } => *kind,
        }
    }
}

/// An unrecognized navigation selection.
#[derive(Debug, Error)]
#[error("Invalid category '{input}', expected one of: {}", join_categories(.valid))]
pub struct InvalidCategoryError {
    /// The rejected input, as given.
    pub input: String,
    /// Every category the navigator accepts.
    pub valid: &'static [Category],
}

impl InvalidCategoryError {
    /// Error for `input`, listing every valid category.
    #[must_use]
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            valid: &Category::ALL,
        }
    }
}

fn join_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures reading or decoding a catalog source or a config file.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid TOML: {0}")]
    TomlDecode(#[from] toml::de::Error),

    #[error("Failed to encode TOML: {0}")]
    TomlEncode(#[from] toml::ser::Error),

    #[error("Unsupported catalog format for {path} (expected .json or .toml)")]
    UnsupportedFormat {
        path: PathBuf,
    },
}

/// Top-level error type for rxcatalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Not found: {0}")]
    NotFound(#[from] NotFoundError),

    #[error(transparent)]
    InvalidCategory(#[from] InvalidCategoryError),

    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

impl CatalogError {
    /// Returns true if this is a validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if this is a lookup failure.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if this is a rejected navigation selection.
    #[must_use]
    pub const fn is_invalid_category(&self) -> bool {
        matches!(self, Self::InvalidCategory(_))
    }

    /// Returns true if reading or decoding a source failed.
    #[must_use]
    pub const fn is_source(&self) -> bool {
        matches!(self, Self::Source(_))
    }
}

/// Result type alias for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_dangling_reference() {
        let err = ValidationError::DanglingReference {
            from_kind: RecordKind::Disease,
            from_key: RecordKey::new("Alzheimer's Disease"),
            field: "candidate_drugs",
            to_kind: RecordKind::Drug,
            key: RecordKey::new("Donepezil"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("alzheimers-disease"));
        assert!(msg.contains("candidate_drugs"));
        assert!(msg.contains("unknown drug 'donepezil'"));
    }

    #[test]
    fn test_validation_error_duplicate_key() {
        let err = ValidationError::DuplicateKey {
            kind: RecordKind::Drug,
            key: RecordKey::new("Metformin"),
        };
        assert_eq!(format!("{err}"), "Duplicate drug key 'metformin'");
    }

    #[test]
    fn test_not_found_error() {
        let err = NotFoundError::Record {
            kind: RecordKind::Target,
            key: RecordKey::new("mTOR"),
        };
        assert_eq!(err.kind(), RecordKind::Target);
        assert!(format!("{err}").contains("target not found: mtor"));
    }

    #[test]
    fn test_invalid_category_lists_valid_choices() {
        let err = InvalidCategoryError::new("Gene-Based");
        let msg = format!("{err}");
        assert!(msg.contains("Gene-Based"));
        assert!(msg.contains("Drug, Target, Disease, Updates"));
        assert_eq!(err.valid.len(), 4);
    }

    #[test]
    fn test_catalog_error_from_validation() {
        let err: CatalogError = ValidationError::FieldTooLong {
            field: "summary".to_string(),
            max_length: 10,
        }
        .into();
        assert!(err.is_validation());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_catalog_error_from_not_found() {
        let err: CatalogError = NotFoundError::EmptyKind { kind: RecordKind::Drug }.into();
        assert!(err.is_not_found());
        assert!(format!("{err}").contains("no drug records"));
    }

    #[test]
    fn test_catalog_error_invalid_category_is_transparent() {
        let err: CatalogError = InvalidCategoryError::new("x").into();
        assert!(err.is_invalid_category());
        assert!(format!("{err}").starts_with("Invalid category 'x'"));
    }

    #[test]
    fn test_catalog_error_from_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = SourceError::from(json_err).into();
        assert!(err.is_source());
    }
}
