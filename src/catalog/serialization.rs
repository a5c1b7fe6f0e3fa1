//! Catalog serialization helpers.
//!
//! Serde already provides the encodings. This module centralizes the
//! helpers used by the store, the CLI and tests, and keeps formatting stable.

use crate::catalog::CatalogSource;
use crate::error::SourceError;

/// Serialize a catalog source to pretty JSON.
pub fn to_json_pretty(source: &CatalogSource) -> Result<String, SourceError> {
    Ok(serde_json::to_string_pretty(source)?)
}

/// Deserialize a catalog source from JSON.
///
/// Callers should then hand the source to `CatalogStore::load`.
pub fn from_json(s: &str) -> Result<CatalogSource, SourceError> {
    Ok(serde_json::from_str(s)?)
}

/// Serialize a catalog source to TOML.
pub fn to_toml(source: &CatalogSource) -> Result<String, SourceError> {
    Ok(toml::to_string_pretty(source)?)
}

/// Deserialize a catalog source from TOML.
pub fn from_toml(s: &str) -> Result<CatalogSource, SourceError> {
    Ok(toml::from_str(s)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Disease, Drug, Update};

    fn sample() -> CatalogSource {
        CatalogSource {
            drugs: vec![
                Drug::new("Metformin", "Type 2 Diabetes").with_repurposed(["Alzheimer's disease", "Cancer"]),
                Drug::new("Sildenafil", "Erectile dysfunction"),
            ],
            diseases: vec![Disease::new("Alzheimer's Disease")
                .with_pathways(["Neuroinflammation"])
                .with_candidate("Sildenafil", "Improved cerebral blood flow")],
            updates: vec![Update::new(2023, "Sildenafil associated with reduced incidence").about("Sildenafil")],
            ..CatalogSource::default()
        }
    }

    #[test]
    fn json_roundtrip_works() {
        let source = sample();
        let json = to_json_pretty(&source).unwrap();
        assert_eq!(from_json(&json).unwrap(), source);
    }

    #[test]
    fn toml_roundtrip_works() {
        let source = sample();
        let text = to_toml(&source).unwrap();
        assert!(text.contains("[[drugs]]"));
        assert_eq!(from_toml(&text).unwrap(), source);
    }

    #[test]
    fn from_json_reports_syntax_errors() {
        assert!(matches!(from_json("{ not json"), Err(SourceError::Json(_))));
        assert!(matches!(from_toml("drugs = ["), Err(SourceError::TomlDecode(_))));
    }
}
