//! Record keys.
//!
//! A key is the slug of a record's display name. Letters and digits of any
//! script are kept, so `PPAR-α` and `PPAR-γ` stay distinct. References in
//! catalog sources may spell a record by display name or by slug; both
//! normalize to the same [`RecordKey`].

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};

static NON_ALNUM: OnceLock<Regex> = OnceLock::new();

fn non_alnum() -> &'static Regex {
    NON_ALNUM.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("slug pattern is valid"))
}

/// Turns a display name into a slug.
///
/// The name is lowercased, apostrophes are dropped and every run of
/// characters that are neither letters nor digits becomes a single `-`.
/// Returns an empty string when the name has no letters or digits.
///
/// # Examples
///
/// ```
/// use rxcatalog::slugify;
///
/// assert_eq!(slugify("Type 2 Diabetes"), "type-2-diabetes");
/// assert_eq!(slugify("Alzheimer’s Disease"), "alzheimers-disease");
/// assert_eq!(slugify("TNF-α"), "tnf-α");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let lowered: String = name
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| *c != '\'' && *c != '’')
        .collect();
    non_alnum()
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Human-readable label from a slug ("type-2-diabetes" becomes "Type 2 Diabetes").
#[must_use]
pub fn humanize(slug: &str) -> String {
    slug.trim()
        .split('-')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Normalized identity of a record within its kind.
///
/// Keys never change once a record is loaded. Two display names that
/// slug to the same key name the same record.
///
/// # Examples
///
/// ```
/// use rxcatalog::RecordKey;
///
/// let a = RecordKey::new("Metformin");
/// let b = RecordKey::new("  metformin ");
/// assert_eq!(a, b);
/// assert_eq!(a.as_str(), "metformin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordKey(String);

impl RecordKey {
    /// Creates a key from a display name or an existing slug.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self(slugify(name))
    }

    /// Returns the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the name had no letters or digits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Human-readable label for this key.
    #[must_use]
    pub fn label(&self) -> String {
        humanize(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(&raw))
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordKey {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl AsRef<str> for RecordKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
