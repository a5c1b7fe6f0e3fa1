use serde::{Deserialize, Serialize};

use super::RecordKey;

/// A dated news item about repositioning research.
///
/// Updates are listed newest first; updates from the same year keep the
/// order in which the catalog source declared them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Update {
    /// Publication year.
    pub year: i32,

    /// One-line summary.
    pub summary: String,

    /// Drug this update is about, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub drug: Option<RecordKey>,
}

impl Update {
    /// Creates an update not linked to any drug.
    #[must_use]
    pub fn new(year: i32, summary: impl Into<String>) -> Self {
        Self {
            year,
            summary: summary.into(),
            drug: None,
        }
    }

    /// Links this update to a drug by display name or slug.
    #[must_use]
    pub fn about(mut self, drug: &str) -> Self {
        self.drug = Some(RecordKey::new(drug));
        self
    }

    /// Updates have no name; the key is derived from year and summary.
    ///
    /// Two updates may derive the same key. The store keeps both and
    /// suffixes the later one, see [`RecordStore::list_keyed`](crate::RecordStore::list_keyed).
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&format!("{} {}", self.year, self.summary))
    }
}

/// Sorts updates newest first. The sort is stable, so same-year updates
/// keep their relative order.
pub(crate) fn sort_newest_first(updates: &mut [Update]) {
    updates.sort_by(|a, b| b.year.cmp(&a.year));
}
