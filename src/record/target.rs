use serde::{Deserialize, Serialize};

use super::RecordKey;

/// A molecular target, the drugs acting on it, and the diseases it is linked to.
///
/// `acting_drugs` and `linked_diseases` are sets: duplicates are rejected at
/// load time, and the stored order is only kept for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Display name.
    pub name: String,

    /// Drugs acting on the target.
    #[serde(default)]
    pub acting_drugs: Vec<RecordKey>,

    /// Diseases the target is implicated in.
    #[serde(default)]
    pub linked_diseases: Vec<RecordKey>,

    /// Why the target matters for repositioning.
    #[serde(default)]
    pub rationale: String,
}

impl Target {
    /// Creates a target with no links yet.
    #[must_use]
    pub fn new(name: impl Into<String>, rationale: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            acting_drugs: Vec::new(),
            linked_diseases: Vec::new(),
            rationale: rationale.into(),
        }
    }

    /// Adds drugs acting on this target. Accepts display names or slugs.
    #[must_use]
    pub fn with_drugs<'s>(mut self, drugs: impl IntoIterator<Item = &'s str>) -> Self {
        self.acting_drugs.extend(drugs.into_iter().map(RecordKey::new));
        self
    }

    /// Adds diseases linked to this target. Accepts display names or slugs.
    #[must_use]
    pub fn with_diseases<'s>(mut self, diseases: impl IntoIterator<Item = &'s str>) -> Self {
        self.linked_diseases.extend(diseases.into_iter().map(RecordKey::new));
        self
    }

    /// Key derived from the name.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.name)
    }
}
