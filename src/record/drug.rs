use serde::{Deserialize, Serialize};

use super::RecordKey;

/// A compound with an approved use and one or more repurposing hypotheses.
///
/// # Examples
///
/// ```
/// use rxcatalog::Drug;
///
/// let drug = Drug::new("Metformin", "Type 2 Diabetes")
///     .with_repurposed(["Alzheimer's disease", "Cancer"])
///     .with_mechanism("AMPK activation");
/// assert_eq!(drug.key().as_str(), "metformin");
/// assert_eq!(drug.repurposed_indications.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drug {
    /// Display name.
    pub name: String,

    /// What the drug was first approved for.
    pub original_indication: String,

    /// Ordered: first entry is the lead hypothesis.
    #[serde(default)]
    pub repurposed_indications: Vec<String>,

    /// Proposed mechanism of action for the new indications.
    #[serde(default)]
    pub mechanism: String,

    /// Free-text summary of the supporting evidence.
    #[serde(default)]
    pub evidence: String,
}

impl Drug {
    /// Creates a drug with no repurposing data yet.
    #[must_use]
    pub fn new(name: impl Into<String>, original_indication: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            original_indication: original_indication.into(),
            repurposed_indications: Vec::new(),
            mechanism: String::new(),
            evidence: String::new(),
        }
    }

    /// Appends repurposed indications, keeping their order.
    #[must_use]
    pub fn with_repurposed<I, S>(mut self, indications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.repurposed_indications.extend(indications.into_iter().map(Into::into));
        self
    }

    /// Sets the mechanism text.
    #[must_use]
    pub fn with_mechanism(mut self, mechanism: impl Into<String>) -> Self {
        self.mechanism = mechanism.into();
        self
    }

    /// Sets the evidence text.
    #[must_use]
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }

    /// Key derived from the name.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.name)
    }
}
