use serde::{Deserialize, Serialize};

use super::RecordKey;

/// A repurposing candidate for a disease: which drug, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateDrug {
    /// Key of the candidate drug; serialized as `drug`.
    #[serde(rename = "drug")]
    pub drug_key: RecordKey,
    /// Why the drug might help.
    pub rationale: String,
}

/// A disease, the pathways it dysregulates, and its candidate drugs.
///
/// # Examples
///
/// ```
/// use rxcatalog::Disease;
///
/// let disease = Disease::new("Alzheimer’s Disease")
///     .with_pathways(["Neuroinflammation"])
///     .with_candidate("Sildenafil", "Improved cerebral blood flow");
/// assert_eq!(disease.key().as_str(), "alzheimers-disease");
/// assert_eq!(disease.candidate_drugs[0].drug_key.as_str(), "sildenafil");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    /// Display name.
    pub name: String,

    /// Key dysregulated pathways.
    #[serde(default)]
    pub dysregulated_pathways: Vec<String>,

    /// Candidate drugs, in display order. A drug appears at most once.
    #[serde(default)]
    pub candidate_drugs: Vec<CandidateDrug>,
}

impl Disease {
    /// Creates a disease with no pathways or candidates.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dysregulated_pathways: Vec::new(),
            candidate_drugs: Vec::new(),
        }
    }

    /// Appends dysregulated pathways.
    #[must_use]
    pub fn with_pathways<I, S>(mut self, pathways: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dysregulated_pathways.extend(pathways.into_iter().map(Into::into));
        self
    }

    /// Appends a candidate drug. `drug` may be a display name or a slug.
    #[must_use]
    pub fn with_candidate(mut self, drug: &str, rationale: impl Into<String>) -> Self {
        self.candidate_drugs.push(CandidateDrug {
            drug_key: RecordKey::new(drug),
            rationale: rationale.into(),
        });
        self
    }

    /// Key derived from the name.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        RecordKey::new(&self.name)
    }
}
