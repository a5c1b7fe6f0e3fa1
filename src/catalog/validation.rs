//! Catalog validation.
//!
//! Record constructors accept anything, so every source is checked here
//! before a store is built: field shape first, then key uniqueness and
//! referential integrity across kinds.

use std::collections::{HashMap, HashSet};

use crate::catalog::{CatalogSource, Featured};
use crate::error::ValidationError;
use crate::record::{Disease, Drug, RecordKey, RecordKind, Target, Update};

/// Conservative upper bound for free-form text fields.
pub const MAX_TEXT_LEN: usize = 16 * 1024;

/// Key index for one record kind: key to position in the source order.
pub(crate) type KeyIndex = HashMap<RecordKey, usize>;

fn validate_text(
    kind: RecordKind,
    key: &str,
    field: &str,
    value: &str,
    required: bool,
) -> Result<(), ValidationError> {
    let v = value.trim();
    if required && v.is_empty() {
        return Err(ValidationError::MissingField {
            kind,
            key: key.to_string(),
            field: field.to_string(),
        });
    }
    if v.len() > MAX_TEXT_LEN {
        return Err(ValidationError::FieldTooLong {
            field: field.to_string(),
            max_length: MAX_TEXT_LEN,
        });
    }
    Ok(())
}

fn validate_list(kind: RecordKind, key: &str, field: &str, items: &[String]) -> Result<(), ValidationError> {
    for item in items {
        validate_text(kind, key, field, item, true)?;
    }
    Ok(())
}

fn validate_name(kind: RecordKind, name: &str) -> Result<RecordKey, ValidationError> {
    validate_text(kind, name, "name", name, true)?;
    let key = RecordKey::new(name);
    if key.is_empty() {
        return Err(ValidationError::EmptyKey {
            kind,
            name: name.to_string(),
        });
    }
    Ok(key)
}

impl Drug {
    /// Validates the fields of this drug in isolation.
    pub fn validate(&self) -> Result<RecordKey, ValidationError> {
        let key = validate_name(RecordKind::Drug, &self.name)?;
        let k = key.as_str();
        validate_text(RecordKind::Drug, k, "original_indication", &self.original_indication, true)?;
        validate_list(RecordKind::Drug, k, "repurposed_indications", &self.repurposed_indications)?;
        validate_text(RecordKind::Drug, k, "mechanism", &self.mechanism, false)?;
        validate_text(RecordKind::Drug, k, "evidence", &self.evidence, false)?;
        Ok(key)
    }
}

impl Target {
    /// Validates the fields of this target in isolation.
    pub fn validate(&self) -> Result<RecordKey, ValidationError> {
        let key = validate_name(RecordKind::Target, &self.name)?;
        validate_text(RecordKind::Target, key.as_str(), "rationale", &self.rationale, true)?;
        ensure_distinct(RecordKind::Target, &key, "acting_drugs", RecordKind::Drug, &self.acting_drugs)?;
        ensure_distinct(RecordKind::Target, &key, "linked_diseases", RecordKind::Disease, &self.linked_diseases)?;
        Ok(key)
    }
}

impl Disease {
    /// Validates the fields of this disease in isolation.
    pub fn validate(&self) -> Result<RecordKey, ValidationError> {
        let key = validate_name(RecordKind::Disease, &self.name)?;
        let k = key.as_str();
        validate_list(RecordKind::Disease, k, "dysregulated_pathways", &self.dysregulated_pathways)?;
        for candidate in &self.candidate_drugs {
            validate_text(RecordKind::Disease, k, "candidate_drugs.rationale", &candidate.rationale, true)?;
        }
        let drugs: Vec<RecordKey> = self.candidate_drugs.iter().map(|c| c.drug_key.clone()).collect();
        ensure_distinct(RecordKind::Disease, &key, "candidate_drugs", RecordKind::Drug, &drugs)?;
        Ok(key)
    }
}

impl Update {
    /// Validates the fields of this update in isolation.
    pub fn validate(&self) -> Result<RecordKey, ValidationError> {
        let key = self.key();
        validate_text(RecordKind::Update, key.as_str(), "summary", &self.summary, true)?;
        Ok(key)
    }
}

fn ensure_distinct(
    kind: RecordKind,
    key: &RecordKey,
    field: &'static str,
    to_kind: RecordKind,
    refs: &[RecordKey],
) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(refs.len());
    for r in refs {
        if !seen.insert(r) {
            return Err(ValidationError::DuplicateReference {
                kind,
                key: key.clone(),
                field,
                to_kind,
                duplicate: r.clone(),
            });
        }
    }
    Ok(())
}

fn index_keys(
    kind: RecordKind,
    keys: impl Iterator<Item = Result<RecordKey, ValidationError>>,
) -> Result<KeyIndex, ValidationError> {
    let mut index = KeyIndex::new();
    for (pos, key) in keys.enumerate() {
        let key = key?;
        if index.contains_key(&key) {
            return Err(ValidationError::DuplicateKey { kind, key });
        }
        index.insert(key, pos);
    }
    Ok(index)
}

fn ensure_resolves(
    index: &KeyIndex,
    from_kind: RecordKind,
    from_key: &RecordKey,
    field: &'static str,
    to_kind: RecordKind,
    key: &RecordKey,
) -> Result<(), ValidationError> {
    if index.contains_key(key) {
        return Ok(());
    }
    Err(ValidationError::DanglingReference {
        from_kind,
        from_key: from_key.clone(),
        field,
        to_kind,
        key: key.clone(),
    })
}

/// Key indexes of the named kinds of a validated source.
///
/// Updates are not indexed here: the feed may repeat an item, so the store
/// assigns update keys itself after sorting.
#[derive(Debug, Default)]
pub(crate) struct ValidatedIndexes {
    pub drugs: KeyIndex,
    pub targets: KeyIndex,
    pub diseases: KeyIndex,
}

/// Validates a whole source: fields, name uniqueness, references, featured keys.
///
/// The returned indexes map keys to positions in the source vectors.
pub(crate) fn validate_source(source: &CatalogSource) -> Result<ValidatedIndexes, ValidationError> {
    let drugs = index_keys(RecordKind::Drug, source.drugs.iter().map(Drug::validate))?;
    let targets = index_keys(RecordKind::Target, source.targets.iter().map(Target::validate))?;
    let diseases = index_keys(RecordKind::Disease, source.diseases.iter().map(Disease::validate))?;

    for target in &source.targets {
        let key = target.key();
        for drug in &target.acting_drugs {
            ensure_resolves(&drugs, RecordKind::Target, &key, "acting_drugs", RecordKind::Drug, drug)?;
        }
        for disease in &target.linked_diseases {
            ensure_resolves(&diseases, RecordKind::Target, &key, "linked_diseases", RecordKind::Disease, disease)?;
        }
    }

    for disease in &source.diseases {
        let key = disease.key();
        for candidate in &disease.candidate_drugs {
            ensure_resolves(&drugs, RecordKind::Disease, &key, "candidate_drugs", RecordKind::Drug, &candidate.drug_key)?;
        }
    }

    for update in &source.updates {
        let key = update.validate()?;
        if let Some(drug) = &update.drug {
            ensure_resolves(&drugs, RecordKind::Update, &key, "drug", RecordKind::Drug, drug)?;
        }
    }

    validate_featured(&source.featured, &drugs, &targets, &diseases)?;

    Ok(ValidatedIndexes {
        drugs,
        targets,
        diseases,
    })
}

fn validate_featured(
    featured: &Featured,
    drugs: &KeyIndex,
    targets: &KeyIndex,
    diseases: &KeyIndex,
) -> Result<(), ValidationError> {
    let checks = [
        (RecordKind::Drug, featured.drug.as_ref(), drugs),
        (RecordKind::Target, featured.target.as_ref(), targets),
        (RecordKind::Disease, featured.disease.as_ref(), diseases),
    ];
    for (kind, key, index) in checks {
        if let Some(key) = key {
            if !index.contains_key(key) {
                return Err(ValidationError::UnresolvedFeatured {
                    kind,
                    key: key.clone(),
                });
            }
        }
    }
    Ok(())
}
