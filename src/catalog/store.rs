//! In-memory catalog store.
//!
//! The store owns every record of a validated source. It is built once and
//! never mutated, so it can be shared across threads without locking.

use std::collections::HashSet;

use tracing::debug;

use crate::catalog::traits::not_found;
use crate::catalog::validation::{validate_source, KeyIndex};
use crate::catalog::{CatalogSource, Featured, RecordStore};
use crate::error::{NotFoundError, ValidationError};
use crate::record::{sort_newest_first, Disease, Drug, Record, RecordKey, RecordKind, Target, Update};

/// Read-only store of typed catalog records.
///
/// # Examples
///
/// ```
/// use rxcatalog::{CatalogSource, CatalogStore, RecordKey, RecordKind, RecordStore};
///
/// let store = CatalogStore::load(CatalogSource::embedded()?)?;
/// let metformin = store.drug(&RecordKey::new("Metformin"))?;
/// assert_eq!(metformin.original_indication, "Type 2 Diabetes");
/// assert!(store.count(RecordKind::Update) >= 3);
/// # Ok::<(), rxcatalog::CatalogError>(())
/// ```
#[derive(Debug)]
pub struct CatalogStore {
    drugs: Vec<Drug>,
    targets: Vec<Target>,
    diseases: Vec<Disease>,
    updates: Vec<Update>,
    update_keys: Vec<RecordKey>,

    drug_index: KeyIndex,
    target_index: KeyIndex,
    disease_index: KeyIndex,
    update_index: KeyIndex,

    featured: Featured,
}

impl CatalogStore {
    /// Validates a source and builds the store from it.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if a key is duplicated within a kind,
    /// a relationship or featured key does not resolve, or a required field
    /// is empty or oversized.
    pub fn load(source: CatalogSource) -> Result<Self, ValidationError> {
        let indexes = validate_source(&source)?;
        let CatalogSource {
            drugs,
            targets,
            diseases,
            mut updates,
            featured,
        } = source;

        sort_newest_first(&mut updates);
        let update_keys = assign_update_keys(&updates);
        let update_index = update_keys.iter().cloned().enumerate().map(|(i, k)| (k, i)).collect();

        debug!(
            drugs = drugs.len(),
            targets = targets.len(),
            diseases = diseases.len(),
            updates = updates.len(),
            "catalog loaded"
        );

        Ok(Self {
            drugs,
            targets,
            diseases,
            updates,
            update_keys,
            drug_index: indexes.drugs,
            target_index: indexes.targets,
            disease_index: indexes.diseases,
            update_index,
            featured,
        })
    }

    /// All drugs in declaration order.
    #[must_use]
    pub fn drugs(&self) -> &[Drug] {
        &self.drugs
    }

    /// All targets in declaration order.
    #[must_use]
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// All diseases in declaration order.
    #[must_use]
    pub fn diseases(&self) -> &[Disease] {
        &self.diseases
    }

    /// All updates, newest first.
    #[must_use]
    pub fn updates(&self) -> &[Update] {
        &self.updates
    }

    /// Rebuilds a source holding exactly this store's content.
    ///
    /// Featured keys are written out explicitly, so reloading the source
    /// features the same records even if declaration order changes.
    #[must_use]
    pub fn to_source(&self) -> CatalogSource {
        let featured_key = |kind| self.featured(kind).ok().map(|r| r.key());
        CatalogSource {
            drugs: self.drugs.clone(),
            targets: self.targets.clone(),
            diseases: self.diseases.clone(),
            updates: self.updates.clone(),
            featured: Featured {
                drug: featured_key(RecordKind::Drug),
                target: featured_key(RecordKind::Target),
                disease: featured_key(RecordKind::Disease),
            },
        }
    }

    /// Hex content fingerprint, see [`fingerprint`](crate::catalog::fingerprint).
    #[must_use]
    pub fn fingerprint(&self) -> String {
        super::fingerprint(self)
    }

    fn featured_key(&self, kind: RecordKind) -> Option<&RecordKey> {
        match kind {
            RecordKind::Drug => self.featured.drug.as_ref(),
            RecordKind::Target => self.featured.target.as_ref(),
            RecordKind::Disease => self.featured.disease.as_ref(),
            RecordKind::Update => None,
        }
    }
}

/// Keys for the sorted feed. A repeated item gets `-2`, `-3`, ... appended
/// to its derived key, in feed order.
fn assign_update_keys(updates: &[Update]) -> Vec<RecordKey> {
    let mut taken = HashSet::with_capacity(updates.len());
    let mut keys = Vec::with_capacity(updates.len());
    for update in updates {
        let base = update.key();
        let mut key = base.clone();
        let mut n = 2;
        while !taken.insert(key.clone()) {
            key = RecordKey::new(&format!("{base}-{n}"));
            n += 1;
        }
        keys.push(key);
    }
    keys
}

impl RecordStore for CatalogStore {
    fn get(&self, kind: RecordKind, key: &RecordKey) -> Result<Record<'_>, NotFoundError> {
        let found = match kind {
            RecordKind::Drug => self.drug_index.get(key).map(|&i| Record::Drug(&self.drugs[i])),
            RecordKind::Target => self.target_index.get(key).map(|&i| Record::Target(&self.targets[i])),
            RecordKind::Disease => self.disease_index.get(key).map(|&i| Record::Disease(&self.diseases[i])),
            RecordKind::Update => self.update_index.get(key).map(|&i| Record::Update(&self.updates[i])),
        };
        found.ok_or_else(|| not_found(kind, key))
    }

    fn list_all(&self, kind: RecordKind) -> Vec<Record<'_>> {
        match kind {
            RecordKind::Drug => self.drugs.iter().map(Record::Drug).collect(),
            RecordKind::Target => self.targets.iter().map(Record::Target).collect(),
            RecordKind::Disease => self.diseases.iter().map(Record::Disease).collect(),
            RecordKind::Update => self.updates.iter().map(Record::Update).collect(),
        }
    }

    fn list_keyed(&self, kind: RecordKind) -> Vec<(RecordKey, Record<'_>)> {
        if kind == RecordKind::Update {
            return self.update_keys.iter().cloned().zip(self.updates.iter().map(Record::Update)).collect();
        }
        self.list_all(kind).into_iter().map(|r| (r.key(), r)).collect()
    }

    fn featured(&self, kind: RecordKind) -> Result<Record<'_>, NotFoundError> {
        if let Some(key) = self.featured_key(kind) {
            return self.get(kind, key);
        }
        let first = match kind {
            RecordKind::Drug => self.drugs.first().map(Record::Drug),
            RecordKind::Target => self.targets.first().map(Record::Target),
            RecordKind::Disease => self.diseases.first().map(Record::Disease),
            RecordKind::Update => self.updates.first().map(Record::Update),
        };
        first.ok_or(NotFoundError::EmptyKind { kind })
    }

    fn updates_for_drug(&self, key: &RecordKey) -> Vec<&Update> {
        self.updates.iter().filter(|u| u.drug.as_ref() == Some(key)).collect()
    }

    fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Drug => self.drugs.len(),
            RecordKind::Target => self.targets.len(),
            RecordKind::Disease => self.diseases.len(),
            RecordKind::Update => self.updates.len(),
        }
    }
}
