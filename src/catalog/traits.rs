//! Read-only access to catalog records.

use crate::error::NotFoundError;
use crate::record::{Disease, Drug, Record, RecordKey, RecordKind, Target, Update};

/// Read contract shared by catalog backends.
///
/// Implementations are immutable after construction, so every method takes
/// `&self` and the trait requires `Send + Sync`.
pub trait RecordStore: Send + Sync {
    /// Get any record by kind and key.
    fn get(&self, kind: RecordKind, key: &RecordKey) -> Result<Record<'_>, NotFoundError>;

    /// All records of a kind. Updates come newest first, other kinds in
    /// insertion order.
    fn list_all(&self, kind: RecordKind) -> Vec<Record<'_>>;

    /// All records of a kind paired with the key that [`get`](Self::get)
    /// resolves them by, in [`list_all`](Self::list_all) order.
    fn list_keyed(&self, kind: RecordKind) -> Vec<(RecordKey, Record<'_>)> {
        self.list_all(kind).into_iter().map(|r| (r.key(), r)).collect()
    }

    /// The record shown when a category is selected without a key.
    fn featured(&self, kind: RecordKind) -> Result<Record<'_>, NotFoundError>;

    /// Updates that name the given drug, newest first.
    fn updates_for_drug(&self, key: &RecordKey) -> Vec<&Update>;

    /// Get a drug by key.
    fn drug(&self, key: &RecordKey) -> Result<&Drug, NotFoundError> {
        self.get(RecordKind::Drug, key).and_then(|r| {
            r.as_drug().ok_or_else(|| not_found(RecordKind::Drug, key))
        })
    }

    /// Get a target by key.
    fn target(&self, key: &RecordKey) -> Result<&Target, NotFoundError> {
        self.get(RecordKind::Target, key).and_then(|r| {
            r.as_target().ok_or_else(|| not_found(RecordKind::Target, key))
        })
    }

    /// Get a disease by key.
    fn disease(&self, key: &RecordKey) -> Result<&Disease, NotFoundError> {
        self.get(RecordKind::Disease, key).and_then(|r| {
            r.as_disease().ok_or_else(|| not_found(RecordKind::Disease, key))
        })
    }

    /// Number of records of a kind.
    fn count(&self, kind: RecordKind) -> usize {
        self.list_all(kind).len()
    }
}

pub(crate) fn not_found(kind: RecordKind, key: &RecordKey) -> NotFoundError {
    NotFoundError::Record {
        kind,
        key: key.clone(),
    }
}
