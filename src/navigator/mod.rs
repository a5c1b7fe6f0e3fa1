//! The navigator: maps a selected category to a render payload.
//!
//! Selection is a pure function of its arguments. It never touches global
//! state and returns the same payload for the same category and store.

mod category;
mod payload;

use tracing::debug;

use crate::catalog::RecordStore;
use crate::error::{CatalogResult, NotFoundError};
use crate::record::{Disease, Drug, Record, RecordKey, RecordKind, Target, Update};

pub use category::Category;
pub use payload::{
    DiseaseView, DrugView, RenderPayload, ResolvedCandidate, TargetView, UpdateEntry, UpdatesView,
};

/// Builds the payload for a category.
///
/// Drug, Target and Disease show the featured record of their kind with its
/// relationships resolved; Updates shows the whole feed, newest first.
///
/// # Errors
///
/// Returns [`NotFoundError`] if the kind has no records or a relationship
/// does not resolve.
///
/// # Examples
///
/// ```
/// use rxcatalog::{select, CatalogSource, CatalogStore, Category, RenderPayload};
///
/// let store = CatalogStore::load(CatalogSource::embedded()?)?;
/// let payload = select(Category::Drug, &store)?;
/// let RenderPayload::Drug(view) = payload else { unreachable!() };
/// assert_eq!(view.drug.name, "Metformin");
/// # Ok::<(), rxcatalog::CatalogError>(())
/// ```
pub fn select<S: RecordStore + ?Sized>(category: Category, store: &S) -> Result<RenderPayload<'_>, NotFoundError> {
    debug!(%category, "select");
    if category == Category::Updates {
        return updates_view(store, store.list_all(RecordKind::Update));
    }
    let record = store.featured(category.kind())?;
    payload_for(store, record)
}

/// Parses a category name and builds its payload.
///
/// # Errors
///
/// Returns `CatalogError::InvalidCategory` for an unknown name, or
/// `CatalogError::NotFound` as [`select`] does.
pub fn select_by_name<'s, S: RecordStore + ?Sized>(input: &str, store: &'s S) -> CatalogResult<RenderPayload<'s>> {
    let category = Category::parse(input)?;
    Ok(select(category, store)?)
}

/// Builds the payload for one specific record instead of the featured one.
///
/// An update key yields an update feed holding just that entry.
///
/// # Errors
///
/// Returns [`NotFoundError`] if the key or one of its relationships does not
/// resolve.
pub fn select_record<'s, S: RecordStore + ?Sized>(
    kind: RecordKind,
    key: &RecordKey,
    store: &'s S,
) -> Result<RenderPayload<'s>, NotFoundError> {
    debug!(%kind, %key, "select record");
    let record = store.get(kind, key)?;
    payload_for(store, record)
}

fn payload_for<'s, S: RecordStore + ?Sized>(store: &'s S, record: Record<'s>) -> Result<RenderPayload<'s>, NotFoundError> {
    match record {
        Record::Drug(drug) => Ok(drug_view(store, drug)),
        Record::Target(target) => target_view(store, target),
        Record::Disease(disease) => disease_view(store, disease),
        Record::Update(update) => updates_view(store, vec![Record::Update(update)]),
    }
}

fn drug_view<'s, S: RecordStore + ?Sized>(store: &'s S, drug: &'s Drug) -> RenderPayload<'s> {
    RenderPayload::Drug(DrugView {
        drug,
        updates: store.updates_for_drug(&drug.key()),
    })
}

fn target_view<'s, S: RecordStore + ?Sized>(store: &'s S, target: &'s Target) -> Result<RenderPayload<'s>, NotFoundError> {
    let acting_drugs = target
        .acting_drugs
        .iter()
        .map(|key| store.drug(key))
        .collect::<Result<Vec<_>, _>>()?;
    let linked_diseases = target
        .linked_diseases
        .iter()
        .map(|key| store.disease(key))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RenderPayload::Target(TargetView {
        target,
        acting_drugs,
        linked_diseases,
    }))
}

fn disease_view<'s, S: RecordStore + ?Sized>(store: &'s S, disease: &'s Disease) -> Result<RenderPayload<'s>, NotFoundError> {
    let candidates = disease
        .candidate_drugs
        .iter()
        .map(|c| {
            Ok(ResolvedCandidate {
                drug: store.drug(&c.drug_key)?,
                rationale: c.rationale.as_str(),
            })
        })
        .collect::<Result<Vec<_>, NotFoundError>>()?;
    Ok(RenderPayload::Disease(DiseaseView { disease, candidates }))
}

fn updates_view<'s, S: RecordStore + ?Sized>(store: &'s S, records: Vec<Record<'s>>) -> Result<RenderPayload<'s>, NotFoundError> {
    let entries = records
        .into_iter()
        .filter_map(|r| r.as_update())
        .map(|update| entry(store, update))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RenderPayload::Updates(UpdatesView { entries }))
}

fn entry<'s, S: RecordStore + ?Sized>(store: &'s S, update: &'s Update) -> Result<UpdateEntry<'s>, NotFoundError> {
    let drug = update.drug.as_ref().map(|key| store.drug(key)).transpose()?;
    Ok(UpdateEntry { update, drug })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, CatalogStore};

    fn embedded() -> CatalogStore {
        CatalogStore::load(CatalogSource::embedded().unwrap()).unwrap()
    }

    #[test]
    fn test_payload_shape_matches_category() {
        let store = embedded();
        for category in Category::ALL {
            let payload = select(category, &store).unwrap();
            assert_eq!(payload.category(), category);
        }
    }

    #[test]
    fn test_select_is_pure() {
        let store = embedded();
        for category in Category::ALL {
            assert_eq!(select(category, &store).unwrap(), select(category, &store).unwrap());
        }
    }

    #[test]
    fn test_target_links_resolved() {
        let store = embedded();
        let RenderPayload::Target(view) = select(Category::Target, &store).unwrap() else {
            panic!("expected target payload");
        };
        let drugs: Vec<&str> = view.acting_drugs.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(drugs, vec!["Metformin", "AICAR"]);
        assert_eq!(view.linked_diseases.len(), 3);
    }

    #[test]
    fn test_drug_view_collects_updates() {
        let store = embedded();
        let RenderPayload::Drug(view) = select(Category::Drug, &store).unwrap() else {
            panic!("expected drug payload");
        };
        assert_eq!(view.updates.len(), 1);
        assert_eq!(view.updates[0].year, 2024);
    }

    #[test]
    fn test_select_by_name_rejects_unknown() {
        let store = embedded();
        let err = select_by_name("Gene-Based", &store).unwrap_err();
        assert!(err.is_invalid_category());
    }

    #[test]
    fn test_select_by_name_accepts_menu_label() {
        let store = embedded();
        let payload = select_by_name("Disease-Based", &store).unwrap();
        assert_eq!(payload.category(), Category::Disease);
    }

    #[test]
    fn test_select_record_non_featured() {
        let store = embedded();
        let payload = select_record(RecordKind::Disease, &RecordKey::new("Cancer"), &store).unwrap();
        let RenderPayload::Disease(view) = payload else {
            panic!("expected disease payload");
        };
        assert_eq!(view.disease.name, "Cancer");
        assert_eq!(view.candidates[0].drug.name, "Metformin");
    }

    #[test]
    fn test_select_record_update_yields_single_entry() {
        let store = embedded();
        let key = store.updates()[0].key();
        let RenderPayload::Updates(view) = select_record(RecordKind::Update, &key, &store).unwrap() else {
            panic!("expected updates payload");
        };
        assert_eq!(view.entries.len(), 1);
    }

    #[test]
    fn test_select_record_missing() {
        let store = embedded();
        let err = select_record(RecordKind::Drug, &RecordKey::new("Aspirin"), &store).unwrap_err();
        assert!(matches!(err, NotFoundError::Record { .. }));
    }

    #[test]
    fn test_select_on_empty_catalog() {
        let store = CatalogStore::load(CatalogSource::default()).unwrap();
        assert!(matches!(
            select(Category::Drug, &store),
            Err(NotFoundError::EmptyKind { kind: RecordKind::Drug })
        ));
        let RenderPayload::Updates(view) = select(Category::Updates, &store).unwrap() else {
            panic!("expected updates payload");
        };
        assert!(view.entries.is_empty());
    }
}
