//! Content fingerprint of a catalog.
//!
//! The digest is BLAKE3 over a length-prefixed canonical walk of every
//! record. Records of the keyed kinds and set-valued fields are visited in
//! key order, so the digest ignores declaration order where the data model
//! does; ordered sequences are hashed as declared.

use blake3::Hasher;

use crate::catalog::RecordStore;
use crate::record::{Record, RecordKey, RecordKind};

struct Canonical(Hasher);

impl Canonical {
    fn text(&mut self, s: &str) {
        self.0.update(&(s.len() as u64).to_le_bytes());
        self.0.update(s.as_bytes());
    }

    fn texts<'a>(&mut self, items: impl ExactSizeIterator<Item = &'a str>) {
        self.0.update(&(items.len() as u64).to_le_bytes());
        for item in items {
            self.text(item);
        }
    }

    fn key_set(&mut self, keys: &[RecordKey]) {
        let mut sorted: Vec<&str> = keys.iter().map(RecordKey::as_str).collect();
        sorted.sort_unstable();
        self.texts(sorted.into_iter());
    }

    fn record(&mut self, record: &Record<'_>) {
        self.text(record.kind().as_str());
        match record {
            Record::Drug(d) => {
                self.text(&d.name);
                self.text(&d.original_indication);
                self.texts(d.repurposed_indications.iter().map(String::as_str));
                self.text(&d.mechanism);
                self.text(&d.evidence);
            }
            Record::Target(t) => {
                self.text(&t.name);
                self.key_set(&t.acting_drugs);
                self.key_set(&t.linked_diseases);
                self.text(&t.rationale);
            }
            Record::Disease(d) => {
                self.text(&d.name);
                self.texts(d.dysregulated_pathways.iter().map(String::as_str));
                self.0.update(&(d.candidate_drugs.len() as u64).to_le_bytes());
                for c in &d.candidate_drugs {
                    self.text(c.drug_key.as_str());
                    self.text(&c.rationale);
                }
            }
            Record::Update(u) => {
                self.0.update(&u.year.to_le_bytes());
                self.text(&u.summary);
                self.text(u.drug.as_ref().map_or("", RecordKey::as_str));
            }
        }
    }
}

/// Hex BLAKE3 digest of a store's content.
///
/// Two stores with the same fingerprint hold the same records, the same
/// set memberships, the same sequence orders and the same featured records.
#[must_use]
pub fn fingerprint<S: RecordStore + ?Sized>(store: &S) -> String {
    let mut c = Canonical(Hasher::new());
    for kind in RecordKind::ALL {
        let mut records = store.list_all(kind);
        if kind != RecordKind::Update {
            records.sort_by_key(Record::key);
        }
        c.0.update(&(records.len() as u64).to_le_bytes());
        for record in &records {
            c.record(record);
        }
    }
    for kind in [RecordKind::Drug, RecordKind::Target, RecordKind::Disease] {
        let featured = store.featured(kind).map(|r| r.key()).ok();
        c.text(featured.as_ref().map_or("", RecordKey::as_str));
    }
    c.0.finalize().to_hex().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, CatalogStore};
    use crate::record::{Drug, Target};

    fn store(source: CatalogSource) -> CatalogStore {
        CatalogStore::load(source).unwrap()
    }

    fn two_drugs(first: &str, second: &str) -> CatalogSource {
        CatalogSource {
            drugs: vec![Drug::new(first, "x"), Drug::new(second, "y")],
            ..CatalogSource::default()
        }
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let a = store(CatalogSource::embedded().unwrap());
        let b = store(CatalogSource::embedded().unwrap());
        assert_eq!(fingerprint(&a), fingerprint(&b));
        assert_eq!(fingerprint(&a).len(), 64);
    }

    #[test]
    fn fingerprint_ignores_set_order() {
        let mut a = two_drugs("A", "B");
        a.targets.push(Target::new("T", "r").with_drugs(["A", "B"]));
        a.featured.drug = Some(RecordKey::new("A"));
        let mut b = two_drugs("B", "A");
        b.drugs[0].original_indication = "y".to_string();
        b.drugs[1].original_indication = "x".to_string();
        b.targets.push(Target::new("T", "r").with_drugs(["B", "A"]));
        b.featured.drug = Some(RecordKey::new("A"));
        assert_eq!(fingerprint(&store(a)), fingerprint(&store(b)));
    }

    #[test]
    fn fingerprint_sees_content_changes() {
        let a = two_drugs("A", "B");
        let mut b = two_drugs("A", "B");
        b.drugs[1].evidence = "new evidence".to_string();
        assert_ne!(fingerprint(&store(a)), fingerprint(&store(b)));
    }

    #[test]
    fn fingerprint_sees_sequence_order() {
        let mut a = two_drugs("A", "B");
        a.drugs[0] = a.drugs[0].clone().with_repurposed(["p", "q"]);
        let mut b = two_drugs("A", "B");
        b.drugs[0] = b.drugs[0].clone().with_repurposed(["q", "p"]);
        assert_ne!(fingerprint(&store(a)), fingerprint(&store(b)));
    }
}
