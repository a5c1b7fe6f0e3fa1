//! Structured JSON output.

use serde_json::{json, Map, Value};

use crate::navigator::{RenderPayload, UpdateEntry};
use crate::record::{Disease, Drug};
use crate::render::{Banner, Renderer};

/// Pretty-printed JSON objects, one per section.
///
/// Built as a [`Value`] and printed through its `Display` impl, so rendering
/// has no failure path.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

fn drug_ref(drug: &Drug) -> Value {
    json!({ "key": drug.key().as_str(), "name": drug.name })
}

fn disease_ref(disease: &Disease) -> Value {
    json!({ "key": disease.key().as_str(), "name": disease.name })
}

fn update_entry(entry: &UpdateEntry<'_>) -> Value {
    json!({
        "year": entry.update.year,
        "summary": entry.update.summary,
        "drug": entry.drug.map(drug_ref),
    })
}

impl JsonRenderer {
    /// The section as a JSON value.
    #[must_use]
    pub fn to_value(payload: &RenderPayload<'_>) -> Value {
        let category = payload.category();
        let mut section = match payload {
            RenderPayload::Drug(view) => json!({
                "drug": {
                    "key": view.drug.key().as_str(),
                    "name": view.drug.name,
                    "original_indication": view.drug.original_indication,
                    "repurposed_indications": view.drug.repurposed_indications,
                    "mechanism": view.drug.mechanism,
                    "evidence": view.drug.evidence,
                },
                "updates": view.updates.iter().map(|u| json!({ "year": u.year, "summary": u.summary })).collect::<Vec<_>>(),
            }),
            RenderPayload::Target(view) => json!({
                "target": {
                    "key": view.target.key().as_str(),
                    "name": view.target.name,
                    "rationale": view.target.rationale,
                },
                "acting_drugs": view.acting_drugs.iter().map(|d| drug_ref(d)).collect::<Vec<_>>(),
                "linked_diseases": view.linked_diseases.iter().map(|d| disease_ref(d)).collect::<Vec<_>>(),
            }),
            RenderPayload::Disease(view) => json!({
                "disease": {
                    "key": view.disease.key().as_str(),
                    "name": view.disease.name,
                    "dysregulated_pathways": view.disease.dysregulated_pathways,
                },
                "candidates": view.candidates.iter().map(|c| json!({
                    "drug": drug_ref(c.drug),
                    "rationale": c.rationale,
                })).collect::<Vec<_>>(),
            }),
            RenderPayload::Updates(view) => json!({
                "updates": view.entries.iter().map(update_entry).collect::<Vec<_>>(),
            }),
        };
        if let Value::Object(map) = &mut section {
            map.insert("category".to_string(), Value::from(category.as_str()));
            map.insert("heading".to_string(), Value::from(category.heading()));
        }
        section
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, payload: &RenderPayload<'_>) -> String {
        format!("{:#}", Self::to_value(payload))
    }

    fn render_banner(&self, banner: &Banner) -> String {
        format!("{:#}", json!({ "title": banner.title, "tagline": banner.tagline }))
    }

    fn render_page(&self, banner: Option<&Banner>, payload: &RenderPayload<'_>) -> String {
        let mut page = Map::new();
        if let Some(banner) = banner {
            page.insert("banner".to_string(), json!({ "title": banner.title, "tagline": banner.tagline }));
        }
        if let Value::Object(section) = Self::to_value(payload) {
            page.extend(section);
        }
        format!("{:#}", Value::Object(page))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, CatalogStore};
    use crate::navigator::{select, Category};

    fn store() -> CatalogStore {
        CatalogStore::load(CatalogSource::embedded().unwrap()).unwrap()
    }

    #[test]
    fn test_drug_object() {
        let store = store();
        let out = JsonRenderer.render(&select(Category::Drug, &store).unwrap());
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["category"], "Drug");
        assert_eq!(value["drug"]["name"], "Metformin");
        assert_eq!(value["drug"]["repurposed_indications"], json!(["Alzheimer's disease", "Cancer"]));
    }

    #[test]
    fn test_disease_candidates_resolved() {
        let store = store();
        let value = JsonRenderer::to_value(&select(Category::Disease, &store).unwrap());
        assert_eq!(value["candidates"][1]["drug"]["key"], "sildenafil");
        assert_eq!(value["candidates"][1]["rationale"], "Improved cerebral blood flow");
    }

    #[test]
    fn test_updates_carry_drug_links() {
        let store = store();
        let value = JsonRenderer::to_value(&select(Category::Updates, &store).unwrap());
        let updates = value["updates"].as_array().unwrap();
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0]["year"], 2024);
        assert_eq!(updates[2]["drug"]["name"], "Sildenafil");
    }

    #[test]
    fn test_page_embeds_banner() {
        let store = store();
        let payload = select(Category::Target, &store).unwrap();
        let out = JsonRenderer.render_page(Some(&Banner::default()), &payload);
        let value: Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["banner"]["title"], "Drug Repositioning Knowledge Platform");
        assert_eq!(value["acting_drugs"][1]["name"], "AICAR");
    }
}
