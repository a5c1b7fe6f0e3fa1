//! Plain terminal text.

use crate::navigator::{DiseaseView, DrugView, RenderPayload, TargetView, UpdatesView};
use crate::render::{Banner, Doc, Renderer};

/// Plain text with underlined headings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

fn heading(doc: &mut Doc, text: &str, underline: char) {
    doc.line(text);
    doc.line(underline.to_string().repeat(text.chars().count()));
    doc.blank();
}

fn bullets(doc: &mut Doc, label: &str, items: impl IntoIterator<Item = String>) {
    let items: Vec<String> = items.into_iter().collect();
    if items.is_empty() {
        return;
    }
    doc.line(format!("{label}:"));
    for item in items {
        doc.line(format!("  - {item}"));
    }
}

impl TextRenderer {
    fn drug(doc: &mut Doc, view: &DrugView<'_>) {
        let drug = view.drug;
        heading(doc, &drug.name, '-');
        doc.field("Original indication", &drug.original_indication, false);
        doc.field("Repurposed indications", &drug.repurposed_indications.join(", "), false);
        doc.field("Mechanism", &drug.mechanism, false);
        doc.field("Evidence", &drug.evidence, false);
        bullets(doc, "Related updates", view.updates.iter().map(|u| format!("{}: {}", u.year, u.summary)));
    }

    fn target(doc: &mut Doc, view: &TargetView<'_>) {
        heading(doc, &view.target.name, '-');
        let drugs: Vec<&str> = view.acting_drugs.iter().map(|d| d.name.as_str()).collect();
        let diseases: Vec<&str> = view.linked_diseases.iter().map(|d| d.name.as_str()).collect();
        doc.field("Drugs acting on this target", &drugs.join(", "), false);
        doc.field("Diseases linked", &diseases.join(", "), false);
        doc.field("Why it matters", &view.target.rationale, false);
    }

    fn disease(doc: &mut Doc, view: &DiseaseView<'_>) {
        heading(doc, &view.disease.name, '-');
        doc.field("Key dysregulated pathways", &view.disease.dysregulated_pathways.join(", "), false);
        bullets(
            doc,
            "Repurposed drug candidates",
            view.candidates.iter().map(|c| format!("{} - {}", c.drug.name, c.rationale)),
        );
    }

    fn updates(doc: &mut Doc, view: &UpdatesView<'_>) {
        if view.entries.is_empty() {
            doc.line("No updates.");
            return;
        }
        for entry in &view.entries {
            doc.line(format!("- {} - {}", entry.update.year, entry.update.summary));
        }
    }
}

impl Renderer for TextRenderer {
    fn render(&self, payload: &RenderPayload<'_>) -> String {
        let mut doc = Doc::default();
        heading(&mut doc, payload.category().heading(), '=');
        match payload {
            RenderPayload::Drug(view) => Self::drug(&mut doc, view),
            RenderPayload::Target(view) => Self::target(&mut doc, view),
            RenderPayload::Disease(view) => Self::disease(&mut doc, view),
            RenderPayload::Updates(view) => Self::updates(&mut doc, view),
        }
        doc.finish()
    }

    fn render_banner(&self, banner: &Banner) -> String {
        let mut doc = Doc::default();
        doc.line(&banner.title);
        doc.line(&banner.tagline);
        doc.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogSource, CatalogStore};
    use crate::navigator::{select, Category};

    fn render(category: Category) -> String {
        let store = CatalogStore::load(CatalogSource::embedded().unwrap()).unwrap();
        TextRenderer.render(&select(category, &store).unwrap())
    }

    #[test]
    fn test_drug_layout() {
        let out = render(Category::Drug);
        assert!(out.starts_with("Drug-Based Repositioning\n========================\n\nMetformin\n---------\n"));
        assert!(out.contains("Original indication: Type 2 Diabetes\n"));
        assert!(out.contains("Repurposed indications: Alzheimer's disease, Cancer\n"));
        assert!(out.contains("  - 2024: Metformin shows neuroprotective effects in AD mouse models\n"));
    }

    #[test]
    fn test_target_layout() {
        let out = render(Category::Target);
        assert!(out.contains("Drugs acting on this target: Metformin, AICAR\n"));
        assert!(out.contains("Diseases linked: Alzheimer's Disease, Metabolic Syndrome, Cancer\n"));
    }

    #[test]
    fn test_disease_layout() {
        let out = render(Category::Disease);
        assert!(out.contains("Repurposed drug candidates:\n  - Metformin - AMPK-mediated neuroprotection\n"));
        assert!(out.contains("  - Sildenafil - Improved cerebral blood flow\n"));
    }

    #[test]
    fn test_updates_layout_newest_first() {
        let out = render(Category::Updates);
        let first = out.find("2024 - Metformin").unwrap();
        let second = out.find("2024 - Minocycline").unwrap();
        let third = out.find("2023 - Sildenafil").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_banner() {
        let out = TextRenderer.render_banner(&Banner::default());
        assert!(out.starts_with("Drug Repositioning Knowledge Platform\n"));
    }
}
