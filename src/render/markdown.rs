//! Markdown, one `##` section per category.

use crate::navigator::{DiseaseView, DrugView, RenderPayload, TargetView, UpdatesView};
use crate::render::{Banner, Doc, Renderer};

/// Markdown with `##` section headings and bold field labels.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownRenderer;

fn paragraph(doc: &mut Doc, label: &str, value: &str) {
    doc.field(label, value, true);
    doc.blank();
}

impl MarkdownRenderer {
    fn drug(doc: &mut Doc, view: &DrugView<'_>) {
        let drug = view.drug;
        doc.line(format!("### {}", drug.name));
        doc.blank();
        paragraph(doc, "Original indication", &drug.original_indication);
        paragraph(doc, "Repurposed indications", &drug.repurposed_indications.join(", "));
        paragraph(doc, "Mechanism", &drug.mechanism);
        paragraph(doc, "Evidence", &drug.evidence);
        if !view.updates.is_empty() {
            doc.line("**Related updates:**");
            doc.blank();
            for u in &view.updates {
                doc.line(format!("- **{}** – {}", u.year, u.summary));
            }
        }
    }

    fn target(doc: &mut Doc, view: &TargetView<'_>) {
        doc.line(format!("### {}", view.target.name));
        doc.blank();
        let drugs: Vec<&str> = view.acting_drugs.iter().map(|d| d.name.as_str()).collect();
        let diseases: Vec<&str> = view.linked_diseases.iter().map(|d| d.name.as_str()).collect();
        paragraph(doc, "Drugs acting on this target", &drugs.join(", "));
        paragraph(doc, "Diseases linked", &diseases.join(", "));
        paragraph(doc, "Why it matters", &view.target.rationale);
    }

    fn disease(doc: &mut Doc, view: &DiseaseView<'_>) {
        doc.line(format!("### {}", view.disease.name));
        doc.blank();
        paragraph(doc, "Key dysregulated pathways", &view.disease.dysregulated_pathways.join(", "));
        if view.candidates.is_empty() {
            return;
        }
        doc.line("**Repurposed drug candidates:**");
        doc.blank();
        for c in &view.candidates {
            doc.line(format!("- **{}** – {}", c.drug.name, c.rationale));
        }
    }

    fn updates(doc: &mut Doc, view: &UpdatesView<'_>) {
        if view.entries.is_empty() {
            doc.line("_No updates._");
            return;
        }
        for entry in &view.entries {
            doc.line(format!("- **{}** – {}", entry.update.year, entry.update.summary));
        }
    }
}

impl Renderer for MarkdownRenderer {
    fn render(&self, payload: &RenderPayload<'_>) -> String {
        let mut doc = Doc::default();
        doc.line(format!("## {}", payload.category().heading()));
        doc.blank();
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
        doc.line(format!("# {}", banner.title));
        doc.blank();
        doc.line(&banner.tagline);
        doc.finish()
    }
}
