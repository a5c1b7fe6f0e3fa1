use rxcatalog::{
    render, select, Banner, CatalogSource, CatalogStore, Category, Format, JsonRenderer, Renderer,
};

fn store() -> CatalogStore {
    CatalogStore::load(CatalogSource::embedded().unwrap()).unwrap()
}

#[test]
fn every_format_renders_every_category() {
    let store = store();
    for category in Category::ALL {
        let payload = select(category, &store).unwrap();
        for format in Format::ALL {
            let out = render(&payload, format);
            assert!(!out.is_empty(), "{format} output for {category} is empty");
            assert_eq!(out, render(&payload, format), "{format} output for {category} is not deterministic");
        }
    }
}

#[test]
fn text_and_markdown_carry_section_heading() {
    let store = store();
    for category in Category::ALL {
        let payload = select(category, &store).unwrap();
        assert!(render(&payload, Format::Text).starts_with(category.heading()));
        assert!(render(&payload, Format::Markdown).starts_with(&format!("## {}", category.heading())));
    }
}

#[test]
fn json_output_is_valid_and_tagged() {
    let store = store();
    for category in Category::ALL {
        let payload = select(category, &store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&render(&payload, Format::Json)).unwrap();
        assert_eq!(value["category"], category.as_str());
        assert_eq!(value["heading"], category.heading());
    }
}

#[test]
fn markdown_page_layout() {
    let store = store();
    let payload = select(Category::Drug, &store).unwrap();
    let page = Format::Markdown.renderer().render_page(Some(&Banner::default()), &payload);
    let expected_start = "# Drug Repositioning Knowledge Platform\n\n\
        A research-oriented platform for organizing drug repurposing evidence by drug, target, and disease.\n\n\
        ## Drug-Based Repositioning\n\n\
        ### Metformin\n\n\
        **Original indication:** Type 2 Diabetes\n\n\
        **Repurposed indications:** Alzheimer's disease, Cancer\n\n\
        **Mechanism:** AMPK activation → reduced neuroinflammation → mTOR modulation\n\n\
        **Evidence:** Animal models, observational human studies\n";
    assert!(page.starts_with(expected_start), "unexpected page:\n{page}");
}

#[test]
fn json_page_without_banner_has_no_banner_key() {
    let store = store();
    let payload = select(Category::Updates, &store).unwrap();
    let page = JsonRenderer.render_page(None, &payload);
    let value: serde_json::Value = serde_json::from_str(&page).unwrap();
    assert!(value.get("banner").is_none());
    assert_eq!(value["updates"].as_array().unwrap().len(), 3);
}
