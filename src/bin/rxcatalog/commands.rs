use std::fmt::Write as _;

use anyhow::Context;
use rxcatalog::{
    select, select_record, Banner, Category, CatalogStore, Format, RecordKey, RecordKind, RecordStore,
    Renderer, ViewerConfig,
};
use tracing::info;

use crate::cli::{Cli, Command};

/// Resolved settings for one invocation: config file values with CLI overrides.
struct Session {
    store: CatalogStore,
    format: Format,
    renderer: Box<dyn Renderer>,
    banner: Option<Banner>,
}

fn open(cli: &Cli) -> anyhow::Result<Session> {
    let mut config = ViewerConfig::load(cli.config.as_deref()).context("failed to load config")?;
    if let Some(path) = &cli.catalog {
        config.catalog.path = Some(path.clone());
    }
    if let Some(format) = cli.format {
        config.display.format = format.into();
    }
    if cli.no_banner {
        config.display.banner = false;
    }

    let source = config.catalog_source().context("failed to read catalog")?;
    let store = CatalogStore::load(source).context("catalog failed validation")?;
    info!(
        format = %config.display.format,
        catalog = ?config.catalog.path,
        "catalog ready"
    );

    Ok(Session {
        store,
        format: config.display.format,
        renderer: config.display.format.renderer(),
        banner: config.display.banner(),
    })
}

/// Runs a command and returns what should be printed on stdout.
pub fn run(cli: &Cli) -> anyhow::Result<String> {
    let session = open(cli)?;
    let store = &session.store;

    match &cli.command {
        Command::Show { category } => {
            let category = Category::parse(category)?;
            let payload = select(category, store)?;
            Ok(session.renderer.render_page(session.banner.as_ref(), &payload))
        }
        Command::Record { kind, key } => {
            let kind = RecordKind::from(*kind);
            let key = RecordKey::new(key);
            let payload = select_record(kind, &key, store)
                .with_context(|| format!("no {kind} named \"{}\" in the catalog", key.label()))?;
            Ok(session.renderer.render_page(session.banner.as_ref(), &payload))
        }
        Command::List { kind } => Ok(list(store, (*kind).into(), session.format)),
        Command::Validate => Ok(summary(store)),
        Command::Export { encoding } => Ok(store.to_source().encode((*encoding).into())?),
    }
}

fn list(store: &CatalogStore, kind: RecordKind, format: Format) -> String {
    let records = store.list_keyed(kind);
    if format == Format::Json {
        let items: Vec<serde_json::Value> = records
            .iter()
            .map(|(key, r)| serde_json::json!({ "key": key.as_str(), "title": r.title() }))
            .collect();
        return format!("{:#}\n", serde_json::Value::Array(items));
    }
    let mut out = String::new();
    for (key, record) in records {
        let _ = writeln!(out, "{:<40} {}", key.as_str(), record.title());
    }
    out
}

fn summary(store: &CatalogStore) -> String {
    let mut out = String::from("catalog ok\n");
    for kind in RecordKind::ALL {
        let _ = writeln!(out, "  {:<8} {}", kind.to_string() + "s", store.count(kind));
    }
    let _ = writeln!(out, "  fingerprint {}", store.fingerprint());
    out
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use clap::Parser;

    use super::*;
    use crate::exit_code;

    fn run_args(config: &Path, args: &[&str]) -> anyhow::Result<String> {
        let mut argv = vec!["rxcatalog", "--config", config.to_str().unwrap()];
        argv.extend_from_slice(args);
        run(&Cli::try_parse_from(argv).unwrap())
    }

    fn markdown_config(dir: &Path) -> std::path::PathBuf {
        let path = dir.join("rxcatalog.toml");
        std::fs::write(&path, "[display]\nformat = \"markdown\"\nbanner = true\ntitle = \"Lab Catalog\"\n").unwrap();
        path
    }

    #[test]
    fn config_file_sets_format_and_banner() {
        let dir = tempfile::tempdir().unwrap();
        let config = markdown_config(dir.path());
        let out = run_args(&config, &["show", "Drug"]).unwrap();
        assert!(out.starts_with("# Lab Catalog\n"), "unexpected output:\n{out}");
        assert!(out.contains("## Drug-Based Repositioning"));
    }

    #[test]
    fn cli_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = markdown_config(dir.path());
        let out = run_args(&config, &["show", "Drug", "--format", "json", "--no-banner"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert!(value.get("banner").is_none());
        assert_eq!(value["drug"]["name"], "Metformin");
    }

    #[test]
    fn list_follows_configured_format() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("rxcatalog.toml");
        std::fs::write(&config, "[display]\nformat = \"json\"\n").unwrap();
        let out = run_args(&config, &["list", "drugs"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["key"], "metformin");
        assert_eq!(value[0]["title"], "Metformin");
    }

    #[test]
    fn catalog_in_config_resolves_relative_to_it() {
        let dir = tempfile::tempdir().unwrap();
        let source = rxcatalog::CatalogSource {
            drugs: vec![rxcatalog::Drug::new("Aspirin", "Pain")],
            ..rxcatalog::CatalogSource::default()
        };
        std::fs::write(dir.path().join("mini.toml"), source.encode(rxcatalog::CatalogFormat::Toml).unwrap()).unwrap();
        let config = dir.path().join("rxcatalog.toml");
        std::fs::write(&config, "[catalog]\npath = \"mini.toml\"\n").unwrap();
        let out = run_args(&config, &["list", "drug"]).unwrap();
        assert!(out.starts_with("aspirin "));
    }

    #[test]
    fn unknown_record_names_it_and_exits_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let config = markdown_config(dir.path());
        let err = run_args(&config, &["record", "drug", "donepezil-hcl"]).unwrap_err();
        assert!(format!("{err}").contains("Donepezil Hcl"));
        assert_eq!(exit_code(&err), 4);
    }

    #[test]
    fn invalid_category_exits_two() {
        let dir = tempfile::tempdir().unwrap();
        let config = markdown_config(dir.path());
        let err = run_args(&config, &["show", "Gene-Based"]).unwrap_err();
        assert_eq!(exit_code(&err), 2);
    }

    #[test]
    fn invalid_catalog_exits_three() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("bad.json");
        std::fs::write(
            &catalog,
            r#"{ "diseases": [ { "name": "Cancer", "candidate_drugs": [ { "drug": "Metformin", "rationale": "x" } ] } ] }"#,
        )
        .unwrap();
        let config = markdown_config(dir.path());
        let err = run_args(&config, &["--catalog", catalog.to_str().unwrap(), "validate"]).unwrap_err();
        assert_eq!(exit_code(&err), 3);
    }

    #[test]
    fn missing_config_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_args(&dir.path().join("absent.toml"), &["validate"]).unwrap_err();
        assert_eq!(exit_code(&err), 1);
    }
}
