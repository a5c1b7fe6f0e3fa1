use std::process::ExitCode;

use rxcatalog::CatalogError;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CatalogError>() {
        Some(CatalogError::InvalidCategory(_)) => 2,
        Some(CatalogError::Validation(_)) => 3,
        Some(CatalogError::NotFound(_)) => 4,
        _ if err.downcast_ref::<rxcatalog::InvalidCategoryError>().is_some() => 2,
        _ if err.downcast_ref::<rxcatalog::ValidationError>().is_some() => 3,
        _ if err.downcast_ref::<rxcatalog::NotFoundError>().is_some() => 4,
        _ => 1,
    }
}

fn main() -> ExitCode {
    // Logs go to stderr so rendered output on stdout stays pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rxcatalog=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::parse();
    match commands::run(&cli) {
        Ok(out) => {
            print!("{out}");
            if !out.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Context;
    use rxcatalog::{InvalidCategoryError, NotFoundError, RecordKey, RecordKind, SourceError, ValidationError};

    use super::*;

    fn dangling() -> ValidationError {
        ValidationError::DanglingReference {
            from_kind: RecordKind::Disease,
            from_key: RecordKey::new("Cancer"),
            field: "candidate_drugs",
            to_kind: RecordKind::Drug,
            key: RecordKey::new("Metformin"),
        }
    }

    fn missing() -> NotFoundError {
        NotFoundError::Record {
            kind: RecordKind::Drug,
            key: RecordKey::new("Aspirin"),
        }
    }

    #[test]
    fn exit_code_for_raw_errors() {
        assert_eq!(exit_code(&anyhow::Error::new(InvalidCategoryError::new("Gene-Based"))), 2);
        assert_eq!(exit_code(&anyhow::Error::new(dangling())), 3);
        assert_eq!(exit_code(&anyhow::Error::new(missing())), 4);
    }

    #[test]
    fn exit_code_for_wrapped_errors() {
        assert_eq!(exit_code(&anyhow::Error::new(CatalogError::from(InvalidCategoryError::new("x")))), 2);
        assert_eq!(exit_code(&anyhow::Error::new(CatalogError::from(dangling()))), 3);
        assert_eq!(exit_code(&anyhow::Error::new(CatalogError::from(missing()))), 4);
    }

    #[test]
    fn exit_code_survives_context() {
        let validation: anyhow::Result<()> = Err(dangling()).context("catalog failed validation");
        assert_eq!(exit_code(&validation.unwrap_err()), 3);

        let lookup: anyhow::Result<()> = Err(missing()).context("no drug named \"Aspirin\"");
        assert_eq!(exit_code(&lookup.unwrap_err()), 4);
    }

    #[test]
    fn exit_code_for_other_errors() {
        let io = SourceError::UnsupportedFormat {
            path: "catalog.csv".into(),
        };
        let err: anyhow::Result<()> = Err(io).context("failed to read catalog");
        assert_eq!(exit_code(&err.unwrap_err()), 1);
        assert_eq!(exit_code(&anyhow::anyhow!("boom")), 1);
    }
}
