use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use rxcatalog::{CatalogFormat, Format, RecordKind};

#[derive(Parser)]
#[command(
    name = "rxcatalog",
    about = "Browse drug repositioning content by drug, target, disease, or update",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Catalog file (.json or .toml); overrides the config file
    #[arg(long, global = true, value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Config file [default: $RXCATALOG_CONFIG or ./rxcatalog.toml]
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output format; overrides the config file
    #[arg(short, long, global = true, value_name = "FORMAT")]
    pub format: Option<FormatArg>,

    /// Do not print the title banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show a section: Drug, Target, Disease or Updates
    #[command(visible_alias = "s")]
    Show {
        /// Section name or menu label (e.g. "Drug", "Disease-Based", "Latest Updates")
        category: String,
    },

    /// Show one specific record
    #[command(visible_alias = "r")]
    Record {
        kind: KindArg,

        /// Record name or key (e.g. "Sildenafil", "alzheimers-disease")
        key: String,
    },

    /// List the records of a kind
    #[command(visible_alias = "ls")]
    List { kind: KindArg },

    /// Load and validate the catalog, then print record counts
    Validate,

    /// Print the catalog source
    Export {
        /// Encoding of the exported catalog
        #[arg(long = "as", value_name = "FORMAT", default_value = "json")]
        encoding: ExportArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum FormatArg {
    Text,
    #[value(alias = "md")]
    Markdown,
    Json,
}

impl From<FormatArg> for Format {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Markdown => Self::Markdown,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindArg {
    #[value(alias = "drugs")]
    Drug,
    #[value(alias = "targets")]
    Target,
    #[value(alias = "diseases")]
    Disease,
    #[value(alias = "updates")]
    Update,
}

impl From<KindArg> for RecordKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Drug => Self::Drug,
            KindArg::Target => Self::Target,
            KindArg::Disease => Self::Disease,
            KindArg::Update => Self::Update,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportArg {
    Json,
    Toml,
}

impl From<ExportArg> for CatalogFormat {
    fn from(arg: ExportArg) -> Self {
        match arg {
            ExportArg::Json => Self::Json,
            ExportArg::Toml => Self::Toml,
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
