//! # rxcatalog - Drug Repositioning Content Catalog
//!
//! rxcatalog organizes static drug repurposing content as typed, linked
//! records and renders them section by section.
//!
//! ## Core Concepts
//!
//! - **Record**: a Drug, Target, Disease or Update, immutable once loaded
//! - **Catalog Store**: the validated, read-only collection of all records
//! - **Navigator**: maps a [`Category`] to a [`RenderPayload`] with every
//!   relationship resolved
//! - **Renderer**: turns a payload into text, Markdown or JSON
//!
//! ## Usage
//!
//! ```rust
//! use rxcatalog::{render, select, CatalogSource, CatalogStore, Category, Format};
//!
//! let store = CatalogStore::load(CatalogSource::embedded()?)?;
//! let payload = select(Category::Disease, &store)?;
//! let text = render(&payload, Format::Markdown);
//! assert!(text.contains("**Sildenafil** – Improved cerebral blood flow"));
//! # Ok::<(), rxcatalog::CatalogError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod navigator;
pub mod record;
pub mod render;

// Re-export primary types at crate root for convenience
pub use catalog::{CatalogFormat, CatalogSource, CatalogStore, Featured, RecordStore};
pub use config::ViewerConfig;
pub use error::{
	CatalogError, CatalogResult, InvalidCategoryError, NotFoundError, SourceError, ValidationError,
};
pub use navigator::{
	select, select_by_name, select_record, Category, DiseaseView, DrugView, RenderPayload,
	ResolvedCandidate, TargetView, UpdateEntry, UpdatesView,
};
pub use record::{
	humanize, slugify, CandidateDrug, Disease, Drug, Record, RecordKey, RecordKind, Target, Update,
};
pub use render::{render, Banner, Format, JsonRenderer, MarkdownRenderer, Renderer, TextRenderer};
