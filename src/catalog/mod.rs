//! The catalog store.
//!
//! A catalog is loaded once from a [`CatalogSource`], validated, and then
//! only read. Readers go through the [`RecordStore`] trait so the navigator
//! does not depend on how records are held.

mod fingerprint;
mod serialization;
mod source;
mod store;
mod traits;
mod validation;

pub use fingerprint::fingerprint;
pub use serialization::{from_json, from_toml, to_json_pretty, to_toml};
pub use source::{CatalogFormat, CatalogSource, Featured};
pub use store::CatalogStore;
pub use traits::RecordStore;
pub use validation::MAX_TEXT_LEN;
