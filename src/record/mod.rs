//! Typed catalog records.
//!
//! The catalog holds four record kinds. Every record is immutable once the
//! store has loaded it; relationships between records are expressed as
//! [`RecordKey`]s and resolved by the store.

mod disease;
mod drug;
mod key;
mod target;
mod update;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use disease::{CandidateDrug, Disease};
pub use drug::Drug;
pub use key::{humanize, slugify, RecordKey};
pub use target::Target;
pub use update::Update;
pub(crate) use update::sort_newest_first;

/// The four record kinds held by a catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    /// A marketed or experimental compound.
    Drug,
    /// A biological molecule that drugs act on.
    Target,
    /// A disease with candidate repurposed drugs.
    Disease,
    /// A dated news item.
    Update,
}

impl RecordKind {
    /// All kinds, in catalog order.
    pub const ALL: [Self; 4] = [Self::Drug, Self::Target, Self::Disease, Self::Update];

    /// Lowercase name used in messages and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drug => "drug",
            Self::Target => "target",
            Self::Disease => "disease",
            Self::Update => "update",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "drug" | "drugs" => Ok(Self::Drug),
            "target" | "targets" => Ok(Self::Target),
            "disease" | "diseases" => Ok(Self::Disease),
            "update" | "updates" => Ok(Self::Update),
            other => Err(format!("unknown record kind '{other}' (expected drug, target, disease or update)")),
        }
    }
}

/// A borrowed view of any record in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "snake_case")]
pub enum Record<'a> {
    /// A drug record.
    Drug(&'a Drug),
    /// A target record.
    Target(&'a Target),
    /// A disease record.
    Disease(&'a Disease),
    /// An update record.
    Update(&'a Update),
}

impl<'a> Record<'a> {
    /// Kind of the wrapped record.
    #[must_use]
    pub const fn kind(&self) -> RecordKind {
        match self {
            Self::Drug(_) => RecordKind::Drug,
            Self::Target(_) => RecordKind::Target,
            Self::Disease(_) => RecordKind::Disease,
            Self::Update(_) => RecordKind::Update,
        }
    }

    /// Key of the wrapped record.
    #[must_use]
    pub fn key(&self) -> RecordKey {
        match self {
            Self::Drug(d) => d.key(),
            Self::Target(t) => t.key(),
            Self::Disease(d) => d.key(),
            Self::Update(u) => u.key(),
        }
    }

    /// Display title: the record name, or the year and summary for updates.
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::Drug(d) => d.name.clone(),
            Self::Target(t) => t.name.clone(),
            Self::Disease(d) => d.name.clone(),
            Self::Update(u) => format!("{} - {}", u.year, u.summary),
        }
    }

    /// Returns the drug if this is a drug record.
    #[must_use]
    pub const fn as_drug(&self) -> Option<&'a Drug> {
        match *self {
            Self::Drug(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the target if this is a target record.
    #[must_use]
    pub const fn as_target(&self) -> Option<&'a Target> {
        match *self {
            Self::Target(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the disease if this is a disease record.
    #[must_use]
    pub const fn as_disease(&self) -> Option<&'a Disease> {
        match *self {
            Self::Disease(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the update if this is an update record.
    #[must_use]
    pub const fn as_update(&self) -> Option<&'a Update> {
        match *self {
            Self::Update(u) => Some(u),
            _ => None,
        }
    }
}
