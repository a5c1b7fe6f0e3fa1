//! Navigation categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidCategoryError;
use crate::record::RecordKind;

/// The fixed set of sections a reader can browse.
///
/// # Examples
///
/// ```
/// use rxcatalog::Category;
///
/// assert_eq!("drug".parse::<Category>().unwrap(), Category::Drug);
/// assert_eq!("Latest Updates".parse::<Category>().unwrap(), Category::Updates);
/// assert!("Gene-Based".parse::<Category>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Drug-based repositioning: one drug and its new indications.
    Drug,
    /// Target-based repositioning: one target and the drugs acting on it.
    Target,
    /// Disease-based repositioning: one disease and its candidate drugs.
    Disease,
    /// The update feed.
    Updates,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Self; 4] = [Self::Drug, Self::Target, Self::Disease, Self::Updates];

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Drug => "Drug",
            Self::Target => "Target",
            Self::Disease => "Disease",
            Self::Updates => "Updates",
        }
    }

    /// Label shown in the navigation menu.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::Drug => "Drug-Based",
            Self::Target => "Target-Based",
            Self::Disease => "Disease-Based",
            Self::Updates => "Latest Updates",
        }
    }

    /// Section heading for rendered output.
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::Drug => "Drug-Based Repositioning",
            Self::Target => "Target-Based Repositioning",
            Self::Disease => "Disease-Based Repositioning",
            Self::Updates => "Latest Drug Repositioning Updates",
        }
    }

    /// Record kind this category displays.
    #[must_use]
    pub const fn kind(self) -> RecordKind {
        match self {
            Self::Drug => RecordKind::Drug,
            Self::Target => RecordKind::Target,
            Self::Disease => RecordKind::Disease,
            Self::Updates => RecordKind::Update,
        }
    }

    /// Parses a canonical name or menu label, ignoring case and surrounding space.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCategoryError`] listing the valid categories.
    pub fn parse(input: &str) -> Result<Self, InvalidCategoryError> {
        let wanted = input.trim();
        Self::ALL
            .into_iter()
            .find(|c| wanted.eq_ignore_ascii_case(c.as_str()) || wanted.eq_ignore_ascii_case(c.menu_label()))
            .ok_or_else(|| InvalidCategoryError::new(input))
    }
}

impl From<RecordKind> for Category {
    fn from(kind: RecordKind) -> Self {
        match kind {
            RecordKind::Drug => Self::Drug,
            RecordKind::Target => Self::Target,
            RecordKind::Disease => Self::Disease,
            RecordKind::Update => Self::Updates,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = InvalidCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
