//! Render payloads: a selected record together with its resolved links.

use crate::navigator::Category;
use crate::record::{Disease, Drug, Target, Update};

/// A drug and the updates that mention it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrugView<'a> {
    /// The selected drug.
    pub drug: &'a Drug,
    /// Updates linked to the drug, newest first.
    pub updates: Vec<&'a Update>,
}

/// A target with its acting drugs and linked diseases resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetView<'a> {
    /// The selected target.
    pub target: &'a Target,
    /// Drugs acting on the target, in declared order.
    pub acting_drugs: Vec<&'a Drug>,
    /// Diseases linked to the target, in declared order.
    pub linked_diseases: Vec<&'a Disease>,
}

/// A candidate drug resolved against the drug records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCandidate<'a> {
    /// The candidate drug record.
    pub drug: &'a Drug,
    /// Why the drug is a candidate for this disease.
    pub rationale: &'a str,
}

/// A disease with its candidate drugs resolved, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseView<'a> {
    /// The selected disease.
    pub disease: &'a Disease,
    /// Resolved candidate drugs.
    pub candidates: Vec<ResolvedCandidate<'a>>,
}

/// One entry of the update feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateEntry<'a> {
    /// The update itself.
    pub update: &'a Update,
    /// The drug it is about, when linked.
    pub drug: Option<&'a Drug>,
}

/// The update feed, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatesView<'a> {
    /// Feed entries, newest first.
    pub entries: Vec<UpdateEntry<'a>>,
}

/// Everything a renderer needs for one section.
///
/// The variant always matches the [`Category`] it was selected for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderPayload<'a> {
    /// Payload for [`Category::Drug`].
    Drug(DrugView<'a>),
    /// Payload for [`Category::Target`].
    Target(TargetView<'a>),
    /// Payload for [`Category::Disease`].
    Disease(DiseaseView<'a>),
    /// Payload for [`Category::Updates`].
    Updates(UpdatesView<'a>),
}

impl RenderPayload<'_> {
    /// The category this payload renders.
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::Drug(_) => Category::Drug,
            Self::Target(_) => Category::Target,
            Self::Disease(_) => Category::Disease,
            Self::Updates(_) => Category::Updates,
        }
    }
}
