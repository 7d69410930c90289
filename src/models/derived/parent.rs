//! Parent and grandparent views
//!
//! Resolved parent records for an individual. These are snapshots taken from
//! the store at query time; they hold no link back to the store.

use crate::models::core::Individual;
use crate::models::core::types::{Lineage, ParentRole};
use serde::Serialize;

/// Resolved father and mother of an individual
///
/// A `Parents` value always has at least one parent; an individual with
/// neither parent has no `Parents` at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parents {
    /// The father, if known
    pub father: Option<Individual>,
    /// The mother, if known
    pub mother: Option<Individual>,
}

impl Parents {
    /// Pair up two optional parents; `None` when both are absent
    #[must_use]
    pub fn new(father: Option<Individual>, mother: Option<Individual>) -> Option<Self> {
        if father.is_none() && mother.is_none() {
            None
        } else {
            Some(Self { father, mother })
        }
    }

    #[must_use]
    pub const fn get(&self, role: ParentRole) -> Option<&Individual> {
        match role {
            ParentRole::Father => self.father.as_ref(),
            ParentRole::Mother => self.mother.as_ref(),
        }
    }

    /// The present parents, father first
    pub fn iter(&self) -> impl Iterator<Item = &Individual> {
        self.father.iter().chain(self.mother.iter())
    }

    /// Consume into the present parents, father first
    #[must_use]
    pub fn into_vec(self) -> Vec<Individual> {
        self.father.into_iter().chain(self.mother).collect()
    }
}

/// The four grandparents of an individual
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grandparents {
    pub paternal_grandfather: Option<Individual>,
    pub paternal_grandmother: Option<Individual>,
    pub maternal_grandfather: Option<Individual>,
    pub maternal_grandmother: Option<Individual>,
}

impl Grandparents {
    #[must_use]
    pub const fn get(&self, lineage: Lineage, role: ParentRole) -> Option<&Individual> {
        match (lineage, role) {
            (Lineage::Paternal, ParentRole::Father) => self.paternal_grandfather.as_ref(),
            (Lineage::Paternal, ParentRole::Mother) => self.paternal_grandmother.as_ref(),
            (Lineage::Maternal, ParentRole::Father) => self.maternal_grandfather.as_ref(),
            (Lineage::Maternal, ParentRole::Mother) => self.maternal_grandmother.as_ref(),
        }
    }

    /// Fill one grandparent slot
    pub fn set(&mut self, lineage: Lineage, role: ParentRole, individual: Option<Individual>) {
        let slot = match (lineage, role) {
            (Lineage::Paternal, ParentRole::Father) => &mut self.paternal_grandfather,
            (Lineage::Paternal, ParentRole::Mother) => &mut self.paternal_grandmother,
            (Lineage::Maternal, ParentRole::Father) => &mut self.maternal_grandfather,
            (Lineage::Maternal, ParentRole::Mother) => &mut self.maternal_grandmother,
        };
        *slot = individual;
    }

    /// Number of known grandparents
    #[must_use]
    pub fn count(&self) -> usize {
        [
            &self.paternal_grandfather,
            &self.paternal_grandmother,
            &self.maternal_grandfather,
            &self.maternal_grandmother,
        ]
        .into_iter()
        .filter(|slot| slot.is_some())
        .count()
    }
}
