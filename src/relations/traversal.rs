//! Read-only lineage queries
//!
//! Every query is evaluated against the store at call time. Nothing is cached
//! and nothing is locked: a caller that mutates the store concurrently with a
//! multi-step traversal may observe a mix of old and new links.

use std::collections::VecDeque;

use itertools::Itertools;
use log::warn;
use rustc_hash::FxHashSet;

use crate::error::{KinshipError, Result};
use crate::models::{Gender, Grandparents, Individual, KinshipSummary, Lineage, ParentRole, Parents};
use crate::store::PedigreeStore;

/// Queries over the father/mother link graph
#[derive(Debug)]
pub struct LineageTraversal<'s, S> {
    store: &'s S,
}

impl<S> Clone for LineageTraversal<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S> Copy for LineageTraversal<'_, S> {}

impl<'s, S: PedigreeStore> LineageTraversal<'s, S> {
    #[must_use]
    pub const fn new(store: &'s S) -> Self {
        Self { store }
    }

    lineage_queries! {
        parents {
            "father" => ParentRole::Father: father;
            "mother" => ParentRole::Mother: mother;
        }
        grandparents {
            "paternal grandfather" => (Lineage::Paternal, ParentRole::Father): paternal_grandfather;
            "paternal grandmother" => (Lineage::Paternal, ParentRole::Mother): paternal_grandmother;
            "maternal grandfather" => (Lineage::Maternal, ParentRole::Father): maternal_grandfather;
            "maternal grandmother" => (Lineage::Maternal, ParentRole::Mother): maternal_grandmother;
        }
    }

    /// Resolve the parent in `role`, if the slot is set and the record exists
    ///
    /// A slot pointing at a PNR the store does not know is treated as empty.
    pub fn parent(&self, x: &Individual, role: ParentRole) -> Result<Option<Individual>> {
        let Some(pnr) = x.parent_pnr(role) else {
            return Ok(None);
        };
        let parent = self.store.find(pnr)?;
        if parent.is_none() {
            warn!("{} references {role} {pnr}, which is not in the store", x.pnr);
        }
        Ok(parent)
    }

    /// Father and mother of `x`; `None` when neither is known
    pub fn parents(&self, x: &Individual) -> Result<Option<Parents>> {
        Ok(Parents::new(
            self.parent(x, ParentRole::Father)?,
            self.parent(x, ParentRole::Mother)?,
        ))
    }

    /// The `role` parent of `x`'s `lineage` parent
    ///
    /// Fails with `LineageGap` when the intermediate parent is unknown. The
    /// grandparent itself may be absent.
    pub fn grandparent(
        &self,
        x: &Individual,
        lineage: Lineage,
        role: ParentRole,
    ) -> Result<Option<Individual>> {
        let parent_role = lineage.parent_role();
        let parent = self.parent(x, parent_role)?.ok_or_else(|| {
            KinshipError::lineage_gap(format!("{} doesn't have a {parent_role}", x.pnr))
        })?;
        self.parent(&parent, role)
    }

    /// All four grandparents; unknown intermediates leave their slots empty
    pub fn grandparents(&self, x: &Individual) -> Result<Grandparents> {
        let mut grandparents = Grandparents::default();
        for lineage in [Lineage::Paternal, Lineage::Maternal] {
            let Some(parent) = self.parent(x, lineage.parent_role())? else {
                continue;
            };
            for role in ParentRole::ALL {
                grandparents.set(lineage, role, self.parent(&parent, role)?);
            }
        }
        Ok(grandparents)
    }

    /// Children of `x`: by father PNR for men, by mother PNR for women
    ///
    /// An individual of unknown gender has no offspring.
    pub fn offspring(&self, x: &Individual) -> Result<Vec<Individual>> {
        let offspring = match x.gender {
            Gender::Male => self.store.find_by_father_id(&x.pnr)?,
            Gender::Female => self.store.find_by_mother_id(&x.pnr)?,
            Gender::Unknown => {
                warn!("{} has unknown gender; offspring is undefined", x.pnr);
                Vec::new()
            }
        };
        Ok(offspring)
    }

    /// Every individual reachable through father/mother links, nearest first
    pub fn ancestors(&self, x: &Individual) -> Result<Vec<Individual>> {
        self.expand(x, |individual| {
            Ok(self
                .parents(individual)?
                .map(Parents::into_vec)
                .unwrap_or_default())
        })
    }

    /// Every individual reachable through offspring links, nearest first
    pub fn descendants(&self, x: &Individual) -> Result<Vec<Individual>> {
        self.expand(x, |individual| self.offspring(individual))
    }

    /// Individuals sharing both father and mother with `x`
    ///
    /// `None` unless both of `x`'s parents resolve in the store.
    pub fn siblings(&self, x: &Individual) -> Result<Option<Vec<Individual>>> {
        let Some((paternal, maternal)) = self.parental_offspring(x)? else {
            return Ok(None);
        };
        let maternal: FxHashSet<String> = maternal.into_iter().map(|sibling| sibling.pnr).collect();

        Ok(Some(
            paternal
                .into_iter()
                .filter(|sibling| sibling.pnr != x.pnr && maternal.contains(&sibling.pnr))
                .collect(),
        ))
    }

    /// Individuals sharing exactly one of father and mother with `x`
    ///
    /// `None` unless both of `x`'s parents resolve in the store.
    pub fn half_siblings(&self, x: &Individual) -> Result<Option<Vec<Individual>>> {
        let Some((paternal, maternal)) = self.parental_offspring(x)? else {
            return Ok(None);
        };
        let in_paternal: FxHashSet<&str> = paternal.iter().map(|s| s.pnr.as_str()).collect();
        let in_maternal: FxHashSet<&str> = maternal.iter().map(|s| s.pnr.as_str()).collect();
        let exactly_one = |pnr: &str| in_paternal.contains(pnr) != in_maternal.contains(pnr);

        Ok(Some(
            paternal
                .iter()
                .chain(&maternal)
                .unique_by(|candidate| candidate.pnr.as_str())
                .filter(|candidate| candidate.pnr != x.pnr && exactly_one(&candidate.pnr))
                .cloned()
                .collect(),
        ))
    }

    /// Whether `candidate` is an ancestor of `x`
    pub fn is_ancestor(&self, candidate: &Individual, x: &Individual) -> Result<bool> {
        Ok(self
            .ancestors(x)?
            .iter()
            .any(|ancestor| ancestor.pnr == candidate.pnr))
    }

    /// Flattened view of every relative of `x`
    pub fn summary(&self, x: &Individual) -> Result<KinshipSummary> {
        let grandparents = self.grandparents(x)?;
        let pnr_of = |slot: Option<Individual>| slot.map(|individual| individual.pnr);
        let pnrs = |individuals: Vec<Individual>| {
            individuals
                .into_iter()
                .map(|individual| individual.pnr)
                .collect::<Vec<_>>()
        };

        Ok(KinshipSummary {
            pnr: x.pnr.clone(),
            gender: x.gender,
            kind: x.kind.clone(),
            father: x.father_pnr.clone(),
            mother: x.mother_pnr.clone(),
            paternal_grandfather: pnr_of(grandparents.paternal_grandfather),
            paternal_grandmother: pnr_of(grandparents.paternal_grandmother),
            maternal_grandfather: pnr_of(grandparents.maternal_grandfather),
            maternal_grandmother: pnr_of(grandparents.maternal_grandmother),
            ancestors: pnrs(self.ancestors(x)?),
            descendants: pnrs(self.descendants(x)?),
            siblings: self.siblings(x)?.map(pnrs),
            half_siblings: self.half_siblings(x)?.map(pnrs),
        })
    }

    /// Offspring of `x`'s father and of `x`'s mother, when both resolve
    fn parental_offspring(
        &self,
        x: &Individual,
    ) -> Result<Option<(Vec<Individual>, Vec<Individual>)>> {
        let (Some(father), Some(mother)) = (
            self.parent(x, ParentRole::Father)?,
            self.parent(x, ParentRole::Mother)?,
        ) else {
            return Ok(None);
        };
        Ok(Some((self.offspring(&father)?, self.offspring(&mother)?)))
    }

    /// Breadth-first closure of `next` starting at `start`, deduplicated by PNR
    ///
    /// `start` is marked visited up front, so it is never part of the result
    /// and a cyclic link in corrupt input cannot loop forever.
    fn expand<F>(&self, start: &Individual, next: F) -> Result<Vec<Individual>>
    where
        F: Fn(&Individual) -> Result<Vec<Individual>>,
    {
        let mut visited = FxHashSet::default();
        let mut queue = VecDeque::new();
        let mut result = Vec::new();

        visited.insert(start.pnr.clone());
        queue.push_back(start.clone());

        while let Some(individual) = queue.pop_front() {
            for relative in next(&individual)? {
                if visited.insert(relative.pnr.clone()) {
                    queue.push_back(relative.clone());
                    result.push(relative);
                }
            }
        }

        Ok(result)
    }
}
