//! Validated parent, grandparent and sibling linking
//!
//! All checks run before the record is touched, so a rejected call leaves its
//! subject unchanged. Non-persisting operations only mutate the records passed
//! in; the `_and_save` variants additionally write through the store.

use log::debug;
use rustc_hash::FxHashSet;

use crate::error::{KinshipError, Result};
use crate::models::{EntityModel, Individual, Lineage, ParentRole};
use crate::relations::traversal::LineageTraversal;
use crate::store::PedigreeStore;
use crate::utils::logging::log_rejection;

/// Performs link mutations against a store
#[derive(Debug)]
pub struct RelationshipLinker<'s, S> {
    store: &'s mut S,
}

impl<'s, S: PedigreeStore> RelationshipLinker<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// Read-only queries against the same store
    #[must_use]
    pub fn traversal(&self) -> LineageTraversal<'_, S> {
        LineageTraversal::new(&*self.store)
    }

    parent_role_methods! {
        "father" => ParentRole::Father: add_father, remove_father, add_father_and_save, remove_father_and_save;
        "mother" => ParentRole::Mother: add_mother, remove_mother, add_mother_and_save, remove_mother_and_save;
    }

    grandparent_methods! {
        "paternal grandfather" => (Lineage::Paternal, ParentRole::Father): add_paternal_grandfather, add_paternal_grandfather_and_save;
        "paternal grandmother" => (Lineage::Paternal, ParentRole::Mother): add_paternal_grandmother, add_paternal_grandmother_and_save;
        "maternal grandfather" => (Lineage::Maternal, ParentRole::Father): add_maternal_grandfather, add_maternal_grandfather_and_save;
        "maternal grandmother" => (Lineage::Maternal, ParentRole::Mother): add_maternal_grandmother, add_maternal_grandmother_and_save;
    }

    /// Make `parent` the `role` parent of `child`
    ///
    /// Checked in order:
    /// 1. `parent` is the same kind of entity as `child` (`IncompatibleObjectKind`)
    /// 2. `parent` is not `child`, one of its descendants or one of its
    ///    siblings (`IncompatibleRelationship`)
    /// 3. `parent`'s gender matches `role` (`WrongSex`)
    pub fn add_parent<'p>(
        &self,
        child: &mut Individual,
        parent: &'p Individual,
        role: ParentRole,
    ) -> Result<&'p Individual> {
        if parent.kind != child.kind {
            return Err(KinshipError::IncompatibleObjectKind {
                subject: child.kind.clone(),
                relative: parent.kind.clone(),
            });
        }

        if self.is_incompatible_parent(child, parent)? {
            return Err(KinshipError::incompatible(format!(
                "{} can't be {role} of {}",
                parent.pnr, child.pnr
            )));
        }

        if parent.gender != role.required_gender() {
            return Err(KinshipError::WrongSex {
                gender: parent.gender.to_string(),
                role: role.to_string(),
            });
        }

        child.set_parent_pnr(role, Some(parent.pnr.clone()));
        debug!("Linked {} as {role} of {}", parent.pnr, child.pnr);
        Ok(parent)
    }

    /// Clear the `role` parent of `child`, returning the PNR that was there
    pub fn remove_parent(&self, child: &mut Individual, role: ParentRole) -> Option<String> {
        let removed = child.set_parent_pnr(role, None);
        if let Some(pnr) = &removed {
            debug!("Unlinked {pnr} as {role} of {}", child.pnr);
        }
        removed
    }

    /// `add_parent`, then save `child`
    pub fn add_parent_and_save<'p>(
        &mut self,
        child: &mut Individual,
        parent: &'p Individual,
        role: ParentRole,
    ) -> Result<&'p Individual> {
        let parent = self.add_parent(child, parent, role)?;
        self.store.save(child).map_err(|e| {
            let e = KinshipError::from(e);
            log_rejection("Saving new parent link", &child.pnr, &e);
            e
        })?;
        Ok(parent)
    }

    /// `remove_parent`, then save `child`
    pub fn remove_parent_and_save(
        &mut self,
        child: &mut Individual,
        role: ParentRole,
    ) -> Result<Option<String>> {
        let removed = self.remove_parent(child, role);
        self.store.save(child)?;
        Ok(removed)
    }

    /// Make `relative` the `role` parent of `child`'s `lineage` parent
    ///
    /// The intermediate parent is loaded from the store, updated through
    /// `add_parent` and returned; `child` itself is not modified.
    pub fn add_grandparent(
        &self,
        child: &Individual,
        lineage: Lineage,
        role: ParentRole,
        relative: &Individual,
    ) -> Result<Individual> {
        let parent_role = lineage.parent_role();
        if child.parent_pnr(parent_role).is_none() {
            return Err(KinshipError::lineage_gap(format!(
                "{} doesn't have a {parent_role}",
                child.pnr
            )));
        }
        if relative.same_entity(child) {
            return Err(KinshipError::incompatible(format!(
                "{} can't be {lineage} grand{role} of itself",
                child.pnr
            )));
        }

        let mut parent = self.required_parent(child, parent_role)?;
        self.add_parent(&mut parent, relative, role)?;
        Ok(parent)
    }

    /// `add_grandparent`, then save the intermediate parent
    pub fn add_grandparent_and_save(
        &mut self,
        child: &Individual,
        lineage: Lineage,
        role: ParentRole,
        relative: &Individual,
    ) -> Result<Individual> {
        let parent = self.add_grandparent(child, lineage, role, relative)?;
        self.store.save(&parent)?;
        Ok(parent)
    }

    /// Give every record in `sibs` the father and mother of `subject`
    ///
    /// Not atomic: sibling records are updated in order and a failure on a
    /// later sibling leaves earlier ones linked. Nothing is saved. Use
    /// `TransactionalBatch::add_siblings` for the all-or-nothing variant.
    ///
    /// Returns the conjunction of every parent assignment. A failed
    /// assignment is returned as its error, so `Ok` always carries `true`.
    pub fn add_siblings(&self, subject: &Individual, sibs: &mut [Individual]) -> Result<bool> {
        if !subject.has_both_parents() {
            return Err(KinshipError::lineage_gap(format!(
                "Can't add siblings to {}: both parents must be known",
                subject.pnr
            )));
        }

        let traversal = self.traversal();
        let ancestors: FxHashSet<String> = traversal
            .ancestors(subject)?
            .into_iter()
            .map(|ancestor| ancestor.pnr)
            .collect();
        if let Some(ancestor) = sibs.iter().find(|sib| ancestors.contains(&sib.pnr)) {
            return Err(KinshipError::incompatible(format!(
                "{} is an ancestor of {} and can't be added as sibling",
                ancestor.pnr, subject.pnr
            )));
        }

        let father = self.required_parent(subject, ParentRole::Father)?;
        let mother = self.required_parent(subject, ParentRole::Mother)?;

        let mut linked = true;
        for sib in sibs.iter_mut() {
            for (parent, role) in [(&father, ParentRole::Father), (&mother, ParentRole::Mother)] {
                let assigned = self.add_parent(sib, parent, role);
                linked &= assigned.is_ok();
                assigned?;
            }
        }

        debug!("Added {} siblings to {}", sibs.len(), subject.pnr);
        Ok(linked)
    }

    /// Load the `role` parent of `child`, failing with `LineageGap` when it is unknown
    fn required_parent(&self, child: &Individual, role: ParentRole) -> Result<Individual> {
        self.traversal().parent(child, role)?.ok_or_else(|| {
            KinshipError::lineage_gap(format!("{}'s {role} is not in the store", child.pnr))
        })
    }

    /// Whether `candidate` is `child`, a descendant of `child` or a sibling of `child`
    fn is_incompatible_parent(&self, child: &Individual, candidate: &Individual) -> Result<bool> {
        if candidate.same_entity(child) {
            return Ok(true);
        }

        let traversal = self.traversal();
        if traversal
            .descendants(child)?
            .iter()
            .any(|descendant| descendant.same_entity(candidate))
        {
            return Ok(true);
        }

        Ok(traversal
            .siblings(child)?
            .is_some_and(|siblings| siblings.iter().any(|sibling| sibling.same_entity(candidate))))
    }
}
