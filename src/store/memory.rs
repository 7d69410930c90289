//! In-memory pedigree store
//!
//! Records are indexed by PNR with reverse indexes from each parent to their
//! children. Transactions snapshot the whole store and restore it when the body fails
//! or panics.

use std::collections::BTreeSet;
use std::panic::{self, AssertUnwindSafe};

use log::debug;
use rustc_hash::FxHashMap;

use crate::models::{EntityModel, Individual, ParentRole};
use crate::store::{PedigreeStore, StoreError, StoreResult};

type ChildIndex = FxHashMap<String, BTreeSet<String>>;

/// Store holding the whole population in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    /// Records indexed by PNR
    items: FxHashMap<String, Individual>,
    /// Father PNR to children PNRs
    by_father: ChildIndex,
    /// Mother PNR to children PNRs
    by_mother: ChildIndex,
    /// Nesting depth of open transactions
    depth: usize,
}

impl MemoryStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already-loaded records without constraint checks
    #[must_use]
    pub fn from_individuals(individuals: impl IntoIterator<Item = Individual>) -> Self {
        let mut store = Self::new();
        for individual in individuals {
            store.insert(individual);
        }
        store
    }

    /// Insert or replace a record without constraint checks
    ///
    /// Used for bulk loading, where parents may arrive after their children.
    pub fn insert(&mut self, individual: Individual) {
        self.unindex(&individual.pnr);
        self.index(&individual);
        self.items.insert(individual.id().clone(), individual);
    }

    /// Get a record by PNR
    #[must_use]
    pub fn get(&self, pnr: &str) -> Option<&Individual> {
        self.items.get(pnr)
    }

    /// Whether a record with this PNR exists
    #[must_use]
    pub fn contains(&self, pnr: &str) -> bool {
        self.items.contains_key(pnr)
    }

    /// All records, ordered by PNR
    #[must_use]
    pub fn all(&self) -> Vec<&Individual> {
        let mut all: Vec<&Individual> = self.items.values().collect();
        all.sort_by(|a, b| a.pnr.cmp(&b.pnr));
        all
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether a transaction is currently open
    #[must_use]
    pub const fn in_transaction(&self) -> bool {
        self.depth > 0
    }

    fn index(&mut self, individual: &Individual) {
        for role in ParentRole::ALL {
            if let Some(parent) = individual.parent_pnr(role) {
                self.child_index_mut(role)
                    .entry(parent.to_string())
                    .or_default()
                    .insert(individual.pnr.clone());
            }
        }
    }

    fn unindex(&mut self, pnr: &str) {
        let Some(existing) = self.items.get(pnr).cloned() else {
            return;
        };
        for role in ParentRole::ALL {
            if let Some(parent) = existing.parent_pnr(role) {
                let index = self.child_index_mut(role);
                if let Some(children) = index.get_mut(parent) {
                    children.remove(pnr);
                    if children.is_empty() {
                        index.remove(parent);
                    }
                }
            }
        }
    }

    fn child_index_mut(&mut self, role: ParentRole) -> &mut ChildIndex {
        match role {
            ParentRole::Father => &mut self.by_father,
            ParentRole::Mother => &mut self.by_mother,
        }
    }

    fn children_of(&self, role: ParentRole, pnr: &str) -> Vec<Individual> {
        let index = match role {
            ParentRole::Father => &self.by_father,
            ParentRole::Mother => &self.by_mother,
        };
        index
            .get(pnr)
            .map(|children| {
                children
                    .iter()
                    .filter_map(|child| self.items.get(child))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    fn check_constraints(&self, individual: &Individual) -> StoreResult<()> {
        if individual.pnr.trim().is_empty() {
            return Err(StoreError::ConstraintViolation(
                "PNR must not be empty".to_string(),
            ));
        }
        for role in ParentRole::ALL {
            if let Some(parent) = individual.parent_pnr(role) {
                if !self.items.contains_key(parent) {
                    return Err(StoreError::ConstraintViolation(format!(
                        "{} references unknown {role} {parent}",
                        individual.pnr
                    )));
                }
            }
        }
        Ok(())
    }
}

impl PedigreeStore for MemoryStore {
    fn find(&self, pnr: &str) -> StoreResult<Option<Individual>> {
        Ok(self.items.get(pnr).cloned())
    }

    fn find_by_father_id(&self, pnr: &str) -> StoreResult<Vec<Individual>> {
        Ok(self.children_of(ParentRole::Father, pnr))
    }

    fn find_by_mother_id(&self, pnr: &str) -> StoreResult<Vec<Individual>> {
        Ok(self.children_of(ParentRole::Mother, pnr))
    }

    fn save(&mut self, individual: &Individual) -> StoreResult<()> {
        self.check_constraints(individual)?;
        debug!("Saving {}", individual.pnr);
        self.insert(individual.clone());
        Ok(())
    }

    fn transaction<T, E, F>(&mut self, body: F) -> std::result::Result<T, E>
    where
        Self: Sized,
        E: From<StoreError>,
        F: FnOnce(&mut Self) -> std::result::Result<T, E>,
    {
        // Nested scopes join the outermost one
        if self.in_transaction() {
            return body(self);
        }

        let items = self.items.clone();
        let by_father = self.by_father.clone();
        let by_mother = self.by_mother.clone();

        self.depth += 1;
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| body(&mut *self)));
        self.depth -= 1;

        let rollback = |store: &mut Self| {
            debug!("Rolling back transaction");
            store.items = items;
            store.by_father = by_father;
            store.by_mother = by_mother;
        };
        match outcome {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => {
                rollback(self);
                Err(e)
            }
            Err(payload) => {
                rollback(self);
                panic::resume_unwind(payload)
            }
        }
    }
}
