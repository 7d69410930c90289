//! All-or-nothing sibling assignment
//!
//! Runs the non-atomic `RelationshipLinker::add_siblings` and the saves that
//! follow it inside one store transaction. Isolation from other writers is
//! whatever the store's transaction provides; no locking happens here.

use log::debug;

use crate::error::{KinshipError, Result};
use crate::models::Individual;
use crate::relations::linker::RelationshipLinker;
use crate::store::PedigreeStore;
use crate::utils::logging::log_rejection;

/// Multi-record link mutations committed as a single unit
#[derive(Debug)]
pub struct TransactionalBatch<'s, S> {
    store: &'s mut S,
}

impl<'s, S: PedigreeStore> TransactionalBatch<'s, S> {
    pub fn new(store: &'s mut S) -> Self {
        Self { store }
    }

    /// Link every record in `sibs` to `subject`'s parents, then save every
    /// sibling followed by `subject`
    ///
    /// On any failure the store is rolled back and `sibs` is restored to the
    /// values it had on entry, so neither the store nor the caller's records
    /// keep a partial result.
    pub fn add_siblings(&mut self, subject: &Individual, sibs: &mut [Individual]) -> Result<bool> {
        let original = sibs.to_vec();

        let result = self.store.transaction(|tx| {
            let linked = RelationshipLinker::new(tx).add_siblings(subject, sibs)?;
            for sib in sibs.iter() {
                tx.save(sib)?;
            }
            tx.save(subject)?;
            Ok::<bool, KinshipError>(linked)
        });

        match &result {
            Ok(_) => debug!("Committed {} siblings of {}", sibs.len(), subject.pnr),
            Err(e) => {
                log_rejection("Sibling batch", &subject.pnr, e);
                sibs.clone_from_slice(&original);
            }
        }
        result
    }
}
