//! Host store interface
//!
//! The relationship engine never owns individuals. It reads them, resolves
//! parents and offspring, and writes changes back through a `PedigreeStore`
//! supplied by the host application.

pub mod memory;

pub use memory::MemoryStore;

use std::io;

use thiserror::Error;

use crate::models::Individual;

/// Failure reported by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write would violate a store constraint
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// Underlying storage failed
    #[error("Storage IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Storage operations the relationship engine depends on
///
/// Reverse lookups return every individual whose father (or mother) PNR
/// equals the argument. Implementations should return them ordered by PNR so
/// traversal output is reproducible.
pub trait PedigreeStore {
    /// Look up an individual by PNR
    fn find(&self, pnr: &str) -> StoreResult<Option<Individual>>;

    /// All individuals whose father is `pnr`
    fn find_by_father_id(&self, pnr: &str) -> StoreResult<Vec<Individual>>;

    /// All individuals whose mother is `pnr`
    fn find_by_mother_id(&self, pnr: &str) -> StoreResult<Vec<Individual>>;

    /// Persist the current field values of `individual`
    fn save(&mut self, individual: &Individual) -> StoreResult<()>;

    /// Run `body` as one unit: every save inside it is kept if it returns
    /// `Ok`, and every save inside it is undone if it returns `Err`.
    fn transaction<T, E, F>(&mut self, body: F) -> std::result::Result<T, E>
    where
        Self: Sized,
        E: From<StoreError>,
        F: FnOnce(&mut Self) -> std::result::Result<T, E>;
}
