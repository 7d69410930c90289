//! Trait definitions for domain models
//!
//! This module defines the core traits that domain models implement,
//! providing identity and Arrow conversion interfaces.

use crate::error::Result;
use arrow::record_batch::RecordBatch;
use std::hash::Hash;

/// A trait that all domain models must implement.
///
/// The `EntityModel` trait provides identifier access. Two models are the
/// same entity exactly when their identifiers are equal.
pub trait EntityModel: Clone + Send + Sync + std::fmt::Debug {
    /// The type of identifier used for this model
    type Id: Clone + Eq + Hash + Send + Sync + std::fmt::Debug;

    /// Get the unique identifier for this model
    fn id(&self) -> &Self::Id;

    /// Whether `other` is the same entity as `self`
    fn same_entity(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// A trait for models that can be converted to and from Arrow `RecordBatch`.
pub trait ArrowSchema: Sized {
    /// Convert a `RecordBatch` to a vector of this model
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>>;

    /// Convert a vector of this model to a `RecordBatch`
    fn to_record_batch(models: &[Self]) -> Result<RecordBatch>;
}
