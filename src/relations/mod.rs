//! Relationship engine
//!
//! `LineageTraversal` answers read-only questions about the pedigree,
//! `RelationshipLinker` validates and applies link changes, and
//! `TransactionalBatch` wraps multi-record changes in a store transaction.

#[macro_use]
mod macros;

pub mod batch;
pub mod linker;
pub mod traversal;

pub use batch::TransactionalBatch;
pub use linker::RelationshipLinker;
pub use traversal::LineageTraversal;
