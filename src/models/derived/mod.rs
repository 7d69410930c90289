//! Derived views over the link graph
//!
//! Values computed on demand from the store; nothing here is persisted.

pub mod family;
pub mod parent;

pub use family::KinshipSummary;
pub use parent::{Grandparents, Parents};
