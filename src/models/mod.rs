//! Domain models for the pedigree
//!
//! This module contains the entity models and the derived views built from
//! the link graph.

pub mod core;
pub mod derived;

pub use self::core::{ArrowSchema, EntityModel, Gender, Individual, Lineage, ParentRole};
pub use derived::{Grandparents, KinshipSummary, Parents};
