//! Individual entity model
//!
//! This module defines the Individual entity that represents a record in the pedigree.

pub use self::base::Individual;

pub mod base; // Struct definition, parent slots and gender predicates
pub mod conversion; // Arrow record batch conversion
