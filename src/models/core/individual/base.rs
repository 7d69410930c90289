//! Core Individual entity definition
//!
//! This module contains the base Individual struct definition and core methods.

use crate::config::DEFAULT_KIND;
use crate::models::core::traits::EntityModel;
use crate::models::core::types::{Gender, ParentRole};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A record in the pedigree
///
/// Parents are held as weak references (PNRs); the store resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    /// Personal identification number (PNR)
    pub pnr: String,
    /// Gender of the individual
    pub gender: Gender,
    /// Entity kind; only records of the same kind can be linked
    pub kind: String,
    /// Birth date
    pub birth_date: Option<NaiveDate>,
    /// Father's PNR, if known
    pub father_pnr: Option<String>,
    /// Mother's PNR, if known
    pub mother_pnr: Option<String>,
}

impl Individual {
    /// Create a new Individual of the default kind with no parents
    #[must_use]
    pub fn new(pnr: impl Into<String>, gender: Gender) -> Self {
        Self {
            pnr: pnr.into(),
            gender,
            kind: DEFAULT_KIND.to_string(),
            birth_date: None,
            father_pnr: None,
            mother_pnr: None,
        }
    }

    /// Set the entity kind
    #[must_use]
    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Set the birth date
    #[must_use]
    pub const fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    /// Set the father's PNR without any validation
    #[must_use]
    pub fn with_father(mut self, pnr: impl Into<String>) -> Self {
        self.father_pnr = Some(pnr.into());
        self
    }

    /// Set the mother's PNR without any validation
    #[must_use]
    pub fn with_mother(mut self, pnr: impl Into<String>) -> Self {
        self.mother_pnr = Some(pnr.into());
        self
    }

    #[must_use]
    pub fn is_male(&self) -> bool {
        self.gender == Gender::Male
    }

    #[must_use]
    pub fn is_female(&self) -> bool {
        self.gender == Gender::Female
    }

    /// PNR held in the given parent slot
    #[must_use]
    pub fn parent_pnr(&self, role: ParentRole) -> Option<&str> {
        match role {
            ParentRole::Father => self.father_pnr.as_deref(),
            ParentRole::Mother => self.mother_pnr.as_deref(),
        }
    }

    /// Overwrite a parent slot, returning the previous value
    pub fn set_parent_pnr(&mut self, role: ParentRole, pnr: Option<String>) -> Option<String> {
        let slot = match role {
            ParentRole::Father => &mut self.father_pnr,
            ParentRole::Mother => &mut self.mother_pnr,
        };
        std::mem::replace(slot, pnr)
    }

    /// Whether both parent slots are filled
    #[must_use]
    pub const fn has_both_parents(&self) -> bool {
        self.father_pnr.is_some() && self.mother_pnr.is_some()
    }
}

impl EntityModel for Individual {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.pnr
    }
}
