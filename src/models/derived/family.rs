//! Family summary of one individual
//!
//! A flattened, serializable view of everyone related to an individual,
//! identified by PNR.

use crate::models::core::types::Gender;
use serde::{Deserialize, Serialize};

/// Relatives of one individual, by PNR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KinshipSummary {
    /// Subject of the summary
    pub pnr: String,
    /// Gender of the subject
    pub gender: Gender,
    /// Entity kind of the subject
    pub kind: String,
    pub father: Option<String>,
    pub mother: Option<String>,
    pub paternal_grandfather: Option<String>,
    pub paternal_grandmother: Option<String>,
    pub maternal_grandfather: Option<String>,
    pub maternal_grandmother: Option<String>,
    /// Ancestors in discovery order, nearest generation first
    pub ancestors: Vec<String>,
    /// Descendants in discovery order, nearest generation first
    pub descendants: Vec<String>,
    /// Full siblings; `None` unless both parents are known
    pub siblings: Option<Vec<String>>,
    /// Half siblings; `None` unless both parents are known
    pub half_siblings: Option<Vec<String>>,
}

impl KinshipSummary {
    /// Total number of distinct relatives listed
    #[must_use]
    pub fn relative_count(&self) -> usize {
        let mut relatives: Vec<&String> = self
            .ancestors
            .iter()
            .chain(&self.descendants)
            .chain(self.siblings.iter().flatten())
            .chain(self.half_siblings.iter().flatten())
            .collect();
        relatives.sort_unstable();
        relatives.dedup();
        relatives.len()
    }
}
