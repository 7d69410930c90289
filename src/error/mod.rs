//! Error handling for kinship operations.

pub mod util;

use std::io;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

use crate::store::StoreError;

/// Errors raised by the relationship engine and the population loader
#[derive(Debug, Error)]
pub enum KinshipError {
    /// The proposed relative is not the same kind of entity as the subject
    #[error("Linked records must be of the same kind: got {relative} for {subject}")]
    IncompatibleObjectKind {
        /// Kind of the subject record
        subject: String,
        /// Kind of the proposed relative
        relative: String,
    },

    /// The proposed link would break the pedigree (cycle, sibling as parent, self link)
    #[error("Incompatible relationship: {0}")]
    IncompatibleRelationship(String),

    /// The proposed parent's gender does not match the role
    #[error("Can't add a {gender} {role}")]
    WrongSex {
        /// Gender of the proposed parent
        gender: String,
        /// Role being assigned
        role: String,
    },

    /// An intermediate parent link required by the operation is absent
    #[error("Lineage gap: {0}")]
    LineageGap(String),

    /// Failure reported by the host store, passed through untouched
    #[error(transparent)]
    Persistence(#[from] StoreError),

    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error decoding Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),

    /// Error processing Arrow arrays
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// Population file does not have the expected layout
    #[error("Schema error: {0}")]
    Schema(String),
}

impl KinshipError {
    /// Build an `IncompatibleRelationship` error from a message
    pub fn incompatible(message: impl Into<String>) -> Self {
        Self::IncompatibleRelationship(message.into())
    }

    /// Build a `LineageGap` error from a message
    pub fn lineage_gap(message: impl Into<String>) -> Self {
        Self::LineageGap(message.into())
    }
}

/// Result type for kinship operations
pub type Result<T> = std::result::Result<T, KinshipError>;
