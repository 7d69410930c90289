//! A Rust library for recording and querying family relationships in a
//! population register.
//!
//! Individuals carry a father and a mother reference. The relationship
//! engine validates link changes (no cycles, no siblings as parents, gender
//! matching the role) and answers lineage queries such as ancestors,
//! descendants and (half-)siblings over any `PedigreeStore`.

pub mod async_io;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod relations;
pub mod store;
pub mod utils;

// Core types
pub use config::PopulationConfig;
pub use error::{KinshipError, Result};
pub use models::{Gender, Grandparents, Individual, KinshipSummary, Lineage, ParentRole, Parents};
pub use store::{MemoryStore, PedigreeStore, StoreError};

// Relationship engine
pub use relations::{LineageTraversal, RelationshipLinker, TransactionalBatch};

// Loading
pub use loader::{
    DanglingReference, dangling_references, load_population, load_population_dir,
    read_population, write_population,
};

// Async functionality
pub use async_io::{load_population_async, load_population_dir_async, read_population_async};
