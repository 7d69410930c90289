//! Async population loading
//! Reads population registers with the Parquet async reader on tokio

pub mod file_ops;
pub mod loader;

pub use file_ops::*;
pub use loader::*;
