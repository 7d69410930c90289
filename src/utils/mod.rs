//! Shared utilities
//!
//! Logging helpers and progress reporting used by the loaders.

pub mod logging;
