//! Spotlight Common Utilities
//!
//! Shared infrastructure for all Spotlight crates:
//! - Error types and result aliases
//! - Configuration defaults, merging, and loading
//! - Tracing/logging initialization

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
