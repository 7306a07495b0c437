//! # Core models for rotatype
//!
//! Shared types used by every other crate in the workspace: the fixed order of
//! the eleven rotavirus gene segments, genotype calls, BLAST-style alignment
//! records, assembled contigs and the identity/length threshold tables that
//! drive classification.
//!
pub mod config;
pub mod consts;
pub mod errors;
pub mod models;
pub mod utils;

// re-exports
pub use config::*;
pub use errors::*;
pub use models::*;
