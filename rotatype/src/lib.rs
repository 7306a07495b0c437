//! Consensus genotyping of rotavirus gene segments.
//!
//! This crate re-exports the workspace crates behind feature flags:
//!
//! - `core`: gene segments, genotype calls, alignment records, configuration
//! - `genotype`: classification, tier aggregation, consensus and selection
//! - `io`: BLAST/FASTA readers and report writers

#[cfg(feature = "core")]
#[doc(inline)]
pub use rotatype_core as core;

#[cfg(feature = "genotype")]
#[doc(inline)]
pub use rotatype_genotype as genotype;

#[cfg(feature = "io")]
#[doc(inline)]
pub use rotatype_io as io;
