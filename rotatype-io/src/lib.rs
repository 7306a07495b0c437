//! # Input/Output for rotatype
//!
//! Readers for BLAST tabular output and assembled contig FASTA files, and
//! writers for the genotyping reports: the per-alignment evaluation table, the
//! per-genotype tier counts, the sample genotype call and the representative
//! sequence FASTA files.
//!
pub mod blast;
pub mod consts;
pub mod error;
pub mod fasta;
pub mod tables;

// re-expose core functions
pub use blast::*;
pub use consts::*;
pub use error::*;
pub use fasta::*;
pub use tables::*;
