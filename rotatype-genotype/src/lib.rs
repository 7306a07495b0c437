//! Consensus genotyping of rotavirus gene segments from alignment hits.
//!
//! The pipeline runs in four stages:
//!
//! - classify every alignment against per-gene identity and length thresholds
//! - count accepted alignments per genotype into coverage/length tiers
//! - resolve one genotype per gene segment through a tie-break cascade
//! - pick a representative alignment (and sequence) for each genotype
//!
//! # Example
//!
//! ```no_run
//! use rotatype_core::{AlignmentRecord, GenotypingConfig, Strand};
//! use rotatype_genotype::genotype_sample;
//!
//! let records = vec![AlignmentRecord::new(
//!     "NODE_1_length_1062_cov_41.2_",
//!     "G1|KJ752058|Wa",
//!     98.6,
//!     981,
//!     981,
//!     40,
//!     1020,
//!     Strand::Plus,
//! )];
//!
//! let sample = genotype_sample(&records, &GenotypingConfig::default()).unwrap();
//! println!("{}", sample.result.genotype_string());
//! ```

pub mod aggregate;
pub mod classify;
pub mod consensus;
pub mod errors;
pub mod pipeline;
pub mod select;
pub mod sequence;
pub mod vaccine;

// re-exports
pub use aggregate::{Aggregation, TierCounts, aggregate};
pub use classify::{Classification, ClassifiedRecord, Classifier, classify};
pub use consensus::{GeneConsensus, GeneResolution, GenotypeResult, GenotypeRow, resolve};
pub use errors::GenotypeError;
pub use pipeline::{SampleGenotyping, genotype_sample};
pub use select::{CandidateKind, SelectedCandidate, select_candidates};
pub use sequence::{RepresentativeSequence, SelectionMode, materialize_all, reverse_complement};
pub use vaccine::VaccineIdentity;
