pub mod alignment;
pub mod contig;
pub mod gene;
pub mod genotype;

// re-export for cleaner imports
pub use self::alignment::{AlignmentRecord, Strand, parse_coverage};
pub use self::contig::{Contig, ContigFilter, ContigStore};
pub use self::gene::{GENE_ORDER, Gene, GeneTable};
pub use self::genotype::GenotypeCall;
