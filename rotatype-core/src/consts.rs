/// Coverage at or above this value marks a contig as high confidence.
pub const HIGH_COVERAGE_CUTOFF: f64 = 10.0;

/// Extra percent identity required of alignments that do not span the whole subject.
pub const PARTIAL_IDENTITY_MARGIN: f64 = 2.0;

/// Label written for alignments that were not accepted.
pub const NOT_ACCEPTED: &str = "not accepted";

/// Separator between the identity value and the genotype of a near-miss label.
pub const NEAR_MISS_SEPARATOR: &str = "0000";

/// Text marking a vaccine-strain reference in a subject id.
pub const DEFAULT_VACCINE_MARKER: &str = "vaccine";

/// Residues per line in written FASTA files.
pub const FASTA_LINE_WIDTH: usize = 70;

pub const DEFAULT_MIN_CONTIG_LENGTH: usize = 500;
pub const DEFAULT_MIN_CONTIG_COVERAGE: f64 = 3.0;
