/// Columns of BLAST `-outfmt "6 qseqid sseqid pident length mismatch gapopen
/// qstart qend sstart send evalue bitscore sstrand slen"`.
pub const BLAST_COLUMNS: [&str; 14] = [
    "qseqid", "sseqid", "pident", "length", "mismatch", "gapopen", "qstart", "qend", "sstart",
    "send", "evalue", "bitscore", "sstrand", "slen",
];

pub const QSEQID_IDX: usize = 0;
pub const SSEQID_IDX: usize = 1;
pub const PIDENT_IDX: usize = 2;
pub const LENGTH_IDX: usize = 3;
pub const QSTART_IDX: usize = 6;
pub const QEND_IDX: usize = 7;
pub const SSTRAND_IDX: usize = 12;
pub const SLEN_IDX: usize = 13;

pub const EVALUATION_COLUMN: &str = "Evaluation";

pub const GENOTYPE_HEADER: [&str; 3] = ["Folder Name", "Genotype", "Extra Information"];

pub const SUMMARY_HEADER: [&str; 8] = [
    "Genotype",
    "Total Count",
    "Full Count",
    "Partial Count",
    "High COV Count Full",
    "Low COV Count Full",
    "High COV Count Partial",
    "Low COV Count Partial",
];

// default file names written by a full run
pub const EVALUATION_FILE: &str = "blast_evaluation.csv";
pub const SUMMARY_FILE: &str = "genotype_summary.csv";
pub const GENOTYPE_FILE: &str = "genotyping.csv";
pub const GENOTYPE_VACCINE_FILE: &str = "genotyping_vaccine.csv";
pub const SELECTED_CONTIGS_FILE: &str = "selected_contigs.fasta";
pub const SELECTED_ORFS_FILE: &str = "selected_ORFs.fasta";
