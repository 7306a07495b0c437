//! Turning selected alignments into representative sequences.

use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use log::{info, warn};

use rotatype_core::{Contig, ContigStore, GenotypeCall, Strand};

use crate::select::{CandidateKind, SelectedCandidate};

///
/// Complement of a single nucleotide. `N`/`n` map to themselves and any other
/// symbol passes through unchanged.
///
pub fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        b'a' => b't',
        b't' => b'a',
        b'g' => b'c',
        b'c' => b'g',
        other => other,
    }
}

pub fn reverse_complement(seq: &[u8]) -> Vec<u8> {
    seq.iter().rev().map(|b| complement(*b)).collect()
}

///
/// Slice `seq` with 1-based inclusive coordinates, clamped to the sequence.
/// An inverted or out-of-range interval yields an empty slice.
///
pub fn extract_range(seq: &[u8], start: u32, end: u32) -> &[u8] {
    let from = (start.max(1) as usize - 1).min(seq.len());
    let to = (end as usize).min(seq.len());
    if from >= to { &[] } else { &seq[from..to] }
}

///
/// What part of the selected contig to emit.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// The whole contig.
    #[default]
    Contig,
    /// Only the aligned query range, oriented to the reference strand.
    Orf,
}

impl FromStr for SelectionMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "contig" | "contigs" => Ok(SelectionMode::Contig),
            "orf" | "orfs" => Ok(SelectionMode::Orf),
            _ => Err(format!("Unknown selection mode: {}", s)),
        }
    }
}

impl Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionMode::Contig => write!(f, "contig"),
            SelectionMode::Orf => write!(f, "orf"),
        }
    }
}

///
/// A sequence ready to be written as FASTA.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepresentativeSequence {
    pub genotype: GenotypeCall,
    pub kind: CandidateKind,
    /// Header text without the leading `>`
    pub header: String,
    pub sequence: Vec<u8>,
}

fn annotated_header(
    genotype: &GenotypeCall,
    kind: CandidateKind,
    mode: SelectionMode,
    contig: &Contig,
) -> String {
    let mut tag = genotype.label();
    if kind == CandidateKind::Partial {
        tag.push_str("_PARTIAL");
    }
    if mode == SelectionMode::Orf {
        tag.push_str("_ORF");
    }
    format!("{}_{}", tag, contig.header())
}

///
/// Build the representative sequence for one selected alignment.
///
pub fn materialize(
    genotype: &GenotypeCall,
    candidate: &SelectedCandidate<'_>,
    contig: &Contig,
    mode: SelectionMode,
) -> RepresentativeSequence {
    let sequence = match mode {
        SelectionMode::Contig => contig.sequence.clone(),
        SelectionMode::Orf => {
            let record = candidate.record;
            let orf = extract_range(&contig.sequence, record.query_start, record.query_end);
            match record.strand {
                Strand::Minus => reverse_complement(orf),
                Strand::Plus => orf.to_vec(),
            }
        }
    };

    RepresentativeSequence {
        genotype: genotype.clone(),
        kind: candidate.kind,
        header: annotated_header(genotype, candidate.kind, mode, contig),
        sequence,
    }
}

///
/// Build representative sequences for every selected genotype.
///
/// A genotype whose contig is absent from `contigs` is skipped with a warning;
/// the genotype call itself is unaffected.
///
pub fn materialize_all(
    selected: &BTreeMap<GenotypeCall, SelectedCandidate<'_>>,
    contigs: &ContigStore,
    mode: SelectionMode,
) -> Vec<RepresentativeSequence> {
    let mut out = Vec::with_capacity(selected.len());

    for (genotype, candidate) in selected {
        match contigs.get(&candidate.record.query_id) {
            Some(contig) => out.push(materialize(genotype, candidate, contig, mode)),
            None => warn!(
                "Contig {} selected for {} not found in the contig sequences; skipping",
                candidate.record.query_id, genotype
            ),
        }
    }

    info!(
        "Materialized {} of {} representative sequences ({} mode)",
        out.len(),
        selected.len(),
        mode
    );

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rotatype_core::{AlignmentRecord, Gene};
    use rstest::*;

    #[rstest]
    #[case(b"ACGT", b"ACGT")]
    #[case(b"AACCGN", b"NCGGTT")]
    #[case(b"acgtn", b"nacgt")]
    #[case(b"AC-RY", b"YR-GT")]
    #[case(b"", b"")]
    fn test_reverse_complement(#[case] input: &[u8], #[case] expected: &[u8]) {
        assert_eq!(reverse_complement(input), expected.to_vec());
    }

    #[rstest]
    fn test_reverse_complement_round_trip() {
        let contig = b"TTGACCATGGCTAGNNCTAGGATCCAAGT";
        let orf = extract_range(contig, 5, 20);
        let once = reverse_complement(orf);
        assert_ne!(once, orf.to_vec());
        assert_eq!(reverse_complement(&once), orf.to_vec());
    }

    #[rstest]
    #[case(1, 4, b"ACGT".as_slice())]
    #[case(3, 6, b"GTAC".as_slice())]
    #[case(7, 20, b"GT".as_slice())]
    #[case(0, 2, b"AC".as_slice())]
    #[case(5, 4, b"".as_slice())]
    #[case(30, 40, b"".as_slice())]
    fn test_extract_range(#[case] start: u32, #[case] end: u32, #[case] expected: &[u8]) {
        assert_eq!(extract_range(b"ACGTACGT", start, end), expected);
    }

    fn contig() -> Contig {
        Contig::new(
            "NODE_1_length_12_cov_20.0_",
            Some("work1".to_string()),
            b"AAACCCGGGTTT".to_vec(),
        )
    }

    fn record(strand: Strand, length: u32) -> AlignmentRecord {
        AlignmentRecord::new(
            "NODE_1_length_12_cov_20.0_",
            "G1|x",
            98.0,
            length,
            6,
            4,
            9,
            strand,
        )
    }

    #[rstest]
    fn test_materialize_contig_mode() {
        let rec = record(Strand::Minus, 6);
        let candidate = SelectedCandidate {
            record: &rec,
            kind: CandidateKind::Full,
        };
        let genotype = GenotypeCall::new(Gene::G, "1");
        let seq = materialize(&genotype, &candidate, &contig(), SelectionMode::Contig);

        assert_eq!(seq.header, "G1_NODE_1_length_12_cov_20.0_ work1");
        assert_eq!(seq.sequence, b"AAACCCGGGTTT".to_vec());
    }

    #[rstest]
    fn test_materialize_orf_minus_strand() {
        let rec = record(Strand::Minus, 6);
        let candidate = SelectedCandidate {
            record: &rec,
            kind: CandidateKind::Full,
        };
        let genotype = GenotypeCall::new(Gene::G, "1");
        let seq = materialize(&genotype, &candidate, &contig(), SelectionMode::Orf);

        assert_eq!(seq.header, "G1_ORF_NODE_1_length_12_cov_20.0_ work1");
        // positions 4..=9 are CCCGGG, which is its own reverse complement
        assert_eq!(seq.sequence, b"CCCGGG".to_vec());
    }

    #[rstest]
    fn test_materialize_orf_partial_plus_strand() {
        let mut rec = record(Strand::Plus, 3);
        rec.query_start = 2;
        rec.query_end = 5;
        let candidate = SelectedCandidate {
            record: &rec,
            kind: CandidateKind::Partial,
        };
        let genotype = GenotypeCall::new(Gene::G, "1");

        let orf = materialize(&genotype, &candidate, &contig(), SelectionMode::Orf);
        assert_eq!(orf.header, "G1_PARTIAL_ORF_NODE_1_length_12_cov_20.0_ work1");
        assert_eq!(orf.sequence, b"AACC".to_vec());

        let full = materialize(&genotype, &candidate, &contig(), SelectionMode::Contig);
        assert_eq!(full.header, "G1_PARTIAL_NODE_1_length_12_cov_20.0_ work1");
    }

    #[rstest]
    fn test_materialize_all_skips_missing_contigs() {
        let present = record(Strand::Plus, 6);
        let mut absent = record(Strand::Plus, 6);
        absent.query_id = "NODE_99".to_string();

        let mut selected = BTreeMap::new();
        selected.insert(
            GenotypeCall::new(Gene::G, "1"),
            SelectedCandidate {
                record: &present,
                kind: CandidateKind::Full,
            },
        );
        selected.insert(
            GenotypeCall::new(Gene::P, "8"),
            SelectedCandidate {
                record: &absent,
                kind: CandidateKind::Full,
            },
        );

        let store: ContigStore = vec![contig()].into_iter().collect();
        let out = materialize_all(&selected, &store, SelectionMode::Contig);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].genotype, GenotypeCall::new(Gene::G, "1"));
    }

    #[rstest]
    #[case("contig", SelectionMode::Contig)]
    #[case("ORF", SelectionMode::Orf)]
    fn test_selection_mode_from_str(#[case] input: &str, #[case] expected: SelectionMode) {
        assert_eq!(SelectionMode::from_str(input).unwrap(), expected);
    }
}
