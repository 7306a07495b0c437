//! Representative alignment selection.
//!
//! For every accepted genotype one alignment is chosen to supply its
//! representative sequence. Full-length alignments are preferred; among them a
//! high-coverage contig always beats a low-coverage one, then the higher
//! coverage wins. Without any full-length alignment, the longest partial
//! alignment is used. Ties keep the first record seen.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::Serialize;

use rotatype_core::{AlignmentRecord, GenotypeCall};

use crate::classify::ClassifiedRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CandidateKind {
    Full,
    Partial,
}

impl Display for CandidateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CandidateKind::Full => write!(f, "full"),
            CandidateKind::Partial => write!(f, "partial"),
        }
    }
}

///
/// The alignment chosen to represent a genotype.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedCandidate<'a> {
    pub record: &'a AlignmentRecord,
    pub kind: CandidateKind,
}

///
/// Whether `challenger` should replace `incumbent` in the full-length pool.
///
fn full_candidate_beats(challenger: &AlignmentRecord, incumbent: &AlignmentRecord) -> bool {
    match (challenger.is_high_coverage(), incumbent.is_high_coverage()) {
        (true, false) => true,
        (false, true) => false,
        _ => challenger.coverage > incumbent.coverage,
    }
}

///
/// Whether `challenger` should replace `incumbent` in the partial pool.
///
fn partial_candidate_beats(challenger: &AlignmentRecord, incumbent: &AlignmentRecord) -> bool {
    challenger.align_length > incumbent.align_length
}

#[derive(Default)]
struct Pools<'a> {
    full: Option<&'a AlignmentRecord>,
    partial: Option<&'a AlignmentRecord>,
}

impl<'a> Pools<'a> {
    fn offer(&mut self, record: &'a AlignmentRecord) {
        if record.is_full() {
            Self::offer_to(&mut self.full, record, full_candidate_beats);
        } else {
            Self::offer_to(&mut self.partial, record, partial_candidate_beats);
        }
    }

    fn offer_to(
        slot: &mut Option<&'a AlignmentRecord>,
        record: &'a AlignmentRecord,
        beats: fn(&AlignmentRecord, &AlignmentRecord) -> bool,
    ) {
        match *slot {
            Some(incumbent) if !beats(record, incumbent) => {}
            _ => *slot = Some(record),
        }
    }

    fn winner(&self) -> Option<SelectedCandidate<'a>> {
        match (self.full, self.partial) {
            (Some(record), _) => Some(SelectedCandidate {
                record,
                kind: CandidateKind::Full,
            }),
            (None, Some(record)) => Some(SelectedCandidate {
                record,
                kind: CandidateKind::Partial,
            }),
            (None, None) => None,
        }
    }
}

///
/// Pick one representative alignment for every accepted genotype.
///
/// The result is ordered by gene order and genotype number. Input order only
/// matters for exact ties, where the earlier record is kept.
///
pub fn select_candidates<'a>(
    classified: &[ClassifiedRecord<'a>],
) -> BTreeMap<GenotypeCall, SelectedCandidate<'a>> {
    let mut pools: BTreeMap<GenotypeCall, Pools<'a>> = BTreeMap::new();

    for c in classified {
        if let Some(call) = c.accepted_call() {
            pools.entry(call.clone()).or_default().offer(c.record);
        }
    }

    pools
        .into_iter()
        .filter_map(|(call, pool)| pool.winner().map(|winner| (call, winner)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rotatype_core::{Gene, Strand};
    use rstest::*;

    use crate::classify::Classifier;

    fn full(query: &str, subject: &str) -> AlignmentRecord {
        AlignmentRecord::new(query, subject, 98.0, 1000, 1000, 1, 1000, Strand::Plus)
    }

    fn partial(query: &str, subject: &str, length: u32) -> AlignmentRecord {
        AlignmentRecord::new(query, subject, 98.0, length, 1000, 1, length, Strand::Plus)
    }

    fn selected_query(records: &[AlignmentRecord], gene: Gene, number: &str) -> (String, CandidateKind) {
        let classified = Classifier::default().classify_all(records);
        let selected = select_candidates(&classified);
        let candidate = selected.get(&GenotypeCall::new(gene, number)).unwrap();
        (candidate.record.query_id.clone(), candidate.kind)
    }

    #[rstest]
    #[case("a_cov_12_", "b_cov_15_", "b_cov_15_")]
    #[case("a_cov_3_", "b_cov_15_", "b_cov_15_")]
    #[case("a_cov_15_", "b_cov_3_", "a_cov_15_")]
    #[case("a_cov_9_", "b_cov_11_", "b_cov_11_")]
    #[case("a_cov_11_", "b_cov_9.9_", "a_cov_11_")]
    #[case("a_cov_1_", "b_cov_2_", "b_cov_2_")]
    #[case("a_cov_2_", "b_cov_1_", "a_cov_2_")]
    #[case("a_cov_7_", "b_cov_7_", "a_cov_7_")]
    #[case("a_cov_20_", "b_cov_20_", "a_cov_20_")]
    fn test_full_pool_priority(#[case] first: &str, #[case] second: &str, #[case] expected: &str) {
        let records = vec![full(first, "G1|x"), full(second, "G1|x")];
        let (query, kind) = selected_query(&records, Gene::G, "1");
        assert_eq!(query, expected);
        assert_eq!(kind, CandidateKind::Full);
    }

    #[rstest]
    fn test_high_coverage_beats_larger_low_coverage_run() {
        // many low-coverage contigs cannot displace a single high-coverage one
        let records = vec![
            full("a_cov_9.9_", "G1|x"),
            full("b_cov_10_", "G1|x"),
            full("c_cov_9.95_", "G1|x"),
        ];
        let (query, _) = selected_query(&records, Gene::G, "1");
        assert_eq!(query, "b_cov_10_");
    }

    #[rstest]
    fn test_partial_pool_prefers_longest() {
        let records = vec![
            partial("a_cov_50_", "G1|x", 600),
            partial("b_cov_1_", "G1|x", 900),
            partial("c_cov_50_", "G1|x", 900),
        ];
        let (query, kind) = selected_query(&records, Gene::G, "1");
        assert_eq!(query, "b_cov_1_");
        assert_eq!(kind, CandidateKind::Partial);
    }

    #[rstest]
    fn test_full_preferred_over_partial() {
        let records = vec![
            partial("a_cov_50_", "G1|x", 990),
            full("b_cov_1_", "G1|x"),
        ];
        let (query, kind) = selected_query(&records, Gene::G, "1");
        assert_eq!(query, "b_cov_1_");
        assert_eq!(kind, CandidateKind::Full);
    }

    #[rstest]
    fn test_one_candidate_per_accepted_genotype() {
        let records = vec![
            full("a_cov_20_", "G1|x"),
            full("b_cov_20_", "P8|x"),
            full("c_cov_20_", "G2|x"),
            // rejected by identity
            AlignmentRecord::new("d_cov_20_", "G3|x", 10.0, 1000, 1000, 1, 1000, Strand::Plus),
        ];
        let classified = Classifier::default().classify_all(&records);
        let selected = select_candidates(&classified);
        let labels: Vec<String> = selected.keys().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["G1", "G2", "P8"]);
    }
}
