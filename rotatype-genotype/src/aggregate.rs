//! Coverage-tiered evidence counts per genotype.

use std::collections::BTreeMap;

use serde::Serialize;

use rotatype_core::{AlignmentRecord, Gene, GenotypeCall};

use crate::classify::{Classification, ClassifiedRecord};

///
/// Evidence counts for one genotype, split by full/partial alignment and
/// high/low contig coverage.
///
/// Only the four tier buckets feed the consensus decision. `full_count`,
/// `partial_count` and `total_count` are running sums kept for the report.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TierCounts {
    pub high_cov_full: u32,
    pub low_cov_full: u32,
    pub high_cov_partial: u32,
    pub low_cov_partial: u32,
    pub full_count: u32,
    pub partial_count: u32,
    pub total_count: u32,
}

impl TierCounts {
    ///
    /// Count one accepted alignment into exactly one tier bucket.
    ///
    pub fn add(&mut self, is_full: bool, high_coverage: bool) {
        self.total_count += 1;
        match (is_full, high_coverage) {
            (true, true) => {
                self.full_count += 1;
                self.high_cov_full += 1;
            }
            (true, false) => {
                self.full_count += 1;
                self.low_cov_full += 1;
            }
            (false, true) => {
                self.partial_count += 1;
                self.high_cov_partial += 1;
            }
            (false, false) => {
                self.partial_count += 1;
                self.low_cov_partial += 1;
            }
        }
    }

    pub fn add_record(&mut self, record: &AlignmentRecord) {
        self.add(record.is_full(), record.is_high_coverage());
    }
}

///
/// Tier counts for every accepted genotype, ordered by gene order and then
/// genotype number.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregation {
    counts: BTreeMap<GenotypeCall, TierCounts>,
}

impl Aggregation {
    pub fn get(&self, call: &GenotypeCall) -> Option<&TierCounts> {
        self.counts.get(call)
    }

    ///
    /// All genotypes observed for one gene, in genotype-number order.
    ///
    pub fn for_gene(&self, gene: Gene) -> impl Iterator<Item = (&GenotypeCall, &TierCounts)> {
        self.counts.iter().filter(move |(call, _)| call.gene == gene)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GenotypeCall, &TierCounts)> {
        self.counts.iter()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

///
/// Aggregate accepted alignments into per-genotype tier counts.
///
/// Rejected and near-miss records are skipped entirely. The result does not
/// depend on input order.
///
pub fn aggregate(classified: &[ClassifiedRecord<'_>]) -> Aggregation {
    let mut counts: BTreeMap<GenotypeCall, TierCounts> = BTreeMap::new();

    for c in classified {
        if let Classification::Accepted { call, .. } = &c.classification {
            counts.entry(call.clone()).or_default().add_record(c.record);
        }
    }

    Aggregation { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rotatype_core::{ClassifierPolicy, Strand, Thresholds};
    use rstest::*;

    use crate::classify::Classifier;

    fn hit(query: &str, subject: &str, pident: f64, length: u32, slen: u32) -> AlignmentRecord {
        AlignmentRecord::new(query, subject, pident, length, slen, 1, length, Strand::Plus)
    }

    #[fixture]
    fn records() -> Vec<AlignmentRecord> {
        vec![
            // G1: high/full, low/full, high/partial, low/partial
            hit("n1_cov_25.0_", "G1|a", 97.0, 981, 981),
            hit("n2_cov_3.1_", "G1|a", 97.0, 981, 981),
            hit("n3_cov_10_", "G1|a", 97.0, 700, 981),
            hit("n4", "G1|a", 97.0, 700, 981),
            // P8 high/full twice
            hit("n5_cov_40_", "P8|b", 95.0, 2300, 2300),
            hit("n6_cov_11_", "P8|b", 95.0, 2400, 2300),
            // rejected: too short and too low identity
            hit("n7_cov_40_", "G3|c", 97.0, 100, 981),
            hit("n8_cov_40_", "G3|c", 50.0, 981, 981),
        ]
    }

    #[rstest]
    fn test_aggregate_tiers(records: Vec<AlignmentRecord>) {
        let classified = Classifier::default().classify_all(&records);
        let aggregation = aggregate(&classified);

        assert_eq!(aggregation.len(), 2);

        let g1 = aggregation.get(&GenotypeCall::new(Gene::G, "1")).unwrap();
        assert_eq!(
            *g1,
            TierCounts {
                high_cov_full: 1,
                low_cov_full: 1,
                high_cov_partial: 1,
                low_cov_partial: 1,
                full_count: 2,
                partial_count: 2,
                total_count: 4,
            }
        );

        let p8 = aggregation.get(&GenotypeCall::new(Gene::P, "8")).unwrap();
        assert_eq!(p8.high_cov_full, 2);
        assert_eq!(p8.total_count, 2);

        // rejected genotypes leave no trace, not even a zero row
        assert!(aggregation.get(&GenotypeCall::new(Gene::G, "3")).is_none());
    }

    #[rstest]
    fn test_near_miss_is_not_aggregated(records: Vec<AlignmentRecord>) {
        let classifier = Classifier::new(Thresholds::default(), ClassifierPolicy::AnnotatedNearMiss);
        let classified = classifier.classify_all(&records);
        let aggregation = aggregate(&classified);
        assert_eq!(aggregation.len(), 2);
    }

    #[rstest]
    fn test_aggregate_is_order_independent(records: Vec<AlignmentRecord>) {
        let classifier = Classifier::default();
        let forward = aggregate(&classifier.classify_all(&records));

        let mut reversed = records.clone();
        reversed.reverse();
        assert_eq!(aggregate(&classifier.classify_all(&reversed)), forward);

        let mut rotated = records.clone();
        rotated.rotate_left(3);
        assert_eq!(aggregate(&classifier.classify_all(&rotated)), forward);
    }

    #[rstest]
    fn test_iteration_follows_gene_order(records: Vec<AlignmentRecord>) {
        let mut records = records;
        records.push(hit("n9_cov_12_", "A2|d", 95.0, 1000, 1000));
        records.push(hit("n10_cov_12_", "G12|e", 95.0, 981, 981));
        let aggregation = aggregate(&Classifier::default().classify_all(&records));

        let labels: Vec<String> = aggregation.iter().map(|(c, _)| c.label()).collect();
        assert_eq!(labels, vec!["G1", "G12", "P8", "A2"]);

        let g: Vec<String> = aggregation.for_gene(Gene::G).map(|(c, _)| c.label()).collect();
        assert_eq!(g, vec!["G1", "G12"]);
    }
}
