//! Per-alignment acceptance.
//!
//! Each alignment hit is judged on its own against the gene-specific identity
//! and length thresholds. Hits that span the whole reference subject only need
//! the base identity; partial hits must be long enough and clear a stricter
//! identity bar.

use log::{info, warn};
use serde::Serialize;

use rotatype_core::consts::{NEAR_MISS_SEPARATOR, NOT_ACCEPTED, PARTIAL_IDENTITY_MARGIN};
use rotatype_core::{AlignmentRecord, ClassifierPolicy, GenotypeCall, Thresholds};

///
/// Outcome of classifying one alignment record.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Classification {
    Accepted {
        call: GenotypeCall,
        is_full: bool,
    },
    /// Length criterion met but identity below threshold. Only produced under
    /// [`ClassifierPolicy::AnnotatedNearMiss`]; treated as a rejection downstream.
    NearMiss {
        call: GenotypeCall,
        percent_identity: f64,
        is_full: bool,
    },
    Rejected,
}

impl Classification {
    pub fn accepted_call(&self) -> Option<&GenotypeCall> {
        match self {
            Classification::Accepted { call, .. } => Some(call),
            _ => None,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Classification::Accepted { .. })
    }

    ///
    /// The evaluation label written next to the alignment in the audit table.
    ///
    pub fn label(&self) -> String {
        match self {
            Classification::Accepted { call, .. } => call.label(),
            Classification::NearMiss {
                call,
                percent_identity,
                ..
            } => format!("{}{}{:?}", call.label(), NEAR_MISS_SEPARATOR, percent_identity),
            Classification::Rejected => NOT_ACCEPTED.to_string(),
        }
    }
}

///
/// Classify one alignment record.
///
/// # Arguments
/// - record: the alignment hit
/// - thresholds: per-gene base identity and minimum partial length
/// - policy: how identity near-misses are labelled
///
pub fn classify(
    record: &AlignmentRecord,
    thresholds: &Thresholds,
    policy: ClassifierPolicy,
) -> Classification {
    let call = match GenotypeCall::from_subject_id(&record.subject_id) {
        Some(call) => call,
        None => {
            warn!(
                "Unknown gene segment in subject id `{}` (query `{}`); alignment rejected",
                record.subject_id, record.query_id
            );
            return Classification::Rejected;
        }
    };

    let is_full = record.is_full();
    let base = thresholds.base_pident(call.gene);
    let threshold = if is_full {
        base
    } else {
        base + PARTIAL_IDENTITY_MARGIN
    };

    let length_ok = is_full || record.align_length >= thresholds.min_accept_length(call.gene);
    let identity_ok = record.percent_identity >= threshold;

    match (length_ok, identity_ok, policy) {
        (true, true, _) => Classification::Accepted { call, is_full },
        (true, false, ClassifierPolicy::AnnotatedNearMiss) => Classification::NearMiss {
            call,
            percent_identity: record.percent_identity,
            is_full,
        },
        _ => Classification::Rejected,
    }
}

///
/// An alignment record together with its classification.
///
#[derive(Debug, Clone, PartialEq)]
pub struct ClassifiedRecord<'a> {
    pub record: &'a AlignmentRecord,
    pub classification: Classification,
}

impl<'a> ClassifiedRecord<'a> {
    pub fn accepted_call(&self) -> Option<&GenotypeCall> {
        self.classification.accepted_call()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSummary {
    pub accepted: usize,
    pub near_miss: usize,
    pub rejected: usize,
}

///
/// Classifies alignment records against a fixed set of thresholds.
///
#[derive(Debug, Clone)]
pub struct Classifier {
    thresholds: Thresholds,
    policy: ClassifierPolicy,
}

impl Classifier {
    pub fn new(thresholds: Thresholds, policy: ClassifierPolicy) -> Self {
        Classifier { thresholds, policy }
    }

    pub fn policy(&self) -> ClassifierPolicy {
        self.policy
    }

    pub fn classify(&self, record: &AlignmentRecord) -> Classification {
        classify(record, &self.thresholds, self.policy)
    }

    ///
    /// Classify every record, preserving input order.
    ///
    pub fn classify_all<'a>(&self, records: &'a [AlignmentRecord]) -> Vec<ClassifiedRecord<'a>> {
        let classified: Vec<ClassifiedRecord<'a>> = records
            .iter()
            .map(|record| ClassifiedRecord {
                record,
                classification: self.classify(record),
            })
            .collect();

        let summary = summarize_classifications(&classified);
        info!(
            "Classified {} alignments: {} accepted, {} near-miss, {} not accepted",
            classified.len(),
            summary.accepted,
            summary.near_miss,
            summary.rejected
        );

        classified
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier::new(Thresholds::default(), ClassifierPolicy::default())
    }
}

pub fn summarize_classifications(classified: &[ClassifiedRecord<'_>]) -> ClassificationSummary {
    let mut summary = ClassificationSummary::default();
    for c in classified {
        match c.classification {
            Classification::Accepted { .. } => summary.accepted += 1,
            Classification::NearMiss { .. } => summary.near_miss += 1,
            Classification::Rejected => summary.rejected += 1,
        }
    }
    summary
}
