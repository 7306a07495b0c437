//! Consensus genotype calling across gene segments.
//!
//! For every gene in [`GENE_ORDER`] the genotypes seen for that gene compete
//! through a tie-break cascade over their tier counts, strongest evidence
//! first:
//!
//! 1. full-length alignments on high-coverage contigs
//! 2. full-length alignments on low-coverage contigs
//! 3. partial alignments on high-coverage contigs
//! 4. partial alignments on low-coverage contigs
//!
//! At each step only the candidates holding the maximum count survive. The
//! first step that leaves a single candidate decides the call and later steps
//! are never consulted. Candidates still tied after the last step make the
//! gene ambiguous; a gene with no accepted evidence is missing.
//!
//! Genes are independent of each other, so they are resolved in parallel and
//! collected back in gene order.

use std::collections::BTreeSet;

use log::debug;
use rayon::prelude::*;
use serde::Serialize;

use rotatype_core::{GENE_ORDER, Gene, GenotypeCall};

use crate::aggregate::{Aggregation, TierCounts};

/// Separator between gene renderings in the genotype string.
pub const GENOTYPE_SEPARATOR: &str = "-";

/// Separator between entries of the extra information column.
pub const EXTRA_INFO_SEPARATOR: &str = "; ";

/// Extra information written when there is nothing to report.
pub const NO_EXTRA_INFO: &str = "None";

///
/// A named evidence tier used to break ties.
///
#[derive(Debug, Clone, Copy)]
pub struct Criterion {
    pub name: &'static str,
    pub extract: fn(&TierCounts) -> u32,
}

fn high_cov_full(counts: &TierCounts) -> u32 {
    counts.high_cov_full
}

fn low_cov_full(counts: &TierCounts) -> u32 {
    counts.low_cov_full
}

fn high_cov_partial(counts: &TierCounts) -> u32 {
    counts.high_cov_partial
}

fn low_cov_partial(counts: &TierCounts) -> u32 {
    counts.low_cov_partial
}

/// Tie-break order, strongest evidence first.
pub const TIE_BREAK_CASCADE: [Criterion; 4] = [
    Criterion {
        name: "high_cov_full",
        extract: high_cov_full,
    },
    Criterion {
        name: "low_cov_full",
        extract: low_cov_full,
    },
    Criterion {
        name: "high_cov_partial",
        extract: high_cov_partial,
    },
    Criterion {
        name: "low_cov_partial",
        extract: low_cov_partial,
    },
];

///
/// Consensus outcome for one gene segment.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "number", rename_all = "lowercase")]
pub enum GeneConsensus {
    Resolved(String),
    Ambiguous,
    Missing,
}

///
/// Resolution of one gene: the consensus outcome plus every genotype that was
/// observed for the gene but did not win.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneResolution {
    pub gene: Gene,
    pub consensus: GeneConsensus,
    /// Name of the cascade step that produced a unique winner, `None` when the
    /// gene had a sole candidate or stayed ambiguous.
    pub decided_by: Option<&'static str>,
    pub non_winners: Vec<GenotypeCall>,
}

impl GeneResolution {
    ///
    /// Render the gene for the genotype string: `G1`, `P[8]`, `G?` or `GX`.
    ///
    pub fn render(&self) -> String {
        match (&self.consensus, self.gene) {
            (GeneConsensus::Resolved(number), Gene::P) => format!("P[{}]", number),
            (GeneConsensus::Resolved(number), gene) => format!("{}{}", gene, number),
            (GeneConsensus::Ambiguous, gene) => format!("{}?", gene),
            (GeneConsensus::Missing, gene) => format!("{}X", gene),
        }
    }
}

///
/// Run the tie-break cascade for one gene.
///
pub fn resolve_gene(gene: Gene, aggregation: &Aggregation) -> GeneResolution {
    let considered: Vec<(&GenotypeCall, &TierCounts)> = aggregation.for_gene(gene).collect();

    if considered.is_empty() {
        return GeneResolution {
            gene,
            consensus: GeneConsensus::Missing,
            decided_by: None,
            non_winners: Vec::new(),
        };
    }

    if let [(sole, _)] = considered.as_slice() {
        debug!("{}: {} is the sole candidate", gene, sole.label());
        return GeneResolution {
            gene,
            consensus: GeneConsensus::Resolved(sole.number.clone()),
            decided_by: None,
            non_winners: Vec::new(),
        };
    }

    let mut candidates = considered.clone();
    for criterion in TIE_BREAK_CASCADE.iter() {
        let best = candidates
            .iter()
            .map(|(_, counts)| (criterion.extract)(counts))
            .max()
            .unwrap_or(0);
        candidates.retain(|(_, counts)| (criterion.extract)(counts) == best);

        if let [(winner, _)] = candidates.as_slice() {
            debug!(
                "{}: {} wins on {} ({} candidates considered)",
                gene,
                winner.label(),
                criterion.name,
                considered.len()
            );
            let non_winners = considered
                .iter()
                .filter(|(call, _)| *call != *winner)
                .map(|(call, _)| (*call).clone())
                .collect();
            return GeneResolution {
                gene,
                consensus: GeneConsensus::Resolved(winner.number.clone()),
                decided_by: Some(criterion.name),
                non_winners,
            };
        }
    }

    debug!(
        "{}: {} candidates still tied after every tier",
        gene,
        candidates.len()
    );
    GeneResolution {
        gene,
        consensus: GeneConsensus::Ambiguous,
        decided_by: None,
        non_winners: considered.iter().map(|(call, _)| (*call).clone()).collect(),
    }
}

///
/// Consensus genotype across all eleven gene segments.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenotypeResult {
    pub genes: Vec<GeneResolution>,
}

impl GenotypeResult {
    pub fn is_all_missing(&self) -> bool {
        self.genes
            .iter()
            .all(|g| g.consensus == GeneConsensus::Missing)
    }

    ///
    /// The genotype string, e.g. `G1-P[8]-I1-R1-C1-M1-A1-N1-T1-E1-H1`.
    /// Empty when no gene has any evidence.
    ///
    pub fn genotype_string(&self) -> String {
        if self.is_all_missing() {
            return String::new();
        }
        self.genes
            .iter()
            .map(|g| g.render())
            .collect::<Vec<_>>()
            .join(GENOTYPE_SEPARATOR)
    }

    ///
    /// Observed genotypes that did not win, deduplicated and ordered by gene
    /// order and genotype number.
    ///
    pub fn extra_info(&self) -> Vec<GenotypeCall> {
        if self.is_all_missing() {
            return Vec::new();
        }
        self.genes
            .iter()
            .flat_map(|g| g.non_winners.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn extra_info_string(&self) -> String {
        let extra = self.extra_info();
        if extra.is_empty() {
            return NO_EXTRA_INFO.to_string();
        }
        extra
            .iter()
            .map(|c| c.label())
            .collect::<Vec<_>>()
            .join(EXTRA_INFO_SEPARATOR)
    }

    pub fn gene(&self, gene: Gene) -> &GeneResolution {
        &self.genes[gene.index()]
    }
}

///
/// Resolve the consensus genotype for every gene segment.
///
pub fn resolve(aggregation: &Aggregation) -> GenotypeResult {
    let genes = GENE_ORDER
        .par_iter()
        .map(|gene| resolve_gene(*gene, aggregation))
        .collect();
    GenotypeResult { genes }
}

///
/// One row of the genotype call table.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenotypeRow {
    pub source_label: String,
    pub genotype: String,
    pub extra_information: String,
}

impl GenotypeRow {
    pub fn new(source_label: impl Into<String>, result: &GenotypeResult) -> Self {
        GenotypeRow {
            source_label: source_label.into(),
            genotype: result.genotype_string(),
            extra_information: result.extra_info_string(),
        }
    }
}
