use std::collections::BTreeMap;

use log::info;

use rotatype_core::{AlignmentRecord, GenotypeCall, GenotypingConfig};

use crate::aggregate::{Aggregation, aggregate};
use crate::classify::{ClassifiedRecord, Classifier};
use crate::consensus::{GenotypeResult, resolve};
use crate::errors::{GenotypeError, Result};
use crate::select::{SelectedCandidate, select_candidates};
use crate::vaccine::{VaccineIdentity, vaccine_identities_from_config};

///
/// Everything derived from one sample's alignment records.
///
#[derive(Debug, Clone)]
pub struct SampleGenotyping<'a> {
    pub classified: Vec<ClassifiedRecord<'a>>,
    pub aggregation: Aggregation,
    pub result: GenotypeResult,
    pub vaccine: Vec<VaccineIdentity>,
}

impl<'a> SampleGenotyping<'a> {
    ///
    /// Representative alignment for each accepted genotype.
    ///
    pub fn selected(&self) -> BTreeMap<GenotypeCall, SelectedCandidate<'a>> {
        select_candidates(&self.classified)
    }
}

///
/// Classify, aggregate and resolve a sample's alignment records.
///
/// # Arguments
/// - records: every alignment hit of the sample
/// - config: thresholds, classifier policy and vaccine markers
///
/// Fails when `records` is empty or the configuration is incomplete.
///
pub fn genotype_sample<'a>(
    records: &'a [AlignmentRecord],
    config: &GenotypingConfig,
) -> Result<SampleGenotyping<'a>> {
    if records.is_empty() {
        return Err(GenotypeError::NoAlignmentRecords);
    }

    let classifier = Classifier::new(config.thresholds()?, config.policy);
    let classified = classifier.classify_all(records);
    let aggregation = aggregate(&classified);
    let result = resolve(&aggregation);
    let vaccine = vaccine_identities_from_config(&classified, config)?;

    info!(
        "Genotype: `{}` (extra: {})",
        result.genotype_string(),
        result.extra_info_string()
    );

    Ok(SampleGenotyping {
        classified,
        aggregation,
        result,
        vaccine,
    })
}
