//! Mean identity of a sample's hits against vaccine reference strains.

use fxhash::FxHashMap;
use log::debug;
use serde::Serialize;

use rotatype_core::{GenotypeCall, GenotypingConfig, VaccineMarker};

use crate::classify::ClassifiedRecord;
use crate::errors::Result;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaccineIdentity {
    pub label: String,
    pub genotype: GenotypeCall,
    /// `None` when no accepted alignment hit a vaccine reference of this genotype
    pub mean_identity: Option<f64>,
}

#[derive(Default)]
struct RunningMean {
    sum: f64,
    n: u32,
}

impl RunningMean {
    fn push(&mut self, value: f64) {
        self.sum += value;
        self.n += 1;
    }

    fn mean(&self) -> Option<f64> {
        (self.n > 0).then(|| self.sum / self.n as f64)
    }
}

///
/// Compute the mean percent identity of accepted alignments against vaccine
/// references for each marker.
///
/// # Arguments
/// - classified: classified alignment records
/// - markers: the vaccine strains to report, in output order
/// - subject_marker: case-insensitive substring identifying vaccine references
///
pub fn vaccine_identities(
    classified: &[ClassifiedRecord<'_>],
    markers: &[VaccineMarker],
    subject_marker: &str,
) -> Result<Vec<VaccineIdentity>> {
    let needle = subject_marker.to_lowercase();
    let mut means: FxHashMap<&GenotypeCall, RunningMean> = FxHashMap::default();

    for c in classified {
        if let Some(call) = c.accepted_call() {
            if c.record.subject_id.to_lowercase().contains(&needle) {
                means.entry(call).or_default().push(c.record.percent_identity);
            }
        }
    }

    let mut out = Vec::with_capacity(markers.len());
    for marker in markers {
        let genotype = marker.call()?;
        let mean_identity = means.get(&genotype).and_then(RunningMean::mean);
        debug!("{} ({}): {:?}", marker.label, genotype, mean_identity);
        out.push(VaccineIdentity {
            label: marker.label.clone(),
            genotype,
            mean_identity,
        });
    }

    Ok(out)
}

pub fn vaccine_identities_from_config(
    classified: &[ClassifiedRecord<'_>],
    config: &GenotypingConfig,
) -> Result<Vec<VaccineIdentity>> {
    vaccine_identities(
        classified,
        &config.vaccine_markers,
        &config.vaccine_subject_marker,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rotatype_core::{AlignmentRecord, Gene, Strand};
    use rstest::*;

    use crate::classify::Classifier;

    fn hit(subject: &str, pident: f64) -> AlignmentRecord {
        AlignmentRecord::new("n_cov_20_", subject, pident, 1000, 1000, 1, 1000, Strand::Plus)
    }

    #[rstest]
    fn test_vaccine_identity_means() {
        let records = vec![
            hit("G1|Rotarix_VACCINE", 98.0),
            hit("G1|RotaTeq-vaccine", 96.0),
            hit("G1|wildtype", 80.5),
            // rejected, does not count
            hit("G1|vaccine", 60.0),
        ];
        let classified = Classifier::default().classify_all(&records);
        let config = GenotypingConfig::default();
        let identities = vaccine_identities_from_config(&classified, &config).unwrap();

        assert_eq!(identities.len(), 2);
        assert_eq!(identities[0].label, "Rotarix VP7");
        assert_eq!(identities[0].genotype, GenotypeCall::new(Gene::G, "1"));
        assert_eq!(identities[0].mean_identity, Some(97.0));
        assert_eq!(identities[1].label, "Rotarix VP4");
        assert_eq!(identities[1].mean_identity, None);
    }

    #[rstest]
    fn test_invalid_marker_is_an_error() {
        let markers = vec![VaccineMarker {
            label: "broken".to_string(),
            genotype: "42".to_string(),
        }];
        assert!(vaccine_identities(&[], &markers, "vaccine").is_err());
    }
}
