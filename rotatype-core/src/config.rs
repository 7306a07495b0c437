use std::collections::HashMap;
use std::fmt::{self, Display};
use std::fs::read_to_string;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_VACCINE_MARKER;
use crate::errors::{ConfigError, ConfigResult};
use crate::models::{GENE_ORDER, Gene, GeneTable, GenotypeCall};

const DEFAULT_IDENTITY_THRESHOLDS: [f64; 11] = [
    80.0, 80.0, 85.0, 83.0, 84.0, 81.0, 79.0, 85.0, 85.0, 85.0, 91.0,
];
const DEFAULT_MIN_ACCEPT_LENGTHS: [u32; 11] = [
    500, 1163, 596, 1632, 1319, 1253, 740, 500, 500, 500, 500,
];

///
/// How the classifier labels an alignment that meets the length criterion but
/// falls short of the identity threshold.
///
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ClassifierPolicy {
    /// Every failed alignment is simply not accepted.
    #[default]
    Strict,
    /// Identity near-misses keep their genotype, annotated with the observed identity.
    AnnotatedNearMiss,
}

impl FromStr for ClassifierPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(ClassifierPolicy::Strict),
            "annotated-near-miss" | "annotated" | "near-miss" => {
                Ok(ClassifierPolicy::AnnotatedNearMiss)
            }
            _ => Err(ConfigError::UnknownPolicy(s.to_string())),
        }
    }
}

impl Display for ClassifierPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassifierPolicy::Strict => write!(f, "strict"),
            ClassifierPolicy::AnnotatedNearMiss => write!(f, "annotated-near-miss"),
        }
    }
}

///
/// A vaccine strain whose mean identity is reported alongside the genotype,
/// e.g. `Rotarix VP7` for `G1`.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct VaccineMarker {
    pub label: String,
    pub genotype: String,
}

impl VaccineMarker {
    pub fn call(&self) -> ConfigResult<GenotypeCall> {
        GenotypeCall::from_subject_id(&self.genotype)
            .ok_or_else(|| ConfigError::InvalidVaccineMarker(self.genotype.clone()))
    }
}

///
/// Genotyping configuration as written in a TOML file.
///
/// Every section is optional; missing sections fall back to the built-in
/// rotavirus defaults. A section that is present must list all eleven genes.
///
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GenotypingConfig {
    #[serde(default)]
    pub policy: ClassifierPolicy,
    #[serde(default = "default_identity_thresholds")]
    pub identity_thresholds: HashMap<String, f64>,
    #[serde(default = "default_min_accept_lengths")]
    pub min_accept_lengths: HashMap<String, u32>,
    #[serde(default = "default_vaccine_markers")]
    pub vaccine_markers: Vec<VaccineMarker>,
    #[serde(default = "default_vaccine_subject_marker")]
    pub vaccine_subject_marker: String,
}

fn table_entries<T: Copy>(values: &[T; 11]) -> HashMap<String, T> {
    GENE_ORDER
        .iter()
        .zip(values.iter())
        .map(|(gene, value)| (gene.letter().to_string(), *value))
        .collect()
}

fn default_identity_thresholds() -> HashMap<String, f64> {
    table_entries(&DEFAULT_IDENTITY_THRESHOLDS)
}

fn default_min_accept_lengths() -> HashMap<String, u32> {
    table_entries(&DEFAULT_MIN_ACCEPT_LENGTHS)
}

fn default_vaccine_markers() -> Vec<VaccineMarker> {
    vec![
        VaccineMarker {
            label: "Rotarix VP7".to_string(),
            genotype: "G1".to_string(),
        },
        VaccineMarker {
            label: "Rotarix VP4".to_string(),
            genotype: "P8".to_string(),
        },
    ]
}

fn default_vaccine_subject_marker() -> String {
    DEFAULT_VACCINE_MARKER.to_string()
}

impl Default for GenotypingConfig {
    fn default() -> Self {
        GenotypingConfig {
            policy: ClassifierPolicy::default(),
            identity_thresholds: default_identity_thresholds(),
            min_accept_lengths: default_min_accept_lengths(),
            vaccine_markers: default_vaccine_markers(),
            vaccine_subject_marker: default_vaccine_subject_marker(),
        }
    }
}

impl GenotypingConfig {
    ///
    /// Validate the threshold sections into complete per-gene tables.
    ///
    pub fn thresholds(&self) -> ConfigResult<Thresholds> {
        Ok(Thresholds {
            base_pident: GeneTable::from_entries("identity_thresholds", &self.identity_thresholds)?,
            min_accept_length: GeneTable::from_entries(
                "min_accept_lengths",
                &self.min_accept_lengths,
            )?,
        })
    }
}

impl TryFrom<&Path> for GenotypingConfig {
    type Error = ConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: GenotypingConfig = toml::from_str(&toml_str)?;
        // surface incomplete tables at load time rather than mid-run
        config.thresholds()?;
        for marker in &config.vaccine_markers {
            marker.call()?;
        }
        Ok(config)
    }
}

///
/// Immutable per-gene acceptance thresholds handed to the classifier.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Thresholds {
    pub base_pident: GeneTable<f64>,
    pub min_accept_length: GeneTable<u32>,
}

impl Thresholds {
    pub fn base_pident(&self, gene: Gene) -> f64 {
        *self.base_pident.get(gene)
    }

    pub fn min_accept_length(&self, gene: Gene) -> u32 {
        *self.min_accept_length.get(gene)
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            base_pident: GeneTable::new(DEFAULT_IDENTITY_THRESHOLDS),
            min_accept_length: GeneTable::new(DEFAULT_MIN_ACCEPT_LENGTHS),
        }
    }
}
