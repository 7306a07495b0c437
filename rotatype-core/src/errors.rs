use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Threshold table `{table}` has no entry for gene {gene}")]
    MissingGene { table: String, gene: char },

    #[error("Unknown gene segment: {0}")]
    UnknownGene(String),

    #[error("Unknown classifier policy: {0}. Expected `strict` or `annotated-near-miss`")]
    UnknownPolicy(String),

    #[error("Invalid vaccine marker genotype: {0}")]
    InvalidVaccineMarker(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
