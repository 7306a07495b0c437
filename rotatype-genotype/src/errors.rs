use thiserror::Error;

use rotatype_core::ConfigError;

#[derive(Error, Debug)]
pub enum GenotypeError {
    #[error("No alignment records were supplied; cannot call a genotype")]
    NoAlignmentRecords,
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, GenotypeError>;
