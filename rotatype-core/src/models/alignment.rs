use std::fmt::{self, Display};
use std::str::FromStr;

use serde::Serialize;

use crate::consts::HIGH_COVERAGE_CUTOFF;

/// Orientation of the subject relative to the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Strand {
    #[default]
    Plus,
    Minus,
}

impl FromStr for Strand {
    type Err = std::convert::Infallible;

    /// Anything other than `minus`/`-` (surrounding whitespace ignored) reads as plus.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "minus" | "-" => Ok(Strand::Minus),
            _ => Ok(Strand::Plus),
        }
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Plus => write!(f, "plus"),
            Strand::Minus => write!(f, "minus"),
        }
    }
}

///
/// Extract the coverage value embedded in an assembler contig id as
/// `cov_<value>_`, e.g. `NODE_1_length_1062_cov_25.3_x` gives `25.3`.
///
/// This is a best-effort side channel: a missing or unparseable token yields 0.
///
pub fn parse_coverage(id: &str) -> f64 {
    id.split("cov_")
        .nth(1)
        .and_then(|rest| rest.split('_').next())
        .and_then(|value| value.parse::<f64>().ok())
        .unwrap_or(0.0)
}

///
/// One BLAST-style alignment hit of an assembled contig (query) against a
/// genotype reference (subject).
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlignmentRecord {
    pub query_id: String,
    pub subject_id: String,
    pub percent_identity: f64,
    pub align_length: u32,
    pub subject_length: u32,
    /// 1-based, inclusive
    pub query_start: u32,
    /// 1-based, inclusive
    pub query_end: u32,
    pub strand: Strand,
    /// Parsed once from `query_id`, see [`parse_coverage`].
    pub coverage: f64,
}

impl AlignmentRecord {
    ///
    /// Create a record, deriving the coverage from the query id.
    ///
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        query_id: impl Into<String>,
        subject_id: impl Into<String>,
        percent_identity: f64,
        align_length: u32,
        subject_length: u32,
        query_start: u32,
        query_end: u32,
        strand: Strand,
    ) -> Self {
        let query_id = query_id.into();
        let coverage = parse_coverage(&query_id);
        AlignmentRecord {
            query_id,
            subject_id: subject_id.into(),
            percent_identity,
            align_length,
            subject_length,
            query_start,
            query_end,
            strand,
            coverage,
        }
    }

    ///
    /// The alignment spans the whole reference subject.
    ///
    pub fn is_full(&self) -> bool {
        self.align_length >= self.subject_length
    }

    pub fn is_high_coverage(&self) -> bool {
        self.coverage >= HIGH_COVERAGE_CUTOFF
    }
}
