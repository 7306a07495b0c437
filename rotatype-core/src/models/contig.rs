use fxhash::FxHashMap;

use super::alignment::parse_coverage;
use crate::consts::{DEFAULT_MIN_CONTIG_COVERAGE, DEFAULT_MIN_CONTIG_LENGTH};

///
/// An assembled contig as read from a FASTA file.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contig {
    /// First whitespace-delimited token of the header
    pub id: String,
    pub description: Option<String>,
    pub sequence: Vec<u8>,
}

impl Contig {
    pub fn new(id: impl Into<String>, description: Option<String>, sequence: Vec<u8>) -> Self {
        Contig {
            id: id.into(),
            description,
            sequence,
        }
    }

    ///
    /// The original header text, without the leading `>`. The id and the
    /// description are rejoined with a single space, whatever whitespace
    /// separated them in the file, and trailing whitespace is dropped.
    ///
    pub fn header(&self) -> String {
        match &self.description {
            Some(desc) => format!("{} {}", self.id, desc),
            None => self.id.clone(),
        }
    }

    ///
    /// Coverage parsed from the full header text.
    ///
    pub fn coverage(&self) -> f64 {
        parse_coverage(&self.header())
    }

    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

///
/// Contigs keyed by id, so alignment records can be resolved back to their
/// query sequence.
///
#[derive(Debug, Default, Clone)]
pub struct ContigStore {
    contigs: FxHashMap<String, Contig>,
}

impl ContigStore {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Insert a contig. A later contig with the same id replaces the earlier one.
    ///
    pub fn insert(&mut self, contig: Contig) {
        self.contigs.insert(contig.id.clone(), contig);
    }

    pub fn get(&self, id: &str) -> Option<&Contig> {
        self.contigs.get(id)
    }

    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }
}

impl FromIterator<Contig> for ContigStore {
    fn from_iter<I: IntoIterator<Item = Contig>>(iter: I) -> Self {
        let mut store = ContigStore::new();
        for contig in iter {
            store.insert(contig);
        }
        store
    }
}

///
/// Length and coverage cutoffs applied to assembled contigs before alignment.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContigFilter {
    pub min_length: usize,
    pub min_coverage: f64,
}

impl ContigFilter {
    pub fn new(min_length: usize, min_coverage: f64) -> Self {
        ContigFilter {
            min_length,
            min_coverage,
        }
    }

    pub fn keep(&self, contig: &Contig) -> bool {
        contig.len() >= self.min_length && contig.coverage() >= self.min_coverage
    }
}

impl Default for ContigFilter {
    fn default() -> Self {
        ContigFilter::new(DEFAULT_MIN_CONTIG_LENGTH, DEFAULT_MIN_CONTIG_COVERAGE)
    }
}
