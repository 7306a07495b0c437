use std::cmp::Ordering;
use std::fmt::{self, Display};

use serde::Serialize;

use super::gene::Gene;

///
/// A genotype label for one gene segment, e.g. `G1` or `P8`.
///
/// The number is an identity key only. It is kept as a string and never used
/// arithmetically, except as a sort key via [`GenotypeCall::sort_key`].
///
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GenotypeCall {
    pub gene: Gene,
    pub number: String,
}

impl GenotypeCall {
    pub fn new(gene: Gene, number: impl Into<String>) -> Self {
        GenotypeCall {
            gene,
            number: number.into(),
        }
    }

    ///
    /// Derive a genotype call from a reference subject id of the form
    /// `<GeneLetter><Number>|...`.
    ///
    /// The gene letter is the first alphabetic character of the first
    /// `|`-separated token, the number is the run of digits that follows it.
    /// If no digits follow, the rest of the token is kept verbatim so the call
    /// still has a stable identity.
    ///
    /// Returns `None` when the token has no alphabetic character or the letter
    /// is not one of the known gene segments.
    ///
    pub fn from_subject_id(subject_id: &str) -> Option<GenotypeCall> {
        let token = subject_id.split('|').next().unwrap_or_default().trim();
        let (pos, letter) = token.char_indices().find(|(_, c)| c.is_alphabetic())?;
        let gene = Gene::from_letter(letter)?;

        let rest = &token[pos + letter.len_utf8()..];
        let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
        let number = if digits.is_empty() {
            rest.to_string()
        } else {
            digits
        };

        Some(GenotypeCall { gene, number })
    }

    ///
    /// Digits of the genotype number without leading zeros, empty when the
    /// number is not all digits. Comparing by length and then lexically orders
    /// these numerically at any width, with malformed numbers sorting as 0.
    ///
    pub fn numeric_digits(&self) -> &str {
        if !self.number.is_empty() && self.number.bytes().all(|b| b.is_ascii_digit()) {
            self.number.trim_start_matches('0')
        } else {
            ""
        }
    }

    ///
    /// Ordering key: gene order first, then numeric value, then the raw number
    /// so that distinct malformed numbers still order deterministically.
    ///
    pub fn sort_key(&self) -> (usize, usize, &str, &str) {
        let digits = self.numeric_digits();
        (self.gene.index(), digits.len(), digits, self.number.as_str())
    }

    ///
    /// Label used in tables: the gene letter followed by the number.
    ///
    pub fn label(&self) -> String {
        format!("{}{}", self.gene.letter(), self.number)
    }
}

impl Display for GenotypeCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.gene.letter(), self.number)
    }
}

impl Ord for GenotypeCall {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for GenotypeCall {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
