use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

///
/// One of the eleven rotavirus gene segments, named by the letter used in the
/// genotype nomenclature (Gx-P[x]-Ix-Rx-Cx-Mx-Ax-Nx-Tx-Ex-Hx).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Gene {
    G,
    P,
    I,
    R,
    C,
    M,
    A,
    N,
    T,
    E,
    H,
}

/// Output column order and tie-break sort order. Never alphabetize this.
pub const GENE_ORDER: [Gene; 11] = [
    Gene::G,
    Gene::P,
    Gene::I,
    Gene::R,
    Gene::C,
    Gene::M,
    Gene::A,
    Gene::N,
    Gene::T,
    Gene::E,
    Gene::H,
];

impl Gene {
    ///
    /// Position of the gene in [`GENE_ORDER`].
    ///
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn letter(&self) -> char {
        match self {
            Gene::G => 'G',
            Gene::P => 'P',
            Gene::I => 'I',
            Gene::R => 'R',
            Gene::C => 'C',
            Gene::M => 'M',
            Gene::A => 'A',
            Gene::N => 'N',
            Gene::T => 'T',
            Gene::E => 'E',
            Gene::H => 'H',
        }
    }

    pub fn from_letter(letter: char) -> Option<Gene> {
        GENE_ORDER.iter().copied().find(|g| g.letter() == letter)
    }
}

impl Display for Gene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for Gene {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => {
                Gene::from_letter(letter).ok_or_else(|| ConfigError::UnknownGene(s.to_string()))
            }
            _ => Err(ConfigError::UnknownGene(s.to_string())),
        }
    }
}

///
/// A lookup table holding exactly one value per gene segment.
///
/// A table can only be built complete, so a classifier holding one never has
/// to handle a missing gene at lookup time.
///
#[derive(Debug, Clone, PartialEq)]
pub struct GeneTable<T>([T; 11]);

impl<T> GeneTable<T> {
    pub fn new(values: [T; 11]) -> Self {
        GeneTable(values)
    }

    pub fn get(&self, gene: Gene) -> &T {
        &self.0[gene.index()]
    }

    ///
    /// Build a table from `(letter, value)` pairs, such as a deserialized TOML
    /// section.
    ///
    /// # Arguments
    /// - table: name of the table, used in error messages
    /// - entries: the key/value pairs, keyed by gene letter
    ///
    pub fn from_entries<'a, I>(table: &str, entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a String, &'a T)>,
        T: Clone + Default + 'a,
    {
        let mut slots: [Option<T>; 11] = Default::default();
        for (key, value) in entries {
            let gene = Gene::from_str(key)?;
            slots[gene.index()] = Some(value.clone());
        }

        if let Some(gene) = GENE_ORDER.iter().find(|g| slots[g.index()].is_none()) {
            return Err(ConfigError::MissingGene {
                table: table.to_string(),
                gene: gene.letter(),
            });
        }

        Ok(GeneTable(slots.map(Option::unwrap_or_default)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Gene, &T)> {
        GENE_ORDER.iter().copied().zip(self.0.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use std::collections::HashMap;

    #[rstest]
    fn test_gene_order_matches_index() {
        for (i, gene) in GENE_ORDER.iter().enumerate() {
            assert_eq!(gene.index(), i);
        }
        let letters: String = GENE_ORDER.iter().map(|g| g.letter()).collect();
        assert_eq!(letters, "GPIRCMANTEH");
    }

    #[rstest]
    #[case("G", Gene::G)]
    #[case("P", Gene::P)]
    #[case(" H ", Gene::H)]
    fn test_gene_from_str(#[case] input: &str, #[case] expected: Gene) {
        assert_eq!(Gene::from_str(input).unwrap(), expected);
    }

    #[rstest]
    #[case("X")]
    #[case("g")]
    #[case("GP")]
    #[case("")]
    fn test_gene_from_str_rejects(#[case] input: &str) {
        assert!(Gene::from_str(input).is_err());
    }

    #[rstest]
    fn test_gene_table_from_complete_entries() {
        let entries: HashMap<String, u32> = GENE_ORDER
            .iter()
            .map(|g| (g.letter().to_string(), g.index() as u32 * 10))
            .collect();
        let table = GeneTable::from_entries("min_accept_lengths", &entries).unwrap();
        assert_eq!(*table.get(Gene::G), 0);
        assert_eq!(*table.get(Gene::H), 100);
        assert_eq!(table.iter().count(), 11);
    }

    #[rstest]
    fn test_gene_table_missing_gene_is_fatal() {
        let mut entries: HashMap<String, f64> = GENE_ORDER
            .iter()
            .map(|g| (g.letter().to_string(), 80.0))
            .collect();
        entries.remove("M");
        let err = GeneTable::from_entries("identity_thresholds", &entries).unwrap_err();
        assert!(matches!(err, ConfigError::MissingGene { gene: 'M', .. }));
    }

    #[rstest]
    fn test_gene_table_reports_first_missing_gene_in_order() {
        let mut entries: HashMap<String, u32> = GENE_ORDER
            .iter()
            .map(|g| (g.letter().to_string(), 500))
            .collect();
        entries.remove("T");
        entries.remove("I");
        let err = GeneTable::from_entries("min_accept_lengths", &entries).unwrap_err();
        assert!(matches!(err, ConfigError::MissingGene { gene: 'I', .. }));
    }

    #[rstest]
    fn test_gene_table_unknown_gene_is_fatal() {
        let mut entries: HashMap<String, f64> = GENE_ORDER
            .iter()
            .map(|g| (g.letter().to_string(), 80.0))
            .collect();
        entries.insert("Z".to_string(), 90.0);
        let err = GeneTable::from_entries("identity_thresholds", &entries).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownGene(_)));
    }
}
