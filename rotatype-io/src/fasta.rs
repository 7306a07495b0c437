//! Reading assembled contigs and writing wrapped FASTA.

use std::io::{self, BufRead, Write};
use std::path::Path;

use bio::io::fasta;
use log::info;

use rotatype_core::consts::FASTA_LINE_WIDTH;
use rotatype_core::utils::{get_dynamic_reader_w_stdin, get_dynamic_writer};
use rotatype_core::{Contig, ContigFilter, ContigStore};
use rotatype_genotype::RepresentativeSequence;

use crate::error::Result;

///
/// Read every contig from a FASTA reader, in file order.
///
pub fn read_contigs_from_reader<B: BufRead>(reader: fasta::Reader<B>) -> Result<Vec<Contig>> {
    let mut contigs = Vec::new();
    for record in reader.records() {
        let record = record?;
        contigs.push(Contig::new(
            record.id(),
            record.desc().map(String::from),
            record.seq().to_vec(),
        ));
    }
    Ok(contigs)
}

///
/// Read contigs from a FASTA file (plain or gzipped), or `-` for stdin.
///
pub fn read_contigs(path: &str) -> Result<Vec<Contig>> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    let contigs = read_contigs_from_reader(fasta::Reader::from_bufread(reader))?;
    info!("Read {} contigs from {}", contigs.len(), path);
    Ok(contigs)
}

///
/// Read contigs from a FASTA file into a store keyed by contig id.
///
pub fn read_contig_store(path: &str) -> Result<ContigStore> {
    Ok(read_contigs(path)?.into_iter().collect())
}

///
/// Write one FASTA entry with the sequence wrapped at [`FASTA_LINE_WIDTH`].
///
pub fn write_fasta_entry<W: Write>(writer: &mut W, header: &str, seq: &[u8]) -> io::Result<()> {
    writeln!(writer, ">{}", header)?;
    for line in seq.chunks(FASTA_LINE_WIDTH) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

pub trait FastaWrite {
    ///
    /// Write entries as FASTA to any writer
    ///
    /// # Arguments
    /// - writer: the destination
    fn write_fasta<W: Write>(&self, writer: W) -> io::Result<()>;

    ///
    /// Write entries to disk as a FASTA file, creating parent directories
    ///
    /// # Arguments
    /// - path: the path to the file to dump to
    fn write_fasta_file<T: AsRef<Path>>(&self, path: T) -> io::Result<()> {
        let writer = get_dynamic_writer(Some(path.as_ref()))?;
        self.write_fasta(writer)
    }
}

impl FastaWrite for [RepresentativeSequence] {
    fn write_fasta<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for entry in self {
            write_fasta_entry(&mut writer, &entry.header, &entry.sequence)?;
        }
        writer.flush()
    }
}

impl FastaWrite for [Contig] {
    fn write_fasta<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for contig in self {
            write_fasta_entry(&mut writer, &contig.header(), &contig.sequence)?;
        }
        writer.flush()
    }
}

///
/// Keep the contigs passing `filter`, preserving file order.
///
pub fn filter_contigs(contigs: Vec<Contig>, filter: &ContigFilter) -> Vec<Contig> {
    let total = contigs.len();
    let kept: Vec<Contig> = contigs.into_iter().filter(|c| filter.keep(c)).collect();
    info!(
        "Kept {} of {} contigs (length >= {}, coverage >= {})",
        kept.len(),
        total,
        filter.min_length,
        filter.min_coverage
    );
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rotatype_core::{Gene, GenotypeCall};
    use rotatype_genotype::CandidateKind;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        std::env::current_dir()
            .unwrap()
            .join("../tests/data/contigs")
            .join(file_name)
    }

    #[rstest]
    fn test_header_separator_is_normalised_to_a_space() {
        let input = b">NODE_1_cov_20_\tassembly work1  \nACGT\n";
        let contigs = read_contigs_from_reader(fasta::Reader::new(&input[..])).unwrap();

        assert_eq!(contigs[0].id, "NODE_1_cov_20_");
        assert_eq!(contigs[0].header(), "NODE_1_cov_20_ assembly work1");
        assert_eq!(contigs[0].coverage(), 20.0);
    }

    #[rstest]
    fn test_read_contigs_keeps_header_parts() {
        let input = b">NODE_1_length_8_cov_12.0_ work1 assembly\nACGT\nACGT\n>NODE_2\nTT\n";
        let contigs = read_contigs_from_reader(fasta::Reader::new(&input[..])).unwrap();

        assert_eq!(contigs.len(), 2);
        assert_eq!(contigs[0].id, "NODE_1_length_8_cov_12.0_");
        assert_eq!(contigs[0].description.as_deref(), Some("work1 assembly"));
        assert_eq!(contigs[0].sequence, b"ACGTACGT".to_vec());
        assert_eq!(contigs[1].description, None);
    }

    #[rstest]
    fn test_read_contig_fixture() {
        let path = get_test_path("sample.fasta");
        let store = read_contig_store(path.to_str().unwrap()).unwrap();
        assert_eq!(store.len(), 6);
        assert!(store.get("NODE_1_length_1062_cov_41.2_").is_some());
    }

    #[rstest]
    fn test_write_wraps_at_line_width() {
        let seq = vec![b'A'; 150];
        let mut out = Vec::new();
        write_fasta_entry(&mut out, "G1_contig", &seq).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], ">G1_contig");
        assert_eq!(lines[1].len(), 70);
        assert_eq!(lines[2].len(), 70);
        assert_eq!(lines[3].len(), 10);
        assert_eq!(lines.len(), 4);
    }

    #[rstest]
    fn test_write_representatives_to_file() {
        let entries = vec![RepresentativeSequence {
            genotype: GenotypeCall::new(Gene::P, "8"),
            kind: CandidateKind::Partial,
            header: "P8_PARTIAL_NODE_2 x".to_string(),
            sequence: b"ACGTN".to_vec(),
        }];

        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("out/selected.fasta");
        entries.as_slice().write_fasta_file(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, ">P8_PARTIAL_NODE_2 x\nACGTN\n");
    }

    #[rstest]
    fn test_filter_round_trip() {
        let contigs = vec![
            Contig::new("NODE_1_length_600_cov_5.0_", None, vec![b'A'; 600]),
            Contig::new("NODE_2_length_600_cov_1.0_", None, vec![b'A'; 600]),
            Contig::new("NODE_3_length_100_cov_50.0_", None, vec![b'A'; 100]),
        ];
        let kept = filter_contigs(contigs, &ContigFilter::default());
        assert_eq!(kept.len(), 1);

        let mut out = Vec::new();
        kept.as_slice().write_fasta(&mut out).unwrap();
        let reread = read_contigs_from_reader(fasta::Reader::new(&out[..])).unwrap();
        assert_eq!(reread, kept);
    }
}
