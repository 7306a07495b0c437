//! Reading BLAST tabular output.

use std::io::Read;
use std::str::FromStr;

use log::{info, warn};

use rotatype_core::utils::get_dynamic_reader_w_stdin;
use rotatype_core::{AlignmentRecord, Strand};

use crate::consts::*;
use crate::error::{BlastRowError, Result};

///
/// Alignment records read from a BLAST table, together with the raw fields of
/// each row so reports can echo them.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlastTable {
    pub records: Vec<AlignmentRecord>,
    pub raw_fields: Vec<Vec<String>>,
    /// Rows dropped because they could not be parsed
    pub skipped: usize,
}

impl BlastTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn numeric<T: FromStr>(fields: &[String], idx: usize) -> std::result::Result<T, BlastRowError> {
    let value = fields[idx].trim();
    value.parse::<T>().map_err(|_| BlastRowError::NotNumeric {
        column: BLAST_COLUMNS[idx],
        value: value.to_string(),
    })
}

///
/// Parse the fields of one BLAST row into an alignment record.
///
pub fn parse_blast_fields(fields: &[String]) -> std::result::Result<AlignmentRecord, BlastRowError> {
    if fields.len() < BLAST_COLUMNS.len() {
        return Err(BlastRowError::TooFewColumns {
            expected: BLAST_COLUMNS.len(),
            found: fields.len(),
        });
    }

    let strand = Strand::from_str(&fields[SSTRAND_IDX]).unwrap_or_default();

    Ok(AlignmentRecord::new(
        fields[QSEQID_IDX].trim(),
        fields[SSEQID_IDX].trim(),
        numeric(fields, PIDENT_IDX)?,
        numeric(fields, LENGTH_IDX)?,
        numeric(fields, SLEN_IDX)?,
        numeric(fields, QSTART_IDX)?,
        numeric(fields, QEND_IDX)?,
        strand,
    ))
}

///
/// Read a BLAST table from any reader.
///
/// Lines starting with `#` are ignored. Malformed rows are skipped with a
/// warning and counted in [`BlastTable::skipped`].
///
pub fn read_blast_table_from_reader<R: Read>(reader: R) -> Result<BlastTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .comment(Some(b'#'))
        .quoting(false)
        .from_reader(reader);

    let mut table = BlastTable::default();

    for (i, row) in rdr.records().enumerate() {
        let fields: Vec<String> = match row {
            Ok(row) => row.iter().map(String::from).collect(),
            Err(e) => {
                warn!("Skipping unreadable BLAST row {}: {}", i + 1, e);
                table.skipped += 1;
                continue;
            }
        };

        match parse_blast_fields(&fields) {
            Ok(record) => {
                table.records.push(record);
                table.raw_fields.push(fields);
            }
            Err(e) => {
                warn!("Skipping malformed BLAST row {}: {}", i + 1, e);
                table.skipped += 1;
            }
        }
    }

    info!(
        "Read {} alignment records ({} rows skipped)",
        table.records.len(),
        table.skipped
    );

    Ok(table)
}

///
/// Read a BLAST table from a file path (plain or gzipped), or `-` for stdin.
///
pub fn read_blast_table(path: &str) -> Result<BlastTable> {
    let reader = get_dynamic_reader_w_stdin(path)?;
    read_blast_table_from_reader(reader)
}
