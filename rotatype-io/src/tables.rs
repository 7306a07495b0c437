//! CSV reports: per-alignment evaluation, per-genotype tier counts and the
//! sample genotype call.

use std::io::Write;

use serde::Serialize;

use rotatype_genotype::{Aggregation, ClassifiedRecord, GenotypeRow, VaccineIdentity};

use crate::blast::BlastTable;
use crate::consts::{BLAST_COLUMNS, EVALUATION_COLUMN, GENOTYPE_HEADER, SUMMARY_HEADER};
use crate::error::{Result, RotatypeIoError};

///
/// Write the BLAST rows back out with an `Evaluation` column appended.
///
/// # Arguments
/// - table: the rows as read
/// - classified: one classification per row, in the same order
/// - writer: the destination
///
pub fn write_evaluation_table<W: Write>(
    table: &BlastTable,
    classified: &[ClassifiedRecord<'_>],
    writer: W,
) -> Result<()> {
    if table.raw_fields.len() != classified.len() {
        return Err(RotatypeIoError::RowCountMismatch {
            expected: table.raw_fields.len(),
            found: classified.len(),
        });
    }

    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = BLAST_COLUMNS.to_vec();
    header.push(EVALUATION_COLUMN);
    wtr.write_record(&header)?;

    for (fields, c) in table.raw_fields.iter().zip(classified) {
        let label = c.classification.label();
        let row = fields
            .iter()
            .take(BLAST_COLUMNS.len())
            .map(String::as_str)
            .chain(std::iter::once(label.as_str()));
        wtr.write_record(row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// One summary row, serialized positionally under [`SUMMARY_HEADER`].
#[derive(Serialize)]
struct SummaryRow {
    genotype: String,
    total_count: u32,
    full_count: u32,
    partial_count: u32,
    high_cov_full: u32,
    low_cov_full: u32,
    high_cov_partial: u32,
    low_cov_partial: u32,
}

///
/// Write the per-genotype tier counts, ordered by gene and genotype number.
/// The header is written even when the aggregation is empty.
///
pub fn write_summary_table<W: Write>(aggregation: &Aggregation, writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(SUMMARY_HEADER)?;

    for (call, counts) in aggregation.iter() {
        wtr.serialize(SummaryRow {
            genotype: call.label(),
            total_count: counts.total_count,
            full_count: counts.full_count,
            partial_count: counts.partial_count,
            high_cov_full: counts.high_cov_full,
            low_cov_full: counts.low_cov_full,
            high_cov_partial: counts.high_cov_partial,
            low_cov_partial: counts.low_cov_partial,
        })?;
    }

    wtr.flush()?;
    Ok(())
}

pub fn write_genotype_table<W: Write>(row: &GenotypeRow, writer: W) -> Result<()> {
    write_genotype_vaccine_table(row, &[], writer)
}

///
/// Write the genotype call with one extra column per vaccine marker holding
/// the mean identity against that vaccine strain (empty when unobserved).
///
pub fn write_genotype_vaccine_table<W: Write>(
    row: &GenotypeRow,
    vaccine: &[VaccineIdentity],
    writer: W,
) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    let mut header: Vec<&str> = GENOTYPE_HEADER.to_vec();
    header.extend(vaccine.iter().map(|v| v.label.as_str()));
    wtr.write_record(&header)?;

    let mut record = vec![
        row.source_label.clone(),
        row.genotype.clone(),
        row.extra_information.clone(),
    ];
    record.extend(
        vaccine
            .iter()
            .map(|v| v.mean_identity.map(|m| format!("{:?}", m)).unwrap_or_default()),
    );
    wtr.write_record(&record)?;

    wtr.flush()?;
    Ok(())
}
