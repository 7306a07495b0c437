use std::io::Write;

use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use rotatype_core::utils::get_dynamic_writer;
use rotatype_genotype::{GeneResolution, GenotypeRow, VaccineIdentity, genotype_sample};
use rotatype_io::write_genotype_table;

use crate::common::{load_blast, load_config, output_path, sample_label};

#[derive(Serialize)]
struct GenotypeReport<'a> {
    #[serde(flatten)]
    row: &'a GenotypeRow,
    genes: &'a [GeneResolution],
    vaccine: &'a [VaccineIdentity],
}

pub fn run_genotype(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let table = load_blast(matches)?;
    let label = sample_label(matches)?;

    let sample = genotype_sample(&table.records, &config)?;
    let row = GenotypeRow::new(label, &sample.result);

    let mut writer = get_dynamic_writer(output_path(matches))?;
    if matches.get_flag("json") {
        let report = GenotypeReport {
            row: &row,
            genes: &sample.result.genes,
            vaccine: &sample.vaccine,
        };
        serde_json::to_writer_pretty(&mut writer, &report)?;
        writeln!(writer)?;
        writer.flush()?;
    } else {
        write_genotype_table(&row, writer)?;
    }

    Ok(())
}
