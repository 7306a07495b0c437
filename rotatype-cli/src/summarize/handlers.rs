use anyhow::Result;
use clap::ArgMatches;

use rotatype_core::utils::get_dynamic_writer;
use rotatype_genotype::genotype_sample;
use rotatype_io::write_summary_table;

use crate::common::{load_blast, load_config, output_path};

pub fn run_summarize(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let table = load_blast(matches)?;
    let sample = genotype_sample(&table.records, &config)?;

    let writer = get_dynamic_writer(output_path(matches))?;
    write_summary_table(&sample.aggregation, writer)?;

    Ok(())
}
