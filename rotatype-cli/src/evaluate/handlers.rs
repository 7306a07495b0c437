use anyhow::Result;
use clap::ArgMatches;

use rotatype_core::utils::get_dynamic_writer;
use rotatype_genotype::Classifier;
use rotatype_io::write_evaluation_table;

use crate::common::{load_blast, load_config, output_path};

pub fn run_evaluate(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let table = load_blast(matches)?;

    let classifier = Classifier::new(config.thresholds()?, config.policy);
    let classified = classifier.classify_all(&table.records);

    let writer = get_dynamic_writer(output_path(matches))?;
    write_evaluation_table(&table, &classified, writer)?;

    Ok(())
}
