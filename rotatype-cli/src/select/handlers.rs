use std::str::FromStr;

use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use log::info;

use rotatype_core::utils::get_dynamic_writer;
use rotatype_genotype::{SelectionMode, genotype_sample, materialize_all};
use rotatype_io::{FastaWrite, read_contig_store};

use crate::common::{load_blast, load_config, output_path};

pub fn run_select(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let table = load_blast(matches)?;

    let contigs_path = matches
        .get_one::<String>("contigs")
        .context("A path to a contig FASTA file is required.")?;
    let contigs = read_contig_store(contigs_path)
        .with_context(|| format!("Failed to read contigs: {}", contigs_path))?;

    let mode = match matches.get_one::<String>("mode") {
        Some(mode) => SelectionMode::from_str(mode).map_err(|e| anyhow!(e))?,
        None => SelectionMode::default(),
    };

    let sample = genotype_sample(&table.records, &config)?;
    let selected = sample.selected();
    let sequences = materialize_all(&selected, &contigs, mode);

    let writer = get_dynamic_writer(output_path(matches))?;
    sequences.as_slice().write_fasta(writer)?;
    info!("Wrote {} representative sequences", sequences.len());

    Ok(())
}
