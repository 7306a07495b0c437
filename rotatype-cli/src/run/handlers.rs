use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;
use log::info;

use rotatype_core::utils::get_dynamic_writer;
use rotatype_genotype::{GenotypeRow, SelectionMode, genotype_sample, materialize_all};
use rotatype_io::consts::*;
use rotatype_io::{
    FastaWrite, read_contig_store, write_evaluation_table, write_genotype_table,
    write_genotype_vaccine_table, write_summary_table,
};

use crate::common::{load_blast, load_config, sample_label};

pub fn run_workflow(matches: &ArgMatches) -> Result<()> {
    let config = load_config(matches)?;
    let table = load_blast(matches)?;
    let label = sample_label(matches)?;

    let contigs_path = matches
        .get_one::<String>("contigs")
        .context("A path to a contig FASTA file is required.")?;
    let contigs = read_contig_store(contigs_path)
        .with_context(|| format!("Failed to read contigs: {}", contigs_path))?;

    let outdir = matches
        .get_one::<String>("outdir")
        .map(Path::new)
        .context("--outdir has a default")?;

    let sample = genotype_sample(&table.records, &config)?;

    let out = |name: &str| get_dynamic_writer(Some(outdir.join(name).as_path()));

    write_evaluation_table(&table, &sample.classified, out(EVALUATION_FILE)?)?;
    write_summary_table(&sample.aggregation, out(SUMMARY_FILE)?)?;

    let row = GenotypeRow::new(label, &sample.result);
    write_genotype_table(&row, out(GENOTYPE_FILE)?)?;
    write_genotype_vaccine_table(&row, &sample.vaccine, out(GENOTYPE_VACCINE_FILE)?)?;

    let selected = sample.selected();
    for (mode, name) in [
        (SelectionMode::Contig, SELECTED_CONTIGS_FILE),
        (SelectionMode::Orf, SELECTED_ORFS_FILE),
    ] {
        let sequences = materialize_all(&selected, &contigs, mode);
        sequences.as_slice().write_fasta(out(name)?)?;
    }

    info!(
        "{}: {} (reports written to {})",
        row.source_label,
        row.genotype,
        outdir.display()
    );

    Ok(())
}
