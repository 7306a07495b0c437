use anyhow::{Context, Result};
use clap::ArgMatches;

use rotatype_core::ContigFilter;
use rotatype_core::utils::get_dynamic_writer;
use rotatype_io::{FastaWrite, filter_contigs, read_contigs};

use crate::common::output_path;

pub fn run_filter(matches: &ArgMatches) -> Result<()> {
    let contigs_path = matches
        .get_one::<String>("contigs")
        .context("A path to a contig FASTA file is required.")?;

    let min_length: usize = matches
        .get_one::<String>("min-length")
        .context("--min-length has a default")?
        .parse()
        .context("--min-length must be a non-negative integer")?;

    let min_coverage: f64 = matches
        .get_one::<String>("min-coverage")
        .context("--min-coverage has a default")?
        .parse()
        .context("--min-coverage must be a number")?;

    let contigs = read_contigs(contigs_path)
        .with_context(|| format!("Failed to read contigs: {}", contigs_path))?;
    let kept = filter_contigs(contigs, &ContigFilter::new(min_length, min_coverage));

    let writer = get_dynamic_writer(output_path(matches))?;
    kept.as_slice().write_fasta(writer)?;

    Ok(())
}
