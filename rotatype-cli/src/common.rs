//! Arguments and loading steps shared by the genotyping subcommands.

use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches, arg};
use log::info;

use rotatype_core::{ClassifierPolicy, GenotypingConfig};
use rotatype_genotype::GenotypeError;
use rotatype_io::{BlastTable, read_blast_table};

pub fn blast_arg() -> Arg {
    Arg::new("blast")
        .required(true)
        .help("BLAST tabular output (outfmt 6 with sstrand and slen), optionally gzipped, or - for stdin")
}

pub fn contigs_arg() -> Arg {
    Arg::new("contigs")
        .required(true)
        .help("Assembled contigs in FASTA format, optionally gzipped")
}

pub fn output_arg() -> Arg {
    arg!(-o --output <OUTPUT>)
        .required(false)
        .help("Output file (default: stdout)")
}

pub fn config_args() -> [Arg; 2] {
    [
        arg!(-c --config <CONFIG>)
            .required(false)
            .help("TOML file with identity thresholds, minimum lengths and vaccine markers"),
        arg!(--policy <POLICY>)
            .required(false)
            .help("How identity near-misses are labelled: strict or annotated-near-miss"),
    ]
}

///
/// Build the genotyping config from `--config`, then apply `--policy`.
///
pub fn load_config(matches: &ArgMatches) -> Result<GenotypingConfig> {
    let mut config = match matches.get_one::<String>("config") {
        Some(path) => GenotypingConfig::try_from(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path))?,
        None => GenotypingConfig::default(),
    };

    if let Some(policy) = matches.get_one::<String>("policy") {
        config.policy = ClassifierPolicy::from_str(policy)?;
    }

    info!("Classifier policy: {}", config.policy);
    Ok(config)
}

pub fn load_blast(matches: &ArgMatches) -> Result<BlastTable> {
    let path = matches
        .get_one::<String>("blast")
        .context("A path to a BLAST table is required.")?;
    let table =
        read_blast_table(path).with_context(|| format!("Failed to read BLAST table: {}", path))?;

    if table.is_empty() {
        return Err(anyhow::Error::new(GenotypeError::NoAlignmentRecords)
            .context(format!("{} has no parseable alignment rows", path)));
    }

    Ok(table)
}

pub fn output_path(matches: &ArgMatches) -> Option<&Path> {
    matches.get_one::<String>("output").map(Path::new)
}

///
/// `--label` if given, else the name of the current working directory.
///
pub fn sample_label(matches: &ArgMatches) -> Result<String> {
    match matches.get_one::<String>("label") {
        Some(label) => Ok(label.clone()),
        None => {
            let cwd = std::env::current_dir().context("Failed to read the current directory")?;
            Ok(rotatype_core::utils::sample_label_from_dir(&cwd))
        }
    }
}
