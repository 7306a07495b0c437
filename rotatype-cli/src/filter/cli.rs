use clap::{Arg, Command};

use crate::common::{contigs_arg, output_arg};

pub const FILTER_CMD: &str = "filter";

pub fn create_filter_cli() -> Command {
    Command::new(FILTER_CMD)
        .about("Drop short or low-coverage contigs before alignment. Outputs FASTA.")
        .arg_required_else_help(true)
        .arg(contigs_arg())
        .arg(
            Arg::new("min-length")
                .long("min-length")
                .required(false)
                .default_value("500")
                .help("Minimum contig length"),
        )
        .arg(
            Arg::new("min-coverage")
                .long("min-coverage")
                .required(false)
                .default_value("3")
                .help("Minimum coverage, parsed from `cov_<value>_` in the contig header"),
        )
        .arg(output_arg())
}
