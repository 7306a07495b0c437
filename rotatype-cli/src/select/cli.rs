use clap::{Command, arg};

use crate::common::{blast_arg, config_args, contigs_arg, output_arg};

pub const SELECT_CMD: &str = "select";

pub fn create_select_cli() -> Command {
    Command::new(SELECT_CMD)
        .about("Pick one representative contig per accepted genotype. Outputs FASTA.")
        .arg_required_else_help(true)
        .arg(blast_arg())
        .arg(contigs_arg())
        .arg(
            arg!(-m --mode <MODE>)
                .required(false)
                .default_value("contig")
                .value_parser(["contig", "orf"])
                .help("Write whole contigs or only the aligned region, oriented to the reference"),
        )
        .arg(output_arg())
        .args(config_args())
}
