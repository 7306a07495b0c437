use clap::{Command, arg};

use crate::common::{blast_arg, config_args, contigs_arg};

pub const RUN_CMD: &str = "run";

pub fn create_run_cli() -> Command {
    Command::new(RUN_CMD)
        .about("Run the full genotyping workflow for one sample and write every report into a directory.")
        .arg_required_else_help(true)
        .arg(blast_arg())
        .arg(contigs_arg())
        .arg(
            arg!(-d --outdir <OUTDIR>)
                .required(false)
                .default_value(".")
                .help("Directory for the reports"),
        )
        .arg(
            arg!(--label <LABEL>)
                .required(false)
                .help("Sample label for the genotype table (default: current directory name)"),
        )
        .args(config_args())
}
