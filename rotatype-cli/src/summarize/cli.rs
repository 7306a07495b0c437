use clap::Command;

use crate::common::{blast_arg, config_args, output_arg};

pub const SUMMARIZE_CMD: &str = "summarize";

pub fn create_summarize_cli() -> Command {
    Command::new(SUMMARIZE_CMD)
        .about("Count accepted alignments per genotype by coverage and alignment completeness. Outputs CSV.")
        .arg_required_else_help(true)
        .arg(blast_arg())
        .arg(output_arg())
        .args(config_args())
}
