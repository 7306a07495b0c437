use clap::Command;

use crate::common::{blast_arg, config_args, output_arg};

pub const EVALUATE_CMD: &str = "evaluate";

pub fn create_evaluate_cli() -> Command {
    Command::new(EVALUATE_CMD)
        .about("Label every alignment with its accepted genotype or `not accepted`. Outputs CSV.")
        .arg_required_else_help(true)
        .arg(blast_arg())
        .arg(output_arg())
        .args(config_args())
}
