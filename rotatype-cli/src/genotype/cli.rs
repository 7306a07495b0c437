use clap::{Command, arg};

use crate::common::{blast_arg, config_args, output_arg};

pub const GENOTYPE_CMD: &str = "genotype";

pub fn create_genotype_cli() -> Command {
    Command::new(GENOTYPE_CMD)
        .about("Call the consensus genotype across all eleven gene segments. Outputs CSV or JSON.")
        .arg_required_else_help(true)
        .arg(blast_arg())
        .arg(output_arg())
        .arg(
            arg!(--label <LABEL>)
                .required(false)
                .help("Sample label for the first column (default: current directory name)"),
        )
        .arg(arg!(--json "Write the per-gene resolution as JSON instead of CSV"))
        .args(config_args())
}
