mod common;
mod evaluate;
mod filter;
mod genotype;
mod run;
mod select;
mod summarize;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "rotatype";
    pub const BIN_NAME: &str = "rotatype";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Consensus genotyping of rotavirus gene segments from BLAST hits of assembled contigs.")
        .subcommand_required(true)
        .subcommand(evaluate::cli::create_evaluate_cli())
        .subcommand(summarize::cli::create_summarize_cli())
        .subcommand(genotype::cli::create_genotype_cli())
        .subcommand(select::cli::create_select_cli())
        .subcommand(filter::cli::create_filter_cli())
        .subcommand(run::cli::create_run_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // PER-ALIGNMENT EVALUATION
        //
        Some((evaluate::cli::EVALUATE_CMD, matches)) => {
            evaluate::handlers::run_evaluate(matches)?;
        }

        //
        // TIER COUNTS
        //
        Some((summarize::cli::SUMMARIZE_CMD, matches)) => {
            summarize::handlers::run_summarize(matches)?;
        }

        //
        // CONSENSUS GENOTYPE
        //
        Some((genotype::cli::GENOTYPE_CMD, matches)) => {
            genotype::handlers::run_genotype(matches)?;
        }

        //
        // REPRESENTATIVE SEQUENCES
        //
        Some((select::cli::SELECT_CMD, matches)) => {
            select::handlers::run_select(matches)?;
        }

        //
        // CONTIG PRE-FILTER
        //
        Some((filter::cli::FILTER_CMD, matches)) => {
            filter::handlers::run_filter(matches)?;
        }

        //
        // FULL WORKFLOW
        //
        Some((run::cli::RUN_CMD, matches)) => {
            run::handlers::run_workflow(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_parser_is_valid() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["rotatype", "select", "hits.tsv", "contigs.fa"], "contig")]
    #[case(&["rotatype", "select", "hits.tsv", "contigs.fa", "--mode", "orf"], "orf")]
    fn test_select_mode(#[case] argv: &[&str], #[case] expected: &str) {
        let matches = build_parser().try_get_matches_from(argv).unwrap();
        let (name, sub) = matches.subcommand().unwrap();
        assert_eq!(name, select::cli::SELECT_CMD);
        assert_eq!(sub.get_one::<String>("mode").unwrap(), expected);
    }

    #[rstest]
    fn test_select_rejects_unknown_mode() {
        let result = build_parser().try_get_matches_from([
            "rotatype", "select", "hits.tsv", "contigs.fa", "--mode", "gene",
        ]);
        assert!(result.is_err());
    }

    #[rstest]
    fn test_filter_defaults() {
        let matches = build_parser()
            .try_get_matches_from(["rotatype", "filter", "contigs.fa"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert_eq!(sub.get_one::<String>("min-length").unwrap(), "500");
        assert_eq!(sub.get_one::<String>("min-coverage").unwrap(), "3");
        assert!(sub.get_one::<String>("output").is_none());
    }

    #[rstest]
    fn test_genotype_flags() {
        let matches = build_parser()
            .try_get_matches_from([
                "rotatype", "genotype", "hits.tsv", "--json", "--label", "S1", "--policy", "strict",
            ])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(sub.get_flag("json"));
        assert_eq!(sub.get_one::<String>("label").unwrap(), "S1");

        let config = common::load_config(sub).unwrap();
        assert_eq!(config.policy, rotatype_core::ClassifierPolicy::Strict);
    }

    #[rstest]
    fn test_unknown_policy_is_an_error() {
        let matches = build_parser()
            .try_get_matches_from(["rotatype", "evaluate", "hits.tsv", "--policy", "lenient"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        assert!(common::load_config(sub).is_err());
    }
}
