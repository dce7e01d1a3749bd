use clap::CommandFactory;

use super::*;

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}

#[test]
fn prefix_defaults_to_benchmark_results() {
    let cli = Cli::try_parse_from(["vll-plot"]).unwrap();
    assert_eq!(cli.output_prefix, "benchmark_results");
}

#[test]
fn prefix_taken_from_positional_argument() {
    let cli = Cli::try_parse_from(["vll-plot", "sweep_8workers"]).unwrap();
    assert_eq!(cli.output_prefix, "sweep_8workers");
}

#[test]
fn extra_positional_arguments_rejected() {
    assert!(Cli::try_parse_from(["vll-plot", "a", "b"]).is_err());
}
