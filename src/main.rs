use clap::Parser;

use vll_plot::chart::{RenderConfig, render_bar_chart, render_throughput_chart};
use vll_plot::cli::Cli;
use vll_plot::series::{InputSet, ProtocolResultSet};
use vll_plot::{EXIT_DATA_ERROR, EXIT_MISSING_INPUT, EXIT_SUCCESS, PlotError};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(err @ PlotError::MissingInput { .. }) => {
            eprintln!("Error: {err}");
            eprintln!("Usage: vll-plot [OUTPUT_PREFIX]");
            EXIT_MISSING_INPUT
        }
        Err(err) => {
            eprintln!("Error: {err}");
            EXIT_DATA_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> vll_plot::Result<()> {
    let prefix = cli.output_prefix.as_str();

    // All three inputs are checked before any of them is parsed; a missing
    // file must not leave partial output behind.
    let inputs = InputSet::from_prefix(prefix);
    inputs.ensure_present()?;

    println!("Loading data from {prefix}_*.csv files...");
    let results = ProtocolResultSet::load(&inputs)?;
    // Checked before any rendering so a bad input set cannot leave a
    // half-written chart pair behind.
    results.ensure_aligned()?;

    let config = RenderConfig::default();

    println!("Generating plots...");
    for path in render_throughput_chart(&results, &config, prefix)? {
        println!("Saved: {}", path.display());
    }
    for path in render_bar_chart(&results, &config, prefix)? {
        println!("Saved: {}", path.display());
    }

    println!("Done!");
    Ok(())
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
