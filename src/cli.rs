use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "vll-plot")]
#[command(author, version, about = "Render comparative throughput charts from VLL benchmark results")]
#[command(long_about = "Reads the benchmark CSV files produced by a 2PL / VLL / VLL+SCA sweep and\n\
    renders a log-scale throughput line chart plus a grouped bar chart at key\n\
    contention levels.\n\n\
    Expects files: {prefix}_2pl.csv, {prefix}_vll.csv, {prefix}_vll_sca.csv\n\n\
    Exit codes:\n  \
    0 - All charts generated\n  \
    1 - Required input file missing\n  \
    2 - Data or rendering error")]
pub struct Cli {
    /// Base name of the benchmark CSV files
    #[arg(default_value = "benchmark_results")]
    pub output_prefix: String,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
