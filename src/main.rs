use clap::Parser;

use header_inc::cli::Cli;
use header_inc::commands::run_generate;

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_generate(&cli));
}
