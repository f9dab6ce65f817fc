use crate::cli::{Cli, ColorChoice};
use crate::generator::{GenerationReport, GeneratorConfig, Mode, OutputState, generate};
use crate::output::{ColorMode, JsonFormatter, OutputFormat, OutputFormatter, TextFormatter};
use crate::{EXIT_ERROR, EXIT_STALE, EXIT_SUCCESS, Result};

#[must_use]
pub fn run_generate(cli: &Cli) -> i32 {
    match run_generate_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {}", e.report());
            EXIT_ERROR
        }
    }
}

/// Runs one generation pass according to the command line.
///
/// # Errors
/// Returns an error if scanning, writing, or formatting fails.
pub fn run_generate_impl(cli: &Cli) -> Result<i32> {
    let config = config_from_cli(cli);
    let mode = mode_from_cli(cli);

    if cli.verbose >= 2 {
        eprintln!("Scanning {} for {}", config.root.display(), config.suffixes.join(", "));
    }

    let report = generate(&config, mode)?;

    if cli.verbose >= 1 {
        for header in report.header_paths() {
            eprintln!("  {header}");
        }
    }

    // --stdout always prints the listing; quiet only silences summaries.
    if !cli.quiet || mode == Mode::Stdout {
        print!("{}", format_report(cli, &report)?);
    }

    Ok(exit_code(&report))
}

#[must_use]
pub fn config_from_cli(cli: &Cli) -> GeneratorConfig {
    let mut config = GeneratorConfig::new(&cli.root)
        .with_suffixes(cli.ext.clone())
        .with_exclude(cli.exclude.clone())
        .with_sort(!cli.no_sort);
    if let Some(output) = &cli.output {
        config = config.with_output(output);
    }
    config
}

#[must_use]
pub const fn mode_from_cli(cli: &Cli) -> Mode {
    if cli.check {
        Mode::Check
    } else if cli.stdout {
        Mode::Stdout
    } else {
        Mode::Write
    }
}

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn format_report(cli: &Cli, report: &GenerationReport) -> Result<String> {
    match cli.format {
        OutputFormat::Text => TextFormatter::new(color_choice_to_mode(cli.color)).format(report),
        OutputFormat::Json => JsonFormatter.format(report),
    }
}

#[must_use]
pub const fn exit_code(report: &GenerationReport) -> i32 {
    match report.state {
        OutputState::Stale => EXIT_STALE,
        OutputState::Written | OutputState::Unchanged | OutputState::Printed => EXIT_SUCCESS,
    }
}

#[cfg(test)]
#[path = "generate_tests.rs"]
mod tests;
