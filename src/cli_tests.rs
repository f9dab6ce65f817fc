use std::path::PathBuf;

use super::*;

#[test]
fn cli_defaults() {
    let cli = Cli::parse_from(["header-inc"]);
    assert_eq!(cli.root, PathBuf::from("."));
    assert_eq!(cli.output, None);
    assert_eq!(cli.ext, vec!["h".to_string()]);
    assert!(cli.exclude.is_empty());
    assert!(!cli.no_sort);
    assert!(!cli.check);
    assert!(!cli.stdout);
    assert_eq!(cli.format, OutputFormat::Text);
    assert_eq!(cli.verbose, 0);
    assert!(!cli.quiet);
}

#[test]
fn cli_with_root_and_output() {
    let cli = Cli::parse_from(["header-inc", "src", "--output", "build/all.inc"]);
    assert_eq!(cli.root, PathBuf::from("src"));
    assert_eq!(cli.output, Some(PathBuf::from("build/all.inc")));
}

#[test]
fn cli_with_extensions() {
    let cli = Cli::parse_from(["header-inc", "--ext", "h,hpp,hh"]);
    assert_eq!(
        cli.ext,
        vec!["h".to_string(), "hpp".to_string(), "hh".to_string()]
    );
}

#[test]
fn cli_with_multiple_excludes() {
    let cli = Cli::parse_from(["header-inc", "-x", "vendor/**", "--exclude", "**/*_impl.h"]);
    assert_eq!(
        cli.exclude,
        vec!["vendor/**".to_string(), "**/*_impl.h".to_string()]
    );
}

#[test]
fn cli_json_format() {
    let cli = Cli::parse_from(["header-inc", "--format", "json"]);
    assert_eq!(cli.format, OutputFormat::Json);
}

#[test]
fn cli_invalid_format_rejected() {
    let result = Cli::try_parse_from(["header-inc", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn cli_verbose_counts() {
    let cli = Cli::parse_from(["header-inc", "-vv"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn cli_check_conflicts_with_stdout() {
    let result = Cli::try_parse_from(["header-inc", "--check", "--stdout"]);
    assert!(result.is_err());
}

#[test]
fn cli_color_never() {
    let cli = Cli::parse_from(["header-inc", "--color", "never"]);
    assert!(matches!(cli.color, ColorChoice::Never));
}
