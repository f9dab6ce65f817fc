//! Scan, convert and write: one full generation pass.

use std::path::{Path, PathBuf};

use crate::error::{HeaderIncError, Result};
use crate::include::{IncludeDirective, collect_directives, render};
use crate::scanner::{DEFAULT_HEADER_SUFFIX, DirectoryScanner, FileScanner, HeaderFilter};
use crate::writer::{is_up_to_date, write_includes};

/// Output location relative to the scan root when none is given.
pub const DEFAULT_OUTPUT: &str = "test/header.inc";

/// Everything a generation pass needs, passed in explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub root: PathBuf,
    /// `None` means [`DEFAULT_OUTPUT`] under the resolved root.
    pub output: Option<PathBuf>,
    pub suffixes: Vec<String>,
    pub exclude: Vec<String>,
    pub sort: bool,
}

impl GeneratorConfig {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output: None,
            suffixes: vec![DEFAULT_HEADER_SUFFIX.to_string()],
            exclude: Vec::new(),
            sort: true,
        }
    }

    #[must_use]
    pub fn with_output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = Some(output.into());
        self
    }

    #[must_use]
    pub fn with_suffixes(mut self, suffixes: Vec<String>) -> Self {
        self.suffixes = suffixes;
        self
    }

    #[must_use]
    pub fn with_exclude(mut self, exclude: Vec<String>) -> Self {
        self.exclude = exclude;
        self
    }

    #[must_use]
    pub const fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    fn output_path(&self, resolved_root: &Path) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| resolved_root.join(DEFAULT_OUTPUT))
    }
}

/// What to do with the generated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite the output file.
    #[default]
    Write,
    /// Compare against the output file without touching it.
    Check,
    /// Leave the file alone; the caller prints the listing.
    Stdout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputState {
    /// Output was rewritten with new contents.
    Written,
    /// Output already held the generated listing.
    Unchanged,
    /// Check mode found the output missing or different.
    Stale,
    /// Listing was rendered for stdout only.
    Printed,
}

impl OutputState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Written => "written",
            Self::Unchanged => "unchanged",
            Self::Stale => "stale",
            Self::Printed => "printed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub root: PathBuf,
    pub output: PathBuf,
    pub directives: Vec<IncludeDirective>,
    pub state: OutputState,
}

impl GenerationReport {
    /// Listing contents exactly as they are (or would be) written.
    #[must_use]
    pub fn listing(&self) -> String {
        render(&self.directives)
    }

    #[must_use]
    pub fn header_paths(&self) -> Vec<&str> {
        self.directives
            .iter()
            .map(|d| d.header().relative_path())
            .collect()
    }
}

/// Run one generation pass.
///
/// Scanning completes before the output is opened, so a scan failure leaves
/// any existing output untouched.
///
/// # Errors
/// Returns an error if the root cannot be resolved or read, an exclude pattern
/// is invalid, or the output cannot be read (check mode) or written.
pub fn generate(config: &GeneratorConfig, mode: Mode) -> Result<GenerationReport> {
    let root = dunce::canonicalize(&config.root).map_err(|source| HeaderIncError::FileRead {
        path: config.root.clone(),
        source,
    })?;
    let output = config.output_path(&root);

    let filter = HeaderFilter::new(&config.suffixes, &config.exclude)?;
    let scanner = DirectoryScanner::new(filter);
    let paths = without_output(scanner.scan(&root)?, &output);
    let directives = collect_directives(&root, &paths, config.sort)?;

    let state = match mode {
        Mode::Write => {
            // An unreadable previous output is simply replaced; the write reports real failures.
            let unchanged = matches!(is_up_to_date(&output, &directives), Ok(true));
            write_includes(&output, &directives)?;
            if unchanged {
                OutputState::Unchanged
            } else {
                OutputState::Written
            }
        }
        Mode::Check => {
            if is_up_to_date(&output, &directives)? {
                OutputState::Unchanged
            } else {
                OutputState::Stale
            }
        }
        Mode::Stdout => OutputState::Printed,
    };

    Ok(GenerationReport {
        root,
        output,
        directives,
        state,
    })
}

/// Drop the listing itself from the scan results, so a suffix matching the
/// output name cannot make the listing include itself on the next run.
fn without_output(paths: Vec<PathBuf>, output: &Path) -> Vec<PathBuf> {
    let Ok(output) = dunce::canonicalize(output) else {
        // Not written yet, so the walk cannot have seen it.
        return paths;
    };
    paths.into_iter().filter(|p| *p != output).collect()
}

#[cfg(test)]
#[path = "generator_tests.rs"]
mod tests;
