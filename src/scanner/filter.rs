use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{HeaderIncError, Result};

pub const DEFAULT_HEADER_SUFFIX: &str = ".h";

pub trait FileFilter {
    /// Decide whether a file, given by its path relative to the scan root, is kept.
    fn should_include(&self, relative: &Path) -> bool;
}

/// Keeps files whose name ends with one of the header suffixes and that match
/// none of the exclude patterns.
pub struct HeaderFilter {
    suffixes: Vec<String>,
    exclude_patterns: GlobSet,
}

impl HeaderFilter {
    /// Create a new filter with the given suffixes and exclude patterns.
    ///
    /// Suffixes are compared case-sensitively against the end of the file name.
    /// A suffix given without a leading dot (`hpp`) is treated as `.hpp`.
    ///
    /// # Errors
    /// Returns an error if any exclude pattern is invalid.
    pub fn new(suffixes: &[String], exclude_patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in exclude_patterns {
            let glob = Glob::new(pattern).map_err(|e| HeaderIncError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            builder.add(glob);
        }
        let exclude_patterns = builder
            .build()
            .map_err(|e| HeaderIncError::InvalidPattern {
                pattern: "combined patterns".to_string(),
                source: e,
            })?;

        Ok(Self {
            suffixes: suffixes.iter().map(|s| normalize_suffix(s)).collect(),
            exclude_patterns,
        })
    }

    #[must_use]
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }

    fn has_header_suffix(&self, path: &Path) -> bool {
        // Compared on raw bytes so non-UTF-8 names are still matched.
        path.file_name().is_some_and(|name| {
            let name = name.as_encoded_bytes();
            self.suffixes.iter().any(|s| name.ends_with(s.as_bytes()))
        })
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.exclude_patterns.is_match(path)
    }
}

impl Default for HeaderFilter {
    fn default() -> Self {
        Self {
            suffixes: vec![DEFAULT_HEADER_SUFFIX.to_string()],
            exclude_patterns: GlobSet::empty(),
        }
    }
}

impl FileFilter for HeaderFilter {
    fn should_include(&self, relative: &Path) -> bool {
        self.has_header_suffix(relative) && !self.is_excluded(relative)
    }
}

fn normalize_suffix(suffix: &str) -> String {
    if suffix.starts_with('.') {
        suffix.to_string()
    } else {
        format!(".{suffix}")
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
