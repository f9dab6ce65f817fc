mod filter;

pub use filter::{DEFAULT_HEADER_SUFFIX, FileFilter, HeaderFilter};

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{HeaderIncError, Result};

/// Trait for scanning directories and finding files.
pub trait FileScanner {
    /// Scan a directory and return all matching file paths, in traversal order.
    ///
    /// # Errors
    /// Returns an error if the root or any directory below it cannot be read.
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>>;
}

pub struct DirectoryScanner<F: FileFilter> {
    filter: F,
}

impl<F: FileFilter> DirectoryScanner<F> {
    #[must_use]
    pub const fn new(filter: F) -> Self {
        Self { filter }
    }

    fn is_match(&self, root: &Path, path: &Path) -> bool {
        // Entries yielded by WalkDir always start with the root they were created from.
        path.strip_prefix(root)
            .is_ok_and(|relative| self.filter.should_include(relative))
    }
}

impl<F: FileFilter> FileScanner for DirectoryScanner<F> {
    fn scan(&self, root: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        for entry in WalkDir::new(root) {
            let entry = entry.map_err(|source| HeaderIncError::Walk {
                path: source.path().unwrap_or(root).to_path_buf(),
                source,
            })?;
            if entry.file_type().is_file() && self.is_match(root, entry.path()) {
                files.push(entry.into_path());
            }
        }
        Ok(files)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
