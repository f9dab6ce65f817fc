//! Conversion of discovered header paths into `#include` directives.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{HeaderIncError, Result};

/// A header file, identified by its `/`-separated path relative to the scan root.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HeaderFile {
    relative: String,
}

impl HeaderFile {
    /// Build a header from an absolute (or root-prefixed) path.
    ///
    /// # Errors
    /// Returns an error if `path` does not live under `root`.
    pub fn from_path(root: &Path, path: &Path) -> Result<Self> {
        let relative = path
            .strip_prefix(root)
            .map_err(|_| HeaderIncError::OutsideRoot {
                path: path.to_path_buf(),
                root: root.to_path_buf(),
            })?;
        Ok(Self {
            relative: to_slash(relative),
        })
    }

    #[must_use]
    pub fn relative_path(&self) -> &str {
        &self.relative
    }

    #[must_use]
    pub fn directive(&self) -> IncludeDirective {
        IncludeDirective {
            header: self.clone(),
        }
    }
}

/// Join the normal components of `path` with `/`, independent of the host separator.
fn to_slash(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// `#include "<relative path>"`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeDirective {
    header: HeaderFile,
}

impl IncludeDirective {
    #[must_use]
    pub const fn header(&self) -> &HeaderFile {
        &self.header
    }
}

impl fmt::Display for IncludeDirective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#include \"{}\"", self.header.relative)
    }
}

/// Turn scanned paths into directives.
///
/// With `sort` set, directives are ordered by relative path so that the
/// listing does not depend on directory traversal order.
///
/// # Errors
/// Returns an error if a path is not under `root`.
pub fn collect_directives(
    root: &Path,
    paths: &[PathBuf],
    sort: bool,
) -> Result<Vec<IncludeDirective>> {
    let mut headers = paths
        .iter()
        .map(|p| HeaderFile::from_path(root, p))
        .collect::<Result<Vec<_>>>()?;
    if sort {
        headers.sort();
    }
    Ok(headers.iter().map(HeaderFile::directive).collect())
}

/// Render directives as the listing file contents: one per line, each newline-terminated.
#[must_use]
pub fn render(directives: &[IncludeDirective]) -> String {
    directives.iter().fold(String::new(), |mut out, d| {
        out.push_str(&d.to_string());
        out.push('\n');
        out
    })
}

#[cfg(test)]
#[path = "include_tests.rs"]
mod tests;
