use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::error::{HeaderIncError, Result};
use crate::include::{IncludeDirective, render};

/// Ensure the parent directory exists for a given path.
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}

/// Overwrite `path` with one directive per line.
///
/// # Errors
/// Returns an error if the file (or its parent directory) cannot be created or written.
pub fn write_includes(path: &Path, directives: &[IncludeDirective]) -> Result<()> {
    write_impl(path, directives).map_err(|source| HeaderIncError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn write_impl(path: &Path, directives: &[IncludeDirective]) -> io::Result<()> {
    ensure_parent_dir(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    for directive in directives {
        writeln!(out, "{directive}")?;
    }
    out.flush()
}

/// Compare the file at `path` against the listing `directives` would produce.
///
/// A missing file counts as out of date.
///
/// # Errors
/// Returns an error if the file exists but cannot be read.
pub fn is_up_to_date(path: &Path, directives: &[IncludeDirective]) -> Result<bool> {
    match fs::read(path) {
        Ok(existing) => Ok(existing == render(directives).as_bytes()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(HeaderIncError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
#[path = "writer_tests.rs"]
mod tests;
