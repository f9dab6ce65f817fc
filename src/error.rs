use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeaderIncError {
    #[error("Failed to scan directory: {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("Path {path} is not under scan root {root}")]
    OutsideRoot { path: PathBuf, root: PathBuf },

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl HeaderIncError {
    /// Render the error together with its chain of sources, one per line.
    #[must_use]
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str("\n  caused by: ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

pub type Result<T> = std::result::Result<T, HeaderIncError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
