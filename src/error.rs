use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TidyError>;

/// Errors that abort an operation before it touches the tree.
///
/// Failures on individual entries are not errors; they are collected as
/// [`crate::domain::ItemFailure`] in the run report.
#[derive(Debug, Error)]
pub enum TidyError {
    #[error("path not found -> {path}")]
    RootNotFound { path: PathBuf },

    #[error("the path '{path}' is not a folder")]
    NotADirectory { path: PathBuf },

    #[error("I/O failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not read from the terminal: {0}")]
    Prompt(#[source] std::io::Error),

    #[error("no path was entered")]
    EmptyInput,
}

impl TidyError {
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}
