use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MemsplitError>;

#[derive(Debug, Error)]
pub enum MemsplitError {
    #[error("cannot read source file {}: {source}", path.display())]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no register array with an initial block found in {}", path.display())]
    NoMatchFound { path: PathBuf },

    #[error("{}: byte {offset}: assignment is not a 'h hex literal: `{line}`", path.display())]
    MalformedAssignment {
        path: PathBuf,
        offset: usize,
        line: String,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl MemsplitError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        MemsplitError::Io {
            path: path.into(),
            source,
        }
    }
}
