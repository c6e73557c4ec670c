//! Errors raised while reading alignment inputs.
//!
//! Index construction and search never fail; only the file-facing code
//! returns these.

use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a file or directory failed.
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The first line of a FASTA file is not a `>` header.
    #[error("{}: missing FASTA header line", .path.display())]
    MissingHeader { path: PathBuf },

    /// An expected-output file has no first line.
    #[error("{}: expected output is empty", .path.display())]
    EmptyExpected { path: PathBuf },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for sufalign file operations.
pub type Result<T> = std::result::Result<T, Error>;
