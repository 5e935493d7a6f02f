//! Error types for CLI operations.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Output file already exists
    #[error("{}: Output file already exists", path.display())]
    OutputExists {
        /// Path to the existing file
        path: PathBuf,
    },

    /// Input and output refer to the same file
    #[error("{}: Input and output are the same file", path.display())]
    SameFile {
        /// Path given for both
        path: PathBuf,
    },

    /// Compression or decompression was requested without an output path
    #[error("No output file given")]
    MissingOutput,

    /// Opening the input or creating the output failed
    #[error(transparent)]
    File(chunkz_core::Error),

    /// The conveyor run failed
    #[error("{}: {source}", path.display())]
    Conveyor {
        /// Path to the input file
        path: PathBuf,
        /// Underlying pipeline error
        #[source]
        source: chunkz_core::Error,
    },

    /// Reading an archive for listing failed
    #[error("{}: {source}", path.display())]
    List {
        /// Path to the archive
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Invalid size argument
    #[error("Invalid size: {0}")]
    InvalidSize(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the [`io::ErrorKind`] that best describes this error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Error::OutputExists { .. } => io::ErrorKind::AlreadyExists,
            Error::SameFile { .. } | Error::MissingOutput | Error::InvalidSize(_) => {
                io::ErrorKind::InvalidInput
            }
            Error::File(source) | Error::Conveyor { source, .. } => core_kind(source),
            Error::List { source, .. } => source.kind(),
        }
    }

    /// Attaches the input path to a core error unless the error names one already.
    pub(crate) fn from_core(path: &Path, source: chunkz_core::Error) -> Self {
        match source {
            chunkz_core::Error::OpenInput { .. } | chunkz_core::Error::CreateOutput { .. } => {
                Error::File(source)
            }
            source => Error::Conveyor {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

fn core_kind(err: &chunkz_core::Error) -> io::ErrorKind {
    match err {
        chunkz_core::Error::Io(err)
        | chunkz_core::Error::OpenInput { source: err, .. }
        | chunkz_core::Error::CreateOutput { source: err, .. } => err.kind(),
        chunkz_core::Error::CorruptChunk { .. } => io::ErrorKind::InvalidData,
        chunkz_core::Error::InvalidArgument(_) | chunkz_core::Error::InvalidWorkerCount { .. } => {
            io::ErrorKind::InvalidInput
        }
        chunkz_core::Error::AllocationFailed { .. } => io::ErrorKind::OutOfMemory,
        chunkz_core::Error::WorkerFailed { .. } => io::ErrorKind::Other,
    }
}
