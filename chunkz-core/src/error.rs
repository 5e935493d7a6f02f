//! Error types and result handling for chunked compression and decompression runs.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias using the crate-level [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure mode of a conveyor run.
///
/// None of these are retried: the first error aborts the run, in-flight
/// processor work is abandoned and the error is returned to the caller.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O failure while reading input or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Failed to open the input file.
    #[error("{}: {source}", path.display())]
    OpenInput {
        /// Path to the input file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Failed to create the output file.
    #[error("{}: {source}", path.display())]
    CreateOutput {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// A framed chunk could not be read or decoded.
    #[error("corrupt chunk #{chunk}: {reason}")]
    CorruptChunk {
        /// Zero-based position of the chunk in the archive
        chunk: u64,
        /// What exactly is wrong with it
        reason: CorruptReason,
    },

    /// Invalid option supplied by the caller.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The requested worker count exceeds [`crate::MAX_WORKERS`].
    #[error("requested {requested} workers exceeds the limit of {maximum}")]
    InvalidWorkerCount {
        /// Number of workers requested by the caller
        requested: u32,
        /// Largest accepted worker count
        maximum: u32,
    },

    /// A chunk buffer could not be allocated or grown.
    #[error("unable to allocate chunk buffer of {capacity} bytes")]
    AllocationFailed {
        /// Size in bytes of the buffer that failed to allocate
        capacity: usize,
    },

    /// A processor task panicked or was cancelled before handing its slot back.
    #[error("worker for slot {slot} failed: {message}")]
    WorkerFailed {
        /// Ring slot the worker was processing
        slot: usize,
        /// Description of the join failure
        message: String,
    },
}

/// Reasons a framed chunk is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CorruptReason {
    /// Input ended inside an 8-byte length header.
    #[error("truncated length header ({available} of 8 bytes)")]
    TruncatedHeader {
        /// Header bytes that were present
        available: usize,
    },

    /// The length header declared an empty payload.
    #[error("zero-length payload")]
    ZeroLength,

    /// The length header declared a payload larger than any valid frame.
    #[error("declared length {declared} exceeds the maximum of {maximum}")]
    Oversized {
        /// Declared payload length
        declared: u64,
        /// Largest accepted payload length
        maximum: u64,
    },

    /// Input ended before the declared payload length was read.
    #[error("truncated payload ({available} of {declared} bytes)")]
    TruncatedPayload {
        /// Declared payload length
        declared: usize,
        /// Payload bytes that were present
        available: usize,
    },

    /// The payload is not a valid compressed stream.
    #[error("undecodable payload: {0}")]
    Payload(String),
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(source) => source,
            Error::OpenInput { ref source, .. } | Error::CreateOutput { ref source, .. } => {
                // Preserve the original error kind
                io::Error::new(source.kind(), err)
            }
            Error::CorruptChunk { .. } => io::Error::new(io::ErrorKind::InvalidData, err),
            Error::InvalidArgument(_) | Error::InvalidWorkerCount { .. } => {
                io::Error::new(io::ErrorKind::InvalidInput, err)
            }
            Error::AllocationFailed { .. } => io::Error::new(io::ErrorKind::OutOfMemory, err),
            Error::WorkerFailed { .. } => io::Error::other(err),
        }
    }
}
