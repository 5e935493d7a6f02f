//! Shared constants and types describing a conveyor run.

use std::fmt;

/// Default size of one input chunk (10 MiB).
pub const DEFAULT_CHUNK_SIZE: usize = 10 * 1024 * 1024;

/// Largest accepted chunk size (1 GiB).
pub const MAX_CHUNK_SIZE: usize = 1024 * 1024 * 1024;

/// Direction of a conveyor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Read raw fixed-size chunks, write length-prefixed compressed frames.
    Compress,
    /// Read length-prefixed compressed frames, write raw decompressed bytes.
    Decompress,
}

impl Mode {
    /// Returns `true` for [`Mode::Decompress`].
    pub const fn is_decompress(self) -> bool {
        matches!(self, Mode::Decompress)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Compress => f.write_str("compress"),
            Mode::Decompress => f.write_str("decompress"),
        }
    }
}

/// Lifecycle of a conveyor run.
///
/// A run only ever moves forward: `Running` until the source reports end of
/// input, `Draining` while the remaining in-flight slots are written, and
/// `Closed` once streams and tasks have been released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConveyorState {
    /// Reading, processing and writing chunks.
    Running,
    /// Input exhausted, flushing the slots still in flight.
    Draining,
    /// Everything released; the conveyor cannot be resumed.
    Closed,
}

/// Statistical summary of a completed conveyor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConveyorSummary {
    /// Number of chunks that went through the conveyor.
    pub chunks: u64,

    /// Total number of bytes read from the input, frame headers included.
    pub bytes_read: u64,

    /// Total number of bytes written to the output, frame headers included.
    pub bytes_written: u64,

    /// Number of ring slots (and therefore chunk buffers) allocated.
    pub slots: usize,

    /// Peak combined capacity, in bytes, of all slot buffers.
    pub buffer_bytes: usize,
}

impl ConveyorSummary {
    /// Calculates the ratio of output to input size.
    ///
    /// # Returns
    ///
    /// A value less than 1.0 indicates the output is smaller than the input,
    /// a value greater than 1.0 that it grew.
    #[allow(clippy::cast_precision_loss)]
    pub fn compression_ratio(&self) -> f64 {
        if self.bytes_read == 0 {
            if self.bytes_written == 0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            self.bytes_written as f64 / self.bytes_read as f64
        }
    }

    /// Calculates the space saved as a percentage of the input size.
    ///
    /// Negative values mean the output was larger than the input.
    pub fn space_saved_percent(&self) -> f64 {
        if self.bytes_read == 0 {
            0.0
        } else {
            (1.0 - self.compression_ratio()) * 100.0
        }
    }
}
