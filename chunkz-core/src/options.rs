//! Configuration builder for conveyor runs.

use crate::config::{Mode, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
use crate::error::{Error, Result};
use crate::threading::{sanitize_workers, Workers};

/// Default gzip compression level.
pub const DEFAULT_LEVEL: u32 = 6;

/// Options shared by compression and decompression runs.
///
/// # Examples
///
/// ```
/// use chunkz_core::{ConveyorOptions, Workers};
///
/// let options = ConveyorOptions::default()
///     .with_chunk_size(4 * 1024 * 1024)
///     .with_workers(Workers::Exact(4))
///     .with_level(9);
/// assert_eq!(options.chunk_size(), 4 * 1024 * 1024);
/// ```
#[derive(Debug, Clone)]
pub struct ConveyorOptions {
    chunk_size: usize,
    workers: Workers,
    level: u32,
    halve_for_decompress: bool,
}

impl Default for ConveyorOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            workers: Workers::Auto,
            level: DEFAULT_LEVEL,
            halve_for_decompress: true,
        }
    }
}

impl ConveyorOptions {
    /// Sets the chunk size in bytes.
    ///
    /// When compressing this is the size of every raw input window (the last
    /// one may be shorter). When decompressing it is only the initial capacity
    /// of each slot's input buffer; frames larger than that grow the buffer.
    #[must_use]
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Sets the worker count, which is also the number of ring slots.
    #[must_use]
    pub fn with_workers(mut self, workers: Workers) -> Self {
        self.workers = workers;
        self
    }

    /// Sets the gzip compression level (0-9). Ignored when decompressing.
    #[must_use]
    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    /// Enables or disables halving the automatic worker count for decompression.
    #[must_use]
    pub fn with_halve_for_decompress(mut self, halve: bool) -> Self {
        self.halve_for_decompress = halve;
        self
    }

    /// Returns the configured chunk size.
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Returns the configured worker setting.
    pub fn workers(&self) -> Workers {
        self.workers
    }

    /// Returns the configured compression level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Validates the options and resolves them into a concrete plan for `mode`.
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidArgument`] - chunk size outside `1..=MAX_CHUNK_SIZE`,
    ///   compression level above 9, or an explicit worker count of zero
    /// * [`Error::InvalidWorkerCount`] - explicit worker count above the limit
    pub fn plan(&self, mode: Mode) -> Result<ConveyorPlan> {
        if self.chunk_size == 0 || self.chunk_size > MAX_CHUNK_SIZE {
            return Err(Error::InvalidArgument(format!(
                "chunk size {} is outside 1..={MAX_CHUNK_SIZE}",
                self.chunk_size
            )));
        }
        if self.level > 9 {
            return Err(Error::InvalidArgument(format!(
                "unsupported compression level {} (must be 0-9)",
                self.level
            )));
        }

        let halve = mode.is_decompress() && self.halve_for_decompress;
        let workers = sanitize_workers(self.workers, halve)?;

        Ok(ConveyorPlan {
            mode,
            chunk_size: self.chunk_size,
            workers,
            level: self.level,
        })
    }
}

/// Validated, fully resolved parameters of one conveyor run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConveyorPlan {
    /// Direction of the run.
    pub mode: Mode,
    /// Chunk size (compression) or initial slot capacity (decompression).
    pub chunk_size: usize,
    /// Number of ring slots and concurrent processors.
    pub workers: usize,
    /// Gzip compression level.
    pub level: u32,
}
