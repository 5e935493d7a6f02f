//! Configuration types for CLI operations.

use std::path::PathBuf;

use chunkz_core::{ConveyorOptions, Mode, Workers};

/// Represents the different commands of the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Compress a plain file into a framed archive
    Compress,
    /// Restore a plain file from a framed archive
    Decompress,
    /// Print the frames of an archive without decoding them
    List,
}

impl OperationMode {
    /// Returns the conveyor direction, or `None` for modes that run no conveyor.
    pub fn conveyor_mode(self) -> Option<Mode> {
        match self {
            Self::Compress => Some(Mode::Compress),
            Self::Decompress => Some(Mode::Decompress),
            Self::List => None,
        }
    }
}

/// Configuration for a single CLI invocation.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Operation mode
    pub mode: OperationMode,
    /// Input file
    pub input: PathBuf,
    /// Output file; required for compression and decompression
    pub output: Option<PathBuf>,
    /// Overwrite an existing output file
    pub force: bool,
    /// Suppress the summary line
    pub quiet: bool,
    /// Chunk size in bytes
    pub chunk_size: Option<usize>,
    /// Number of workers
    pub threads: Option<u32>,
    /// Compression level (0-9)
    pub level: Option<u32>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            mode: OperationMode::Compress,
            input: PathBuf::new(),
            output: None,
            force: false,
            quiet: false,
            chunk_size: None,
            threads: None,
            level: None,
        }
    }
}

impl CliConfig {
    /// Builds conveyor options from the command-line overrides.
    ///
    /// Values are passed through as given; the core rejects out-of-range
    /// ones when the run is planned.
    pub fn conveyor_options(&self) -> ConveyorOptions {
        let mut options = ConveyorOptions::default();
        if let Some(chunk_size) = self.chunk_size {
            options = options.with_chunk_size(chunk_size);
        }
        if let Some(threads) = self.threads {
            options = options.with_workers(Workers::Exact(threads));
        }
        if let Some(level) = self.level {
            options = options.with_level(level);
        }
        options
    }
}
