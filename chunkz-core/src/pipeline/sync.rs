//! Blocking entry points.
//!
//! Each call drives the async conveyor on its own current-thread runtime;
//! processors still run in parallel on that runtime's blocking pool. These
//! functions must not be called from inside an async context.

use std::path::Path;

use tokio::runtime::{Builder, Runtime};

use super::r#async::{compress_file_async, decompress_file_async};
use crate::config::ConveyorSummary;
use crate::error::Result;
use crate::options::ConveyorOptions;

/// Compresses the file at `input` into a new archive at `output`.
///
/// # Errors
///
/// Returns an error if the runtime cannot be started, otherwise the same
/// errors as [`compress_file_async`].
pub fn compress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConveyorOptions,
) -> Result<ConveyorSummary> {
    runtime()?.block_on(compress_file_async(input, output, options))
}

/// Decompresses the archive at `input` into a new file at `output`.
///
/// # Errors
///
/// Returns an error if the runtime cannot be started, otherwise the same
/// errors as [`decompress_file_async`].
pub fn decompress_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConveyorOptions,
) -> Result<ConveyorSummary> {
    runtime()?.block_on(decompress_file_async(input, output, options))
}

fn runtime() -> Result<Runtime> {
    Ok(Builder::new_current_thread().enable_all().build()?)
}
