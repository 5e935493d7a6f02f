//! Asynchronous entry points over streams and files.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncWrite, BufReader};

use super::conveyor::Conveyor;
use crate::config::{ConveyorSummary, Mode};
use crate::error::{Error, Result};
use crate::options::ConveyorOptions;

/// Read-ahead buffer for input files; chunk-sized reads bypass it.
const FILE_READ_BUFFER: usize = 64 * 1024;

/// Compresses `reader` into a framed archive written to `writer`.
///
/// # Parameters
///
/// * `reader` - Plain input implementing [`AsyncRead`] + [`Unpin`]
/// * `writer` - Archive destination implementing [`AsyncWrite`] + [`Unpin`]
/// * `options` - Run configuration [`ConveyorOptions`]
///
/// # Returns
///
/// Returns a [`ConveyorSummary`] describing the run.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The options are invalid
/// - Reading from `reader` or writing to `writer` fails
/// - A chunk fails to compress
pub async fn compress_stream<R, W>(
    reader: R,
    writer: W,
    options: &ConveyorOptions,
) -> Result<ConveyorSummary>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let plan = options.plan(Mode::Compress)?;
    Conveyor::new(reader, writer, plan).run().await
}

/// Decompresses a framed archive from `reader` into `writer`.
///
/// # Errors
///
/// This function will return an error if:
///
/// - The options are invalid
/// - Reading from `reader` or writing to `writer` fails
/// - A frame is truncated, declares an invalid length or fails to decode
pub async fn decompress_stream<R, W>(
    reader: R,
    writer: W,
    options: &ConveyorOptions,
) -> Result<ConveyorSummary>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let plan = options.plan(Mode::Decompress)?;
    Conveyor::new(reader, writer, plan).run().await
}

/// Compresses the file at `input` into a new archive at `output`.
///
/// An existing `output` is truncated. A failed run leaves whatever was
/// written so far on disk.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] / [`Error::CreateOutput`] if a file cannot
/// be opened, otherwise the same errors as [`compress_stream`].
pub async fn compress_file_async(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConveyorOptions,
) -> Result<ConveyorSummary> {
    run_file(input.as_ref(), output.as_ref(), Mode::Compress, options).await
}

/// Decompresses the archive at `input` into a new file at `output`.
///
/// # Errors
///
/// Returns [`Error::OpenInput`] / [`Error::CreateOutput`] if a file cannot
/// be opened, otherwise the same errors as [`decompress_stream`].
pub async fn decompress_file_async(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    options: &ConveyorOptions,
) -> Result<ConveyorSummary> {
    run_file(input.as_ref(), output.as_ref(), Mode::Decompress, options).await
}

async fn run_file(
    input: &Path,
    output: &Path,
    mode: Mode,
    options: &ConveyorOptions,
) -> Result<ConveyorSummary> {
    // Validate before touching the filesystem so bad options never create output.
    let plan = options.plan(mode)?;
    log::info!(
        "started {mode} of '{}' into '{}'",
        input.display(),
        output.display()
    );

    let reader = File::open(input)
        .await
        .map_err(|source| Error::OpenInput {
            path: input.to_path_buf(),
            source,
        })?;
    let writer = File::create(output)
        .await
        .map_err(|source| Error::CreateOutput {
            path: output.to_path_buf(),
            source,
        })?;

    Conveyor::new(BufReader::with_capacity(FILE_READ_BUFFER, reader), writer, plan)
        .run()
        .await
}
