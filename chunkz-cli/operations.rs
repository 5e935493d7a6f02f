//! Compression, decompression and listing operations.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chunkz_core::{ConveyorSummary, FrameInfo};

use crate::config::CliConfig;
use crate::error::{Error, Result};
use crate::io::check_output;

/// Compresses `config.input` into `config.output`.
///
/// # Errors
///
/// Returns an error if the output path is missing or refused by
/// [`check_output`], or if the conveyor run fails.
pub fn compress_file(config: &CliConfig) -> Result<ConveyorSummary> {
    let output = prepare_output(config)?;
    chunkz_core::compress_file(&config.input, output, &config.conveyor_options())
        .map_err(|source| Error::from_core(&config.input, source))
}

/// Decompresses the archive `config.input` into `config.output`.
///
/// # Errors
///
/// Returns an error if the output path is missing or refused by
/// [`check_output`], or if the conveyor run fails (including corrupt frames).
pub fn decompress_file(config: &CliConfig) -> Result<ConveyorSummary> {
    let output = prepare_output(config)?;
    chunkz_core::decompress_file(&config.input, output, &config.conveyor_options())
        .map_err(|source| Error::from_core(&config.input, source))
}

/// Reads the frame table of the archive at `path`.
///
/// # Errors
///
/// Returns [`Error::List`] if the file cannot be opened or its framing is
/// broken.
pub fn list_file(path: &Path) -> Result<Vec<FrameInfo>> {
    let list_error = |source| Error::List {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(list_error)?;
    chunkz_core::read_frames(BufReader::new(file)).map_err(list_error)
}

fn prepare_output(config: &CliConfig) -> Result<&Path> {
    let output = config.output.as_deref().ok_or(Error::MissingOutput)?;
    check_output(&config.input, output, config.force)?;
    Ok(output)
}
