//! High-level command processing and CLI orchestration.

use std::io;

use chunkz_core::{ConveyorSummary, FrameInfo, FRAME_HEADER_SIZE};

use crate::config::{CliConfig, OperationMode};
use crate::error::Result;
use crate::operations::{compress_file, decompress_file, list_file};
use crate::utils::bytes::format_size;

/// Outcome of a successful command.
#[derive(Debug)]
pub enum Report {
    /// A compression or decompression run finished
    Conveyor(ConveyorSummary),
    /// An archive was listed
    Frames(Vec<FrameInfo>),
}

/// Runs the command described by `config`.
///
/// # Errors
///
/// Returns an error if the output path is refused, the input cannot be
/// opened, or the operation itself fails.
pub fn process_file(config: &CliConfig) -> Result<Report> {
    log::debug!(
        "{:?}: {} -> {:?}",
        config.mode,
        config.input.display(),
        config.output
    );

    match config.mode {
        OperationMode::Compress => compress_file(config).map(Report::Conveyor),
        OperationMode::Decompress => decompress_file(config).map(Report::Conveyor),
        OperationMode::List => list_file(&config.input).map(Report::Frames),
    }
}

/// Formats the one-line summary printed after a conveyor run.
pub fn format_summary(mode: OperationMode, summary: &ConveyorSummary) -> String {
    let verb = match mode {
        OperationMode::Compress => "compressed",
        OperationMode::Decompress => "decompressed",
        OperationMode::List => "listed",
    };

    let ratio = match mode {
        OperationMode::Compress => format!(" ({:.1}% saved)", summary.space_saved_percent()),
        _ => String::new(),
    };

    format!(
        "{verb} {} -> {}{ratio}, {} chunks, {} workers",
        format_size(summary.bytes_read),
        format_size(summary.bytes_written),
        summary.chunks,
        summary.slots,
    )
}

/// Formats the frame table of an archive, one frame per line plus a total.
pub fn format_frames(frames: &[FrameInfo]) -> String {
    let mut out = String::from("  Frame       Offset   Compressed\n");
    let mut total = 0u64;

    for (index, frame) in frames.iter().enumerate() {
        out.push_str(&format!(
            "{index:>7} {:>12} {:>12}\n",
            frame.offset,
            format_size(frame.payload_len as u64),
        ));
        total += (FRAME_HEADER_SIZE + frame.payload_len) as u64;
    }

    out.push_str(&format!(
        "{} frames, {} total\n",
        frames.len(),
        format_size(total)
    ));
    out
}

/// Runs one CLI command and prints its outcome.
///
/// Summaries go to standard error and are suppressed by `quiet`; frame
/// listings always go to standard output.
///
/// # Errors
///
/// Returns an error carrying the program name and the failure message.
pub fn run_cli(config: &CliConfig, program: &str) -> io::Result<()> {
    let report = process_file(config).map_err(|err| {
        log::debug!("{err:?}");
        io::Error::new(err.kind(), format!("{program}: {err}"))
    })?;

    match report {
        Report::Conveyor(summary) => {
            if !config.quiet {
                eprintln!("{program}: {}", format_summary(config.mode, &summary));
            }
        }
        Report::Frames(frames) => print!("{}", format_frames(&frames)),
    }

    Ok(())
}
