//! Length-prefixed frame format used by compressed archives.
//!
//! An archive is a sequence of frames with no file-level header or trailer:
//!
//! ```text
//! [8 bytes: payload length L, unsigned little-endian][L bytes: payload]
//! ```

use std::io;

use crate::error::CorruptReason;

/// Size of a frame length header in bytes.
pub const FRAME_HEADER_SIZE: usize = 8;

/// Largest payload length accepted from a frame header (4 GiB).
///
/// Headers declaring more than this are treated as corrupt before any buffer
/// is grown to hold the payload.
pub const MAX_FRAME_LEN: u64 = 4 * 1024 * 1024 * 1024;

/// Encodes the length header for a payload of `len` bytes.
pub fn encode_frame_header(len: usize) -> [u8; FRAME_HEADER_SIZE] {
    (len as u64).to_le_bytes()
}

/// Decodes and validates a frame length header.
///
/// # Errors
///
/// * [`CorruptReason::ZeroLength`] - the header declares an empty payload
/// * [`CorruptReason::Oversized`] - the length exceeds [`MAX_FRAME_LEN`] or
///   does not fit in memory on this platform
pub fn decode_frame_header(header: [u8; FRAME_HEADER_SIZE]) -> Result<usize, CorruptReason> {
    let declared = u64::from_le_bytes(header);
    if declared == 0 {
        return Err(CorruptReason::ZeroLength);
    }
    if declared > MAX_FRAME_LEN {
        return Err(CorruptReason::Oversized {
            declared,
            maximum: MAX_FRAME_LEN,
        });
    }
    usize::try_from(declared).map_err(|_| CorruptReason::Oversized {
        declared,
        maximum: MAX_FRAME_LEN,
    })
}

/// Position and size of one frame inside an archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Byte offset of the frame header.
    pub offset: u64,
    /// Length of the payload that follows the header.
    pub payload_len: usize,
}

/// Walks an archive and returns the location of every frame, in order.
///
/// Payloads are skipped, not decoded. The reader is consumed to the end.
///
/// # Errors
///
/// Returns an [`io::ErrorKind::InvalidData`] error wrapping the
/// [`CorruptReason`] if a header is truncated or invalid or a payload is
/// shorter than declared, and passes through any read failure.
pub fn read_frames(mut reader: impl io::Read) -> io::Result<Vec<FrameInfo>> {
    let mut frames = Vec::new();
    let mut offset = 0u64;

    loop {
        let mut header = [0u8; FRAME_HEADER_SIZE];
        let available = read_up_to(&mut reader, &mut header)?;
        if available == 0 {
            return Ok(frames);
        }
        if available < FRAME_HEADER_SIZE {
            return Err(invalid_data(CorruptReason::TruncatedHeader { available }));
        }

        let payload_len = decode_frame_header(header).map_err(invalid_data)?;
        let skipped = io::copy(
            &mut io::Read::take(&mut reader, payload_len as u64),
            &mut io::sink(),
        )?;
        if skipped < payload_len as u64 {
            return Err(invalid_data(CorruptReason::TruncatedPayload {
                declared: payload_len,
                available: skipped as usize,
            }));
        }

        frames.push(FrameInfo {
            offset,
            payload_len,
        });
        offset += (FRAME_HEADER_SIZE + payload_len) as u64;
    }
}

fn read_up_to(reader: &mut impl io::Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(err),
        }
    }
    Ok(filled)
}

fn invalid_data(reason: CorruptReason) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, reason)
}
