//! Sequential chunk reader.

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::buffer::InputArea;
use crate::config::Mode;
use crate::error::{CorruptReason, Error, Result};
use crate::frame::{decode_frame_header, FRAME_HEADER_SIZE};

/// How chunks are delimited in the input stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Framing {
    /// Fixed-size windows of plain bytes.
    Raw,
    /// Length-prefixed frames.
    Framed,
}

impl Framing {
    /// Framing of the input side of a run.
    pub(crate) const fn input_of(mode: Mode) -> Self {
        match mode {
            Mode::Compress => Framing::Raw,
            Mode::Decompress => Framing::Framed,
        }
    }

    /// Framing of the output side of a run.
    pub(crate) const fn output_of(mode: Mode) -> Self {
        match mode {
            Mode::Compress => Framing::Framed,
            Mode::Decompress => Framing::Raw,
        }
    }
}

/// Reads one chunk at a time into a slot's input area.
///
/// Only the conveyor calls it, always for the next slot in rotation order,
/// so reads are strictly sequential.
#[derive(Debug)]
pub(crate) struct ChunkSource<R> {
    reader: R,
    framing: Framing,
    chunks: u64,
    bytes_read: u64,
}

impl<R> ChunkSource<R>
where
    R: AsyncRead + Unpin,
{
    pub(crate) fn new(reader: R, framing: Framing) -> Self {
        Self {
            reader,
            framing,
            chunks: 0,
            bytes_read: 0,
        }
    }

    /// Total bytes consumed from the input so far, frame headers included.
    pub(crate) fn bytes_read(&self) -> u64 {
        self.bytes_read
    }

    /// Reads the next chunk into `input` and returns its size.
    ///
    /// Zero means the input is exhausted.
    ///
    /// # Errors
    ///
    /// * [`Error::Io`] - the underlying read failed
    /// * [`Error::CorruptChunk`] - a frame header or payload is truncated or invalid
    /// * [`Error::AllocationFailed`] - the window could not grow to a frame's length
    pub(crate) async fn read(&mut self, input: &mut InputArea) -> Result<usize> {
        input.data_mut().clear();
        let read = match self.framing {
            Framing::Raw => self.read_raw(input).await?,
            Framing::Framed => self.read_framed(input).await?,
        };
        if read > 0 {
            self.chunks += 1;
        }
        Ok(read)
    }

    async fn read_raw(&mut self, input: &mut InputArea) -> Result<usize> {
        let window = input.capacity();
        let read = fill(&mut self.reader, input.data_mut(), window).await?;
        self.bytes_read += read as u64;
        Ok(read)
    }

    async fn read_framed(&mut self, input: &mut InputArea) -> Result<usize> {
        let mut header = [0u8; FRAME_HEADER_SIZE];
        let available = read_up_to(&mut self.reader, &mut header).await?;
        self.bytes_read += available as u64;

        if available == 0 {
            return Ok(0);
        }
        if available < FRAME_HEADER_SIZE {
            return Err(self.corrupt(CorruptReason::TruncatedHeader { available }));
        }

        let declared = decode_frame_header(header).map_err(|reason| self.corrupt(reason))?;
        input.ensure_capacity(declared)?;

        let available = fill(&mut self.reader, input.data_mut(), declared).await?;
        self.bytes_read += available as u64;

        if available < declared {
            return Err(self.corrupt(CorruptReason::TruncatedPayload {
                declared,
                available,
            }));
        }
        Ok(declared)
    }

    fn corrupt(&self, reason: CorruptReason) -> Error {
        Error::CorruptChunk {
            chunk: self.chunks,
            reason,
        }
    }
}

/// Appends up to `len` bytes from `reader` to the empty `data`, stopping
/// early only at end of input.
async fn fill<R>(reader: &mut R, data: &mut Vec<u8>, len: usize) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    while data.len() < len {
        let remaining = (len - data.len()) as u64;
        let n = (&mut *reader).take(remaining).read_buf(data).await?;
        if n == 0 {
            break;
        }
    }
    Ok(data.len())
}

/// Fills `buf` from `reader`, stopping early only at end of input.
async fn read_up_to<R>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut filled = 0;
    while filled < buf.len() {
        let n = reader.read(&mut buf[filled..]).await?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
