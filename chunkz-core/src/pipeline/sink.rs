//! Sequential chunk writer.

use tokio::io::{AsyncWrite, AsyncWriteExt};

use super::source::Framing;
use crate::error::Result;
use crate::frame::{encode_frame_header, FRAME_HEADER_SIZE};

/// Writes one slot's output area at a time, in the order the conveyor hands
/// slots over.
#[derive(Debug)]
pub(crate) struct ChunkSink<W> {
    writer: W,
    framing: Framing,
    bytes_written: u64,
}

impl<W> ChunkSink<W>
where
    W: AsyncWrite + Unpin,
{
    pub(crate) fn new(writer: W, framing: Framing) -> Self {
        Self {
            writer,
            framing,
            bytes_written: 0,
        }
    }

    /// Total bytes written so far, frame headers included.
    pub(crate) fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Writes `output` (prefixed with its length when framing) and empties it.
    ///
    /// An empty output area afterwards is what marks the slot as reusable.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the underlying write fails.
    pub(crate) async fn write(&mut self, output: &mut Vec<u8>) -> Result<usize> {
        let mut written = 0;
        if self.framing == Framing::Framed {
            self.writer
                .write_all(&encode_frame_header(output.len()))
                .await?;
            written += FRAME_HEADER_SIZE;
        }

        self.writer.write_all(output).await?;
        written += output.len();
        output.clear();

        self.bytes_written += written as u64;
        Ok(written)
    }

    /// Flushes and shuts down the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if flushing fails.
    pub(crate) async fn finish(&mut self) -> Result<()> {
        self.writer.flush().await?;
        self.writer.shutdown().await?;
        Ok(())
    }
}
