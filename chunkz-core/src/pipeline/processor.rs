//! Parallel chunk transformation.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::buffer::ChunkBuffer;
use crate::codec::ChunkCodec;
use crate::config::Mode;
use crate::error::{CorruptReason, Error, Result};

/// Launches compress-or-decompress work for one slot at a time.
///
/// Each launch moves the slot onto the blocking pool; the slot comes back
/// through the returned handle once its output area is populated.
#[derive(Clone)]
pub(crate) struct ChunkProcessor {
    mode: Mode,
    codec: Arc<dyn ChunkCodec>,
}

impl ChunkProcessor {
    pub(crate) fn new(mode: Mode, codec: Arc<dyn ChunkCodec>) -> Self {
        Self { mode, codec }
    }

    /// Starts processing `slot`, which holds chunk number `chunk`.
    ///
    /// The returned handle is the slot's completion signal: the conveyor may
    /// not touch the slot again until it has been awaited.
    pub(crate) fn launch(&self, slot: ChunkBuffer, chunk: u64) -> JoinHandle<Result<ChunkBuffer>> {
        let mode = self.mode;
        let codec = Arc::clone(&self.codec);
        tokio::task::spawn_blocking(move || process(mode, codec.as_ref(), slot, chunk))
    }
}

/// Transforms the filled part of `slot`'s input area into its output area.
///
/// # Errors
///
/// * [`Error::Io`] - compression failed
/// * [`Error::CorruptChunk`] - the payload could not be decompressed
pub(crate) fn process(
    mode: Mode,
    codec: &dyn ChunkCodec,
    mut slot: ChunkBuffer,
    chunk: u64,
) -> Result<ChunkBuffer> {
    let index = slot.index();
    let (input, output) = slot.areas_mut();
    debug_assert!(input.bytes_read() > 0);
    debug_assert!(output.is_empty());

    match mode {
        Mode::Compress => codec.compress(input.filled(), output)?,
        Mode::Decompress => {
            codec
                .decompress(input.filled(), output)
                .map_err(|err| Error::CorruptChunk {
                    chunk,
                    reason: CorruptReason::Payload(err.to_string()),
                })?;
        }
    }

    log::trace!(
        "slot {index}: {mode}ed chunk #{chunk}, {} -> {} bytes",
        input.bytes_read(),
        output.len()
    );
    Ok(slot)
}
