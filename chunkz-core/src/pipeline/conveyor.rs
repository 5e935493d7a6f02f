//! The conveyor: ordered read -> process -> write rotation over a fixed ring.

use std::sync::Arc;

use tokio::io::{AsyncRead, AsyncWrite};
use tokio::task::JoinHandle;

use super::processor::ChunkProcessor;
use super::sink::ChunkSink;
use super::source::{ChunkSource, Framing};
use crate::buffer::ChunkBuffer;
use crate::codec::{ChunkCodec, GzipCodec};
use crate::config::{ConveyorState, ConveyorSummary};
use crate::error::{Error, Result};
use crate::options::ConveyorPlan;

/// What a ring position currently holds.
enum RingEntry {
    /// A processor task owns the slot; awaiting the task returns it.
    Processing {
        chunk: u64,
        task: JoinHandle<Result<ChunkBuffer>>,
    },
    /// The slot has no further work; reaching it in rotation ends the run.
    Retired,
}

/// Drives one compression or decompression run.
///
/// The conveyor owns a ring of `plan.workers` slots. It fills every slot in
/// order and launches a processor on each, then rotates over the ring: wait
/// for the slot's processor, write its output, read the next chunk into the
/// same slot and relaunch. Write order is decided only by the rotation index,
/// so output chunks come out in input order no matter which processor
/// finishes first, and at most `plan.workers` chunks are ever in flight.
pub struct Conveyor<R, W> {
    plan: ConveyorPlan,
    source: ChunkSource<R>,
    sink: ChunkSink<W>,
    processor: ChunkProcessor,
    state: ConveyorState,
    chunks_read: u64,
    chunks_written: u64,
    buffer_bytes: usize,
}

impl<R, W> Conveyor<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Creates a conveyor reading from `reader` and writing to `writer`.
    ///
    /// Chunks are processed with a [`GzipCodec`] at `plan.level`.
    pub fn new(reader: R, writer: W, plan: ConveyorPlan) -> Self {
        Self {
            source: ChunkSource::new(reader, Framing::input_of(plan.mode)),
            sink: ChunkSink::new(writer, Framing::output_of(plan.mode)),
            processor: ChunkProcessor::new(plan.mode, Arc::new(GzipCodec::new(plan.level))),
            plan,
            state: ConveyorState::Running,
            chunks_read: 0,
            chunks_written: 0,
            buffer_bytes: 0,
        }
    }

    /// Replaces the codec used by the processors.
    #[must_use]
    pub fn with_codec(mut self, codec: Arc<dyn ChunkCodec>) -> Self {
        self.processor = ChunkProcessor::new(self.plan.mode, codec);
        self
    }

    /// The resolved parameters of this run.
    pub fn plan(&self) -> &ConveyorPlan {
        &self.plan
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ConveyorState {
        self.state
    }

    /// Runs the conveyor to completion.
    ///
    /// Streams and pending tasks are released on every exit path. Output
    /// written before a failure is left as-is.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the source, a processor or the sink;
    /// see [`Error`] for the possible kinds.
    pub async fn run(mut self) -> Result<ConveyorSummary> {
        log::info!(
            "{} started: chunk size {}, {} workers",
            self.plan.mode,
            self.plan.chunk_size,
            self.plan.workers
        );

        let mut ring = Vec::with_capacity(self.plan.workers);
        let outcome = self.drive(&mut ring).await;
        self.close(ring);

        match outcome {
            Ok(()) => {
                let summary = ConveyorSummary {
                    chunks: self.chunks_written,
                    bytes_read: self.source.bytes_read(),
                    bytes_written: self.sink.bytes_written(),
                    slots: self.plan.workers,
                    buffer_bytes: self.buffer_bytes,
                };
                log::info!(
                    "{} finished: {} chunks, {} -> {} bytes",
                    self.plan.mode,
                    summary.chunks,
                    summary.bytes_read,
                    summary.bytes_written
                );
                Ok(summary)
            }
            Err(err) => {
                log::warn!("{} failed: {err}", self.plan.mode);
                Err(err)
            }
        }
    }

    async fn drive(&mut self, ring: &mut Vec<RingEntry>) -> Result<()> {
        let slots = self.allocate()?;
        self.start(slots, ring).await?;
        self.rotate(ring).await?;
        self.sink.finish().await
    }

    fn allocate(&self) -> Result<Vec<ChunkBuffer>> {
        log::debug!(
            "creating {} chunk buffers of {} bytes",
            self.plan.workers,
            self.plan.chunk_size
        );
        (0..self.plan.workers)
            .map(|index| ChunkBuffer::new(index, self.plan.chunk_size))
            .collect()
    }

    /// Fills every slot in ring order and launches its processor.
    ///
    /// Once the input runs dry the remaining slots are retired untouched.
    async fn start(&mut self, slots: Vec<ChunkBuffer>, ring: &mut Vec<RingEntry>) -> Result<()> {
        for mut slot in slots {
            if self.state == ConveyorState::Running && self.fill(&mut slot).await? > 0 {
                ring.push(self.launch(slot));
            } else {
                self.retire(slot);
                ring.push(RingEntry::Retired);
            }
        }
        Ok(())
    }

    /// Steady-state rotation until a retired slot comes up.
    async fn rotate(&mut self, ring: &mut [RingEntry]) -> Result<()> {
        let mut idx = 0;
        loop {
            let (chunk, task) = match std::mem::replace(&mut ring[idx], RingEntry::Retired) {
                RingEntry::Processing { chunk, task } => (chunk, task),
                RingEntry::Retired => {
                    log::debug!("slot {idx} is retired, all chunks written");
                    return Ok(());
                }
            };

            log::trace!("slot {idx}: waiting for chunk #{chunk}");
            let mut slot = join(idx, task).await?;
            let index = slot.index();
            let (input, output) = slot.areas_mut();

            if self.state == ConveyorState::Running {
                // The write drains the output area while the read refills the
                // input area of the same slot.
                let (written, read) =
                    tokio::try_join!(self.sink.write(output), self.source.read(input))?;
                log::trace!("slot {index}: wrote chunk #{chunk}, {written} bytes");
                self.chunks_written += 1;

                if read > 0 {
                    log::trace!("slot {index}: read {read} bytes");
                    ring[idx] = self.launch(slot);
                } else {
                    self.transition(ConveyorState::Draining);
                    self.retire(slot);
                }
            } else {
                let written = self.sink.write(output).await?;
                log::trace!("slot {index}: wrote chunk #{chunk}, {written} bytes");
                self.chunks_written += 1;
                self.retire(slot);
            }

            idx = (idx + 1) % ring.len();
        }
    }

    async fn fill(&mut self, slot: &mut ChunkBuffer) -> Result<usize> {
        let index = slot.index();
        let (input, _) = slot.areas_mut();
        let read = self.source.read(input).await?;
        if read == 0 {
            self.transition(ConveyorState::Draining);
        } else {
            log::trace!("slot {index}: read {read} bytes");
        }
        Ok(read)
    }

    fn launch(&mut self, slot: ChunkBuffer) -> RingEntry {
        let chunk = self.chunks_read;
        self.chunks_read += 1;
        RingEntry::Processing {
            chunk,
            task: self.processor.launch(slot, chunk),
        }
    }

    fn retire(&mut self, slot: ChunkBuffer) {
        // Slot capacity never shrinks, so its size at retirement is its peak.
        self.buffer_bytes += slot.footprint();
        log::trace!("slot {} retired", slot.index());
    }

    fn close(&mut self, ring: Vec<RingEntry>) {
        for entry in ring {
            if let RingEntry::Processing { task, .. } = entry {
                task.abort();
            }
        }
        self.transition(ConveyorState::Closed);
    }

    fn transition(&mut self, next: ConveyorState) {
        if self.state != next {
            log::debug!("conveyor {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }
}

async fn join(slot: usize, task: JoinHandle<Result<ChunkBuffer>>) -> Result<ChunkBuffer> {
    match task.await {
        Ok(result) => result,
        Err(err) => Err(Error::WorkerFailed {
            slot,
            message: err.to_string(),
        }),
    }
}
