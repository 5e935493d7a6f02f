//! A single ring slot: input area, output area and their bookkeeping.

use crate::error::{Error, Result};

/// The input half of a chunk buffer.
///
/// Holds a read window of `capacity` bytes that the source fills. Memory for
/// the whole window is reserved up front, but reads only initialize what they
/// produce. The window only ever grows: a framed read declaring a payload
/// larger than the window enlarges it to exactly that payload length, and
/// later chunks reuse the larger window.
#[derive(Debug)]
pub struct InputArea {
    data: Vec<u8>,
    window: usize,
}

impl InputArea {
    fn with_capacity(capacity: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(capacity)
            .map_err(|_| Error::AllocationFailed { capacity })?;
        Ok(Self {
            data,
            window: capacity,
        })
    }

    /// Size of the read window in bytes.
    pub fn capacity(&self) -> usize {
        self.window
    }

    /// Bytes produced by the last read; zero means end of input.
    pub fn bytes_read(&self) -> usize {
        self.data.len()
    }

    /// The bytes produced by the last read.
    pub fn filled(&self) -> &[u8] {
        &self.data
    }

    /// The backing buffer. Readers append to it and must stay within
    /// [`InputArea::capacity`].
    pub(crate) fn data_mut(&mut self) -> &mut Vec<u8> {
        &mut self.data
    }

    /// Grows the window to at least `len` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the memory cannot be reserved.
    pub(crate) fn ensure_capacity(&mut self, len: usize) -> Result<()> {
        if len > self.window {
            let additional = len.saturating_sub(self.data.len());
            self.data
                .try_reserve_exact(additional)
                .map_err(|_| Error::AllocationFailed { capacity: len })?;
            self.window = len;
        }
        Ok(())
    }
}

/// One reusable slot of the conveyor ring.
///
/// A slot is identified by its ring index, never by the chunk it currently
/// holds. It is owned by exactly one party at a time: the source filling its
/// input area, a processor task transforming input into output, or the sink
/// draining its output area. Ownership moves between them, so the phases can
/// never overlap for the same slot.
#[derive(Debug)]
pub struct ChunkBuffer {
    index: usize,
    input: InputArea,
    output: Vec<u8>,
}

impl ChunkBuffer {
    /// Allocates a slot whose input window holds `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AllocationFailed`] if the input window cannot be allocated.
    pub fn new(index: usize, capacity: usize) -> Result<Self> {
        Ok(Self {
            index,
            input: InputArea::with_capacity(capacity)?,
            output: Vec::new(),
        })
    }

    /// Ring index of this slot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The input area.
    pub fn input(&self) -> &InputArea {
        &self.input
    }

    /// Processed bytes waiting to be written.
    pub fn output(&self) -> &[u8] {
        &self.output
    }

    /// Number of processed bytes waiting to be written.
    pub fn bytes_to_write(&self) -> usize {
        self.output.len()
    }

    /// Combined capacity of both areas in bytes.
    pub fn footprint(&self) -> usize {
        self.input.data.capacity() + self.output.capacity()
    }

    /// Splits the slot into its input and output areas.
    ///
    /// The two halves are disjoint, which is what lets the conveyor write the
    /// previous chunk's output while reading the next chunk's input.
    pub(crate) fn areas_mut(&mut self) -> (&mut InputArea, &mut Vec<u8>) {
        (&mut self.input, &mut self.output)
    }
}
