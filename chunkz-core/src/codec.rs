//! Per-chunk compression codecs.

use std::io::{self, Read, Write};

use flate2::bufread::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::config::MAX_CHUNK_SIZE;
use crate::options::DEFAULT_LEVEL;

/// Compresses and decompresses one whole chunk at a time.
///
/// A single codec instance is shared by every processor task, so both
/// methods may run concurrently on different chunks. Implementations must
/// keep no per-call state in `self`.
pub trait ChunkCodec: Send + Sync + 'static {
    /// Compresses `input` and appends the result to `output`.
    ///
    /// The result must be decodable on its own by [`ChunkCodec::decompress`].
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder fails.
    fn compress(&self, input: &[u8], output: &mut Vec<u8>) -> io::Result<()>;

    /// Decompresses one complete payload and appends the result to `output`.
    ///
    /// # Errors
    ///
    /// Returns an error if `input` is truncated, corrupt, or followed by
    /// trailing bytes.
    fn decompress(&self, input: &[u8], output: &mut Vec<u8>) -> io::Result<()>;
}

/// Gzip codec: every chunk becomes one complete gzip member.
///
/// Decompression refuses to produce more than `output_limit` bytes for a
/// single chunk, [`MAX_CHUNK_SIZE`] by default. No valid archive holds a
/// larger chunk, so a payload inflating past it is treated as corrupt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GzipCodec {
    level: u32,
    output_limit: usize,
}

impl GzipCodec {
    /// Creates a codec using the given compression level (clamped to 0-9).
    pub fn new(level: u32) -> Self {
        Self {
            level: level.min(9),
            output_limit: MAX_CHUNK_SIZE,
        }
    }

    /// Sets the largest number of bytes one chunk may decompress to.
    #[must_use]
    pub fn with_output_limit(mut self, output_limit: usize) -> Self {
        self.output_limit = output_limit;
        self
    }

    /// Returns the compression level.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// Returns the per-chunk decompressed size limit.
    pub fn output_limit(&self) -> usize {
        self.output_limit
    }
}

impl Default for GzipCodec {
    fn default() -> Self {
        Self::new(DEFAULT_LEVEL)
    }
}

impl ChunkCodec for GzipCodec {
    fn compress(&self, input: &[u8], output: &mut Vec<u8>) -> io::Result<()> {
        let mut encoder = GzEncoder::new(output, Compression::new(self.level));
        encoder.write_all(input)?;
        encoder.finish()?;
        Ok(())
    }

    fn decompress(&self, input: &[u8], output: &mut Vec<u8>) -> io::Result<()> {
        let limit = self.output_limit as u64;
        let mut decoder = GzDecoder::new(input);
        let produced = Read::take(&mut decoder, limit.saturating_add(1)).read_to_end(output)?;
        if produced as u64 > limit {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("chunk decompresses to more than {limit} bytes"),
            ));
        }

        let trailing = decoder.into_inner().len();
        if trailing > 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("{trailing} trailing bytes after gzip member"),
            ));
        }
        Ok(())
    }
}
