//! # chunkz-core
//!
//! Parallel, order-preserving chunked compression for very large files.
//!
//! Input is split into fixed-size chunks which are compressed (or decompressed)
//! independently on a pool of blocking workers and written back out in their
//! original order. Memory use is bounded by a small ring of reusable chunk
//! buffers, one per worker, regardless of the size of the file.
//!
//! Compressed archives are a plain sequence of length-prefixed frames:
//!
//! ```text
//! [u64 LE payload length][payload] [u64 LE payload length][payload] ...
//! ```
//!
//! Every payload is a complete gzip member, so frames decode independently.

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod frame;
pub mod options;
pub mod pipeline;
pub mod threading;

pub use codec::{ChunkCodec, GzipCodec};
pub use config::{ConveyorState, ConveyorSummary, Mode, DEFAULT_CHUNK_SIZE, MAX_CHUNK_SIZE};
pub use error::{CorruptReason, Error, Result};
pub use frame::{read_frames, FrameInfo, FRAME_HEADER_SIZE, MAX_FRAME_LEN};
pub use options::{ConveyorOptions, ConveyorPlan};
pub use pipeline::{
    compress_file, compress_file_async, compress_stream, decompress_file, decompress_file_async,
    decompress_stream, Conveyor,
};
pub use threading::{choose_worker_count, Workers, MAX_WORKERS};
