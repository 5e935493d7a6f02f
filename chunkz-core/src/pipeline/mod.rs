//! The chunk conveyor and its entry points.
//!
//! A [`Conveyor`] ties together a sequential chunk source, parallel chunk
//! processors and a sequential chunk sink. The stream and file functions
//! below are thin wrappers that validate options and run one conveyor.

mod r#async;
mod conveyor;
mod processor;
mod sink;
mod source;
mod sync;

pub use conveyor::Conveyor;
pub use r#async::{
    compress_file_async, compress_stream, decompress_file_async, decompress_stream,
};
pub use sync::{compress_file, decompress_file};
