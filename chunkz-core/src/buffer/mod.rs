//! Reusable chunk buffers that make up the conveyor ring.

mod slot;


pub use slot::{ChunkBuffer, InputArea};
