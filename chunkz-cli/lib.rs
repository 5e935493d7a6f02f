//! Chunkz command line interface library
//!
//! Turns parsed command-line settings into conveyor options, guards the
//! output path, runs the core pipeline and formats the outcome.

mod config;
mod error;
mod io;
mod operations;
mod process;
mod utils;


pub use config::{CliConfig, OperationMode};
pub use error::{Error, Result};
pub use io::check_output;
pub use operations::{compress_file, decompress_file, list_file};
pub use process::{format_frames, format_summary, process_file, run_cli, Report};
pub use utils::bytes::{format_size, parse_size};
