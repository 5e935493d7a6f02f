//! Parallel chunked compression utility
//!
//! Compresses very large files as ordered, independently decodable gzip
//! chunks using every core while keeping memory bounded.

use std::process;

use clap::Parser;
use log::LevelFilter;

mod opts;

use opts::ChunkzOpts;

use chunkz_cli::run_cli;

const PROGRAM_NAME: &str = "chunkz";

fn main() {
    let opts = ChunkzOpts::parse();
    init_logging(opts.verbose);

    let config = opts.config();
    if let Err(err) = run_cli(&config, PROGRAM_NAME) {
        eprintln!("{err}");
        process::exit(1);
    }
}

/// Installs the logger. `RUST_LOG` takes precedence over `-v` flags.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    builder.parse_default_env();
    builder.format(|buf, record| {
        use std::io::Write;
        writeln!(buf, "[{}] {}", record.level(), record.args())
    });

    builder.init();
}
