//! Command line argument parsing for chunkz

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use chunkz_cli::{parse_size, CliConfig, OperationMode};

/// Parallel chunked compression of very large files
///
/// Splits the input into fixed-size chunks, compresses them on all cores and
/// writes them in their original order as length-prefixed gzip frames.
#[derive(Parser, Debug)]
#[command(
    name = "chunkz",
    version,
    about = "Compress or decompress large files in parallel chunks",
    long_about = "chunkz compresses a file as a sequence of independently gzipped chunks, \
                 each preceded by an 8-byte little-endian length. Memory use stays bounded \
                 by the chunk size times the number of workers."
)]
pub struct ChunkzOpts {
    #[command(subcommand)]
    pub command: Command,

    /// Verbose mode; repeat for more detail (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (suppress the summary line)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress INPUT into the archive OUTPUT
    Compress {
        #[command(flatten)]
        transfer: TransferArgs,

        /// Gzip compression level, 0 (fastest) to 9 (best)
        #[arg(
            short = 'l',
            long = "level",
            value_name = "LEVEL",
            value_parser = clap::value_parser!(u32).range(0..=9)
        )]
        level: Option<u32>,
    },

    /// Decompress the archive INPUT into OUTPUT
    #[command(alias = "uncompress")]
    Decompress {
        #[command(flatten)]
        transfer: TransferArgs,
    },

    /// List the frames of an archive
    List {
        /// Archive to inspect
        #[arg(value_name = "INPUT")]
        input: PathBuf,
    },
}

/// Arguments shared by compression and decompression.
#[derive(Args, Debug)]
pub struct TransferArgs {
    /// File to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to create
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Chunk size (K, M and G suffixes accepted)
    #[arg(short = 's', long = "chunk-size", value_name = "SIZE", value_parser = parse_size)]
    pub chunk_size: Option<usize>,

    /// Number of workers, which is also the number of chunk buffers
    #[arg(short = 'T', long = "threads", value_name = "NUM")]
    pub threads: Option<u32>,

    /// Overwrite the output file if it exists
    #[arg(short = 'f', long = "force")]
    pub force: bool,
}

impl ChunkzOpts {
    /// Converts parsed arguments into a CLI configuration.
    pub fn config(&self) -> CliConfig {
        let base = CliConfig {
            quiet: self.quiet,
            ..CliConfig::default()
        };

        match &self.command {
            Command::Compress { transfer, level } => CliConfig {
                mode: OperationMode::Compress,
                level: *level,
                ..transfer.apply(base)
            },
            Command::Decompress { transfer } => CliConfig {
                mode: OperationMode::Decompress,
                ..transfer.apply(base)
            },
            Command::List { input } => CliConfig {
                mode: OperationMode::List,
                input: input.clone(),
                ..base
            },
        }
    }
}

impl TransferArgs {
    fn apply(&self, base: CliConfig) -> CliConfig {
        CliConfig {
            input: self.input.clone(),
            output: Some(self.output.clone()),
            force: self.force,
            chunk_size: self.chunk_size,
            threads: self.threads,
            ..base
        }
    }
}
