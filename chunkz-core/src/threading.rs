//! Worker-count selection for the conveyor ring.

use crate::error::{Error, Result};

/// Largest accepted explicit worker count.
pub const MAX_WORKERS: u32 = 1024;

/// Worker configuration for a conveyor run.
///
/// The worker count is also the number of ring slots, so it bounds both
/// parallelism and the number of chunk buffers held in memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workers {
    /// Derive the count from the number of logical CPUs.
    #[default]
    Auto,
    /// Use an explicit number of workers.
    ///
    /// Zero is rejected; values above [`MAX_WORKERS`] are rejected.
    Exact(u32),
}

/// Picks the default worker count for this machine.
///
/// The logical CPU count is raised to at least 2. Decompression halves it
/// (never below 2): this is a tuning default that has not been measured to
/// help, and an explicit [`Workers::Exact`] overrides it.
pub fn choose_worker_count(is_decompress: bool) -> u32 {
    let cpus = available_cpus();
    log::debug!("Number of logical processors: {cpus}");
    scale_for_mode(cpus, is_decompress)
}

/// Validates a worker configuration and converts it to a ring size.
///
/// # Parameters
///
/// * `workers` - The worker configuration to validate
/// * `halve` - Whether the automatic count should be halved (decompression)
///
/// # Errors
///
/// * [`Error::InvalidArgument`] - An explicit count of zero was requested
/// * [`Error::InvalidWorkerCount`] - The explicit count exceeds [`MAX_WORKERS`]
pub(crate) fn sanitize_workers(workers: Workers, halve: bool) -> Result<usize> {
    let count = match workers {
        Workers::Auto => choose_worker_count(halve),
        Workers::Exact(0) => {
            return Err(Error::InvalidArgument(
                "worker count must be at least 1".into(),
            ))
        }
        Workers::Exact(requested) if requested <= MAX_WORKERS => requested,
        Workers::Exact(requested) => {
            return Err(Error::InvalidWorkerCount {
                requested,
                maximum: MAX_WORKERS,
            })
        }
    };

    usize::try_from(count).map_err(|_| Error::InvalidWorkerCount {
        requested: count,
        maximum: MAX_WORKERS,
    })
}

fn available_cpus() -> u32 {
    let cpus = match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(_) => 1,
    };
    u32::try_from(cpus).unwrap_or(MAX_WORKERS).min(MAX_WORKERS)
}

fn scale_for_mode(cpus: u32, is_decompress: bool) -> u32 {
    // A single core still gets two workers so reading overlaps processing.
    let cpus = cpus.max(2);
    if is_decompress {
        (cpus / 2).max(2)
    } else {
        cpus
    }
}
