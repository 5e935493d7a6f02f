//! Output path checks performed before a conveyor run.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Verifies that `output` may be written for a run reading `input`.
///
/// An existing output is refused unless `force` is set. Input and output
/// resolving to the same file is always refused, since creating the output
/// would truncate the input before it is read.
///
/// # Errors
///
/// * [`Error::OutputExists`] - `output` exists and `force` is `false`
/// * [`Error::SameFile`] - `input` and `output` are the same file
pub fn check_output(input: &Path, output: &Path, force: bool) -> Result<()> {
    if !output.exists() {
        return Ok(());
    }

    if is_same_file(input, output) {
        return Err(Error::SameFile {
            path: output.to_path_buf(),
        });
    }

    if !force {
        return Err(Error::OutputExists {
            path: output.to_path_buf(),
        });
    }

    Ok(())
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
