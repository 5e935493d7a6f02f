//! Small shared helpers for the CLI.

pub(crate) mod bytes;
