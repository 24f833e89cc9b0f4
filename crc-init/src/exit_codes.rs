//! Stable exit codes for the `crc-init` binary.

/// Initialization finished, including partial success with missing components.
pub const OK: i32 = 0;
/// A filesystem operation failed; the run stopped where it was.
pub const IO_FAILURE: i32 = 1;
