//! Initialize CRC modeling in a project.
//!
//! Creates the `specs/` and `design/` directories, checks for the companion
//! agent files under `.claude/`, appends the CRC workflow sections to
//! `CLAUDE.md` when they are missing, and prints a summary.
//!
//! - **[`core`]**: Static configuration and pure data, no I/O.
//! - **[`io`]**: One module per filesystem step.
//!
//! [`init`] runs the steps in order and [`summary`] prints the final report.

pub mod console;
pub mod core;
pub mod exit_codes;
pub mod init;
pub mod io;
pub mod logging;
pub mod summary;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
