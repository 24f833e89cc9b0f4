//! Orchestration for `crc-init`.
//!
//! Runs the four steps strictly in order against one project root:
//! directories, companion files, `CLAUDE.md`, summary. Each step only reads or
//! writes the filesystem; nothing is carried between runs.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::console::Console;
use crate::core::components::MissingComponents;
use crate::core::config::InitConfig;
use crate::io::claude_md::{AugmentOutcome, ensure_crc_sections};
use crate::io::components::check_components;
use crate::io::dirs::{DirStatus, ensure_directories};
use crate::summary::print_summary;

/// Outcome of one initialization pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitReport {
    pub directories: Vec<DirStatus>,
    pub missing: MissingComponents,
    pub claude_md: AugmentOutcome,
}

impl InitReport {
    /// True when every companion file was found.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Initialize CRC modeling in `root`.
///
/// Filesystem failures abort the run; steps already completed are not rolled
/// back.
pub fn run_init<W: Write>(
    root: &Path,
    config: &InitConfig,
    console: &mut Console<W>,
) -> Result<InitReport> {
    debug!(root = %root.display(), "initializing crc modeling");
    console.line("🎯 Initializing CRC Modeling System...")?;
    console.blank()?;

    let directories = ensure_directories(root, config.directories, console)?;
    let missing = check_components(root, config.components, console)?;
    let claude_md = ensure_crc_sections(root, config, console)?;
    print_summary(&missing, config.doc_path, console)?;

    info!(
        root = %root.display(),
        missing = missing.len(),
        ?claude_md,
        "initialization finished"
    );
    Ok(InitReport {
        directories,
        missing,
        claude_md,
    })
}
