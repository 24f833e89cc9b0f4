//! Directory initializer: ensures the documentation directories exist.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::console::{Console, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirStatus {
    pub path: PathBuf,
    pub outcome: DirOutcome,
}

/// Create each of `dirs` under `root` unless it already exists.
///
/// Missing parent segments are created too. Any existing path counts as
/// present, even when it is not a directory.
pub fn ensure_directories<W: Write>(
    root: &Path,
    dirs: &[&str],
    console: &mut Console<W>,
) -> Result<Vec<DirStatus>> {
    console.line("📁 Setting up directory structure...")?;

    let mut statuses = Vec::with_capacity(dirs.len());
    for dir in dirs {
        let path = root.join(dir);
        let outcome = ensure_directory(&path)?;
        debug!(path = %path.display(), ?outcome, "directory checked");
        match outcome {
            DirOutcome::Created => {
                console.status(Status::Success, format_args!("Created {dir}/ directory"))?;
            }
            DirOutcome::AlreadyExists => {
                console.status(Status::Info, format_args!("{dir}/ directory already exists"))?;
            }
        }
        statuses.push(DirStatus { path, outcome });
    }

    console.blank()?;
    Ok(statuses)
}

fn ensure_directory(path: &Path) -> Result<DirOutcome> {
    if path.exists() {
        return Ok(DirOutcome::AlreadyExists);
    }
    fs::create_dir_all(path).with_context(|| format!("create directory {}", path.display()))?;
    Ok(DirOutcome::Created)
}
