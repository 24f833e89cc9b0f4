//! Test-only helpers for building project roots.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::TempDir;

use crate::core::components::ComponentSpec;
use crate::core::config::{CRC_COMPONENTS, CRC_SECTIONS};

/// Create each component file (with parent directories) under `root`.
pub fn write_components<'a>(
    root: &Path,
    specs: impl IntoIterator<Item = &'a ComponentSpec>,
) -> Result<()> {
    for spec in specs {
        let path = root.join(spec.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
        fs::write(&path, format!("# {}\n", spec.name))
            .with_context(|| format!("write {}", path.display()))?;
    }
    Ok(())
}

pub fn write_claude_md(root: &Path, contents: &str) -> Result<()> {
    let path = root.join("CLAUDE.md");
    fs::write(&path, contents).with_context(|| format!("write {}", path.display()))
}

/// Temp project with every CRC component and a configured `CLAUDE.md`.
pub fn populated_project() -> Result<TempDir> {
    let temp = tempfile::tempdir().context("create tempdir")?;
    write_components(temp.path(), CRC_COMPONENTS)?;
    write_claude_md(temp.path(), &format!("# Team notes\n\n{CRC_SECTIONS}"))?;
    Ok(temp)
}
