//! Config augmenter: appends the CRC workflow sections to `CLAUDE.md`.
//!
//! The file is only ever appended to. A file that already contains the marker
//! substring is left byte-for-byte unchanged. The marker search decodes the
//! file lossily, so invalid UTF-8 in `CLAUDE.md` is not an error.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::console::{Console, Status};
use crate::core::config::InitConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmentOutcome {
    /// Marker found; nothing written.
    AlreadyConfigured,
    /// File did not exist and was created with the sections.
    Created,
    /// File existed without the marker; sections appended.
    Appended,
}

/// Ensure `config.config_file` under `root` contains `config.sections`.
pub fn ensure_crc_sections<W: Write>(
    root: &Path,
    config: &InitConfig,
    console: &mut Console<W>,
) -> Result<AugmentOutcome> {
    let name = config.config_file;
    let path = root.join(name);
    console.line(format_args!("📝 Checking {name}..."))?;

    let exists = path.is_file();
    if exists && contains_marker(&path, config.marker)? {
        debug!(path = %path.display(), "marker present");
        console.status(Status::Info, format_args!("{name} already has CRC sections"))?;
        return Ok(AugmentOutcome::AlreadyConfigured);
    }

    let outcome = if exists {
        console.status(Status::Warning, format_args!("{name} exists but missing CRC sections"))?;
        console.hint("Appending CRC workflow sections...")?;
        AugmentOutcome::Appended
    } else {
        console.status(Status::Warning, format_args!("{name} not found in project root"))?;
        console.hint(format_args!("Creating {name} with CRC sections..."))?;
        AugmentOutcome::Created
    };

    append(&path, config.sections)?;
    info!(path = %path.display(), ?outcome, "crc sections written");
    console.status(Status::Success, format_args!("Added CRC sections to {name}"))?;
    Ok(outcome)
}

/// Substring test on the file text; invalid UTF-8 is replaced, not rejected.
fn contains_marker(path: &Path, marker: &str) -> Result<bool> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).contains(marker))
}

fn append(path: &Path, contents: &str) -> Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {} for append", path.display()))?;
    file.write_all(contents.as_bytes())
        .with_context(|| format!("append to {}", path.display()))?;
    file.flush().with_context(|| format!("flush {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::{CRC_MARKER, CRC_SECTIONS};

    fn run(root: &Path) -> (AugmentOutcome, String) {
        let mut console = Console::new(Vec::new(), false);
        let outcome =
            ensure_crc_sections(root, &InitConfig::crc(), &mut console).expect("augment");
        let out = String::from_utf8(console.into_inner()).expect("utf8");
        (outcome, out)
    }

    #[test]
    fn missing_file_is_created_with_sections() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (outcome, out) = run(temp.path());

        assert_eq!(outcome, AugmentOutcome::Created);
        let contents = fs::read_to_string(temp.path().join("CLAUDE.md")).expect("read");
        assert_eq!(contents, CRC_SECTIONS);
        assert!(contents.contains(CRC_MARKER));
        assert!(out.contains("⚠ CLAUDE.md not found in project root"));
        assert!(out.contains("   → Creating CLAUDE.md with CRC sections..."));
        assert!(out.contains("✓ Added CRC sections to CLAUDE.md"));
    }

    #[test]
    fn existing_file_without_marker_keeps_prefix() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("CLAUDE.md");
        let original = "# My project\n\nBuild with make.";
        fs::write(&path, original).expect("write");

        let (outcome, out) = run(temp.path());

        assert_eq!(outcome, AugmentOutcome::Appended);
        let contents = fs::read_to_string(&path).expect("read");
        assert_eq!(contents, format!("{original}{CRC_SECTIONS}"));
        assert!(out.contains("⚠ CLAUDE.md exists but missing CRC sections"));
        assert!(out.contains("   → Appending CRC workflow sections..."));
    }

    #[test]
    fn file_with_marker_is_untouched() {
        let temp = tempfile::tempdir().expect("tempdir");
        let path = temp.path().join("CLAUDE.md");
        let original = b"notes about our three-tier system\n\xff\xfe trailing bytes";
        fs::write(&path, original).expect("write");

        let (outcome, out) = run(temp.path());

        assert_eq!(outcome, AugmentOutcome::AlreadyConfigured);
        assert_eq!(fs::read(&path).expect("read"), original);
        assert!(out.contains("→ CLAUDE.md already has CRC sections"));
        assert!(!out.contains("Added CRC sections"));
    }

    #[test]
    fn appends_at_most_once() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::write(temp.path().join("CLAUDE.md"), "intro\n").expect("write");

        assert_eq!(run(temp.path()).0, AugmentOutcome::Appended);
        let after_first = fs::read(temp.path().join("CLAUDE.md")).expect("read");
        assert_eq!(run(temp.path()).0, AugmentOutcome::AlreadyConfigured);
        let after_second = fs::read(temp.path().join("CLAUDE.md")).expect("read");

        assert_eq!(after_first, after_second);
    }

    #[test]
    fn directory_at_config_path_fails() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir(temp.path().join("CLAUDE.md")).expect("mkdir");

        let mut console = Console::new(Vec::new(), false);
        let err = ensure_crc_sections(temp.path(), &InitConfig::crc(), &mut console).unwrap_err();
        assert!(format!("{err:#}").contains("CLAUDE.md"));
    }
}
