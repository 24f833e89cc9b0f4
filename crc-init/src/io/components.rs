//! Component checker: reports which companion files are present.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use tracing::debug;

use crate::console::{Console, Status};
use crate::core::components::{ComponentSpec, ComponentStatus, MissingComponents};

/// Test each spec for a regular file under `root` and report it.
///
/// Existence only; contents are never inspected. Missing files are not
/// errors, they end up in the returned list in spec order.
pub fn check_components<W: Write>(
    root: &Path,
    specs: &[ComponentSpec],
    console: &mut Console<W>,
) -> Result<MissingComponents> {
    console.line("🔍 Checking for required components...")?;

    let statuses: Vec<ComponentStatus> = specs
        .iter()
        .map(|spec| ComponentStatus {
            spec: *spec,
            present: root.join(spec.path).is_file(),
        })
        .collect();

    for status in &statuses {
        let spec = &status.spec;
        debug!(
            path = spec.path,
            name = spec.name,
            required = spec.required,
            present = status.present,
            "component checked"
        );
        if status.present {
            console.status(Status::Success, format_args!("Found {}", spec.name))?;
        } else {
            console.status(Status::Warning, format_args!("Missing {} ({})", spec.name, spec.path))?;
            if let Some(url) = spec.download_url {
                console.hint(format_args!("Download from: {url}"))?;
            }
        }
    }

    console.blank()?;
    Ok(MissingComponents::from_statuses(&statuses))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CRC_COMPONENTS;
    use crate::test_support::write_components;
    use std::fs;

    fn check(root: &Path) -> (MissingComponents, String) {
        let mut console = Console::new(Vec::new(), false);
        let missing = check_components(root, CRC_COMPONENTS, &mut console).expect("check");
        let out = String::from_utf8(console.into_inner()).expect("utf8");
        (missing, out)
    }

    #[test]
    fn empty_root_reports_every_component_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        let (missing, out) = check(temp.path());

        let expected: Vec<&str> = CRC_COMPONENTS.iter().map(|spec| spec.name).collect();
        assert_eq!(missing.names(), expected.as_slice());
        assert!(out.contains("⚠ Missing designer agent (.claude/agents/designer.md)"));
        assert!(out.contains("   → Download from: https://plantuml.com/download"));
    }

    #[test]
    fn partial_set_reports_absent_names_in_order() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_components(
            temp.path(),
            CRC_COMPONENTS
                .iter()
                .filter(|spec| spec.name != "test-designer agent" && spec.name != "plantuml.jar"),
        )
        .expect("fixtures");

        let (missing, out) = check(temp.path());
        assert_eq!(missing.names(), &["test-designer agent", "plantuml.jar"]);
        assert!(out.contains("✓ Found designer agent"));
        assert!(out.contains("✓ Found plantuml skill"));
    }

    #[test]
    fn download_hint_only_for_binary_asset() {
        let temp = tempfile::tempdir().expect("tempdir");
        write_components(
            temp.path(),
            CRC_COMPONENTS.iter().filter(|spec| spec.name != "designer agent"),
        )
        .expect("fixtures");

        let (missing, out) = check(temp.path());
        assert_eq!(missing.names(), &["designer agent"]);
        assert!(!out.contains("Download from"));
    }

    #[test]
    fn directory_at_component_path_counts_as_missing() {
        let temp = tempfile::tempdir().expect("tempdir");
        fs::create_dir_all(temp.path().join(".claude/agents/designer.md")).expect("mkdir");

        let (missing, _) = check(temp.path());
        assert!(missing.names().contains(&"designer agent"));
    }
}
