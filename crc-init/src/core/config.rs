//! Static configuration for CRC project initialization.
//!
//! Everything the initializer knows about a project layout lives in an
//! [`InitConfig`] value that is passed explicitly to each step. The defaults
//! returned by [`InitConfig::crc`] describe the CRC modeling layout.

use super::components::ComponentSpec;

/// Workflow instructions appended to `CLAUDE.md`.
pub const CRC_SECTIONS: &str = include_str!("../../templates/crc-sections.md");

/// Phrase whose presence marks `CLAUDE.md` as already configured.
pub const CRC_MARKER: &str = "three-tier system";

pub const PLANTUML_DOWNLOAD_URL: &str = "https://plantuml.com/download";

/// Companion files expected under `.claude/`, in report order.
pub const CRC_COMPONENTS: &[ComponentSpec] = &[
    ComponentSpec::required(".claude/agents/designer.md", "designer agent"),
    ComponentSpec::required(
        ".claude/agents/sequence-diagrammer.md",
        "sequence-diagrammer agent",
    ),
    ComponentSpec::required(".claude/agents/test-designer.md", "test-designer agent"),
    ComponentSpec::required(".claude/agents/gap-analyzer.md", "gap-analyzer agent"),
    ComponentSpec::required(".claude/agents/documenter.md", "documenter agent"),
    ComponentSpec::required(".claude/scripts/plantuml.py", "plantuml.py script"),
    ComponentSpec::required(".claude/skills/plantuml.md", "plantuml skill"),
    ComponentSpec::optional(".claude/bin/plantuml.jar", "plantuml.jar")
        .with_download_url(PLANTUML_DOWNLOAD_URL),
];

/// Immutable description of what `crc-init` sets up in a project root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InitConfig {
    /// Directories created under the root, relative paths.
    pub directories: &'static [&'static str],
    /// Companion files checked for existence, in report order.
    pub components: &'static [ComponentSpec],
    /// Instructions file at the root that receives `sections`.
    pub config_file: &'static str,
    /// Substring that marks `config_file` as already configured.
    pub marker: &'static str,
    /// Static block appended to `config_file`. Must contain `marker`.
    pub sections: &'static str,
    /// Setup documentation referenced by the summary.
    pub doc_path: &'static str,
}

impl InitConfig {
    /// Defaults for the CRC modeling workflow.
    pub const fn crc() -> Self {
        Self {
            directories: &["specs", "design"],
            components: CRC_COMPONENTS,
            config_file: "CLAUDE.md",
            marker: CRC_MARKER,
            sections: CRC_SECTIONS,
            doc_path: ".claude/doc/crc.md",
        }
    }
}
