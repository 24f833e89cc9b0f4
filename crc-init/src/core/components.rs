//! Companion file descriptors and the list of missing components.

/// A companion file whose presence is checked but never created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    /// Path relative to the project root.
    pub path: &'static str,
    /// Human-readable name used in reports.
    pub name: &'static str,
    /// Whether the CRC workflow depends on this file (agents, scripts, skills).
    pub required: bool,
    /// Where to fetch the file when it is missing (binary assets only).
    pub download_url: Option<&'static str>,
}

impl ComponentSpec {
    pub const fn required(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            required: true,
            download_url: None,
        }
    }

    pub const fn optional(path: &'static str, name: &'static str) -> Self {
        Self {
            path,
            name,
            required: false,
            download_url: None,
        }
    }

    pub const fn with_download_url(self, url: &'static str) -> Self {
        Self {
            download_url: Some(url),
            ..self
        }
    }
}

/// Result of checking one [`ComponentSpec`] against the filesystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentStatus {
    pub spec: ComponentSpec,
    pub present: bool,
}

/// Display names of components not found on disk, in spec order.
///
/// Built once by the component checker and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingComponents {
    names: Vec<&'static str>,
}

impl MissingComponents {
    pub fn from_statuses(statuses: &[ComponentStatus]) -> Self {
        let names = statuses
            .iter()
            .filter(|status| !status.present)
            .map(|status| status.spec.name)
            .collect();
        Self { names }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn names(&self) -> &[&'static str] {
        &self.names
    }
}
