//! Dependency manifest lookup

use super::ProjectError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Ecosystems recognised by their dependency manifest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    Python,
    Ruby,
    Node,
}

impl DependencyKind {
    /// Lookup order when no ecosystem is requested
    pub const SEARCH_ORDER: [DependencyKind; 3] =
        [DependencyKind::Python, DependencyKind::Ruby, DependencyKind::Node];

    pub fn file_name(self) -> &'static str {
        match self {
            DependencyKind::Python => "requirements.txt",
            DependencyKind::Ruby => "Gemfile",
            DependencyKind::Node => "package.json",
        }
    }
}

/// A manifest found on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyFile {
    pub kind: DependencyKind,
    pub path: PathBuf,
    pub content: String,
}

/// Fields of a `package.json` used to seed a new project
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageManifest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

impl DependencyFile {
    /// Parse the manifest as `package.json`; other ecosystems yield nothing
    pub fn package_manifest(&self) -> Option<PackageManifest> {
        if self.kind != DependencyKind::Node {
            return None;
        }
        match serde_json::from_str(&self.content) {
            Ok(manifest) => Some(manifest),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), "unreadable package manifest: {err}");
                None
            }
        }
    }
}

/// Find the first dependency manifest in `start` or any of its ancestors.
///
/// With `kind` set only that ecosystem is considered; otherwise each
/// directory is checked in [`DependencyKind::SEARCH_ORDER`].
pub fn find_dependency_file(
    start: &Path,
    kind: Option<DependencyKind>,
) -> Result<Option<DependencyFile>, ProjectError> {
    let kinds: Vec<DependencyKind> = match kind {
        Some(kind) => vec![kind],
        None => DependencyKind::SEARCH_ORDER.to_vec(),
    };
    for dir in start.ancestors() {
        for kind in &kinds {
            let path = dir.join(kind.file_name());
            if path.is_file() {
                let content = fs::read_to_string(&path).map_err(|source| ProjectError::Io {
                    path: path.clone(),
                    source,
                })?;
                tracing::debug!(path = %path.display(), "found dependency manifest");
                return Ok(Some(DependencyFile {
                    kind: *kind,
                    path,
                    content,
                }));
            }
        }
    }
    Ok(None)
}
