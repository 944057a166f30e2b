//! Project marker file (`.project/meta.json`)

use super::ProjectError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding the project record files
pub const PROJECT_DIR: &str = ".project";

/// Where a project keeps its tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TestsLayout {
    /// `foo.test.ts` next to `foo.ts`
    ColocatedFile,
    /// `__tests__/` beside the source
    ColocatedDir,
    /// top-level `tests/`
    RootDir,
}

impl TestsLayout {
    pub const ALL: [TestsLayout; 3] = [
        TestsLayout::ColocatedFile,
        TestsLayout::ColocatedDir,
        TestsLayout::RootDir,
    ];

    pub fn key(self) -> &'static str {
        match self {
            TestsLayout::ColocatedFile => "colocatedFile",
            TestsLayout::ColocatedDir => "colocatedDir",
            TestsLayout::RootDir => "rootDir",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TestsLayout::ColocatedFile => "Next to each source file",
            TestsLayout::ColocatedDir => "In a tests folder beside the source",
            TestsLayout::RootDir => "In a top-level tests folder",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|layout| layout.key() == key)
    }
}

/// Contents of the project marker file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMeta {
    pub name: String,
    pub description: String,
    pub version: String,
    #[serde(default)]
    pub features: Vec<String>,
    pub tests: TestsLayout,
}

pub fn meta_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_DIR).join("meta.json")
}

/// Whether `dir` carries a project marker file
pub fn is_project(dir: &Path) -> bool {
    meta_path(dir).is_file()
}

/// Read and parse the marker file
pub fn read_meta(dir: &Path) -> Result<ProjectMeta, ProjectError> {
    let path = meta_path(dir);
    let content = fs::read_to_string(&path).map_err(|source| ProjectError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ProjectError::Parse { path, source })
}

/// Read the marker file, logging and discarding anything unreadable
pub fn load_meta(dir: &Path) -> Option<ProjectMeta> {
    if !is_project(dir) {
        return None;
    }
    match read_meta(dir) {
        Ok(meta) => Some(meta),
        Err(err) => {
            tracing::warn!(dir = %dir.display(), "ignoring project metadata: {err}");
            None
        }
    }
}

/// Overwrite the marker file
pub fn write_meta(dir: &Path, meta: &ProjectMeta) -> Result<(), ProjectError> {
    let path = meta_path(dir);
    super::write_json(&path, meta)
}
