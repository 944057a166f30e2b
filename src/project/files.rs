//! Files index record (`.project/files.json`)

use super::meta::PROJECT_DIR;
use super::ProjectError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFiles {
    #[serde(default)]
    pub dirs: Vec<ProjectDir>,
    #[serde(default)]
    pub files: Vec<ProjectFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDir {
    pub path: String,
    #[serde(default)]
    pub dirs: Vec<ProjectDir>,
    #[serde(default)]
    pub files: Vec<ProjectFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFile {
    pub path: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub feature_impact: Vec<String>,
}

/// Older records were written as a bare (empty) array
#[derive(Deserialize)]
#[serde(untagged)]
enum FilesRecord {
    Index(ProjectFiles),
    Legacy(Vec<serde_json::Value>),
}

impl ProjectFiles {
    /// Indented listing of the whole index
    pub fn outline(&self) -> Vec<String> {
        let mut lines = Vec::new();
        outline_into(&mut lines, &self.dirs, &self.files, 0);
        lines
    }

    /// Files whose feature impact lists `feature`
    pub fn files_for_feature(&self, feature: &str) -> Vec<&ProjectFile> {
        let mut found = Vec::new();
        collect_for_feature(&mut found, &self.dirs, &self.files, feature);
        found
    }
}

fn outline_into(lines: &mut Vec<String>, dirs: &[ProjectDir], files: &[ProjectFile], depth: usize) {
    let indent = "  ".repeat(depth);
    for dir in dirs {
        lines.push(format!("{indent}{}/", dir.path));
        outline_into(lines, &dir.dirs, &dir.files, depth + 1);
    }
    for file in files {
        if file.description.is_empty() {
            lines.push(format!("{indent}{}", file.path));
        } else {
            lines.push(format!("{indent}{} - {}", file.path, file.description));
        }
    }
}

fn collect_for_feature<'a>(
    found: &mut Vec<&'a ProjectFile>,
    dirs: &'a [ProjectDir],
    files: &'a [ProjectFile],
    feature: &str,
) {
    for dir in dirs {
        collect_for_feature(found, &dir.dirs, &dir.files, feature);
    }
    found.extend(
        files
            .iter()
            .filter(|file| file.feature_impact.iter().any(|f| f == feature)),
    );
}

pub fn files_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_DIR).join("files.json")
}

/// Read the files index. A missing file is an empty index.
pub fn read_files(dir: &Path) -> Result<ProjectFiles, ProjectError> {
    let path = files_path(dir);
    if !path.exists() {
        return Ok(ProjectFiles::default());
    }
    let content = fs::read_to_string(&path).map_err(|source| ProjectError::Io {
        path: path.clone(),
        source,
    })?;
    let record: FilesRecord =
        serde_json::from_str(&content).map_err(|source| ProjectError::Parse { path, source })?;
    Ok(match record {
        FilesRecord::Index(files) => files,
        FilesRecord::Legacy(_) => ProjectFiles::default(),
    })
}
