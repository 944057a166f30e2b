//! Change history record (`.project/history.json`)

use super::meta::PROJECT_DIR;
use super::ProjectError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VersionImpact {
    Major,
    Minor,
    Patch,
}

impl VersionImpact {
    pub fn label(self) -> &'static str {
        match self {
            VersionImpact::Major => "major",
            VersionImpact::Minor => "minor",
            VersionImpact::Patch => "patch",
        }
    }
}

/// One recorded change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub date: DateTime<Utc>,
    pub version_impact: VersionImpact,
    pub version_applied: bool,
    pub filepath: String,
    pub change_summary: String,
}

impl HistoryItem {
    /// Single display line
    pub fn summary(&self) -> String {
        let applied = if self.version_applied { "" } else { " (pending)" };
        format!(
            "{} [{}{}] {}: {}",
            self.date.format("%Y-%m-%d"),
            self.version_impact.label(),
            applied,
            self.filepath,
            self.change_summary
        )
    }
}

pub fn history_path(dir: &Path) -> PathBuf {
    dir.join(PROJECT_DIR).join("history.json")
}

/// Read the history record. A missing file is an empty history.
pub fn read_history(dir: &Path) -> Result<Vec<HistoryItem>, ProjectError> {
    let path = history_path(dir);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path).map_err(|source| ProjectError::Io {
        path: path.clone(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ProjectError::Parse { path, source })
}
