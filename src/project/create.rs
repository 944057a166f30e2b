//! Writing a new project's record files

use super::files::{files_path, ProjectFiles};
use super::history::{history_path, HistoryItem};
use super::meta::{write_meta, ProjectMeta};
use super::{write_json, ProjectError};
use serde_json::json;
use std::path::Path;

/// Create a project in `dir`.
///
/// Writes `.project/meta.json`, an empty `.project/history.json` and an empty
/// `.project/files.json`. With `write_manifest` set and no `package.json`
/// present, a manifest carrying the name, description and version is written too.
pub fn create_project(dir: &Path, meta: &ProjectMeta, write_manifest: bool) -> Result<(), ProjectError> {
    let manifest = dir.join("package.json");
    if write_manifest && !manifest.exists() {
        write_json(
            &manifest,
            &json!({
                "name": meta.name,
                "description": meta.description,
                "version": meta.version,
                "type": "module",
                "scripts": { "test": "jest" },
            }),
        )?;
    }
    write_meta(dir, meta)?;
    write_json(&history_path(dir), &Vec::<HistoryItem>::new())?;
    write_json(&files_path(dir), &ProjectFiles::default())?;
    tracing::info!(dir = %dir.display(), name = %meta.name, "created project");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::files::read_files;
    use crate::project::history::read_history;
    use crate::project::meta::{load_meta, TestsLayout};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn meta() -> ProjectMeta {
        ProjectMeta {
            name: "acme".to_string(),
            description: "Widgets".to_string(),
            version: "0.1.0".to_string(),
            features: vec!["login".to_string()],
            tests: TestsLayout::ColocatedFile,
        }
    }

    #[test]
    fn test_creates_all_records() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), &meta(), true).unwrap();

        assert_eq!(load_meta(dir.path()), Some(meta()));
        assert!(read_history(dir.path()).unwrap().is_empty());
        assert_eq!(read_files(dir.path()).unwrap(), ProjectFiles::default());

        let manifest: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("package.json")).unwrap())
                .unwrap();
        assert_eq!(manifest["name"], "acme");
        assert_eq!(manifest["version"], "0.1.0");
        assert_eq!(manifest["scripts"]["test"], "jest");
    }

    #[test]
    fn test_existing_manifest_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("package.json"), r#"{"name":"original"}"#).unwrap();
        create_project(dir.path(), &meta(), true).unwrap();
        assert_eq!(
            fs::read_to_string(dir.path().join("package.json")).unwrap(),
            r#"{"name":"original"}"#
        );
    }

    #[test]
    fn test_manifest_skipped_when_not_requested() {
        let dir = tempfile::tempdir().unwrap();
        create_project(dir.path(), &meta(), false).unwrap();
        assert!(!dir.path().join("package.json").exists());
        assert!(load_meta(dir.path()).is_some());
    }
}
