//! Working-directory inspection that decides which menu to show first

use super::dependency::{find_dependency_file, DependencyFile};
use super::meta::{load_meta, ProjectMeta};
use super::ProjectError;
use std::fs;
use std::path::{Path, PathBuf};

/// A subdirectory of the working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folder {
    pub name: String,
    pub path: PathBuf,
    /// Present when the folder is itself a project
    pub meta: Option<ProjectMeta>,
}

/// What the working directory looks like
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectKind {
    /// A valid project marker file is present
    Project(ProjectMeta),
    /// Nothing at all in the directory: ready for a new project
    Ready,
    /// No marker, but a dependency manifest was found here or in an ancestor
    Discoverable(DependencyFile),
    /// None of the above: offer the subdirectories
    Folders(Vec<Folder>),
}

impl ProjectKind {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectKind::Project(_) => "project",
            ProjectKind::Ready => "ready",
            ProjectKind::Discoverable(_) => "discoverable",
            ProjectKind::Folders(_) => "folders",
        }
    }
}

fn read_dir_err(dir: &Path) -> impl FnOnce(std::io::Error) -> ProjectError + '_ {
    move |source| ProjectError::Io {
        path: dir.to_path_buf(),
        source,
    }
}

/// Whether `dir` has no entries at all
pub fn is_project_ready(dir: &Path) -> Result<bool, ProjectError> {
    let mut entries = fs::read_dir(dir).map_err(read_dir_err(dir))?;
    Ok(entries.next().is_none())
}

/// Subdirectories of `dir` (symlinks are not followed), sorted by name
pub fn list_folders(dir: &Path) -> Result<Vec<Folder>, ProjectError> {
    let mut folders = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err(dir))? {
        let entry = entry.map_err(read_dir_err(dir))?;
        let file_type = entry.file_type().map_err(read_dir_err(dir))?;
        if !file_type.is_dir() {
            continue;
        }
        let path = entry.path();
        folders.push(Folder {
            name: entry.file_name().to_string_lossy().into_owned(),
            meta: load_meta(&path),
            path,
        });
    }
    folders.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(folders)
}

/// Classify the working directory
pub fn inspect(dir: &Path) -> Result<ProjectKind, ProjectError> {
    let kind = if let Some(meta) = load_meta(dir) {
        ProjectKind::Project(meta)
    } else if is_project_ready(dir)? {
        ProjectKind::Ready
    } else if let Some(dependency) = find_dependency_file(dir, None)? {
        ProjectKind::Discoverable(dependency)
    } else {
        ProjectKind::Folders(list_folders(dir)?)
    };
    tracing::info!(dir = %dir.display(), kind = kind.label(), "inspected working directory");
    Ok(kind)
}
