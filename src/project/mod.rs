//! Project detection, project record files and the project menus
//!
//! The dashboard core only ever sees the [`crate::menu::MenuTree`] produced
//! here; everything that touches the filesystem lives in this module.

pub mod actions;
mod context;
mod create;
mod dependency;
mod files;
mod history;
pub mod menus;
mod meta;

pub use context::*;
pub use create::create_project;
pub use dependency::*;
pub use files::*;
pub use history::*;
pub use meta::*;

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Write `value` as pretty JSON, creating parent directories as needed
pub(crate) fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ProjectError> {
    let io_err = |source| ProjectError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    let content = serde_json::to_string_pretty(value).map_err(|source| ProjectError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, content).map_err(io_err)
}
