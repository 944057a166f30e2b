//! Menus offered for each kind of working directory

use super::context::{Folder, ProjectKind};
use super::meta::ProjectMeta;
use crate::menu::{MenuItem, MenuTree};

pub const PROJECT_MENU: &str = "Project";
pub const DISCOVER_MENU: &str = "Discover";
pub const READY_MENU: &str = "Project ready";
pub const FOLDERS_MENU: &str = "Folders";

/// Prefix of folder item ids in the folders menu
pub const FOLDER_ID_PREFIX: &str = "dir:";

/// Folder name carried by a folders-menu item id
pub fn folder_name(item_id: &str) -> Option<&str> {
    item_id.strip_prefix(FOLDER_ID_PREFIX)
}

pub fn menu_for(kind: &ProjectKind) -> MenuTree {
    match kind {
        ProjectKind::Project(meta) => project_menu(meta),
        ProjectKind::Ready => ready_menu(),
        ProjectKind::Discoverable(dependency) => {
            discover_menu(dependency.kind.file_name())
        }
        ProjectKind::Folders(folders) => folders_menu(folders),
    }
}

/// Menu for a directory holding a project
pub fn project_menu(meta: &ProjectMeta) -> MenuTree {
    let mut features: Vec<MenuItem> = meta
        .features
        .iter()
        .enumerate()
        .map(|(i, feature)| MenuItem::leaf(&format!("feature-{i}"), feature, "feature.show"))
        .collect();
    features.push(MenuItem::leaf("add", "Add feature", "feature.add"));
    if !meta.features.is_empty() {
        features.push(MenuItem::leaf("remove", "Remove features", "feature.remove"));
    }

    MenuTree::new(
        PROJECT_MENU,
        vec![
            MenuItem::leaf("overview", "Overview", "project.overview"),
            MenuItem::submenu("features", "Features", features)
                .with_title(&format!("{} features", meta.name)),
            MenuItem::leaf("history", "History", "project.history"),
            MenuItem::leaf("files", "Files", "project.files"),
            MenuItem::leaf("refresh", "Refresh", "dashboard.refresh"),
        ],
    )
}

/// Menu for a directory with a dependency manifest but no project record
pub fn discover_menu(manifest_name: &str) -> MenuTree {
    MenuTree::new(
        DISCOVER_MENU,
        vec![
            MenuItem::leaf(
                "adopt",
                &format!("Adopt {manifest_name}"),
                "project.adopt",
            ),
            MenuItem::leaf("browse", "Browse folders", "folder.browse"),
            MenuItem::leaf("refresh", "Refresh", "dashboard.refresh"),
        ],
    )
}

/// Menu for an empty directory
pub fn ready_menu() -> MenuTree {
    MenuTree::new(
        READY_MENU,
        vec![
            MenuItem::leaf("create", "Create project", "project.create"),
            MenuItem::leaf("refresh", "Refresh", "dashboard.refresh"),
        ],
    )
}

/// Menu listing subdirectories
pub fn folders_menu(folders: &[Folder]) -> MenuTree {
    let mut items: Vec<MenuItem> = folders
        .iter()
        .map(|folder| {
            let label = match &folder.meta {
                Some(meta) => format!("{} ({})", folder.name, meta.name),
                None => folder.name.clone(),
            };
            MenuItem::leaf(&format!("{FOLDER_ID_PREFIX}{}", folder.name), &label, "folder.open")
        })
        .collect();
    items.push(MenuItem::leaf("parent", "Parent folder", "folder.up"));
    items.push(MenuItem::leaf("create", "Create project here", "project.create"));
    MenuTree::new(FOLDERS_MENU, items)
}
