//! Handlers behind the project menus

use super::context::{inspect, list_folders};
use super::create::create_project;
use super::dependency::{find_dependency_file, DependencyKind};
use super::files::read_files;
use super::history::read_history;
use super::menus::{folder_name, folders_menu, menu_for, project_menu};
use super::meta::{load_meta, write_meta, ProjectMeta, TestsLayout};
use crate::menu::{ActionContext, ActionHandler, ActionOutcome, ActionRegistry};
use crate::prompt::{Prompter, SelectOption};
use anyhow::{anyhow, Result};
use async_trait::async_trait;

/// Action table for every id used by the project menus
pub fn registry() -> ActionRegistry {
    let mut registry = ActionRegistry::new();
    registry.register("project.create", CreateProject { adopt: false });
    registry.register("project.adopt", CreateProject { adopt: true });
    registry.register("project.overview", ShowOverview);
    registry.register("project.history", ShowHistory);
    registry.register("project.files", ShowFiles);
    registry.register("feature.show", ShowFeature);
    registry.register("feature.add", AddFeature);
    registry.register("feature.remove", RemoveFeatures);
    registry.register("folder.open", OpenFolder);
    registry.register("folder.up", ParentFolder);
    registry.register("folder.browse", BrowseFolders);
    registry.register("dashboard.refresh", Refresh);
    registry
}

/// Suggested answers for the creation questions
#[derive(Debug, Default)]
struct ProjectSeed {
    name: Option<String>,
    description: Option<String>,
    version: Option<String>,
}

/// Answers collected by the creation flow
#[derive(Debug)]
struct ProjectDraft {
    name: String,
    description: String,
    version: String,
    features: Vec<String>,
    tests: Vec<String>,
}

impl ProjectDraft {
    /// Check the required answers, naming the first one missing
    fn into_meta(self) -> Result<ProjectMeta, &'static str> {
        if self.name.is_empty() {
            return Err("name");
        }
        if self.version.is_empty() {
            return Err("version");
        }
        let tests = self
            .tests
            .first()
            .and_then(|key| TestsLayout::from_key(key))
            .ok_or("tests location")?;
        Ok(ProjectMeta {
            name: self.name,
            description: self.description,
            version: self.version,
            features: self.features,
            tests,
        })
    }
}

/// Ask every creation question. `None` as soon as one is cancelled.
async fn ask_project(prompter: &Prompter, seed: &ProjectSeed) -> Result<Option<ProjectDraft>> {
    let Some(name) = prompter.text("Project name?", seed.name.as_deref()).await? else {
        return Ok(None);
    };
    let Some(description) = prompter
        .text("Describe the project", seed.description.as_deref())
        .await?
    else {
        return Ok(None);
    };
    let version_seed = seed.version.as_deref().unwrap_or("0.1.0");
    let Some(version) = prompter.text("Version?", Some(version_seed)).await? else {
        return Ok(None);
    };
    let Some(features) = prompter
        .text("Features (comma separated)", None)
        .await?
    else {
        return Ok(None);
    };
    let layouts = TestsLayout::ALL
        .iter()
        .map(|layout| SelectOption::new(layout.key(), layout.label()))
        .collect();
    let Some(tests) = prompter.select("Where do tests live?", layouts, false).await? else {
        return Ok(None);
    };
    Ok(Some(ProjectDraft {
        name,
        description,
        version,
        features: split_features(&features),
        tests,
    }))
}

fn split_features(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|feature| !feature.is_empty())
        .map(str::to_string)
        .collect()
}

/// Multi-step project creation, optionally seeded from an existing manifest
struct CreateProject {
    adopt: bool,
}

impl CreateProject {
    fn seed(&self, ctx: &ActionContext) -> Result<ProjectSeed> {
        let dir_name = ctx
            .workdir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned());
        if !self.adopt {
            return Ok(ProjectSeed {
                name: dir_name,
                ..Default::default()
            });
        }
        // only package.json carries seed fields
        let manifest = find_dependency_file(&ctx.workdir, Some(DependencyKind::Node))?
            .and_then(|file| file.package_manifest())
            .unwrap_or_default();
        Ok(ProjectSeed {
            name: manifest.name.or(dir_name),
            description: manifest.description,
            version: manifest.version,
        })
    }
}

#[async_trait]
impl ActionHandler for CreateProject {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let seed = self.seed(&ctx)?;
        let Some(draft) = ask_project(&ctx.prompter, &seed).await? else {
            ctx.output.line("Project creation cancelled");
            return Ok(ActionOutcome::Stay);
        };
        let meta = match draft.into_meta() {
            Ok(meta) => meta,
            Err(missing) => {
                tracing::info!(missing, "project creation abandoned");
                ctx.output
                    .line(format!("Project creation abandoned: {missing} is required"));
                return Ok(ActionOutcome::Stay);
            }
        };
        create_project(&ctx.workdir, &meta, !self.adopt)?;
        ctx.output.line(format!("Created project {}", meta.name));
        Ok(ActionOutcome::Mount(project_menu(&meta)))
    }
}

fn require_meta(ctx: &ActionContext) -> Option<ProjectMeta> {
    let meta = load_meta(&ctx.workdir);
    if meta.is_none() {
        ctx.output
            .line(format!("No project found in {}", ctx.workdir.display()));
    }
    meta
}

struct ShowOverview;

#[async_trait]
impl ActionHandler for ShowOverview {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        if let Some(meta) = require_meta(&ctx) {
            ctx.output.line(format!("{} v{}", meta.name, meta.version));
            if !meta.description.is_empty() {
                ctx.output.line(meta.description.clone());
            }
            ctx.output.line(format!("Tests: {}", meta.tests.label()));
            ctx.output
                .line(format!("Features: {}", meta.features.len()));
        }
        Ok(ActionOutcome::Stay)
    }
}

struct ShowHistory;

#[async_trait]
impl ActionHandler for ShowHistory {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let history = read_history(&ctx.workdir)?;
        if history.is_empty() {
            ctx.output.line("No recorded changes");
        }
        for item in &history {
            ctx.output.line(item.summary());
        }
        Ok(ActionOutcome::Stay)
    }
}

struct ShowFiles;

#[async_trait]
impl ActionHandler for ShowFiles {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let outline = read_files(&ctx.workdir)?.outline();
        if outline.is_empty() {
            ctx.output.line("Files index is empty");
        }
        for line in outline {
            ctx.output.line(line);
        }
        Ok(ActionOutcome::Stay)
    }
}

/// Lists the files touching the activated feature (the item label)
struct ShowFeature;

#[async_trait]
impl ActionHandler for ShowFeature {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let files = read_files(&ctx.workdir)?;
        let impacted = files.files_for_feature(&ctx.label);
        if impacted.is_empty() {
            ctx.output
                .line(format!("No files recorded for {}", ctx.label));
        }
        for file in impacted {
            ctx.output.line(format!("{} - {}", file.path, file.description));
        }
        Ok(ActionOutcome::Stay)
    }
}

struct AddFeature;

#[async_trait]
impl ActionHandler for AddFeature {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let Some(mut meta) = require_meta(&ctx) else {
            return Ok(ActionOutcome::Stay);
        };
        let feature = ctx
            .prompter
            .text("New feature name?", None)
            .await?
            .unwrap_or_default();
        if feature.is_empty() {
            ctx.output.line("No feature added");
            return Ok(ActionOutcome::Stay);
        }
        ctx.output.line(format!("Added feature {feature}"));
        meta.features.push(feature);
        write_meta(&ctx.workdir, &meta)?;
        Ok(ActionOutcome::Mount(project_menu(&meta)))
    }
}

struct RemoveFeatures;

#[async_trait]
impl ActionHandler for RemoveFeatures {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let Some(mut meta) = require_meta(&ctx) else {
            return Ok(ActionOutcome::Stay);
        };
        let options = meta
            .features
            .iter()
            .enumerate()
            .map(|(i, feature)| SelectOption::new(&i.to_string(), feature))
            .collect();
        let chosen = ctx
            .prompter
            .select("Remove which features?", options, true)
            .await?
            .unwrap_or_default();
        if chosen.is_empty() {
            ctx.output.line("No features removed");
            return Ok(ActionOutcome::Stay);
        }
        let doomed: Vec<usize> = chosen.iter().filter_map(|v| v.parse().ok()).collect();
        meta.features = meta
            .features
            .into_iter()
            .enumerate()
            .filter(|(i, _)| !doomed.contains(i))
            .map(|(_, feature)| feature)
            .collect();
        write_meta(&ctx.workdir, &meta)?;
        ctx.output.line(format!("Removed {} feature(s)", doomed.len()));
        Ok(ActionOutcome::Mount(project_menu(&meta)))
    }
}

struct OpenFolder;

#[async_trait]
impl ActionHandler for OpenFolder {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let name = folder_name(&ctx.item_id)
            .ok_or_else(|| anyhow!("`{}` is not a folder entry", ctx.item_id))?;
        let workdir = ctx.workdir.join(name);
        let tree = menu_for(&inspect(&workdir)?);
        ctx.output.line(format!("Opened {}", workdir.display()));
        Ok(ActionOutcome::Enter { workdir, tree })
    }
}

struct ParentFolder;

#[async_trait]
impl ActionHandler for ParentFolder {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let Some(parent) = ctx.workdir.parent() else {
            ctx.output.line("Already at the filesystem root");
            return Ok(ActionOutcome::Stay);
        };
        let workdir = parent.to_path_buf();
        let tree = menu_for(&inspect(&workdir)?);
        ctx.output.line(format!("Opened {}", workdir.display()));
        Ok(ActionOutcome::Enter { workdir, tree })
    }
}

struct BrowseFolders;

#[async_trait]
impl ActionHandler for BrowseFolders {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        let folders = list_folders(&ctx.workdir)?;
        Ok(ActionOutcome::Mount(folders_menu(&folders)))
    }
}

struct Refresh;

#[async_trait]
impl ActionHandler for Refresh {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome> {
        Ok(ActionOutcome::Mount(menu_for(&inspect(&ctx.workdir)?)))
    }
}
