//! Action dispatch table mapping menu action ids to handlers

use super::model::{ActionId, MenuTree};
use crate::prompt::Prompter;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::mpsc;

/// What the dashboard should do once an action returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Keep the current menu (descending if the item has children)
    Stay,
    /// Swap in a different menu
    Mount(MenuTree),
    /// Swap in a menu that belongs to another working directory
    Enter { workdir: PathBuf, tree: MenuTree },
}

impl ActionOutcome {
    /// Split off the working directory change, leaving a plain outcome
    pub fn into_parts(self) -> (Option<PathBuf>, ActionOutcome) {
        match self {
            ActionOutcome::Enter { workdir, tree } => (Some(workdir), ActionOutcome::Mount(tree)),
            other => (None, other),
        }
    }
}

/// Sender for lines shown in the display pane
#[derive(Debug, Clone)]
pub struct OutputSink {
    tx: mpsc::UnboundedSender<String>,
}

impl OutputSink {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<String>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Push a line to the display pane. Lines sent after the UI is gone are dropped.
    pub fn line(&self, line: impl Into<String>) {
        let _ = self.tx.send(line.into());
    }
}

/// Everything a handler gets to work with
#[derive(Debug, Clone)]
pub struct ActionContext {
    /// Id of the activated menu item
    pub item_id: String,
    /// Label of the activated menu item
    pub label: String,
    pub workdir: PathBuf,
    pub prompter: Prompter,
    pub output: OutputSink,
}

/// A leaf action. Handlers may suspend on prompts; the dashboard waits for
/// the returned outcome before taking any further navigation input.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActionHandler: Send + Sync {
    async fn run(&self, ctx: ActionContext) -> Result<ActionOutcome>;
}

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("no handler registered for action `{0}`")]
    Unknown(ActionId),
}

/// Table of registered handlers
#[derive(Default, Clone)]
pub struct ActionRegistry {
    handlers: HashMap<ActionId, Arc<dyn ActionHandler>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: &str, handler: impl ActionHandler + 'static) {
        self.handlers.insert(ActionId::new(id), Arc::new(handler));
    }

    pub fn contains(&self, id: &ActionId) -> bool {
        self.handlers.contains_key(id)
    }

    #[allow(dead_code)] // used by tests to check the table covers every menu
    pub fn ids(&self) -> Vec<&ActionId> {
        self.handlers.keys().collect()
    }

    /// Run the handler registered for `id`
    pub async fn dispatch(&self, id: &ActionId, ctx: ActionContext) -> Result<ActionOutcome> {
        let handler = self
            .handlers
            .get(id)
            .cloned()
            .ok_or_else(|| ActionError::Unknown(id.clone()))?;
        tracing::info!(action = %id, item = %ctx.item_id, "running action");
        handler.run(ctx).await
    }
}
