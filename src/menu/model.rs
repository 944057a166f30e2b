//! Menu tree definitions and the indexed arena the navigation layer walks

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// Identifier of a leaf action, looked up in the action table at activation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActionId(String);

impl ActionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in a menu. Interior items carry children, leaves carry an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub label: String,
    /// Heading shown while this item's children are listed (falls back to the label)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<ActionId>,
}

impl MenuItem {
    /// Create a leaf item bound to an action
    pub fn leaf(id: &str, label: &str, action: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            title: None,
            children: Vec::new(),
            action: Some(ActionId::new(action)),
        }
    }

    /// Create an interior item
    pub fn submenu(id: &str, label: &str, children: Vec<MenuItem>) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            title: None,
            children,
            action: None,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(ActionId::new(action));
        self
    }
}

/// The menu currently mounted into the dashboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuTree {
    pub title: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MenuError {
    #[error("duplicate menu id `{id}` under `{parent}`")]
    DuplicateId { parent: String, id: String },
}

impl MenuTree {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Self {
            title: title.into(),
            items,
        }
    }

    /// Check that ids are unique among siblings at every level
    pub fn validate(&self) -> Result<(), MenuError> {
        fn check(parent: &str, items: &[MenuItem]) -> Result<(), MenuError> {
            let mut seen = HashSet::new();
            for item in items {
                if !seen.insert(item.id.as_str()) {
                    return Err(MenuError::DuplicateId {
                        parent: parent.to_string(),
                        id: item.id.clone(),
                    });
                }
                check(&item.id, &item.children)?;
            }
            Ok(())
        }
        check("<root>", &self.items)
    }
}

/// Index of a node inside a [`MenuArena`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// Flattened menu node
#[derive(Debug, Clone)]
pub struct MenuNode {
    pub id: String,
    pub label: String,
    pub title: Option<String>,
    pub action: Option<ActionId>,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

impl MenuNode {
    /// Heading for the level listing this node's children
    pub fn heading(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.label)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

/// Arena holding a mounted [`MenuTree`]. Node 0 is a synthetic root whose
/// children are the tree's top-level items and whose title is the tree title.
#[derive(Debug, Clone)]
pub struct MenuArena {
    nodes: Vec<MenuNode>,
    source: MenuTree,
}

impl MenuArena {
    pub const ROOT: NodeId = NodeId(0);

    pub fn build(tree: MenuTree) -> Self {
        let mut nodes = vec![MenuNode {
            id: String::new(),
            label: String::new(),
            title: Some(tree.title.clone()),
            action: None,
            parent: None,
            children: Vec::new(),
        }];
        let top = Self::push_items(&mut nodes, Self::ROOT, &tree.items);
        nodes[0].children = top;
        Self {
            nodes,
            source: tree,
        }
    }

    fn push_items(nodes: &mut Vec<MenuNode>, parent: NodeId, items: &[MenuItem]) -> Vec<NodeId> {
        let mut ids = Vec::with_capacity(items.len());
        for item in items {
            let node_id = NodeId(nodes.len());
            nodes.push(MenuNode {
                id: item.id.clone(),
                label: item.label.clone(),
                title: item.title.clone(),
                action: item.action.clone(),
                parent: Some(parent),
                children: Vec::new(),
            });
            let children = Self::push_items(nodes, node_id, &item.children);
            nodes[node_id.0].children = children;
            ids.push(node_id);
        }
        ids
    }

    pub fn node(&self, id: NodeId) -> Option<&MenuNode> {
        self.nodes.get(id.0)
    }

    pub fn root(&self) -> &MenuNode {
        &self.nodes[0]
    }

    /// Child of `parent` whose id matches `segment`
    pub fn child_by_id(&self, parent: NodeId, segment: &str) -> Option<NodeId> {
        self.node(parent)?
            .children
            .iter()
            .copied()
            .find(|child| self.nodes[child.0].id == segment)
    }

    /// The tree this arena was built from
    pub fn tree(&self) -> &MenuTree {
        &self.source
    }
}
