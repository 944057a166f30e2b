//! Navigation state machine over the mounted menu

use super::actions::ActionOutcome;
use super::model::{ActionId, MenuArena, MenuNode, MenuTree, NodeId};
use super::resolver::{resolve, resolve_dotted, split_dotted};

/// Selection movement within the current level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Where the user is in the mounted tree
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationState {
    /// Ids from the root down to the level being listed (empty = root)
    pub path: Vec<String>,
    pub selected_index: usize,
}

/// Snapshot of the item picked by [`NavigationController::begin_activation`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub node: NodeId,
    pub item_id: String,
    pub label: String,
    pub action: Option<ActionId>,
    pub has_children: bool,
    /// Path of the level the item was activated from
    parent_path: Vec<String>,
}

/// Result of finishing an activation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Stayed,
    Descended,
    Mounted,
}

/// Owns the mounted menu and the navigation state. Everything else reads
/// through the accessors.
#[derive(Debug)]
pub struct NavigationController {
    arena: MenuArena,
    state: NavigationState,
    current: NodeId,
    remember_selection: bool,
    /// Index selected at each ancestor level, used when `remember_selection` is on
    index_stack: Vec<usize>,
}

impl NavigationController {
    pub fn new(tree: MenuTree) -> Self {
        Self {
            arena: MenuArena::build(tree),
            state: NavigationState::default(),
            current: MenuArena::ROOT,
            remember_selection: false,
            index_stack: Vec::new(),
        }
    }

    /// Restore the previously selected index when returning to a parent level
    pub fn with_remember_selection(mut self, remember: bool) -> Self {
        self.set_remember_selection(remember);
        self
    }

    pub fn set_remember_selection(&mut self, remember: bool) {
        self.remember_selection = remember;
    }

    /// Replace the tree and reset to the root
    pub fn mount(&mut self, tree: MenuTree) {
        tracing::info!(title = %tree.title, items = tree.items.len(), "mounting menu");
        self.arena = MenuArena::build(tree);
        self.state = NavigationState::default();
        self.current = MenuArena::ROOT;
        self.index_stack.clear();
    }

    pub fn tree(&self) -> &MenuTree {
        self.arena.tree()
    }

    pub fn path(&self) -> &[String] {
        &self.state.path
    }

    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    fn current_node(&self) -> &MenuNode {
        self.arena.node(self.current).unwrap_or_else(|| self.arena.root())
    }

    /// Heading for the level being listed
    pub fn current_title(&self) -> &str {
        self.current_node().heading()
    }

    /// Labels of the items at the current level
    pub fn current_labels(&self) -> Vec<&str> {
        self.current_node()
            .children
            .iter()
            .filter_map(|id| self.arena.node(*id))
            .map(|node| node.label.as_str())
            .collect()
    }

    pub fn sibling_count(&self) -> usize {
        self.current_node().children.len()
    }

    /// Move the cursor, wrapping at both ends
    pub fn move_selection(&mut self, direction: Direction) -> bool {
        let count = self.sibling_count();
        if count == 0 {
            return false;
        }
        let index = self.state.selected_index;
        self.state.selected_index = match direction {
            Direction::Down if index >= count - 1 => 0,
            Direction::Down => index + 1,
            Direction::Up if index == 0 => count - 1,
            Direction::Up => index - 1,
        };
        tracing::debug!(index = self.state.selected_index, "selection moved");
        true
    }

    /// Put the cursor on a specific row (pointer selection)
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.sibling_count() {
            return false;
        }
        self.state.selected_index = index;
        true
    }

    /// Pick the item under the cursor. The caller runs its action, if any,
    /// and then hands the outcome to [`Self::finish_activation`].
    pub fn begin_activation(&self) -> Option<Activation> {
        let node_id = *self
            .current_node()
            .children
            .get(self.state.selected_index)?;
        let node = self.arena.node(node_id)?;
        Some(Activation {
            node: node_id,
            item_id: node.id.clone(),
            label: node.label.clone(),
            action: node.action.clone(),
            has_children: node.has_children(),
            parent_path: self.state.path.clone(),
        })
    }

    /// Apply the post-action step of an activation
    pub fn finish_activation(&mut self, activation: Activation, outcome: ActionOutcome) -> Transition {
        match outcome {
            ActionOutcome::Mount(tree) | ActionOutcome::Enter { tree, .. } => {
                self.mount(tree);
                Transition::Mounted
            }
            ActionOutcome::Stay => {
                if !activation.has_children || activation.parent_path != self.state.path {
                    return Transition::Stayed;
                }
                let mut path = self.state.path.clone();
                path.push(activation.item_id);
                match resolve(&self.arena, &path) {
                    Some(node) => {
                        self.index_stack.push(self.state.selected_index);
                        self.current = node;
                        self.state = NavigationState {
                            path,
                            selected_index: 0,
                        };
                        Transition::Descended
                    }
                    None => Transition::Stayed,
                }
            }
        }
    }

    /// Activate an item that has no action attached
    pub fn activate(&mut self) -> Option<Transition> {
        let activation = self.begin_activation()?;
        if activation.action.is_some() {
            return None;
        }
        Some(self.finish_activation(activation, ActionOutcome::Stay))
    }

    /// Return to the parent level
    pub fn back(&mut self) -> bool {
        if self.state.path.is_empty() {
            return false;
        }
        let mut path = self.state.path.clone();
        path.pop();
        let Some(parent) = resolve(&self.arena, &path) else {
            return false;
        };
        let remembered = self.index_stack.pop();
        self.current = parent;
        self.state = NavigationState {
            path,
            selected_index: if self.remember_selection {
                remembered.unwrap_or(0)
            } else {
                0
            },
        };
        true
    }

    /// Jump straight to an interior node addressed by a dotted path
    pub fn jump_to(&mut self, dotted: &str) -> bool {
        let Some(node) = resolve_dotted(&self.arena, dotted) else {
            return false;
        };
        let segments = split_dotted(dotted);
        if !self.arena.node(node).is_some_and(MenuNode::has_children) {
            return false;
        }
        self.current = node;
        self.index_stack = vec![0; segments.len()];
        self.state = NavigationState {
            path: segments.into_iter().map(str::to_string).collect(),
            selected_index: 0,
        };
        true
    }
}
