//! Resolution of id paths against a mounted menu

use super::model::{MenuArena, NodeId};

/// Walk `path` from the root, matching one segment per level.
///
/// An empty path resolves to the synthetic root. Returns `None` as soon as a
/// segment matches no child at its level.
pub fn resolve<S: AsRef<str>>(arena: &MenuArena, path: &[S]) -> Option<NodeId> {
    path.iter().try_fold(MenuArena::ROOT, |node, segment| {
        arena.child_by_id(node, segment.as_ref())
    })
}

/// Resolve a dotted path such as `project.features.add`
pub fn resolve_dotted(arena: &MenuArena, dotted: &str) -> Option<NodeId> {
    resolve(arena, &split_dotted(dotted))
}

/// Split a dotted path into segments (`""` is the root)
pub fn split_dotted(dotted: &str) -> Vec<&str> {
    if dotted.is_empty() {
        Vec::new()
    } else {
        dotted.split('.').collect()
    }
}
