use std::collections::HashMap;

use crate::core::NodeId;

/// A directory node of the namespace tree.
///
/// `children` maps each child name to the child's ID, so the set of child names and the
/// `(parent, name) -> id` lookup can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    name: String,
    parent: NodeId,
    children: HashMap<String, NodeId>,
}

impl Node {
    pub(crate) fn new(name: &str, parent: NodeId) -> Node {
        Node {
            name: name.to_string(),
            parent,
            children: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Recorded parent. Root and soft-deleted nodes point at the root.
    pub fn parent(&self) -> NodeId {
        self.parent
    }

    /// Child names, in no particular order.
    pub fn children(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn child(&self, name: &str) -> Option<NodeId> {
        self.children.get(name).copied()
    }

    pub fn has_child(&self, name: &str) -> bool {
        self.children.contains_key(name)
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_parent(&mut self, parent: NodeId) {
        self.parent = parent;
    }

    /// Binds `name` to `id`, returning the ID previously bound to it.
    pub(crate) fn attach(&mut self, name: &str, id: NodeId) -> Option<NodeId> {
        self.children.insert(name.to_string(), id)
    }

    pub(crate) fn detach(&mut self, name: &str) -> Option<NodeId> {
        self.children.remove(name)
    }
}
