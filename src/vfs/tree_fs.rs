//! This module provides the in-memory namespace tree: a node arena, the path resolver and the
//! directory operations built on top of it.

use tracing::{debug, trace, warn};

use crate::core::{Created, Namespace, NodeId, ROOT_ID, ROOT_NAME, Result, utils};
use crate::error::NamespaceError;
use crate::vfs::{DuplicatePolicy, Node, TreeConfig};

/// A virtual namespace that keeps a tree of directory nodes in memory.
///
/// Nodes are addressed by small integer IDs handed out in creation order. Names are only
/// unique among siblings, so `/a/x` and `/b/x` may coexist.
///
/// ### Internal state
///
/// * `nodes` — The node arena. A node's ID is its index, so the arena length is also the
///   next ID to hand out. IDs are never reused until `reset()`.
/// * `cwd` — ID of the current working node. Relative paths are resolved from here.
/// * `config` — Behavior switches (see [`TreeConfig`]).
///
/// ### Invariants
///
/// 1. **Root existence**: node `0` is named `root` and is its own parent.
/// 2. **Sibling uniqueness**: a node maps each child name to exactly one ID.
/// 3. **Parent consistency**: if node `p` maps `name` to `c`, then `c` is named `name` and
///    records `p` as its parent.
/// 4. **Acyclic parents**: every recorded parent of a non-root node has a smaller ID or is
///    the root, so walking up always reaches the root.
///
/// ### Removal
///
/// `rm()` is a soft-delete. The removed node is unbound from its parent and re-parented to
/// the root, but it stays in the arena together with its whole subtree. None of them can be
/// reached by name afterwards. If the current working node is removed, `cwd` keeps pointing
/// at it.
///
/// ### Thread Safety
///
/// Not thread-safe. Every operation both reads and writes the arena, so concurrent sessions
/// would need one exclusive lock per command (e.g. `Mutex<TreeFS>`).
///
/// ### Example
///
/// ```no_run
/// let mut fs = TreeFS::new();
///
/// fs.mkdir("docs").unwrap();
/// fs.cd("docs").unwrap();
/// fs.mkdir("../photos").unwrap();
/// assert_eq!(fs.pwd(), "/docs/");
/// ```
#[derive(Debug, Clone)]
pub struct TreeFS {
    nodes: Vec<Node>,
    cwd: NodeId,
    config: TreeConfig,
}

impl TreeFS {
    /// Creates new TreeFS instance holding only the root, with default configuration.
    pub fn new() -> Self {
        Self::with_config(TreeConfig::default())
    }

    pub fn with_config(config: TreeConfig) -> Self {
        Self {
            nodes: vec![Node::new(ROOT_NAME, ROOT_ID)],
            cwd: ROOT_ID,
            config,
        }
    }

    pub fn config(&self) -> &TreeConfig {
        &self.config
    }

    pub fn set_duplicate_policy(&mut self, policy: DuplicatePolicy) {
        self.config.duplicate_policy = policy;
    }

    /// Returns the node with `id`. Soft-deleted nodes are still returned.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id as usize)
    }

    /// Number of nodes allocated since the last reset, the root and soft-deleted nodes
    /// included.
    pub fn allocated(&self) -> usize {
        self.nodes.len()
    }

    fn entry(&self, id: NodeId) -> &Node {
        &self.nodes[id as usize]
    }

    fn entry_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id as usize]
    }

    fn next_id(&self) -> NodeId {
        self.nodes.len() as NodeId
    }

    /// Allocates a node and binds it under `parent`.
    /// Returns the new ID and the ID previously bound to `name`, if any.
    fn create_node(&mut self, parent: NodeId, name: &str) -> (NodeId, Option<NodeId>) {
        let id = self.next_id();
        self.nodes.push(Node::new(name, parent));
        let shadowed = self.entry_mut(parent).attach(name, id);
        debug!(id, parent, name, "node created");
        (id, shadowed)
    }

    /// Unbinds `name` from `id`'s parent and re-parents `id` to the root.
    fn remove_node(&mut self, id: NodeId, name: &str) -> NodeId {
        let parent = self.entry(id).parent();
        self.entry_mut(parent).detach(name);
        self.entry_mut(id).set_parent(ROOT_ID);
        debug!(id, parent, name, "node detached");
        id
    }
}

impl Default for TreeFS {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace for TreeFS {
    fn cwd_id(&self) -> NodeId {
        self.cwd
    }

    /// Walks `path` segment by segment.
    ///
    /// Empty segments are skipped, so `a//b` and `a/b/` mean `a/b`. `.` stays in place, `..`
    /// moves to the parent (a no-op at the root). Any other segment must name a child of the
    /// node reached so far, otherwise the walk stops with `InvalidPath`.
    fn resolve(&self, path: &str) -> Result<NodeId> {
        let mut current = if path.is_empty() || path.starts_with('/') {
            ROOT_ID
        } else {
            self.cwd
        };
        for segment in utils::segments(path) {
            current = match segment {
                "." => current,
                ".." => self.entry(current).parent(),
                name => self
                    .entry(current)
                    .child(name)
                    .ok_or_else(|| NamespaceError::InvalidPath(path.to_string()))?,
            };
            trace!(segment, current, "resolved segment");
        }
        Ok(current)
    }

    fn ls(&self) -> Vec<&str> {
        self.entry(self.cwd).children().collect()
    }

    fn pwd(&self) -> String {
        let mut names = Vec::new();
        let mut current = self.cwd;
        while self.entry(current).parent() != current {
            let node = self.entry(current);
            names.push(node.name());
            current = node.parent();
        }
        let mut path = String::from("/");
        for name in names.iter().rev() {
            path.push_str(name);
            path.push('/');
        }
        path
    }

    /// Creates a single directory.
    ///
    /// One trailing `/` is ignored. Everything before the last `/` must resolve to an
    /// existing node; without a `/` the directory is created in the current working node.
    ///
    /// # Errors
    /// - `CannotCreateRoot` for `/`.
    /// - `ReservedName` if the new name is `.` or `..`.
    /// - `InvalidPath` if the new name is empty (e.g. `a//`) or the parent does not resolve.
    /// - `AlreadyExists` if the name is taken and the policy is [`DuplicatePolicy::Reject`].
    ///   With [`DuplicatePolicy::Shadow`] the directory is created anyway and the old sibling
    ///   is reported in [`Created::shadowed`].
    fn mkdir(&mut self, path: &str) -> Result<Created> {
        if utils::is_virtual_root(path) {
            return Err(NamespaceError::CannotCreateRoot);
        }
        let path = utils::strip_last_slash(path);
        let (parent_path, name) = utils::split_last(path);
        if utils::is_reserved(name) {
            return Err(NamespaceError::ReservedName(name.to_string()));
        }
        if name.is_empty() {
            return Err(NamespaceError::InvalidPath(path.to_string()));
        }

        let parent = match parent_path {
            Some(parent_path) => self.resolve(parent_path)?,
            None => self.cwd,
        };

        if let Some(existing) = self.entry(parent).child(name) {
            match self.config.duplicate_policy {
                DuplicatePolicy::Reject => {
                    return Err(NamespaceError::AlreadyExists {
                        name: name.to_string(),
                        existing,
                    });
                }
                DuplicatePolicy::Shadow => {
                    warn!(existing, parent, name, "directory already exists, shadowing it");
                }
            }
        }

        let (id, shadowed) = self.create_node(parent, name);
        Ok(Created { id, shadowed })
    }

    /// Changes the current working node. On error the current node is left unchanged.
    fn cd(&mut self, path: &str) -> Result<NodeId> {
        let target = self.resolve(path)?;
        debug!(from = self.cwd, to = target, "cwd changed");
        self.cwd = target;
        Ok(target)
    }

    /// Soft-deletes the node at `path` and returns its ID.
    ///
    /// The whole path (after stripping one trailing `/`) must resolve, and its last segment
    /// must be a real name rather than `.` or `..`.
    ///
    /// # Errors
    /// - `CannotRemoveRoot` for `/`.
    /// - `ReservedName` if the last segment is `.` or `..`.
    /// - `InvalidPath` if the path does not resolve or the resolved node is not bound under
    ///   that name in its parent (e.g. `a//`).
    fn rm(&mut self, path: &str) -> Result<NodeId> {
        if utils::is_virtual_root(path) {
            return Err(NamespaceError::CannotRemoveRoot);
        }
        let path = utils::strip_last_slash(path);
        let (_, name) = utils::split_last(path);
        if utils::is_reserved(name) {
            return Err(NamespaceError::ReservedName(name.to_string()));
        }

        let target = self.resolve(path)?;
        let parent = self.entry(target).parent();
        if !self.entry(parent).has_child(name) {
            return Err(NamespaceError::InvalidPath(path.to_string()));
        }

        Ok(self.remove_node(target, name))
    }

    /// Drops every node but the root. The configuration is kept.
    fn reset(&mut self) {
        debug!(nodes = self.nodes.len(), "namespace reset");
        self.nodes.clear();
        self.nodes.push(Node::new(ROOT_NAME, ROOT_ID));
        self.cwd = ROOT_ID;
    }
}
