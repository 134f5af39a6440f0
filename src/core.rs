use crate::error::NamespaceError;

/// Identifier of a node in the tree. Unique for the lifetime of a session.
pub type NodeId = u32;

/// ID of the root node. Root is its own parent.
pub const ROOT_ID: NodeId = 0;

/// Name carried by the root node.
pub const ROOT_NAME: &str = "root";

pub type Result<T> = std::result::Result<T, NamespaceError>;

/// Operations every namespace backend must provide.
///
/// All paths are `/`-separated. A path that is empty or starts with `/` is resolved from the
/// root; any other path is resolved from the current working node.
pub trait Namespace {
    /// Returns ID of the current working node.
    fn cwd_id(&self) -> NodeId;

    /// Resolves `path` to a node ID without changing any state.
    fn resolve(&self, path: &str) -> Result<NodeId>;

    /// Returns the child names of the current working node.
    fn ls(&self) -> Vec<&str>;

    /// Returns the absolute path of the current working node (e.g. `/a/b/`).
    fn pwd(&self) -> String;

    /// Creates a directory. The parent path must already exist.
    fn mkdir(&mut self, path: &str) -> Result<Created>;

    /// Moves the current working node to `path`.
    fn cd(&mut self, path: &str) -> Result<NodeId>;

    /// Detaches the node at `path` from its parent.
    fn rm(&mut self, path: &str) -> Result<NodeId>;

    /// Drops every node except the root and moves back to it.
    fn reset(&mut self);
}

/// Result of a successful `mkdir`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Created {
    /// ID of the new node.
    pub id: NodeId,
    /// Sibling with the same name that became unreachable, if any.
    pub shadowed: Option<NodeId>,
}

pub(crate) mod utils {
    /// Removes exactly one trailing `/`, if any.
    pub fn strip_last_slash(path: &str) -> &str {
        path.strip_suffix('/').unwrap_or(path)
    }

    /// Splits `path` at the last `/` into `(parent, name)`.
    /// `parent` is `None` when `path` contains no `/` at all.
    pub fn split_last(path: &str) -> (Option<&str>, &str) {
        match path.rfind('/') {
            Some(idx) => (Some(&path[..idx]), &path[idx + 1..]),
            None => (None, path),
        }
    }

    /// Returns true if `name` is `.` or `..`.
    pub fn is_reserved(name: &str) -> bool {
        name == "." || name == ".."
    }

    pub fn is_virtual_root(path: &str) -> bool {
        path == "/"
    }

    /// Iterates over non-empty segments of `path`.
    pub fn segments(path: &str) -> impl Iterator<Item = &str> {
        path.split('/').filter(|s| !s.is_empty())
    }

}
