mod config;
mod node;
mod tree_fs;

pub use config::{DuplicatePolicy, TreeConfig};
pub use node::Node;
pub use tree_fs::TreeFS;
