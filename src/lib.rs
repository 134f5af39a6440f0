//! An in-memory virtual directory namespace driven by shell-like commands.
//!
//! ### Overview
//!
//! `vfs-namespace` keeps a tree of directory nodes entirely in memory, with no disk state.
//! It defines the `Namespace` trait and provides `TreeFS`, an arena-backed implementation with
//! a current working node, relative/absolute path resolution and soft-delete removal.
//!
//! **Key ideas**:
//! - **Engine first**: `TreeFS` answers `ls`, `pwd`, `mkdir`, `cd`, `rm` and `reset` with
//!   structured results; it never prints.
//! - **Thin front end**: the `shell` module tokenizes lines, parses them into `Command`s and
//!   renders each `Outcome` as a single `SUCC:`/`ERR:`/`DIRS:`/`PATH:` line.
//! - **Explicit state**: every session owns its own `TreeFS`; there is no global state.
//!
//! ### Example
//!
//! ```no_run
//! use vfs_namespace::{Namespace, TreeFS};
//!
//! let mut fs = TreeFS::new();
//! fs.mkdir("docs").unwrap();
//! fs.cd("docs").unwrap();
//! fs.mkdir("../photos").unwrap();
//! assert_eq!(fs.pwd(), "/docs/");
//! ```

mod core;
mod error;
pub mod shell;
mod vfs;

pub use crate::core::{Created, Namespace, NodeId, ROOT_ID, ROOT_NAME, Result};
pub use crate::error::{NamespaceError, ShellError};
pub use crate::shell::{Command, Outcome, Shell};
pub use crate::vfs::{DuplicatePolicy, Node, TreeConfig, TreeFS};
