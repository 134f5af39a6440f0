use thiserror::Error;

use crate::core::NodeId;

/// Errors returned by namespace operations. None of them is fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamespaceError {
    /// A path segment does not exist in the current tree shape.
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// `mkdir /` was requested.
    #[error("the root cannot be created")]
    CannotCreateRoot,

    /// `rm /` was requested.
    #[error("the root cannot be removed")]
    CannotRemoveRoot,

    /// The node to create or remove is named `.` or `..`.
    #[error("'{0}' is a reserved name")]
    ReservedName(String),

    /// A sibling with the same name already exists.
    #[error("directory '{name}' already exists (node {existing})")]
    AlreadyExists {
        /// Name of the directory.
        name: String,
        /// ID of the sibling that holds the name.
        existing: NodeId,
    },
}

/// Errors raised while turning a token vector into a [`Command`](crate::Command).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// A known command got the wrong number of tokens (the command name included).
    #[error("'{command}' expects {expected} arguments, got {actual}")]
    InvalidArgumentCount {
        command: String,
        expected: usize,
        actual: usize,
    },

    /// The first token is not a known command.
    #[error("unrecognized command: '{0}'")]
    UnrecognizedCommand(String),
}
