use std::fmt;

use tracing::debug;

use crate::core::{Created, Namespace, NodeId};
use crate::error::{NamespaceError, ShellError};
use crate::shell::Command;

const UNRECOGNIZED: &str = "ERR: CANNOT RECOGNIZE INPUT.";

/// Structured result of one shell command.
///
/// `Display` renders it in the line-oriented convention of the shell (`SUCC: ...`,
/// `ERR: ...`, `DIRS: ...`, `PATH: ...`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Child names of the current node, sorted.
    Listed(Vec<String>),
    WorkingDirectory(String),
    Created(Created),
    Reached(NodeId),
    Removed(NodeId),
    Cleared,
    /// The namespace refused the operation.
    Failed(NamespaceError),
    /// The input could not be parsed into a command.
    Rejected(ShellError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_) | Outcome::Rejected(_))
    }
}

/// Runs a parsed command against `namespace`. Engine errors become [`Outcome::Failed`].
pub fn execute<N: Namespace + ?Sized>(namespace: &mut N, command: Command) -> Outcome {
    debug!(?command, "executing");
    let result = match command {
        Command::Ls => {
            let mut names: Vec<String> = namespace.ls().into_iter().map(String::from).collect();
            names.sort();
            Ok(Outcome::Listed(names))
        }
        Command::Pwd => Ok(Outcome::WorkingDirectory(namespace.pwd())),
        Command::Mkdir(path) => namespace.mkdir(&path).map(Outcome::Created),
        Command::Cd(path) => namespace.cd(&path).map(Outcome::Reached),
        Command::Rm(path) => namespace.rm(&path).map(Outcome::Removed),
        Command::SessionClear => {
            namespace.reset();
            Ok(Outcome::Cleared)
        }
    };
    result.unwrap_or_else(Outcome::Failed)
}

/// Parses `args` and runs the resulting command.
pub fn dispatch<N, S>(namespace: &mut N, args: &[S]) -> Outcome
where
    N: Namespace + ?Sized,
    S: AsRef<str>,
{
    match Command::parse(args) {
        Ok(command) => execute(namespace, command),
        Err(e) => Outcome::Rejected(e),
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Listed(names) => {
                write!(f, "DIRS: ")?;
                for name in names {
                    write!(f, "{name}\t")?;
                }
                Ok(())
            }
            Outcome::WorkingDirectory(path) => write!(f, "PATH: {path}"),
            Outcome::Created(created) => {
                if created.shadowed.is_some() {
                    writeln!(f, "ERR: DIRECTORY ALREADY EXISTS")?;
                }
                write!(f, "SUCC: CREATED")
            }
            Outcome::Reached(_) => write!(f, "SUCC: REACHED"),
            Outcome::Removed(_) => write!(f, "SUCC: DELETED"),
            Outcome::Cleared => write!(f, "SUCC: CLEARED: RESET TO ROOT"),
            Outcome::Failed(e) => match e {
                NamespaceError::InvalidPath(_) => write!(f, "ERR: INVALID PATH"),
                NamespaceError::CannotCreateRoot => write!(f, "ERR: CANNOT CREATE ROOT"),
                NamespaceError::CannotRemoveRoot => write!(f, "ERR: CANNOT REMOVE ROOT"),
                NamespaceError::ReservedName(_) => {
                    write!(f, "ERR: NODE TO CREATE SHOULD BE EXPANDED NAME")
                }
                NamespaceError::AlreadyExists { .. } => write!(f, "ERR: DIRECTORY ALREADY EXISTS"),
            },
            Outcome::Rejected(e) => match e {
                ShellError::InvalidArgumentCount { .. } => {
                    writeln!(f, "<INVALID ARGS>")?;
                    write!(f, "{UNRECOGNIZED}")
                }
                ShellError::UnrecognizedCommand(_) => write!(f, "{UNRECOGNIZED}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TreeFS;

    fn run(fs: &mut TreeFS, line: &str) -> String {
        dispatch(fs, &crate::shell::tokenize(line)).to_string()
    }

    #[test]
    fn test_render_listing() {
        let mut fs = TreeFS::new();
        assert_eq!(run(&mut fs, "ls"), "DIRS: ");
        run(&mut fs, "mkdir b");
        run(&mut fs, "mkdir a");
        assert_eq!(run(&mut fs, "ls"), "DIRS: a\tb\t");
    }

    #[test]
    fn test_render_successes() {
        let mut fs = TreeFS::new();
        assert_eq!(run(&mut fs, "mkdir docs"), "SUCC: CREATED");
        assert_eq!(run(&mut fs, "cd docs"), "SUCC: REACHED");
        assert_eq!(run(&mut fs, "pwd"), "PATH: /docs/");
        assert_eq!(run(&mut fs, "rm /docs"), "SUCC: DELETED");
        assert_eq!(run(&mut fs, "session clear"), "SUCC: CLEARED: RESET TO ROOT");
        assert_eq!(run(&mut fs, "pwd"), "PATH: /");
    }

    #[test]
    fn test_render_duplicate_mkdir() {
        let mut fs = TreeFS::new();
        run(&mut fs, "mkdir x");
        assert_eq!(
            run(&mut fs, "mkdir x"),
            "ERR: DIRECTORY ALREADY EXISTS\nSUCC: CREATED"
        );

        fs.set_duplicate_policy(crate::DuplicatePolicy::Reject);
        assert_eq!(run(&mut fs, "mkdir x"), "ERR: DIRECTORY ALREADY EXISTS");
    }

    #[test]
    fn test_render_failures() {
        let mut fs = TreeFS::new();
        assert_eq!(run(&mut fs, "cd nowhere"), "ERR: INVALID PATH");
        assert_eq!(run(&mut fs, "mkdir /"), "ERR: CANNOT CREATE ROOT");
        assert_eq!(run(&mut fs, "rm /"), "ERR: CANNOT REMOVE ROOT");
        assert_eq!(run(&mut fs, "mkdir .."), "ERR: NODE TO CREATE SHOULD BE EXPANDED NAME");
        assert_eq!(run(&mut fs, "rm ."), "ERR: NODE TO CREATE SHOULD BE EXPANDED NAME");
    }

    #[test]
    fn test_render_rejected_input() {
        let mut fs = TreeFS::new();
        assert_eq!(
            run(&mut fs, "ls extra"),
            "<INVALID ARGS>\nERR: CANNOT RECOGNIZE INPUT."
        );
        assert_eq!(run(&mut fs, "touch a"), "ERR: CANNOT RECOGNIZE INPUT.");
    }

    #[test]
    fn test_is_success() {
        let mut fs = TreeFS::new();
        assert!(dispatch(&mut fs, &["mkdir", "a"]).is_success());
        assert!(!dispatch(&mut fs, &["cd", "b"]).is_success());
        assert!(!dispatch(&mut fs, &["cd"]).is_success());
    }

    #[test]
    fn test_execute_through_trait_object() {
        let mut fs = TreeFS::new();
        let ns: &mut dyn Namespace = &mut fs;
        assert_eq!(execute(ns, Command::Mkdir("a".into())), Outcome::Created(Created { id: 1, shadowed: None }));
        assert_eq!(execute(ns, Command::Cd("a".into())), Outcome::Reached(1));
        assert_eq!(execute(ns, Command::Ls), Outcome::Listed(vec![]));
    }
}
