//! Line-oriented front end for a [`Namespace`](crate::Namespace): tokenizing, command parsing,
//! dispatch and textual rendering of results.

mod command;
mod outcome;
mod session;

pub use command::{Command, tokenize};
pub use outcome::{Outcome, dispatch, execute};
pub use session::Shell;
