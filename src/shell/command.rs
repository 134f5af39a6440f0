use crate::error::ShellError;

/// A parsed shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ls,
    Pwd,
    Mkdir(String),
    Cd(String),
    Rm(String),
    /// `session clear`
    SessionClear,
}

/// Splits a line on whitespace, dropping empty tokens.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

impl Command {
    /// Builds a command from a token vector. The first token is the command name and counts
    /// towards the expected number of arguments.
    pub fn parse<S: AsRef<str>>(args: &[S]) -> Result<Command, ShellError> {
        let Some(name) = args.first().map(|s| s.as_ref()) else {
            return Err(ShellError::UnrecognizedCommand(String::new()));
        };
        let path = || args[1].as_ref().to_string();
        match name {
            "ls" => expect_count(name, args.len(), 1).map(|_| Command::Ls),
            "pwd" => expect_count(name, args.len(), 1).map(|_| Command::Pwd),
            "mkdir" => expect_count(name, args.len(), 2).map(|_| Command::Mkdir(path())),
            "cd" => expect_count(name, args.len(), 2).map(|_| Command::Cd(path())),
            "rm" => expect_count(name, args.len(), 2).map(|_| Command::Rm(path())),
            "session" => match args.get(1).map(|s| s.as_ref()) {
                Some("clear") | None => {
                    expect_count(name, args.len(), 2).map(|_| Command::SessionClear)
                }
                Some(other) => Err(ShellError::UnrecognizedCommand(format!("{name} {other}"))),
            },
            other => Err(ShellError::UnrecognizedCommand(other.to_string())),
        }
    }
}

fn expect_count(command: &str, actual: usize, expected: usize) -> Result<(), ShellError> {
    if actual != expected {
        return Err(ShellError::InvalidArgumentCount {
            command: command.to_string(),
            expected,
            actual,
        });
    }
    Ok(())
}
