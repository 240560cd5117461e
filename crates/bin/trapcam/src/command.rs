//! Operator commands read from the terminal.

use std::str::FromStr;

use trapcam_domain::gallery::GALLERY;

/// One line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Step a gallery forward.
    Next(String),
    /// Step a gallery back.
    Prev(String),
    /// Re-render a gallery without moving.
    Show(String),
    /// Reload every gallery and the status.
    Reload,
    /// Wipe the backend's data log.
    Clear,
    /// Export the data log as CSV.
    Csv,
    Help,
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command `{0}`")]
    Unknown(String),
    #[error("`{0}` takes no arguments")]
    UnexpectedArgument(&'static str),
}

/// Usage text shown by `help`.
pub const HELP: &str = "\
commands:
  next [gallery]   show the next image (default gallery: `gallery`)
  prev [gallery]   show the previous image
  show [gallery]   show the current image again
  reload           reload every gallery and the status
  clear            clear the station database (asks for the admin password)
  csv              download the data log as CSV
  help             show this help
  quit             exit";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };
        let argument = words.next();
        let gallery = || argument.unwrap_or(GALLERY).to_string();
        let bare = |command: Command, name: &'static str| match argument {
            None => Ok(command),
            Some(_) => Err(CommandError::UnexpectedArgument(name)),
        };

        match verb.to_ascii_lowercase().as_str() {
            "next" | "n" => Ok(Self::Next(gallery())),
            "prev" | "p" => Ok(Self::Prev(gallery())),
            "show" | "s" => Ok(Self::Show(gallery())),
            "reload" | "r" => bare(Self::Reload, "reload"),
            "clear" => bare(Self::Clear, "clear"),
            "csv" => bare(Self::Csv, "csv"),
            "help" | "?" => bare(Self::Help, "help"),
            "quit" | "exit" | "q" => bare(Self::Quit, "quit"),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}
