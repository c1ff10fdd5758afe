use seating::GroupId;
use serde::Serialize;
use std::fmt;

/// A single step of a seating script.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum Command {
    /// A party of this many clients walks in.
    Arrive(usize),
    /// The group with this arrival index leaves.
    Leave(GroupId),
    /// Render the venue without changing it.
    Show,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Arrive(size) => write!(f, "in {size}"),
            Self::Leave(group) => write!(f, "out {}", group.0),
            Self::Show => write!(f, "show"),
        }
    }
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Party size is not a positive number.
    InvalidPartySize(String),
    /// Group index is not a number.
    InvalidGroupIndex(String),
    /// Command needs an argument.
    MissingArgument(&'static str),
    /// Too many words on the line.
    TrailingInput(String),
    /// Unrecognized command.
    UnrecognizedCommand(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPartySize(value) => write!(
                f,
                "Invalid party size '{}'. Must be a positive number (e.g., 'in 4')",
                value
            ),
            Self::InvalidGroupIndex(value) => write!(
                f,
                "Invalid group '{}'. Use the arrival index (e.g., 'out 2')",
                value
            ),
            Self::MissingArgument(cmd) => write!(f, "'{}' needs an argument", cmd),
            Self::TrailingInput(rest) => write!(f, "Unexpected input '{}'", rest),
            Self::UnrecognizedCommand(cmd) => write!(
                f,
                "Unrecognized command '{}'. Use 'in N', 'out K' or 'show'",
                cmd
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// A parse error with the 1-based script line it came from.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("line {line}: {source}")]
pub struct ScriptError {
    pub line: usize,
    pub source: ParseError,
}

/// Parse a command string into a Command.
///
/// Blank lines and lines starting with `#` yield `Ok(None)`. Anything after a
/// `#` on a command line is ignored as well.
///
/// # Examples
///
/// ```
/// use seat_cli::commands::{parse_command, Command};
/// use seating::GroupId;
///
/// assert_eq!(parse_command("in 3").unwrap(), Some(Command::Arrive(3)));
/// assert_eq!(parse_command("leave 2").unwrap(), Some(Command::Leave(GroupId(2))));
/// assert_eq!(parse_command("# comment").unwrap(), None);
/// ```
pub fn parse_command(input: &str) -> Result<Option<Command>, ParseError> {
    let content = input.split('#').next().unwrap_or_default();
    let mut words = content.split_whitespace();

    let Some(keyword) = words.next() else {
        return Ok(None);
    };

    let command = match keyword.to_lowercase().as_str() {
        "in" | "arrive" => {
            let value = words.next().ok_or(ParseError::MissingArgument("in"))?;
            match value.parse::<usize>() {
                Ok(size) if size > 0 => Command::Arrive(size),
                _ => return Err(ParseError::InvalidPartySize(value.to_string())),
            }
        }
        "out" | "leave" => {
            let value = words.next().ok_or(ParseError::MissingArgument("out"))?;
            let index = value
                .parse::<u64>()
                .map_err(|_| ParseError::InvalidGroupIndex(value.to_string()))?;
            Command::Leave(GroupId(index))
        }
        "show" => Command::Show,
        other => return Err(ParseError::UnrecognizedCommand(other.to_string())),
    };

    let rest: Vec<&str> = words.collect();
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.join(" ")));
    }

    Ok(Some(command))
}

/// Parse a whole script, one command per line.
pub fn parse_script(script: &str) -> Result<Vec<Command>, ScriptError> {
    let mut commands = Vec::new();
    for (i, line) in script.lines().enumerate() {
        match parse_command(line) {
            Ok(Some(command)) => commands.push(command),
            Ok(None) => {}
            Err(source) => return Err(ScriptError { line: i + 1, source }),
        }
    }
    Ok(commands)
}
