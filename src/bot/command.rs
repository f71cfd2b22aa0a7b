//! Command line tokenizing.

use crate::error::{BotError, BotResult, Usage};

/// A parsed bot command with its positional arguments.
///
/// Arguments past the ones a command needs are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    Delete {
        name: String,
    },
    Exit,
    /// Anything else, including an empty line.
    Unknown(String),
}

/// Split a raw line into a lowercased command word and its arguments.
///
/// Splitting is on any whitespace; there is no quoting or escaping.
pub fn parse_input(line: &str) -> (String, Vec<&str>) {
    let mut parts = line.split_whitespace();
    let command = parts.next().unwrap_or_default().to_lowercase();
    (command, parts.collect())
}

impl Command {
    /// Parse a raw input line.
    ///
    /// # Errors
    ///
    /// Returns `BotError::MissingArguments` when a known command has fewer
    /// arguments than it needs.
    pub fn parse(line: &str) -> BotResult<Self> {
        let (command, args) = parse_input(line);

        let command = match command.as_str() {
            "hello" => Self::Hello,
            "add" => match args.as_slice() {
                [name, phone, ..] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                },
                _ => return Err(BotError::MissingArguments(Usage::NameAndPhone)),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone, ..] => Self::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                },
                _ => return Err(BotError::MissingArguments(Usage::NameAndPhones)),
            },
            "phone" => Self::Phone {
                name: Self::user_name(&args)?,
            },
            "all" => Self::All,
            "delete" => Self::Delete {
                name: Self::user_name(&args)?,
            },
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown(command),
        };

        Ok(command)
    }

    fn user_name(args: &[&str]) -> BotResult<String> {
        args.first()
            .map(|name| name.to_string())
            .ok_or(BotError::MissingArguments(Usage::UserName))
    }
}
