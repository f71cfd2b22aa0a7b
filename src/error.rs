//! Error types for the contact bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Which argument prompt to show when a command is missing arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Usage {
    /// `add <name> <phone>`
    NameAndPhone,
    /// `change <name> <old_phone> <new_phone>`
    NameAndPhones,
    /// `phone <name>` and `delete <name>`
    UserName,
}

impl Usage {
    pub fn prompt(self) -> &'static str {
        match self {
            Self::NameAndPhone => "Give me name and phone please.",
            Self::NameAndPhones => "Give me name, old phone and new phone please.",
            Self::UserName => "Enter user name.",
        }
    }
}

/// Errors a single bot command can end with.
///
/// None of these stop the command loop; each one is reported back to the
/// user and the command has no effect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BotError {
    /// A phone number failed validation
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// No record is stored under the given name
    #[error("Contact not found.")]
    ContactNotFound,

    /// The record has no phone equal to the one given
    #[error("Phone not found")]
    PhoneNotFound,

    /// Too few arguments for the command
    #[error("{}", .0.prompt())]
    MissingArguments(Usage),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BotError
pub type BotResult<T> = Result<T, BotError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
