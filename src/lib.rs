//! Contact Bot - an interactive command-line assistant for a phone book.
//!
//! Contacts and their phone numbers are kept in memory for the lifetime of
//! the process and managed through a line-oriented command loop.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (phone numbers, contact names)
//! - **models**: Contact records and their phone lists
//! - **repositories**: Contact storage seam and the in-memory address book
//! - **services**: Business rules behind each command
//! - **bot**: Command parsing, handlers and the read-eval-print loop
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod bot;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod services;

pub use bot::{run_bot, Command, ContactBot, Flow, Reply};
pub use config::{Config, NamePolicy};
pub use domain::{ContactName, PhoneNumber, ValidationError};
pub use error::{BotError, BotResult, ConfigError, Usage};
pub use models::ContactRecord;
pub use repositories::{AddressBook, ContactRepository};
pub use services::{AddOutcome, ContactService, ContactServiceImpl};
