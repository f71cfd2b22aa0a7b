//! Command handlers for the contact bot.
//!
//! Each handler turns one parsed [`Command`] into the text shown to the user.
//! Failures are translated into messages here and never leave the handler.

use crate::bot::command::Command;
use crate::error::{BotError, BotResult};
use crate::services::{AddOutcome, ContactService, ContactServiceImpl};

/// Whether the loop should read another line after a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The text produced by one command and what the loop does next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub message: String,
    pub flow: Flow,
}

impl Reply {
    fn say(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            flow: Flow::Continue,
        }
    }

    fn farewell() -> Self {
        Self {
            message: "Good bye!".to_string(),
            flow: Flow::Exit,
        }
    }
}

/// The contact bot: owns the contact service and answers commands.
#[derive(Debug)]
pub struct ContactBot<S = ContactServiceImpl> {
    service: S,
}

impl<S: ContactService> ContactBot<S> {
    /// Create a new bot around a contact service.
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Parse and answer a raw input line.
    pub fn handle_line(&mut self, line: &str) -> Reply {
        match Command::parse(line) {
            Ok(command) => self.dispatch(command),
            Err(e) => Reply::say(error_message(&e)),
        }
    }

    /// Answer a parsed command.
    pub fn dispatch(&mut self, command: Command) -> Reply {
        tracing::debug!(?command, "Dispatching command");

        let result = match command {
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Add { name, phone } => self.add_contact(&name, &phone),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => self.change_contact(&name, &old_phone, &new_phone),
            Command::Phone { name } => self.show_phone(&name),
            Command::All => Ok(self.show_all()),
            Command::Delete { name } => self.delete_contact(&name),
            Command::Exit => return Reply::farewell(),
            Command::Unknown(word) => {
                tracing::debug!(command = %word, "Unknown command");
                Ok("Invalid command.".to_string())
            }
        };

        match result {
            Ok(message) => Reply::say(message),
            Err(e) => Reply::say(error_message(&e)),
        }
    }

    fn add_contact(&mut self, name: &str, phone: &str) -> BotResult<String> {
        let message = match self.service.add_phone(name, phone)? {
            AddOutcome::Created => "Contact added.",
            AddOutcome::PhoneAdded => "Phone added.",
        };
        Ok(message.to_string())
    }

    fn change_contact(&mut self, name: &str, old_phone: &str, new_phone: &str) -> BotResult<String> {
        self.service.change_phone(name, old_phone, new_phone)?;
        Ok("Contact updated.".to_string())
    }

    fn show_phone(&self, name: &str) -> BotResult<String> {
        let record = self.service.get_contact(name)?;
        if record.phones().is_empty() {
            return Ok("No phones for this contact.".to_string());
        }
        Ok(record.phones_display())
    }

    fn show_all(&self) -> String {
        let records = self.service.list_contacts();
        if records.is_empty() {
            return "No contacts stored.".to_string();
        }
        records
            .iter()
            .map(|record| record.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn delete_contact(&mut self, name: &str) -> BotResult<String> {
        self.service.delete_contact(name)?;
        Ok("Contact deleted.".to_string())
    }
}

/// Translate a command failure into the message shown to the user.
fn error_message(err: &BotError) -> String {
    match err {
        BotError::Validation(e) => {
            tracing::warn!(error = %e, "Rejected phone number");
            format!("Error: {}", e)
        }
        BotError::ContactNotFound => format!("Error: {}", err),
        BotError::PhoneNotFound => format!("Error: {}", err),
        BotError::MissingArguments(usage) => {
            tracing::warn!(?usage, "Command is missing arguments");
            format!("Error: {}", usage.prompt())
        }
    }
}
