//! Application service layer.
//!
//! Services contain the business rules behind each bot command and sit
//! between the command handlers and the repository.

mod contact_service;

pub use contact_service::{AddOutcome, ContactService, ContactServiceImpl};
