//! Domain value objects and types.
//!
//! Contact names and phone numbers are wrapped in dedicated types so that a
//! malformed phone number can never be stored on a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::ContactName;
pub use phone::PhoneNumber;
