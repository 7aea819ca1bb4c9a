//! Account contacts and credits.

pub mod error;
pub mod service;
pub mod types;

pub use error::AccountError;
pub use service::AccountService;
pub use types::{Contact, ContactType, Credit};
