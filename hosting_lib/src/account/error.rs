//! Error types for account operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Contact not found with ID [{id}]")]
    ContactNotFound { id: i64 },
    #[error(transparent)]
    Api(#[from] hosting_api::Error),
}
