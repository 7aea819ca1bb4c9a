//! Error types for DNS operations.

use thiserror::Error;

/// Errors from DNS operations.
#[derive(Error, Debug)]
pub enum DnsError {
    #[error("Zone not found with name [{name}]")]
    ZoneNotFound { name: String },
    #[error("Record not found with ID [{id}]")]
    RecordNotFound { id: i64 },
    #[error(transparent)]
    Api(#[from] hosting_api::Error),
}
