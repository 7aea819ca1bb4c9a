//! Error types for SSL operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SslError {
    #[error("Certificate not found with ID [{id}]")]
    CertificateNotFound { id: i64 },
    #[error(transparent)]
    Api(#[from] hosting_api::Error),
}
