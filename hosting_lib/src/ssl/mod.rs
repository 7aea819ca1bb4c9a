//! SSL certificates.

pub mod error;
pub mod service;
pub mod types;

pub use error::SslError;
pub use service::SslService;
pub use types::{
    Certificate, CertificateContent, CertificateStatus, CertificateValidation,
    ValidateRequest,
};
