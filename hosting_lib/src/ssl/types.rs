//! SSL types returned and accepted by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CertificateStatus {
    Completed,
    Pending,
    Cancelled,
    Expired,
    #[serde(other)]
    Unknown,
}
impl std::fmt::Display for CertificateStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                CertificateStatus::Completed => "Completed",
                CertificateStatus::Pending => "Pending",
                CertificateStatus::Cancelled => "Cancelled",
                CertificateStatus::Expired => "Expired",
                CertificateStatus::Unknown => "Unknown",
            }
        )
    }
}

/// An issued or pending certificate.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Certificate {
    pub id: i64,
    pub name: String,
    pub status: CertificateStatus,
    pub common_name: String,
    #[serde(default)]
    pub alternative_names: Vec<String>,
    /// Days until the certificate expires.
    pub valid_days: i64,
    #[serde(default)]
    pub ordered_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub renewal_date: Option<DateTime<Utc>>,
}

/// PEM-encoded certificate material.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CertificateContent {
    pub combined: String,
    pub certificate: String,
    pub ca_bundle: String,
}

#[derive(Serialize, Debug)]
pub struct ValidateRequest {
    pub key: String,
    pub certificate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ca_bundle: Option<String>,
}

/// Result of validating a key/certificate pair.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CertificateValidation {
    #[serde(default)]
    pub domains: Vec<String>,
    pub expires_at: DateTime<Utc>,
}
