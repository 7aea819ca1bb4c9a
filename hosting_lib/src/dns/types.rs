//! DNS types returned and accepted by the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Zone {
    pub name: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Debug, Default)]
pub struct CreateZoneRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Debug, Default)]
pub struct PatchZoneRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// DNS record type.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordType {
    A,
    #[serde(rename = "AAAA")]
    Aaaa,
    #[serde(rename = "CAA")]
    Caa,
    #[serde(rename = "CNAME")]
    Cname,
    #[serde(rename = "MX")]
    Mx,
    #[serde(rename = "NS")]
    Ns,
    #[serde(rename = "PTR")]
    Ptr,
    #[serde(rename = "SOA")]
    Soa,
    #[serde(rename = "SPF")]
    Spf,
    #[serde(rename = "SRV")]
    Srv,
    #[serde(rename = "TXT")]
    Txt,
}
impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                RecordType::A => "A",
                RecordType::Aaaa => "AAAA",
                RecordType::Caa => "CAA",
                RecordType::Cname => "CNAME",
                RecordType::Mx => "MX",
                RecordType::Ns => "NS",
                RecordType::Ptr => "PTR",
                RecordType::Soa => "SOA",
                RecordType::Spf => "SPF",
                RecordType::Srv => "SRV",
                RecordType::Txt => "TXT",
            }
        )
    }
}

/// A record within a zone.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Record {
    pub id: i64,
    #[serde(default)]
    pub template_id: Option<i64>,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub content: String,
    /// Time to live in seconds. `None` uses the zone default.
    #[serde(default)]
    pub ttl: Option<u32>,
    #[serde(default)]
    pub priority: Option<u32>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Serialize, Debug)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

#[derive(Serialize, Debug, Default)]
pub struct PatchRecordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<RecordType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Body of a create response that only reports the new ID.
#[derive(Deserialize, Debug)]
pub(crate) struct CreatedId<T> {
    pub id: T,
}
