//! DNS zones and records.

pub mod error;
pub mod service;
pub mod types;

pub use error::DnsError;
pub use service::DnsService;
pub use types::{
    CreateRecordRequest, CreateZoneRequest, PatchRecordRequest, PatchZoneRequest, Record,
    RecordType, Zone,
};
