//! Services for the hosting API: account, DNS, SSL and disaster recovery.
//!
//! Each service is a thin layer over [`hosting_api::Connection`]: it picks a
//! URL and a model type, validates identifiers before any request, and maps
//! a 404 on a per-id endpoint to its own typed "not found" error.

pub mod account;
pub mod client;
pub mod dns;
pub mod draas;
pub mod ssl;
pub mod validation;

pub use hosting_api;
pub use hosting_api::{
    Connection, ConnectionConfig, Filter, FilterOperator, Paginated, RequestParameters, Sort,
    SortDirection,
};

pub use account::{AccountError, AccountService};
pub use client::Client;
pub use dns::{DnsError, DnsService};
pub use draas::{DraasError, DraasService};
pub use ssl::{SslError, SslService};
