//! Entry point bundling every service over one connection.

use hosting_api::{Connection, ConnectionConfig};

use crate::{AccountService, DnsService, DraasService, SslService};

/// Hands out services that share one [`Connection`].
pub struct Client {
    conn: Connection,
}

impl Client {
    pub fn new(config: ConnectionConfig) -> Result<Self, hosting_api::Error> {
        Ok(Self {
            conn: Connection::new(config)?,
        })
    }

    /// Builds a client from `HOSTING_API_*` environment variables.
    pub fn from_env() -> Result<Self, hosting_api::Error> {
        Self::new(ConnectionConfig::from_env())
    }

    pub fn with_connection(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn account(&self) -> AccountService {
        AccountService::new(self.conn.clone())
    }

    pub fn dns(&self) -> DnsService {
        DnsService::new(self.conn.clone())
    }

    pub fn draas(&self) -> DraasService {
        DraasService::new(self.conn.clone())
    }

    pub fn ssl(&self) -> SslService {
        SslService::new(self.conn.clone())
    }
}
