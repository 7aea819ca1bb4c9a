//! DNS service.

use std::sync::Arc;

use hosting_api::{
    not_found_classifier, Classifier, Connection, Method, Paginated, RawResponse,
    RequestParameters,
};

use super::error::DnsError;
use super::types::{
    CreateRecordRequest, CreateZoneRequest, CreatedId, PatchRecordRequest, PatchZoneRequest,
    Record, Zone,
};
use crate::validation;

const ZONES_PATH: &str = "/safedns/v1/zones";

/// DNS zones and their records.
pub struct DnsService {
    conn: Connection,
}

impl DnsService {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    /// Fetches every zone matching `parameters`, across all pages.
    pub async fn get_zones(&self, parameters: &RequestParameters) -> Result<Vec<Zone>, DnsError> {
        self.conn
            .get_all::<Zone, DnsError>(ZONES_PATH, parameters, None)
            .await
    }

    /// Fetches a single page of zones.
    pub async fn get_zones_paginated(
        &self,
        parameters: RequestParameters,
    ) -> Result<Paginated<Zone, DnsError>, DnsError> {
        self.conn.get_paginated(ZONES_PATH, parameters, None).await
    }

    pub async fn get_zone(&self, zone_name: &str) -> Result<Zone, DnsError> {
        validation::require_name(zone_name, "zone name")?;
        let not_found = zone_not_found(zone_name);
        self.conn
            .get_data::<Zone, DnsError>(&zone_path(zone_name), Some(&not_found))
            .await
    }

    pub async fn create_zone(&self, req: &CreateZoneRequest) -> Result<(), DnsError> {
        validation::require_name(&req.name, "zone name")?;
        self.conn
            .send_empty::<_, DnsError>(Method::POST, ZONES_PATH, Some(req), None)
            .await
    }

    pub async fn patch_zone(&self, zone_name: &str, req: &PatchZoneRequest) -> Result<(), DnsError> {
        validation::require_name(zone_name, "zone name")?;
        let not_found = zone_not_found(zone_name);
        self.conn
            .send_empty::<_, DnsError>(Method::PATCH, &zone_path(zone_name), Some(req), Some(&not_found))
            .await
    }

    pub async fn delete_zone(&self, zone_name: &str) -> Result<(), DnsError> {
        validation::require_name(zone_name, "zone name")?;
        let not_found = zone_not_found(zone_name);
        self.conn
            .send_empty::<(), DnsError>(Method::DELETE, &zone_path(zone_name), None, Some(&not_found))
            .await
    }

    /// Fetches every record in a zone, across all pages.
    pub async fn get_zone_records(
        &self,
        zone_name: &str,
        parameters: &RequestParameters,
    ) -> Result<Vec<Record>, DnsError> {
        validation::require_name(zone_name, "zone name")?;
        let not_found = zone_not_found(zone_name);
        self.conn
            .get_all::<Record, DnsError>(&records_path(zone_name), parameters, Some(&not_found))
            .await
    }

    /// Fetches a single page of records in a zone.
    pub async fn get_zone_records_paginated(
        &self,
        zone_name: &str,
        parameters: RequestParameters,
    ) -> Result<Paginated<Record, DnsError>, DnsError> {
        validation::require_name(zone_name, "zone name")?;
        let not_found: Arc<Classifier<DnsError>> = Arc::new(zone_not_found(zone_name));
        self.conn
            .get_paginated(&records_path(zone_name), parameters, Some(not_found))
            .await
    }

    pub async fn get_zone_record(&self, zone_name: &str, record_id: i64) -> Result<Record, DnsError> {
        validation::require_name(zone_name, "zone name")?;
        validation::require_id(record_id, "record id")?;
        let not_found = record_not_found(record_id);
        self.conn
            .get_data::<Record, DnsError>(&record_path(zone_name, record_id), Some(&not_found))
            .await
    }

    /// Creates a record and returns its ID.
    pub async fn create_zone_record(
        &self,
        zone_name: &str,
        req: &CreateRecordRequest,
    ) -> Result<i64, DnsError> {
        validation::require_name(zone_name, "zone name")?;
        let not_found = zone_not_found(zone_name);
        let created = self
            .conn
            .send_data::<_, CreatedId<i64>, DnsError>(
                Method::POST,
                &records_path(zone_name),
                Some(req),
                Some(&not_found),
            )
            .await?;
        Ok(created.id)
    }

    pub async fn patch_zone_record(
        &self,
        zone_name: &str,
        record_id: i64,
        req: &PatchRecordRequest,
    ) -> Result<(), DnsError> {
        validation::require_name(zone_name, "zone name")?;
        validation::require_id(record_id, "record id")?;
        let not_found = record_not_found(record_id);
        self.conn
            .send_empty::<_, DnsError>(
                Method::PATCH,
                &record_path(zone_name, record_id),
                Some(req),
                Some(&not_found),
            )
            .await
    }

    pub async fn delete_zone_record(&self, zone_name: &str, record_id: i64) -> Result<(), DnsError> {
        validation::require_name(zone_name, "zone name")?;
        validation::require_id(record_id, "record id")?;
        let not_found = record_not_found(record_id);
        self.conn
            .send_empty::<(), DnsError>(
                Method::DELETE,
                &record_path(zone_name, record_id),
                None,
                Some(&not_found),
            )
            .await
    }
}

fn zone_path(zone_name: &str) -> String {
    format!("{}/{}", ZONES_PATH, zone_name)
}

fn records_path(zone_name: &str) -> String {
    format!("{}/{}/records", ZONES_PATH, zone_name)
}

fn record_path(zone_name: &str, record_id: i64) -> String {
    format!("{}/{}/records/{}", ZONES_PATH, zone_name, record_id)
}

fn zone_not_found(zone_name: &str) -> impl Fn(&RawResponse) -> Option<DnsError> + Send + Sync {
    let name = zone_name.to_string();
    not_found_classifier(move || DnsError::ZoneNotFound { name: name.clone() })
}

fn record_not_found(record_id: i64) -> impl Fn(&RawResponse) -> Option<DnsError> + Send + Sync {
    not_found_classifier(move || DnsError::RecordNotFound { id: record_id })
}
