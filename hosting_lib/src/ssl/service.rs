//! SSL service.

use hosting_api::{
    not_found_classifier, Connection, Method, Paginated, RawResponse, RequestParameters,
};

use super::error::SslError;
use super::types::{Certificate, CertificateContent, CertificateValidation, ValidateRequest};
use crate::validation;

const CERTIFICATES_PATH: &str = "/ssl/v1/certificates";
const VALIDATE_PATH: &str = "/ssl/v1/validate";

pub struct SslService {
    conn: Connection,
}

impl SslService {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub async fn get_certificates(
        &self,
        parameters: &RequestParameters,
    ) -> Result<Vec<Certificate>, SslError> {
        self.conn
            .get_all::<Certificate, SslError>(CERTIFICATES_PATH, parameters, None)
            .await
    }

    pub async fn get_certificates_paginated(
        &self,
        parameters: RequestParameters,
    ) -> Result<Paginated<Certificate, SslError>, SslError> {
        self.conn
            .get_paginated(CERTIFICATES_PATH, parameters, None)
            .await
    }

    pub async fn get_certificate(&self, certificate_id: i64) -> Result<Certificate, SslError> {
        validation::require_id(certificate_id, "certificate id")?;
        let not_found = certificate_not_found(certificate_id);
        self.conn
            .get_data::<Certificate, SslError>(
                &format!("{}/{}", CERTIFICATES_PATH, certificate_id),
                Some(&not_found),
            )
            .await
    }

    pub async fn get_certificate_content(
        &self,
        certificate_id: i64,
    ) -> Result<CertificateContent, SslError> {
        validation::require_id(certificate_id, "certificate id")?;
        let not_found = certificate_not_found(certificate_id);
        self.conn
            .get_data::<CertificateContent, SslError>(
                &format!("{}/{}/download", CERTIFICATES_PATH, certificate_id),
                Some(&not_found),
            )
            .await
    }

    /// Checks that a key, certificate and optional CA bundle belong together.
    pub async fn validate_certificate(
        &self,
        req: &ValidateRequest,
    ) -> Result<CertificateValidation, SslError> {
        self.conn
            .send_data::<_, CertificateValidation, SslError>(
                Method::POST,
                VALIDATE_PATH,
                Some(req),
                None,
            )
            .await
    }
}

fn certificate_not_found(
    certificate_id: i64,
) -> impl Fn(&RawResponse) -> Option<SslError> + Send + Sync {
    not_found_classifier(move || SslError::CertificateNotFound { id: certificate_id })
}
