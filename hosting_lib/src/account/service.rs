//! Account service.

use hosting_api::{not_found_classifier, Connection, Paginated, RequestParameters};

use super::error::AccountError;
use super::types::{Contact, Credit};
use crate::validation;

const CONTACTS_PATH: &str = "/account/v1/contacts";
const CREDITS_PATH: &str = "/account/v1/credits";

pub struct AccountService {
    conn: Connection,
}

impl AccountService {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub async fn get_contacts(
        &self,
        parameters: &RequestParameters,
    ) -> Result<Vec<Contact>, AccountError> {
        self.conn
            .get_all::<Contact, AccountError>(CONTACTS_PATH, parameters, None)
            .await
    }

    pub async fn get_contacts_paginated(
        &self,
        parameters: RequestParameters,
    ) -> Result<Paginated<Contact, AccountError>, AccountError> {
        self.conn.get_paginated(CONTACTS_PATH, parameters, None).await
    }

    pub async fn get_contact(&self, contact_id: i64) -> Result<Contact, AccountError> {
        validation::require_id(contact_id, "contact id")?;
        let not_found =
            not_found_classifier(move || AccountError::ContactNotFound { id: contact_id });
        self.conn
            .get_data::<Contact, AccountError>(
                &format!("{}/{}", CONTACTS_PATH, contact_id),
                Some(&not_found),
            )
            .await
    }

    pub async fn get_credits(
        &self,
        parameters: &RequestParameters,
    ) -> Result<Vec<Credit>, AccountError> {
        self.conn
            .get_all::<Credit, AccountError>(CREDITS_PATH, parameters, None)
            .await
    }
}
