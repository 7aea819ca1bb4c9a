//! Turning a raw HTTP response into a typed envelope or an error.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{
    types::{ErrorBody, ResponseBody},
    Error,
};

/// Status and body of a response, as returned by the transport.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

/// Maps a response to a resource-specific error, or declines with `None`.
///
/// Services use this to turn a generic 404 into e.g. `ZoneNotFound`
/// without the connection knowing about per-resource error types.
pub type Classifier<E> = dyn Fn(&RawResponse) -> Option<E> + Send + Sync;

/// Builds a classifier that produces `make()` for one status code.
pub fn status_classifier<E, F>(
    status: StatusCode,
    make: F,
) -> impl Fn(&RawResponse) -> Option<E> + Send + Sync
where
    F: Fn() -> E + Send + Sync,
{
    move |raw: &RawResponse| (raw.status == status).then(|| make())
}

/// Builds a classifier that produces `make()` for a 404.
pub fn not_found_classifier<E, F>(make: F) -> impl Fn(&RawResponse) -> Option<E> + Send + Sync
where
    F: Fn() -> E + Send + Sync,
{
    status_classifier(StatusCode::NOT_FOUND, make)
}

/// Decodes `raw` into a [`ResponseBody`], classifying failures.
///
/// The classifier, when given, runs first and its error is returned as is.
/// Any other non-success status becomes [`Error::Api`]. An empty success
/// body decodes to an empty envelope; a body that does not match `T` is
/// an [`Error::Decode`].
pub fn handle_response<T, E>(
    raw: &RawResponse,
    classifier: Option<&Classifier<E>>,
) -> Result<ResponseBody<T>, E>
where
    T: DeserializeOwned,
    E: From<Error>,
{
    if let Some(classify) = classifier {
        if let Some(err) = classify(raw) {
            return Err(err);
        }
    }

    let status = raw.status.as_u16();
    if !raw.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&raw.body)
            .ok()
            .and_then(|body| body.message())
            .unwrap_or_else(|| {
                raw.status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });
        let snippet = truncate_body(&raw.body);
        tracing::error!("Request failed with status {}: {}", raw.status, snippet);
        return Err(Error::Api {
            status,
            message,
            body: snippet,
        }
        .into());
    }

    if raw.body.trim().is_empty() {
        return Ok(ResponseBody::default());
    }

    serde_json::from_str::<ResponseBody<T>>(&raw.body).map_err(|e| {
        let snippet = truncate_body(&raw.body);
        tracing::warn!("Failed to decode response: {} | body: {}", e, snippet);
        Error::Decode {
            status,
            source: e,
            body: snippet,
        }
        .into()
    })
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;
    use crate::types::PaginationMeta;

    #[derive(Deserialize, Debug, PartialEq)]
    struct Item {
        id: String,
    }

    #[derive(thiserror::Error, Debug)]
    enum ItemError {
        #[error("item not found with ID [{id}]")]
        NotFound { id: String },
        #[error(transparent)]
        Api(#[from] Error),
    }

    #[test]
    fn decodes_collection_envelope() {
        let raw = RawResponse::new(
            StatusCode::OK,
            r#"{"data":[{"id":"a"},{"id":"b"}],"meta":{"pagination":{"total":2,"count":2,"per_page":10,"total_pages":1}}}"#,
        );
        let body: ResponseBody<Vec<Item>> = handle_response::<_, Error>(&raw, None).unwrap();
        assert_eq!(body.data.as_ref().unwrap().len(), 2);
        assert_eq!(body.pagination().total_pages, 1);
        assert_eq!(body.pagination().total, 2);
    }

    #[test]
    fn decodes_single_resource() {
        let raw = RawResponse::new(StatusCode::OK, r#"{"data":{"id":"a"}}"#);
        let body = handle_response::<Item, Error>(&raw, None).unwrap();
        assert_eq!(body.into_data(200).unwrap(), Item { id: "a".to_string() });
    }

    #[test]
    fn null_meta_fields_decode_as_absent() {
        let raw = RawResponse::new(StatusCode::OK, r#"{"data":[{"id":"a"}],"meta":null}"#);
        let body = handle_response::<Vec<Item>, Error>(&raw, None).unwrap();
        assert!(body.meta.pagination.is_none());
        assert_eq!(body.pagination().total_pages, 0);

        let raw = RawResponse::new(
            StatusCode::OK,
            r#"{"data":[],"meta":{"pagination":{"total":null,"count":null,"per_page":null,"total_pages":null}}}"#,
        );
        let body = handle_response::<Vec<Item>, Error>(&raw, None).unwrap();
        assert_eq!(body.pagination(), PaginationMeta::default());
    }

    #[test]
    fn classifier_error_is_returned_verbatim() {
        let raw = RawResponse::new(StatusCode::NOT_FOUND, r#"{"errors":[{"title":"Not Found"}]}"#);
        let classifier = not_found_classifier(|| ItemError::NotFound { id: "x".to_string() });

        let err = handle_response::<Item, ItemError>(&raw, Some(&classifier)).unwrap_err();
        match err {
            ItemError::NotFound { id } => assert_eq!(id, "x"),
            other => panic!("expected NotFound, got {:?}", other),
        }
    }

    #[test]
    fn declined_classification_falls_back_to_api_error() {
        let raw = RawResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"errors":[{"title":"Validation Error","detail":"name is required","status":422}]}"#,
        );
        let classifier = not_found_classifier(|| ItemError::NotFound { id: "x".to_string() });

        let err = handle_response::<Item, ItemError>(&raw, Some(&classifier)).unwrap_err();
        match err {
            ItemError::Api(Error::Api {
                status, message, ..
            }) => {
                assert_eq!(status, 422);
                assert_eq!(message, "Validation Error: name is required");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn api_error_without_json_body_uses_reason_phrase() {
        let raw = RawResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        let err = handle_response::<Item, Error>(&raw, None).unwrap_err();
        match err {
            Error::Api {
                status,
                message,
                body,
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal Server Error");
                assert_eq!(body, "oops");
            }
            other => panic!("expected Api error, got {:?}", other),
        }
    }

    #[test]
    fn no_content_decodes_to_empty_envelope() {
        let raw = RawResponse::new(StatusCode::NO_CONTENT, "");
        let body = handle_response::<Item, Error>(&raw, None).unwrap();
        assert!(body.data.is_none());
        assert!(body.meta.pagination.is_none());
    }

    #[test]
    fn undecodable_success_body_is_decode_error() {
        let raw = RawResponse::new(StatusCode::OK, r#"{"data":{"id":42}}"#);
        let err = handle_response::<Item, Error>(&raw, None).unwrap_err();
        assert!(matches!(err, Error::Decode { status: 200, .. }));

        let raw = RawResponse::new(StatusCode::OK, "{not valid json}");
        let err = handle_response::<Item, Error>(&raw, None).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }));
    }

    #[test]
    fn missing_data_is_valid_for_collections() {
        let raw = RawResponse::new(StatusCode::OK, r#"{"meta":{"pagination":{"total_pages":0}}}"#);
        let body = handle_response::<Vec<Item>, Error>(&raw, None).unwrap();
        assert!(body.data.is_none());

        let err = body.into_data(200).unwrap_err();
        assert!(matches!(err, Error::MissingData { status: 200 }));
    }

    #[test]
    fn classifier_only_matches_its_status() {
        let classifier = status_classifier(StatusCode::CONFLICT, || "conflict");
        assert_eq!(
            classifier(&RawResponse::new(StatusCode::CONFLICT, "")),
            Some("conflict")
        );
        assert_eq!(classifier(&RawResponse::new(StatusCode::NOT_FOUND, "")), None);
    }

    #[test]
    fn truncates_long_bodies() {
        let body = "x".repeat(2500);
        let snippet = truncate_body(&body);
        assert!(snippet.ends_with("...[truncated]"));
        assert_eq!(snippet.len(), 2000 + "...[truncated]".len());
    }
}
