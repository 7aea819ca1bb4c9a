//! Error types for the API connection.

/// Errors that can occur when making API requests.
///
/// Services wrap this type in their own error enums, adding typed
/// "not found" variants produced by a response classifier.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request failed before any response was obtained.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request URL could not be built from the base URL and path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// A success response carried a body that does not match the expected shape.
    #[error("Failed to decode response with status {status}: {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
        body: String,
    },
    /// A single-resource success response carried no `data`.
    #[error("Response with status {status} contained no data")]
    MissingData { status: u16 },
    /// The API returned a non-success status that no classifier recognised.
    #[error("Request failed with status {status}: {message}")]
    Api {
        status: u16,
        message: String,
        body: String,
    },
    /// A caller-supplied value was rejected before sending the request.
    #[error("Invalid parameter: {0}")]
    Validation(String),
}

impl Error {
    /// Returns the HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Decode { status, .. }
            | Error::MissingData { status }
            | Error::Api { status, .. } => Some(*status),
            Error::Transport(e) => e.status().map(|s| s.as_u16()),
            Error::InvalidUrl(_) | Error::Validation(_) => None,
        }
    }
}
