use serde::{Deserialize, Deserializer, Serialize};

use crate::Error;

/// Envelope wrapping every response: `{"data": ..., "meta": {...}}`.
///
/// `data` may be absent, e.g. for an empty collection or a write that
/// returns no body.
#[derive(Serialize, Deserialize, Debug)]
pub struct ResponseBody<T> {
    pub data: Option<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meta: ResponseMeta,
}

impl<T> Default for ResponseBody<T> {
    fn default() -> Self {
        Self {
            data: None,
            meta: ResponseMeta::default(),
        }
    }
}

impl<T> ResponseBody<T> {
    /// Returns the payload of a single-resource response.
    pub fn into_data(self, status: u16) -> Result<T, Error> {
        self.data.ok_or(Error::MissingData { status })
    }

    /// Pagination metadata, or the single-page default when absent.
    pub fn pagination(&self) -> PaginationMeta {
        self.meta.pagination.clone().unwrap_or_default()
    }
}

#[derive(Serialize, Deserialize, Debug, Default, Clone)]
pub struct ResponseMeta {
    #[serde(default)]
    pub pagination: Option<PaginationMeta>,
    /// Location of a newly created resource.
    #[serde(default)]
    pub location: Option<String>,
}

/// Collection paging as reported by the server.
///
/// A `total_pages` of zero means the response is a single, complete page.
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PaginationMeta {
    #[serde(default, deserialize_with = "null_as_default")]
    pub total: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub count: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_page: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: Option<u32>,
    #[serde(default)]
    pub links: Option<PaginationLinks>,
}

/// Treats an explicit `null` like an absent field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct PaginationLinks {
    pub first: Option<String>,
    pub previous: Option<String>,
    pub next: Option<String>,
    pub last: Option<String>,
}

/// Body of a non-success response.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub errors: Vec<ErrorDetail>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct ErrorDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub detail: String,
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub source: Option<String>,
}

impl ErrorBody {
    /// Joins the server-supplied messages into one line.
    pub fn message(&self) -> Option<String> {
        let mut parts: Vec<String> = self
            .errors
            .iter()
            .map(|e| match (e.title.is_empty(), e.detail.is_empty()) {
                (false, false) => format!("{}: {}", e.title, e.detail),
                (false, true) => e.title.clone(),
                (true, _) => e.detail.clone(),
            })
            .filter(|m| !m.is_empty())
            .collect();
        if let Some(message) = &self.message {
            if !message.is_empty() {
                parts.push(message.clone());
            }
        }
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}
