mod config;
mod connection;
mod errors;
pub mod pagination;
mod params;
pub mod response;
pub mod types;
pub use self::config::ConnectionConfig;
pub use self::connection::Connection;
pub use self::errors::Error;
pub use self::pagination::{Page, PageFetcher, PageFuture, Paginated};
pub use self::params::{
    Filter, FilterOperator, Pagination, RequestParameters, Sort, SortDirection,
};
pub use self::response::{
    handle_response, not_found_classifier, status_classifier, Classifier, RawResponse,
};
pub use reqwest::{Method, StatusCode};
