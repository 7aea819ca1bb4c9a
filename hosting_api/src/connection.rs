//! HTTP connection to the hosting API.

use std::sync::Arc;

use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    config::ConnectionConfig,
    pagination::{self, Page, PageFetcher, PageFuture, Paginated},
    response::{handle_response, Classifier, RawResponse},
    Error, RequestParameters,
};

/// HTTP connection to the hosting API.
///
/// The raw verbs (`get`, `post`, ...) return a [`RawResponse`] for any
/// status; only failures to obtain a response are errors. The typed
/// helpers (`get_data`, `get_all`, `get_paginated`, ...) run the response
/// through [`handle_response`] and are what services build on.
///
/// Cloning is cheap: the underlying `reqwest::Client` is shared.
#[derive(Clone)]
pub struct Connection {
    client: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl Connection {
    pub fn new(config: ConnectionConfig) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Transport(e)
            })?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        })
    }

    /// Creates a connection with default settings and a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::new(ConnectionConfig::default().with_base_url(base_url))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_url(&self, path: &str, parameters: Option<&RequestParameters>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::InvalidUrl(e)
        })?;
        Ok(match parameters {
            Some(parameters) => parameters.add_to_url(&url),
            None => url,
        })
    }

    pub async fn get(
        &self,
        path: &str,
        parameters: &RequestParameters,
    ) -> Result<RawResponse, Error> {
        let url = self.get_url(path, Some(parameters))?;
        self.send(self.client.request(Method::GET, url)).await
    }

    pub async fn post<B>(&self, path: &str, body: &B) -> Result<RawResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    pub async fn patch<B>(&self, path: &str, body: &B) -> Result<RawResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PATCH, path, Some(body)).await
    }

    pub async fn put<B>(&self, path: &str, body: &B) -> Result<RawResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        self.request(Method::PUT, path, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<RawResponse, Error> {
        self.request::<()>(Method::DELETE, path, None).await
    }

    /// Sends a request with an optional JSON body.
    pub async fn request<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<RawResponse, Error>
    where
        B: Serialize + ?Sized,
    {
        let url = self.get_url(path, None)?;
        let mut request = self.client.request(method, url);
        if let Some(body) = body {
            request = request.json(body);
        }
        self.send(request).await
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<RawResponse, Error> {
        let mut request = request.header("accept", "application/json");
        if let Some(api_key) = &self.api_key {
            request = request.header("authorization", api_key.as_str());
        }
        let request = request.build().map_err(|e| {
            tracing::error!("Failed to build request: {}", e);
            Error::Transport(e)
        })?;
        tracing::debug!("{} {}", request.method(), request.url());

        let resp = self.client.execute(request).await.map_err(|e| {
            tracing::error!("Failed to send request: {}", e);
            Error::Transport(e)
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Transport(e)
        })?;

        Ok(RawResponse::new(status, body))
    }

    /// Fetches a single resource and returns its `data`.
    pub async fn get_data<T, E>(
        &self,
        path: &str,
        classifier: Option<&Classifier<E>>,
    ) -> Result<T, E>
    where
        T: DeserializeOwned,
        E: From<Error>,
    {
        let raw = self.get(path, &RequestParameters::new()).await?;
        let body = handle_response::<T, E>(&raw, classifier)?;
        Ok(body.into_data(raw.status.as_u16())?)
    }

    /// Fetches one page of a collection.
    pub async fn get_page<T, E>(
        &self,
        path: &str,
        parameters: &RequestParameters,
        classifier: Option<&Classifier<E>>,
    ) -> Result<Page<T>, E>
    where
        T: DeserializeOwned,
        E: From<Error>,
    {
        let raw = self.get(path, parameters).await?;
        let body = handle_response::<Vec<T>, E>(&raw, classifier)?;
        let pagination = body.pagination();
        Ok(Page::new(body.data.unwrap_or_default(), pagination))
    }

    /// Fetches every page of a collection and returns all items in page order.
    pub async fn get_all<T, E>(
        &self,
        path: &str,
        parameters: &RequestParameters,
        classifier: Option<&Classifier<E>>,
    ) -> Result<Vec<T>, E>
    where
        T: DeserializeOwned,
        E: From<Error>,
    {
        pagination::collect_all(parameters, move |page_parameters| async move {
            self.get_page(path, &page_parameters, classifier).await
        })
        .await
    }

    /// Fetches one page of a collection as a navigable [`Paginated`].
    pub async fn get_paginated<T, E>(
        &self,
        path: &str,
        parameters: RequestParameters,
        classifier: Option<Arc<Classifier<E>>>,
    ) -> Result<Paginated<T, E>, E>
    where
        T: DeserializeOwned + Send + 'static,
        E: From<Error> + Send + 'static,
    {
        pagination::fetch_page(self.page_fetcher(path, classifier), parameters).await
    }

    /// Binds a collection path and classifier into a reusable [`PageFetcher`].
    pub fn page_fetcher<T, E>(
        &self,
        path: &str,
        classifier: Option<Arc<Classifier<E>>>,
    ) -> PageFetcher<T, E>
    where
        T: DeserializeOwned + Send + 'static,
        E: From<Error> + Send + 'static,
    {
        let conn = self.clone();
        let path = path.to_string();
        Arc::new(move |parameters: RequestParameters| -> PageFuture<T, E> {
            let conn = conn.clone();
            let path = path.clone();
            let classifier = classifier.clone();
            Box::pin(async move {
                conn.get_page(&path, &parameters, classifier.as_deref())
                    .await
            })
        })
    }

    /// Sends a write request and returns the response `data`.
    pub async fn send_data<B, T, E>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        classifier: Option<&Classifier<E>>,
    ) -> Result<T, E>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
        E: From<Error>,
    {
        let raw = self.request(method, path, body).await?;
        let body = handle_response::<T, E>(&raw, classifier)?;
        Ok(body.into_data(raw.status.as_u16())?)
    }

    /// Sends a write request whose response body is not needed.
    pub async fn send_empty<B, E>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        classifier: Option<&Classifier<E>>,
    ) -> Result<(), E>
    where
        B: Serialize + ?Sized,
        E: From<Error>,
    {
        let raw = self.request(method, path, body).await?;
        handle_response::<serde_json::Value, E>(&raw, classifier)?;
        Ok(())
    }
}
