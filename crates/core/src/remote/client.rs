//! HTTP client for the remote backend

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::{Error, Result};

/// Configuration for the remote backend connection
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the backend, e.g. "https://api.example.com/v1"
    pub base_url: String,
    /// Static bearer key issued by the backend
    pub api_key: String,
}

/// Thin wrapper over `reqwest` adding auth and error mapping
pub struct RemoteClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl RemoteClient {
    /// Create a new client for the configured backend
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        debug!(path, "GET");
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(resp)
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        debug!(path, "POST");
        let resp = self
            .http
            .post(self.url(path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(resp)
    }

    pub(crate) async fn patch<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Response> {
        debug!(path, "PATCH");
        let resp = self
            .http
            .patch(self.url(path))
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;
        Ok(resp)
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<Response> {
        debug!(path, "DELETE");
        let resp = self
            .http
            .delete(self.url(path))
            .bearer_auth(&self.api_key)
            .send()
            .await?;
        Ok(resp)
    }

    /// Map a non-success status to a backend error with context
    pub(crate) fn expect_success(resp: Response, context: &str) -> Result<Response> {
        if !resp.status().is_success() {
            return Err(Error::Backend(format!(
                "{}: HTTP {}",
                context,
                resp.status()
            )));
        }
        Ok(resp)
    }

    /// Read a JSON body into the expected type
    pub(crate) async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
        Ok(resp.json::<T>().await?)
    }

    /// True when the response reports a missing record
    pub(crate) fn is_not_found(resp: &Response) -> bool {
        resp.status() == StatusCode::NOT_FOUND
    }
}
