use std::time::Duration;

use reqwest::{Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use crate::error::ApiError;

/// Thin JSON client for the HRMS Lite REST API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(http, base_url))
    }

    pub fn with_client(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        debug!(path, query = ?query, "GET");
        let response = self.http.get(self.url(path)).query(query).send().await?;
        decode(path, response).await
    }

    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        decode(path, response).await
    }

    pub(crate) async fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "PUT");
        let response = self.http.put(self.url(path)).json(body).send().await?;
        decode(path, response).await
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(failure(path, status, response).await)
    }
}

async fn decode<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(failure(path, status, response).await);
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        error!(error = %e, path, "Unexpected response body");
        ApiError::Decode(e)
    })
}

async fn failure(path: &str, status: StatusCode, response: Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    let err = ApiError::from_response(status.as_u16(), &body);
    error!(status = status.as_u16(), path, error = %err, "Request failed");
    err
}
