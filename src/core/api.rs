//! REST client for the LMS backend
//!
//! Every resource request (courses, employees, quizzes, certificates,
//! calendar) goes through [`ApiClient`], which attaches the current bearer
//! token at send time.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::core::config::Config;
use crate::core::session::RequestAuthorizer;

/// API call errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// True for 401/403 responses
    pub fn is_auth_failure(&self) -> bool {
        matches!(self, ApiError::Status { status: 401 | 403, .. })
    }
}

/// Authorized HTTP client
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Config,
    authorizer: RequestAuthorizer,
}

impl ApiClient {
    pub fn new(http: reqwest::Client, config: Config, authorizer: RequestAuthorizer) -> Self {
        Self {
            http,
            config,
            authorizer,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Build an authorized request for an API path
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.authorizer
            .authorize(self.http.request(method, self.config.endpoint(path)))
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self.request(reqwest::Method::GET, path).send().await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn put_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .request(reqwest::Method::PUT, path)
            .json(body)
            .send()
            .await?;
        Ok(Self::check(response).await?.json().await?)
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string))
            .unwrap_or(body);

        tracing::debug!(status = status.as_u16(), "API request failed");
        Err(ApiError::Status {
            status: status.as_u16(),
            message,
        })
    }
}
