//! Login endpoint client
//!
//! `POST <base>/auth/login` with `{email, password}`; a successful response
//! is expected to carry `{token}`. Shape validation happens in the state
//! machine, this module only moves bytes.

use serde::{Deserialize, Serialize};

/// Login credentials, never persisted
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Body of a successful login response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Login transport errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BackendError {
    #[error("Login request failed with status {status}")]
    Status { status: u16, message: Option<String> },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Unreadable response body: {0}")]
    Body(String),
}

impl BackendError {
    /// Message suitable for the login form
    pub fn user_message(&self) -> String {
        match self {
            BackendError::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            BackendError::Status { .. } => "Login failed".to_string(),
            BackendError::Transport(_) => "Unable to reach the server".to_string(),
            BackendError::Body(_) => "Invalid response from server".to_string(),
        }
    }
}

/// Anything that can exchange credentials for a token
#[allow(async_fn_in_trait)]
pub trait LoginBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, BackendError>;
}

/// Login backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpLoginBackend {
    http: reqwest::Client,
    url: String,
}

impl HttpLoginBackend {
    /// Path of the login endpoint relative to the API base
    pub const LOGIN_PATH: &'static str = "/auth/login";

    pub fn new(http: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            http,
            url: format!("{}{}", api_base_url.trim_end_matches('/'), Self::LOGIN_PATH),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl LoginBackend for HttpLoginBackend {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, BackendError> {
        let response = self
            .http
            .post(&self.url)
            .json(credentials)
            .send()
            .await
            .map_err(|e| BackendError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(BackendError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<LoginResponse>()
            .await
            .map_err(|e| BackendError::Body(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacts_password() {
        let credentials = Credentials::new("a@b.com", "hunter2");
        let debug = format!("{:?}", credentials);

        assert!(debug.contains("a@b.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_credentials_serialize_shape() {
        let json = serde_json::to_value(Credentials::new("a@b.com", "x")).unwrap();
        assert_eq!(json, serde_json::json!({ "email": "a@b.com", "password": "x" }));
    }

    #[test]
    fn test_login_response_token_is_optional() {
        let response: LoginResponse = serde_json::from_str(r#"{"user":"ignored"}"#).unwrap();
        assert_eq!(response.token, None);

        let response: LoginResponse = serde_json::from_str(r#"{"token":"t"}"#).unwrap();
        assert_eq!(response.token.as_deref(), Some("t"));
    }

    #[test]
    fn test_user_message() {
        let err = BackendError::Status {
            status: 401,
            message: Some("Invalid email or password".to_string()),
        };
        assert_eq!(err.user_message(), "Invalid email or password");

        let err = BackendError::Status {
            status: 500,
            message: None,
        };
        assert_eq!(err.user_message(), "Login failed");

        let err = BackendError::Transport("connection refused".to_string());
        assert_eq!(err.user_message(), "Unable to reach the server");
    }

    #[test]
    fn test_http_backend_url() {
        let backend = HttpLoginBackend::new(reqwest::Client::new(), "http://api.local/api/");
        assert_eq!(backend.url(), "http://api.local/api/auth/login");
    }
}
