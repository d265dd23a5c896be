//! HTTP client for the authentication service.
//!
//! The service exposes two JSON endpoints, `/api/auth/login` and
//! `/api/auth/signup`. Both answer with a `{success, message, ...}` envelope
//! on every status code; a rejected submission is a normal response here,
//! not an error. Transport failures and unparseable bodies are errors and
//! are mapped to the generic failure message by callers.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Standard User-Agent header for portico API requests.
pub const USER_AGENT: &str = concat!("portico/", env!("CARGO_PKG_VERSION"));

/// Default auth-service base URL (a locally running service).
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Environment variable overriding the configured base URL.
const BASE_URL_ENV: &str = "PORTICO_BASE_URL";

const LOGIN_PATH: &str = "/api/auth/login";
const SIGNUP_PATH: &str = "/api/auth/signup";

/// Resolves the auth-service base URL with precedence: env > config > default.
pub fn resolve_base_url(config_base_url: Option<&str>) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var(BASE_URL_ENV) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    // Try config value
    if let Some(config_url) = config_base_url {
        let trimmed = config_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.trim_end_matches('/').to_string());
        }
    }

    Ok(DEFAULT_BASE_URL.to_string())
}

fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid auth service base URL: {url}"))?;
    Ok(())
}

/// Login form payload.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Signup form payload.
#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Response envelope shared by both endpoints.
///
/// The service also returns a `user` object on success; the UI has no use
/// for it, so it is not modeled.
#[derive(Debug, Deserialize)]
struct AuthEnvelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// Outcome of a submission the service actually answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The service reported `success: true`.
    Accepted,
    /// The service reported failure, with its message if it sent one.
    Rejected { message: Option<String> },
}

/// Authentication service client.
pub struct AuthClient {
    base_url: String,
    http: reqwest::Client,
}

impl AuthClient {
    /// Creates a client for the given base URL.
    ///
    /// `timeout` bounds each request end-to-end; `None` disables it.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits login credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<SubmitOutcome> {
        tracing::debug!(email = %request.email, "submitting login");
        self.submit(LOGIN_PATH, request).await
    }

    /// Submits a signup registration.
    pub async fn signup(&self, request: &SignupRequest) -> Result<SubmitOutcome> {
        tracing::debug!(username = %request.username, email = %request.email, "submitting signup");
        self.submit(SIGNUP_PATH, request).await
    }

    /// POSTs `body` and decodes the `{success, message}` envelope.
    ///
    /// The envelope is decoded regardless of HTTP status: the service uses
    /// 400/401 for rejections but still sends a JSON body, and its message
    /// is what the user should see.
    async fn submit<T: Serialize>(&self, path: &str, body: &T) -> Result<SubmitOutcome> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Request to {url} failed"))?;

        let status = response.status();
        let envelope: AuthEnvelope = response
            .json()
            .await
            .with_context(|| format!("Malformed response from {url} (status {status})"))?;

        if envelope.success {
            Ok(SubmitOutcome::Accepted)
        } else {
            tracing::debug!(%status, message = ?envelope.message, "submission rejected");
            Ok(SubmitOutcome::Rejected {
                message: envelope.message,
            })
        }
    }
}
