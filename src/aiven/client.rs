//! Aiven Client
//!
//! The authenticated session: one token bound to one cookie-carrying HTTP
//! client, shared by every API call made through it.

use super::auth::{Credentials, UserAuthResponse, AUTH_TIMEOUT};
use super::error::AivenError;
use super::http::AivenHttpClient;
use crate::kafka::KafkaApi;
use anyhow::{bail, Context, Result};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::time::Duration;
use url::Url;

pub const DEFAULT_AUTH_URL: &str = "https://api.aiven.io/v1beta";
pub const DEFAULT_CONSOLE_URL: &str = "https://console.aiven.io/v1beta";

/// Base URLs of the two Aiven hosts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Host used for the credential exchange
    pub auth: String,
    /// Host used for console/resource operations
    pub console: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth: DEFAULT_AUTH_URL.to_string(),
            console: DEFAULT_CONSOLE_URL.to_string(),
        }
    }
}

impl Endpoints {
    /// Build endpoints from base URLs, validating each one
    pub fn new(auth: &str, console: &str) -> Result<Self> {
        Ok(Self {
            auth: validate_base_url(auth)?,
            console: validate_base_url(console)?,
        })
    }

    /// Use one base URL for both hosts
    pub fn single(base: &str) -> Result<Self> {
        Self::new(base, base)
    }

    /// URL of the credential exchange
    pub fn userauth_url(&self) -> String {
        format!("{}/userauth", self.auth)
    }
}

fn validate_base_url(raw: &str) -> Result<String> {
    let url = Url::parse(raw).with_context(|| format!("Invalid base URL: {}", raw))?;
    if !matches!(url.scheme(), "http" | "https") {
        bail!("Unsupported URL scheme '{}' in {}", url.scheme(), raw);
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Main Aiven client
///
/// The token is written once, during [`AivenClient::login`], and only read
/// afterwards, so clones may be used from concurrent tasks.
#[derive(Clone)]
pub struct AivenClient {
    http: AivenHttpClient,
    endpoints: Endpoints,
    token: Option<String>,
    request_timeout: Option<Duration>,
}

impl AivenClient {
    /// Create a client without a session. Calls carry no authorization header.
    pub fn new(endpoints: Endpoints) -> Result<Self> {
        Ok(Self {
            http: AivenHttpClient::new()?,
            endpoints,
            token: None,
            request_timeout: None,
        })
    }

    /// Exchange credentials for a session token
    pub async fn login(endpoints: Endpoints, credentials: &Credentials) -> Result<Self> {
        let mut client = Self::new(endpoints)?;
        client.authenticate(credentials).await?;
        Ok(client)
    }

    /// Log in with credentials read from `AIVEN_EMAIL`, `AIVEN_PASSWORD` and `AIVEN_OTP`
    pub async fn from_env(endpoints: Endpoints) -> Result<Self> {
        Self::login(endpoints, &Credentials::from_env()).await
    }

    async fn authenticate(&mut self, credentials: &Credentials) -> Result<()> {
        let url = self.endpoints.userauth_url();
        let out: UserAuthResponse = self
            .http
            .call(
                Method::POST,
                &url,
                None,
                Some(&credentials.as_request()),
                Some(AUTH_TIMEOUT),
            )
            .await
            .context("unable to authenticate user")?;

        if !out.errors.is_empty() {
            return Err(AivenError::Authentication(out.message).into());
        }

        tracing::info!("Authenticated (state: {})", out.state);
        self.token = Some(out.token);

        Ok(())
    }

    /// Whether a session token is held
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty())
    }

    /// Clone of this session whose calls are bounded by `timeout`
    pub fn with_request_timeout(&self, timeout: Duration) -> Self {
        Self {
            request_timeout: Some(timeout),
            ..self.clone()
        }
    }

    /// The configured endpoints
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Make an authenticated request
    pub async fn call<I, O>(&self, method: Method, url: &str, body: Option<&I>) -> Result<O, AivenError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        self.http
            .call(method, url, self.token.as_deref(), body, self.request_timeout)
            .await
    }

    /// Make a GET request to the Aiven API
    pub async fn get<O: DeserializeOwned + Default>(&self, url: &str) -> Result<O, AivenError> {
        self.call(Method::GET, url, None::<&()>).await
    }

    /// Make a POST request to the Aiven API
    pub async fn post<I, O>(&self, url: &str, body: &I) -> Result<O, AivenError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        self.call(Method::POST, url, Some(body)).await
    }

    /// Make a DELETE request to the Aiven API
    pub async fn delete<I, O>(&self, url: &str, body: Option<&I>) -> Result<O, AivenError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        self.call(Method::DELETE, url, body).await
    }

    /// Build a console API URL from path segments. Segments are percent-encoded.
    pub fn console_url(&self, segments: &[&str]) -> String {
        let path: Vec<_> = segments.iter().map(|s| urlencoding::encode(s)).collect();
        format!("{}/{}", self.endpoints.console, path.join("/"))
    }

    /// Kafka topic management on this session
    pub fn kafka(&self) -> KafkaApi<'_> {
        KafkaApi::new(self)
    }
}

// Security: never print the session token
impl fmt::Debug for AivenClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AivenClient")
            .field("endpoints", &self.endpoints)
            .field("authenticated", &self.is_authenticated())
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
