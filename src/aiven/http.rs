//! HTTP utilities for Aiven REST API calls

use super::error::AivenError;
use anyhow::{Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// Maximum length of response body to log (to avoid logging sensitive data)
const MAX_LOG_BODY_LENGTH: usize = 200;

/// Authorization scheme expected by the Aiven API
const AUTH_SCHEME: &str = "aivenv1";

/// Sanitize response body for logging
/// Truncates long responses and strips control characters
fn sanitize_for_log(body: &str) -> String {
    let truncated = match body.char_indices().nth(MAX_LOG_BODY_LENGTH) {
        Some((idx, _)) => format!("{}... [truncated, {} bytes total]", &body[..idx], body.len()),
        None => body.to_string(),
    };

    truncated.replace(|c: char| !c.is_ascii_graphic() && c != ' ', "")
}

/// HTTP client wrapper for Aiven API calls
///
/// Cookies set by the API are kept for the lifetime of the client.
#[derive(Clone)]
pub struct AivenHttpClient {
    client: Client,
}

impl AivenHttpClient {
    /// Create a new HTTP client with a cookie store
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("aiven/", env!("CARGO_PKG_VERSION")))
            .cookie_store(true)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }

    /// Perform one round trip and decode the JSON response into `O`.
    ///
    /// The HTTP status is not inspected: the Aiven API reports failures in
    /// the body envelope, which the caller decodes. A `null` body decodes
    /// as `O::default()`.
    pub async fn call<I, O>(
        &self,
        method: Method,
        url: &str,
        token: Option<&str>,
        body: Option<&I>,
        timeout: Option<Duration>,
    ) -> Result<O, AivenError>
    where
        I: Serialize + ?Sized,
        O: DeserializeOwned + Default,
    {
        tracing::debug!("{} {}", method, url);

        let mut request = self.client.request(method.clone(), url);

        if let Some(body) = body {
            let data = serde_json::to_vec(body).map_err(AivenError::Serialization)?;
            request = request.header(CONTENT_TYPE, "application/json").body(data);
        }
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            request = request.header(AUTHORIZATION, format!("{} {}", AUTH_SCHEME, token));
        }
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let transport = |source: reqwest::Error| AivenError::Transport {
            method: method.to_string(),
            url: url.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let data = response.bytes().await.map_err(transport)?;

        if !status.is_success() {
            // Security: Only log sanitized/truncated body to avoid leaking sensitive data
            tracing::debug!(
                "API returned {} - {}",
                status,
                sanitize_for_log(&String::from_utf8_lossy(&data))
            );
        }

        serde_json::from_slice::<Option<O>>(&data)
            .map(Option::unwrap_or_default)
            .map_err(AivenError::Deserialization)
    }
}
