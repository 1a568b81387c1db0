//! HTTP Response Utilities
//!
//! Helper functions for turning registry HTTP responses into domain results.
//! These are shared utilities, not ports.

use cmdsync_domain::error::{Error, Result};
use serde::Deserialize;
use std::time::Duration;

/// Error body returned by the registry
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<u64>,
    #[serde(default)]
    retry_after: Option<f64>,
}

/// Utilities for processing HTTP responses
///
/// Rate limiting (429) and server failures (5xx) map to the transient
/// `Error::RegistryUnavailable`; any other non-success status maps to the
/// permanent `Error::RegistryRejected`.
pub struct HttpResponseUtils;

impl HttpResponseUtils {
    /// Map a non-success status and its body to a domain error
    ///
    /// A `retry_after` that is negative, not finite or beyond what a
    /// `Duration` holds is dropped; the error stays transient.
    ///
    /// # Arguments
    /// * `status` - HTTP status code
    /// * `body` - Response body, usually a JSON error object
    /// * `retry_after_header` - Value of the `Retry-After` header in seconds
    /// * `provider_name` - Name of the provider for error messages
    pub fn classify_failure(
        status: u16,
        body: &str,
        retry_after_header: Option<f64>,
        provider_name: &str,
    ) -> Error {
        let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
        let detail = match (parsed.message, parsed.code) {
            (Some(message), Some(code)) => format!("{message} (code {code})"),
            (Some(message), None) => message,
            _ if body.is_empty() => "no details".to_string(),
            _ => body.to_string(),
        };

        match status {
            429 => {
                let retry_after = parsed
                    .retry_after
                    .or(retry_after_header)
                    .and_then(|secs| Duration::try_from_secs_f64(secs).ok());
                Error::rate_limited(
                    format!("{provider_name} rate limit exceeded: {detail}"),
                    retry_after,
                )
            }
            500..=599 => Error::registry_unavailable(format!(
                "{provider_name} server error ({status}): {detail}"
            )),
            _ => Error::registry_rejected(Some(status), format!("{provider_name}: {detail}")),
        }
    }

    /// Check response status and parse the JSON body
    ///
    /// # Arguments
    /// * `response` - The HTTP response to check
    /// * `provider_name` - Name of the provider for error messages
    #[cfg(feature = "registry-http")]
    pub async fn check_and_parse<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        provider_name: &str,
    ) -> Result<T> {
        let status = response.status();

        if !status.is_success() {
            let retry_after = response
                .headers()
                .get(crate::constants::RETRY_AFTER_HEADER)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.trim().parse::<f64>().ok());
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify_failure(
                status.as_u16(),
                &body,
                retry_after,
                provider_name,
            ));
        }

        response.json().await.map_err(|e| {
            Error::registry_unavailable_with_source(
                format!("{provider_name} response parse failed"),
                e,
            )
        })
    }
}

/// Parse a snowflake identifier serialized as a JSON string
pub fn parse_snowflake(value: &str, field: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| Error::internal(format!("registry returned a malformed {field}: '{value}'")))
}
