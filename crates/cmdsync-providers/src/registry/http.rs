//! REST Command Registry Provider
//!
//! Implements the `CommandRegistryProvider` port against the platform's
//! application commands REST API. Declaring a scope is a bulk overwrite
//! (`PUT`), listing is a plain `GET` of the same collection.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method};
use serde::Deserialize;
use serde_json::Value;

use cmdsync_domain::error::{Error, Result};
use cmdsync_domain::ports::providers::CommandRegistryProvider;
use cmdsync_domain::value_objects::{RemoteCommand, Scope};

use crate::constants::{
    CONTENT_TYPE_JSON, ERROR_MSG_REQUEST_TIMEOUT, REGISTRY_AUTH_PREFIX,
    REGISTRY_DEFAULT_API_BASE_URL,
};
use crate::utils::{HttpResponseUtils, parse_snowflake};

const PROVIDER_NAME: &str = "Command registry";

/// Registry record as returned over the wire
///
/// Snowflakes arrive as strings.
#[derive(Debug, Deserialize)]
struct WireCommand {
    id: String,
    name: String,
    #[serde(default)]
    application_id: Option<String>,
    #[serde(default)]
    guild_id: Option<String>,
    #[serde(default)]
    version: Option<String>,
}

impl WireCommand {
    fn into_remote(self, requested: Scope) -> Result<RemoteCommand> {
        let scope = match self.guild_id.as_deref() {
            Some(guild) => Scope::Guild(parse_snowflake(guild, "guild id")?),
            None => requested,
        };
        Ok(RemoteCommand {
            id: parse_snowflake(&self.id, "command id")?,
            name: self.name,
            scope,
            application_id: self
                .application_id
                .as_deref()
                .map(|id| parse_snowflake(id, "application id"))
                .transpose()?,
            version: self
                .version
                .as_deref()
                .map(|v| parse_snowflake(v, "version"))
                .transpose()?,
        })
    }
}

/// Command registry backed by the platform REST API
///
/// Receives the HTTP client via constructor injection.
///
/// ## Example
///
/// ```rust,no_run
/// use cmdsync_providers::registry::HttpCommandRegistry;
/// use reqwest::Client;
/// use std::time::Duration;
///
/// fn example() -> Result<(), Box<dyn std::error::Error>> {
///     let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
///     let registry = HttpCommandRegistry::new(
///         None,
///         123456789012345678,
///         "bot-token".to_string(),
///         Duration::from_secs(30),
///         client,
///     );
///     Ok(())
/// }
/// ```
pub struct HttpCommandRegistry {
    base_url: Option<String>,
    application_id: u64,
    token: String,
    timeout: Duration,
    http_client: Client,
}

impl HttpCommandRegistry {
    /// Create a new REST registry provider
    ///
    /// # Arguments
    /// * `base_url` - Optional custom API base URL (defaults to the public v10 API)
    /// * `application_id` - Application the commands belong to
    /// * `token` - Bot token used for authorization
    /// * `timeout` - Request timeout duration
    /// * `http_client` - Reqwest HTTP client for making API requests
    pub fn new(
        base_url: Option<String>,
        application_id: u64,
        token: String,
        timeout: Duration,
        http_client: Client,
    ) -> Self {
        let base_url = base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        Self {
            base_url,
            application_id,
            token: token.trim().to_string(),
            timeout,
            http_client,
        }
    }

    /// Get the base URL for this provider
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(REGISTRY_DEFAULT_API_BASE_URL)
    }

    /// Get the application id commands are registered under
    pub fn application_id(&self) -> u64 {
        self.application_id
    }

    /// Collection URL for a scope
    pub fn commands_url(&self, scope: Scope) -> String {
        match scope {
            Scope::Global => format!(
                "{}/applications/{}/commands",
                self.base_url(),
                self.application_id
            ),
            Scope::Guild(guild) => format!(
                "{}/applications/{}/guilds/{}/commands",
                self.base_url(),
                self.application_id,
                guild
            ),
        }
    }

    async fn request(
        &self,
        method: Method,
        scope: Scope,
        body: Option<&[Value]>,
    ) -> Result<Vec<RemoteCommand>> {
        let mut builder = self
            .http_client
            .request(method, self.commands_url(scope))
            .header("Authorization", format!("{REGISTRY_AUTH_PREFIX}{}", self.token))
            .timeout(self.timeout);
        if let Some(payloads) = body {
            builder = builder
                .header("Content-Type", CONTENT_TYPE_JSON)
                .json(payloads);
        }

        let response = builder.send().await.map_err(|e| {
            if e.is_timeout() {
                Error::registry_unavailable(format!(
                    "{ERROR_MSG_REQUEST_TIMEOUT} {:?}",
                    self.timeout
                ))
            } else {
                Error::registry_unavailable_with_source("HTTP request failed", e)
            }
        })?;

        let records: Vec<WireCommand> =
            HttpResponseUtils::check_and_parse(response, PROVIDER_NAME).await?;
        records
            .into_iter()
            .map(|record| record.into_remote(scope))
            .collect()
    }
}

#[async_trait]
impl CommandRegistryProvider for HttpCommandRegistry {
    async fn declare_commands(
        &self,
        scope: Scope,
        payloads: &[Value],
    ) -> Result<Vec<RemoteCommand>> {
        self.request(Method::PUT, scope, Some(payloads)).await
    }

    async fn list_commands(&self, scope: Scope) -> Result<Vec<RemoteCommand>> {
        self.request(Method::GET, scope, None).await
    }

    fn provider_name(&self) -> &str {
        "http"
    }
}
