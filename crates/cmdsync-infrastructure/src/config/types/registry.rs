//! Command registry configuration types

use crate::constants::REGISTRY_PROVIDER_HTTP;
use cmdsync_providers::constants::{REGISTRY_DEFAULT_API_BASE_URL, REGISTRY_DEFAULT_TIMEOUT_SECS};
use serde::{Deserialize, Serialize};

/// Remote registry configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Provider name (`http` or `memory`)
    pub provider: String,

    /// Base URL of the REST API
    pub api_base_url: String,

    /// Application the commands are registered under
    pub application_id: u64,

    /// Bot token
    pub token: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Custom user agent, the client default when unset
    pub user_agent: Option<String>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            provider: REGISTRY_PROVIDER_HTTP.to_string(),
            api_base_url: REGISTRY_DEFAULT_API_BASE_URL.to_string(),
            application_id: 0,
            token: String::new(),
            timeout_secs: REGISTRY_DEFAULT_TIMEOUT_SECS,
            user_agent: None,
        }
    }
}
