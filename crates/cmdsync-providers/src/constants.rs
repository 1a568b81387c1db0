//! Provider-specific constants

// ============================================================================
// REST REGISTRY CONSTANTS
// ============================================================================

/// Default base URL of the platform REST API
pub const REGISTRY_DEFAULT_API_BASE_URL: &str = "https://discord.com/api/v10";

/// Default request timeout in seconds
pub const REGISTRY_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Prefix of the authorization header value for bot tokens
pub const REGISTRY_AUTH_PREFIX: &str = "Bot ";

/// Content type of request bodies
pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Header carrying the back-off on rate-limited responses
pub const RETRY_AFTER_HEADER: &str = "retry-after";

/// Error message prefix for request timeouts
pub const ERROR_MSG_REQUEST_TIMEOUT: &str = "Request timed out after";

// ============================================================================
// IN-MEMORY REGISTRY CONSTANTS
// ============================================================================

/// First identifier assigned by the in-memory registry
pub const IN_MEMORY_FIRST_COMMAND_ID: u64 = 1_000_000_000_000_000_000;

/// Application id reported by the in-memory registry
pub const IN_MEMORY_APPLICATION_ID: u64 = 1;

// ============================================================================
// DIGEST STORE CONSTANTS
// ============================================================================

/// Directory under the user cache directory holding the digest record
pub const DIGEST_CACHE_DIR: &str = "cmdsync";

/// File name of the digest record
pub const DIGEST_FILE_NAME: &str = "command_tree.hash";
