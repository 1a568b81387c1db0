//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Domain-specific constants are defined in `cmdsync_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "cmdsync.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "cmdsync";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "CMDSYNC";

/// Separator between nested keys in environment variables
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "CMDSYNC_LOG";

/// File stem used when the configured log path has none
pub const LOG_FILE_FALLBACK_STEM: &str = "cmdsync";

// ============================================================================
// REGISTRY CONSTANTS
// ============================================================================

/// Registry provider talking to the REST API
pub const REGISTRY_PROVIDER_HTTP: &str = "http";

/// Registry provider kept in process memory
pub const REGISTRY_PROVIDER_MEMORY: &str = "memory";
