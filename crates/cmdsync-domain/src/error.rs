//! Error handling types

use std::time::Duration;
use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed source error carried by the richer variants
pub type BoxedSource = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for cmdsync
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (simple form)
    #[error("I/O error: {source}")]
    IoSimple {
        /// The underlying I/O error
        #[from]
        source: std::io::Error,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// JSON parsing or serialization error
    #[error("JSON parsing error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// The remote registry could not be reached or asked us to back off.
    ///
    /// Covers transport failures, timeouts, rate limiting and server-side
    /// failures. Safe to retry later; never retried internally.
    #[error("Command registry unavailable: {message}")]
    RegistryUnavailable {
        /// Description of the failure
        message: String,
        /// Delay requested by the registry before the next attempt
        retry_after: Option<Duration>,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The remote registry refused the request permanently
    #[error("Command registry rejected the request{}: {message}", status_suffix(.status))]
    RegistryRejected {
        /// HTTP status code, when the rejection came over HTTP
        status: Option<u16>,
        /// Description returned by the registry
        message: String,
    },

    /// A declared command failed local validation
    #[error("Invalid command: {message}")]
    InvalidCommand {
        /// Description of the validation failure
        message: String,
    },

    /// The persisted digest could not be read or written
    #[error("Digest persistence error: {message}")]
    Persistence {
        /// Description of the persistence failure
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// The translator failed to produce a payload
    #[error("Translation error: {message}")]
    Translation {
        /// Description of the translation failure
        message: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxedSource>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

fn status_suffix(status: &Option<u16>) -> String {
    status.map(|code| format!(" ({code})")).unwrap_or_default()
}

// Registry error creation methods
impl Error {
    /// Create a transient registry error
    pub fn registry_unavailable<S: Into<String>>(message: S) -> Self {
        Self::RegistryUnavailable {
            message: message.into(),
            retry_after: None,
            source: None,
        }
    }

    /// Create a transient registry error carrying the requested back-off
    pub fn rate_limited<S: Into<String>>(message: S, retry_after: Option<Duration>) -> Self {
        Self::RegistryUnavailable {
            message: message.into(),
            retry_after,
            source: None,
        }
    }

    /// Create a transient registry error with source
    pub fn registry_unavailable_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::RegistryUnavailable {
            message: message.into(),
            retry_after: None,
            source: Some(Box::new(source)),
        }
    }

    /// Create a permanent registry rejection
    pub fn registry_rejected<S: Into<String>>(status: Option<u16>, message: S) -> Self {
        Self::RegistryRejected {
            status,
            message: message.into(),
        }
    }
}

// Local validation and translation error creation methods
impl Error {
    /// Create an invalid command error
    pub fn invalid_command<S: Into<String>>(message: S) -> Self {
        Self::InvalidCommand {
            message: message.into(),
        }
    }

    /// Create a translation error
    pub fn translation<S: Into<String>>(message: S) -> Self {
        Self::Translation {
            message: message.into(),
        }
    }
}

// Persistence and I/O error creation methods
impl Error {
    /// Create a persistence error
    pub fn persistence<S: Into<String>>(message: S) -> Self {
        Self::Persistence {
            message: message.into(),
            source: None,
        }
    }

    /// Create a persistence error with source
    pub fn persistence_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Persistence {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Configuration and internal error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl Error {
    /// Whether the failure may succeed if the same call is attempted later
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::RegistryUnavailable { .. })
    }

    /// Back-off requested by the registry, if any
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            Self::RegistryUnavailable { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

/// Error whose message is meant for the user who invoked a command
///
/// Raised by command handlers; the dispatch error boundary shows the message
/// to the user instead of routing it to the fallback handler.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct UserFacingError {
    /// Message shown to the user
    pub message: String,
}

impl UserFacingError {
    /// Create a user-facing error
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }
}
