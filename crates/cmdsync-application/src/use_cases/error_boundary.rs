//! Dispatch error boundary
//!
//! Last stop for errors raised while a command runs. Errors meant for the
//! user are shown to them; everything else goes to the fallback handler.

use cmdsync_domain::error::{Result, UserFacingError};
use cmdsync_domain::ports::infrastructure::{FallbackErrorHandler, InteractionResponder};
use std::sync::Arc;
use thiserror::Error;
use tracing::error;

/// Failure of a command handler
#[derive(Error, Debug)]
pub enum CommandFailure {
    /// Message for the invoking user
    #[error(transparent)]
    User(#[from] UserFacingError),

    /// Anything else
    #[error(transparent)]
    Unexpected(Box<dyn std::error::Error + Send + Sync>),
}

impl From<cmdsync_domain::Error> for CommandFailure {
    fn from(error: cmdsync_domain::Error) -> Self {
        Self::Unexpected(Box::new(error))
    }
}

/// Fallback handler that records failures through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingFallbackHandler;

impl FallbackErrorHandler for LoggingFallbackHandler {
    fn handle(&self, command: &str, error: &(dyn std::error::Error + Send + Sync)) {
        error!(command, error = %error, "Ignoring exception in command");
    }
}

/// Routes command failures to the user or to the fallback handler
#[derive(Clone)]
pub struct ErrorBoundary {
    fallback: Arc<dyn FallbackErrorHandler>,
}

impl ErrorBoundary {
    /// Create a boundary with a custom fallback handler
    pub fn new(fallback: Arc<dyn FallbackErrorHandler>) -> Self {
        Self { fallback }
    }

    /// Report a failure of `command`
    ///
    /// User-facing messages become the initial response when the invocation
    /// has not been answered yet and a follow-up otherwise. Errors from the
    /// responder itself are returned.
    pub async fn report(
        &self,
        responder: &dyn InteractionResponder,
        command: &str,
        failure: CommandFailure,
    ) -> Result<()> {
        match failure {
            CommandFailure::User(error) if responder.is_done() => {
                responder.followup(&error.message).await
            }
            CommandFailure::User(error) => responder.send_message(&error.message).await,
            CommandFailure::Unexpected(error) => {
                self.fallback.handle(command, error.as_ref());
                Ok(())
            }
        }
    }
}

impl Default for ErrorBoundary {
    fn default() -> Self {
        Self::new(Arc::new(LoggingFallbackHandler))
    }
}
