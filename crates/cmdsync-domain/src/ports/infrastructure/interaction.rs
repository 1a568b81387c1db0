//! Interaction Ports
//!
//! Contracts between the dispatch error boundary and the gateway layer that
//! delivers command invocations.

use crate::error::Result;
use async_trait::async_trait;

/// Reply channel of a single command invocation
#[async_trait]
pub trait InteractionResponder: Send + Sync {
    /// Whether the invocation already received its initial response
    fn is_done(&self) -> bool;

    /// Send the initial response
    async fn send_message(&self, content: &str) -> Result<()>;

    /// Send a follow-up message after the initial response
    async fn followup(&self, content: &str) -> Result<()>;
}

/// Receives every command failure that is not meant for the user
pub trait FallbackErrorHandler: Send + Sync {
    /// Handle an unexpected failure raised while running `command`
    fn handle(&self, command: &str, error: &(dyn std::error::Error + Send + Sync));
}
