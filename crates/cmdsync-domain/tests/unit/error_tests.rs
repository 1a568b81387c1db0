//! Unit tests for domain error types

use cmdsync_domain::error::{Error, UserFacingError};
use std::time::Duration;

#[test]
fn test_registry_unavailable_is_transient() {
    let error = Error::rate_limited("slow down", Some(Duration::from_secs(3)));
    assert!(error.is_transient());
    assert_eq!(error.retry_after(), Some(Duration::from_secs(3)));
}

#[test]
fn test_rejections_are_permanent() {
    let error = Error::registry_rejected(Some(400), "Invalid Form Body");
    assert!(!error.is_transient());
    assert_eq!(error.retry_after(), None);
    assert_eq!(
        error.to_string(),
        "Command registry rejected the request (400): Invalid Form Body"
    );
}

#[test]
fn test_rejection_without_status() {
    let error = Error::registry_rejected(None, "duplicate name");
    assert_eq!(
        error.to_string(),
        "Command registry rejected the request: duplicate name"
    );
}

#[test]
fn test_invalid_command_error() {
    let error = Error::invalid_command("bad name");
    match error {
        Error::InvalidCommand { message } => assert_eq!(message, "bad name"),
        _ => panic!("Expected InvalidCommand error"),
    }
}

#[test]
fn test_persistence_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let error = Error::persistence_with_source("cannot write digest", io);
    assert!(!error.is_transient());
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_user_facing_error_displays_message() {
    let error = UserFacingError::new("Nothing is playing.");
    assert_eq!(error.to_string(), "Nothing is playing.");
}
