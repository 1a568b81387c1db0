//! Error context extension tests

use cmdsync_domain::error::Error;
use cmdsync_infrastructure::error_ext::ErrorContext;

#[test]
fn test_io_context_wraps_as_io_error() {
    let result: std::io::Result<()> = Err(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "gone",
    ));
    let err = result.io_context("Failed to read manifest").expect_err("io");
    assert!(matches!(err, Error::Io { .. }));
    assert!(err.to_string().contains("Failed to read manifest: gone"));
}

#[test]
fn test_config_context_wraps_as_configuration_error() {
    let result: Result<u8, _> = "300".parse::<u8>();
    let err = result.config_context("Invalid timeout").expect_err("overflow");
    assert!(matches!(err, Error::Configuration { .. }));
}
