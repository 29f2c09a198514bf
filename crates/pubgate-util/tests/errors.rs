use pubgate_util::errors::PubgateError;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
    let err = PubgateError::from(io_err);
    assert!(err.to_string().contains("I/O error"), "got: {err}");
}

#[test]
fn test_manifest_error_display() {
    let err = PubgateError::Manifest {
        message: "bad syntax".to_string(),
    };
    assert_eq!(err.to_string(), "Manifest error: bad syntax");
}

#[test]
fn test_config_error_display() {
    let err = PubgateError::Config {
        message: "bad property".to_string(),
    };
    assert_eq!(err.to_string(), "Configuration error: bad property");
}

#[test]
fn test_missing_configuration_names_every_key() {
    let err = PubgateError::MissingRequiredConfiguration {
        missing: vec![
            "ALGITES_REPO_URL".to_string(),
            "ALGITES_REPO_PASS".to_string(),
        ],
    };
    assert_eq!(
        err.to_string(),
        "CI build requires ALGITES_REPO_URL, ALGITES_REPO_PASS for publishing"
    );
}

#[test]
fn test_network_error_display() {
    let err = PubgateError::Network {
        message: "timeout".to_string(),
    };
    assert_eq!(err.to_string(), "Network error: timeout");
}

#[test]
fn test_publish_error_display() {
    let err = PubgateError::Publish {
        message: "no jar".to_string(),
    };
    assert_eq!(err.to_string(), "Publish failed: no jar");
}

#[test]
fn test_generic_error_display() {
    let err = PubgateError::Generic {
        message: "something broke".to_string(),
    };
    assert_eq!(err.to_string(), "something broke");
}

#[test]
fn test_io_error_from_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: PubgateError = io_err.into();
    assert!(matches!(err, PubgateError::Io(_)));
}
