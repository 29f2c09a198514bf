use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all pubgate operations.
#[derive(Debug, Error, Diagnostic)]
pub enum PubgateError {
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid or malformed project manifest (`Pubgate.toml`).
    #[error("Manifest error: {message}")]
    #[diagnostic(help("Check your Pubgate.toml for syntax errors"))]
    Manifest { message: String },

    /// Invalid configuration input (properties, global config, `-P` flags).
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A CI run was started without a complete remote publication target.
    #[error("CI build requires {} for publishing", missing.join(", "))]
    #[diagnostic(help(
        "Set ALGITES_REPO_URL, ALGITES_REPO_USER and ALGITES_REPO_PASS as properties or environment variables"
    ))]
    MissingRequiredConfiguration { missing: Vec<String> },

    /// Network request, upload or download failed.
    #[error("Network error: {message}")]
    Network { message: String },

    /// Publishing a module failed (missing artifacts, unwritable repository).
    #[error("Publish failed: {message}")]
    Publish { message: String },

    /// Catch-all for miscellaneous errors.
    #[error("{message}")]
    Generic { message: String },
}
