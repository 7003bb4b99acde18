use thiserror::Error;

/// Closed set of failure kinds for the connector.
///
/// Every fallible step maps into exactly one of these variants; handlers wrap
/// them into [`ActionFailure`] at the boundary so the host platform sees a
/// single reported-failure outcome regardless of kind.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Request error occurred: {0}")]
    Transport(String),

    #[error("HTTP error occurred: {status} - {body}")]
    RemoteRejection { status: u16, body: String },

    #[error("Unexpected error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::Decode(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decode(format!("JSON error: {}", err))
    }
}

/// Terminal failure reported to the host platform.
///
/// Auth and HTTP failures are reported identically, differing only in message
/// text; the original [`AppError`] is kept as the source for logs and tests.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct ActionFailure {
    message: String,
    #[source]
    source: AppError,
}

impl ActionFailure {
    /// Wrap an error with an action-specific prefix.
    pub fn with_context(prefix: &str, source: AppError) -> Self {
        Self {
            message: format!("{}: {}", prefix, source),
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The underlying failure kind, preserved for diagnostics.
    pub fn kind(&self) -> &AppError {
        &self.source
    }
}

impl From<AppError> for ActionFailure {
    fn from(source: AppError) -> Self {
        Self {
            message: source.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
