use std::fmt;

/// Result type for pawdeck-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur at the gateway boundary.
///
/// The three variants mirror the three ways a roster operation can fail:
/// the request never completed, the API answered with a non-success status,
/// or a success response carried a body that did not match the contract.
#[derive(Debug)]
pub enum Error {
    /// Request could not complete (connect failure, timeout, broken stream)
    Transport {
        op: &'static str,
        source: reqwest::Error,
    },

    /// API reachable but answered outside the success range
    Status { op: &'static str, status: u16 },

    /// Success status with a body that did not decode against the contract
    Malformed { op: &'static str, detail: String },

    /// Configuration file could not be read or parsed
    Config(String),
}

impl Error {
    pub(crate) fn transport(op: &'static str, source: reqwest::Error) -> Self {
        Error::Transport { op, source }
    }

    pub(crate) fn malformed(op: &'static str, err: serde_json::Error) -> Self {
        Error::Malformed {
            op,
            detail: err.to_string(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Transport { op, source } => write!(f, "{} request failed: {}", op, source),
            Error::Status { op, status } => write!(f, "{} rejected with status {}", op, status),
            Error::Malformed { op, detail } => write!(f, "{} response malformed: {}", op, detail),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Transport { source, .. } => Some(source),
            Error::Status { .. } | Error::Malformed { .. } | Error::Config(_) => None,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Config(err.to_string())
    }
}
