use thiserror::Error;

/// Client-facing failures. The message is the whole contract: callers
/// distinguish causes by its text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ServiceError {
    /// Malformed date or time strings.
    #[error("{0}")]
    InvalidFormat(String),
    /// Out-of-range numbers, unknown or non-numeric categories, empty store.
    #[error("{0}")]
    InvalidValue(String),
}

impl ServiceError {
    pub fn invalid_format(msg: impl Into<String>) -> Self { Self::InvalidFormat(msg.into()) }

    pub fn invalid_value(msg: impl Into<String>) -> Self { Self::InvalidValue(msg.into()) }

    pub fn message(&self) -> &str {
        match self {
            Self::InvalidFormat(m) | Self::InvalidValue(m) => m,
        }
    }
}
