use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Authentication failed: {message}")]
    Auth { code: String, message: String },

    #[error("Failed to persist record: {message}")]
    Persist { code: String, message: String },

    #[error("Score store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Identity token unavailable: {0}")]
    TokenUnavailable(String),

    #[error("Config parse error: {0}")]
    ConfigParseError(String),

    #[error("Invalid port message: {0}")]
    InvalidMessage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Error {
    pub fn auth(code: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Auth {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn persist(code: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Persist {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Error code forwarded to the UI in `signInError`.
    ///
    /// Provider-supplied codes pass through verbatim.
    pub fn code(&self) -> &str {
        match self {
            Error::Auth { code, .. } | Error::Persist { code, .. } => code,
            Error::StoreUnavailable(_) => "storage/unavailable",
            Error::TokenUnavailable(_) => "auth/token-unavailable",
            Error::ConfigParseError(_) | Error::Toml(_) => "config/invalid",
            Error::InvalidMessage(_) => "port/invalid-message",
            Error::Io(_) => "storage/io-error",
            Error::Json(_) => "storage/corrupt-document",
        }
    }

    /// Message forwarded to the UI in `signInError`.
    pub fn message(&self) -> String {
        match self {
            Error::Auth { message, .. } | Error::Persist { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_codes_pass_through() {
        let err = Error::auth("auth/popup-closed-by-user", "The popup was closed");
        assert_eq!(err.code(), "auth/popup-closed-by-user");
        assert_eq!(err.message(), "The popup was closed");

        let err = Error::persist("permission-denied", "Missing permissions");
        assert_eq!(err.code(), "permission-denied");
        assert_eq!(err.message(), "Missing permissions");
    }

    #[test]
    fn test_io_error_code() {
        let err = Error::from(std::io::Error::other("disk full"));
        assert_eq!(err.code(), "storage/io-error");
        assert!(err.message().contains("disk full"));
    }
}
