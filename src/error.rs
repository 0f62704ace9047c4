//! Error types for the mhflop CLI

use thiserror::Error;

/// Result type alias for mhflop operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Request(#[from] Failure),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// What stage of a request produced a [`Failure`].
///
/// Transport variants never carry a backend message; `Application` carries
/// the envelope message verbatim; `Http` covers non-200 statuses without an
/// envelope body; `Decode` covers payloads that could not be read into the
/// requested type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Request timed out before a response arrived
    Timeout,
    /// Could not reach the backend at all
    Connect,
    /// Some other transport-level error
    Transport,
    /// Envelope present with a non-200 application code
    Application,
    /// HTTP status != 200 without a response envelope
    Http,
    /// Response body could not be decoded into the expected type
    Decode,
}

/// Uniform request failure: every failed dispatch resolves to exactly one of
/// these, carrying the message, the application or HTTP code, and the
/// requested URL.
///
/// Transport failures use code 0 and the fixed message `network error`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message} (code {code}, {url})")]
pub struct Failure {
    pub message: String,
    pub code: i64,
    pub url: String,
    pub kind: FailureKind,
}

impl Failure {
    /// Transport-level failure. The caller-visible message is fixed; the
    /// timeout/connect distinction only drives the emitted notice.
    pub fn transport(kind: FailureKind, url: impl Into<String>) -> Self {
        Self {
            message: "network error".to_string(),
            code: 0,
            url: url.into(),
            kind,
        }
    }

    /// Application-level failure from a response envelope.
    pub fn application(message: impl Into<String>, code: i64, url: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code,
            url: url.into(),
            kind: FailureKind::Application,
        }
    }

    /// Non-200 HTTP status without an envelope body.
    pub fn http(status: u16, url: impl Into<String>) -> Self {
        Self {
            message: format!("request failed ({})", status),
            code: i64::from(status),
            url: url.into(),
            kind: FailureKind::Http,
        }
    }

    /// Payload decode failure.
    pub fn decode(err: impl std::fmt::Display, url: impl Into<String>) -> Self {
        Self {
            message: format!("invalid response: {}", err),
            code: 0,
            url: url.into(),
            kind: FailureKind::Decode,
        }
    }
}

/// Classify a reqwest transport error into a [`FailureKind`].
pub fn transport_kind(err: &reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        FailureKind::Timeout
    } else if err.is_connect() {
        FailureKind::Connect
    } else {
        FailureKind::Transport
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

/// Credential-store errors
///
/// Reads never produce these: an unreadable or unparsable record is treated
/// as absent. Only explicit writes can fail.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Could not determine a credential directory")]
    NoHome,

    #[error("Failed to persist credentials: {0}")]
    SaveError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_transport_message_is_fixed() {
        let f = Failure::transport(FailureKind::Timeout, "/api/account/info");
        assert_eq!(f.message, "network error");
        assert_eq!(f.code, 0);
        assert_eq!(f.kind, FailureKind::Timeout);
    }

    #[test]
    fn test_failure_application_keeps_envelope_parts() {
        let f = Failure::application("unauthorized", 401, "/api/account/info");
        assert_eq!(f.message, "unauthorized");
        assert_eq!(f.code, 401);
        assert_eq!(f.url, "/api/account/info");
        assert_eq!(f.kind, FailureKind::Application);
    }

    #[test]
    fn test_failure_http_synthesizes_message() {
        let f = Failure::http(502, "/api/system/resources");
        assert_eq!(f.message, "request failed (502)");
        assert_eq!(f.code, 502);
        assert_eq!(f.kind, FailureKind::Http);
    }

    #[test]
    fn test_failure_display_includes_url() {
        let f = Failure::application("bad captcha", 400, "/auth/login");
        let msg = f.to_string();
        assert!(msg.contains("bad captcha"));
        assert!(msg.contains("400"));
        assert!(msg.contains("/auth/login"));
    }

    #[test]
    fn test_config_error_parse() {
        let err = ConfigError::ParseError("unexpected key".to_string());
        assert!(err.to_string().contains("unexpected key"));
    }

    #[test]
    fn test_config_error_from_yaml_error() {
        let yaml_str = "invalid: [yaml: content";
        let yaml_err = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let config_err: ConfigError = yaml_err.into();

        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }

    #[test]
    fn test_error_from_failure() {
        let failure = Failure::http(500, "/x");
        let err: Error = failure.into();

        match err {
            Error::Request(f) => assert_eq!(f.code, 500),
            _ => panic!("Expected Error::Request"),
        }
    }

    #[test]
    fn test_credential_error_messages() {
        assert!(CredentialError::NoHome.to_string().contains("directory"));
        let err = CredentialError::SaveError("disk full".to_string());
        assert!(err.to_string().contains("disk full"));
    }
}
