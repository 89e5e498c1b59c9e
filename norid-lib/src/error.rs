//! Error handling for registry lookups.
//!
//! This module defines the error type shared by the RDAP, whois and DAS
//! clients. A lookup that finds nothing is *not* an error: it is reported as
//! [`crate::LookupResult::NotFound`]. Errors are reserved for invalid input,
//! transport failures, malformed responses and rate limiting.

use std::fmt;
use std::time::Duration;

/// Main error type for lookup operations.
///
/// Transport and protocol variants carry the endpoint and the operation that
/// failed so callers can log or display them without extra bookkeeping.
#[derive(Debug, Clone)]
pub enum NoridError {
    /// Input rejected before any network call (bad syntax, illegal sort key...)
    InvalidInput { input: String, reason: String },

    /// Connection, read or write failure
    NetworkError {
        endpoint: String,
        operation: String,
        message: String,
    },

    /// Connect or read bound exceeded
    Timeout {
        endpoint: String,
        operation: String,
        duration: Duration,
    },

    /// The peer answered with something we cannot interpret
    ProtocolError {
        endpoint: String,
        message: String,
        content: Option<String>,
    },

    /// HTTP 429 from the server. Never retried by the library.
    RateLimited {
        service: String,
        message: String,
        retry_after: Option<Duration>,
    },

    /// Unexpected HTTP status from an RDAP search or count request
    RdapError {
        target: String,
        message: String,
        status_code: Option<u16>,
    },

    /// Configuration errors (invalid settings, bad environment name, etc.)
    ConfigError { message: String },

    /// Configuration file could not be read
    FileError { path: String, message: String },
}

impl NoridError {
    /// Create a new invalid input error.
    pub fn invalid_input<I: Into<String>, R: Into<String>>(input: I, reason: R) -> Self {
        Self::InvalidInput {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a new network error.
    pub fn network<E: Into<String>, O: Into<String>, M: Into<String>>(
        endpoint: E,
        operation: O,
        message: M,
    ) -> Self {
        Self::NetworkError {
            endpoint: endpoint.into(),
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a new timeout error.
    pub fn timeout<E: Into<String>, O: Into<String>>(
        endpoint: E,
        operation: O,
        duration: Duration,
    ) -> Self {
        Self::Timeout {
            endpoint: endpoint.into(),
            operation: operation.into(),
            duration,
        }
    }

    /// Create a new protocol error.
    pub fn protocol<E: Into<String>, M: Into<String>>(endpoint: E, message: M) -> Self {
        Self::ProtocolError {
            endpoint: endpoint.into(),
            message: message.into(),
            content: None,
        }
    }

    /// Create a new protocol error that keeps (a prefix of) the offending body.
    pub fn protocol_with_content<E: Into<String>, M: Into<String>>(
        endpoint: E,
        message: M,
        content: &str,
    ) -> Self {
        Self::ProtocolError {
            endpoint: endpoint.into(),
            message: message.into(),
            content: Some(content.chars().take(200).collect()),
        }
    }

    /// Create a new rate limit error.
    pub fn rate_limited<S: Into<String>, M: Into<String>>(
        service: S,
        message: M,
        retry_after: Option<Duration>,
    ) -> Self {
        Self::RateLimited {
            service: service.into(),
            message: message.into(),
            retry_after,
        }
    }

    /// Create a new RDAP error with HTTP status code.
    pub fn rdap_with_status<T: Into<String>, M: Into<String>>(
        target: T,
        message: M,
        status_code: u16,
    ) -> Self {
        Self::RdapError {
            target: target.into(),
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    /// Create a new configuration error.
    pub fn config<M: Into<String>>(message: M) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new file error.
    pub fn file_error<P: Into<String>, M: Into<String>>(path: P, message: M) -> Self {
        Self::FileError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// True for failures of the transport itself (connect, read, write, timeout).
    pub fn is_network(&self) -> bool {
        matches!(self, Self::NetworkError { .. } | Self::Timeout { .. })
    }

    /// True when the server asked us to slow down.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }

    /// HTTP status attached to this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RdapError { status_code, .. } => *status_code,
            Self::RateLimited { .. } => Some(429),
            _ => None,
        }
    }
}

impl fmt::Display for NoridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInput { input, reason } => {
                write!(f, "Invalid input '{}': {}", input, reason)
            }
            Self::NetworkError {
                endpoint,
                operation,
                message,
            } => {
                write!(f, "Network error during {} ({}): {}", operation, endpoint, message)
            }
            Self::Timeout {
                endpoint,
                operation,
                duration,
            } => {
                write!(f, "Timeout after {:?} during {} ({})", duration, operation, endpoint)
            }
            Self::ProtocolError {
                endpoint, message, ..
            } => {
                write!(f, "Protocol error from {}: {}", endpoint, message)
            }
            Self::RateLimited {
                service,
                message,
                retry_after,
            } => {
                if let Some(retry) = retry_after {
                    write!(f, "Rate limited by {} (retry after {:?}): {}", service, retry, message)
                } else {
                    write!(f, "Rate limited by {}: {}", service, message)
                }
            }
            Self::RdapError {
                target,
                message,
                status_code,
            } => {
                if let Some(code) = status_code {
                    write!(f, "RDAP error for '{}' (HTTP {}): {}", target, code, message)
                } else {
                    write!(f, "RDAP error for '{}': {}", target, message)
                }
            }
            Self::ConfigError { message } => {
                write!(f, "Configuration error: {}", message)
            }
            Self::FileError { path, message } => {
                write!(f, "File error at '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for NoridError {}

// Transport errors that escape without explicit context. The RDAP client maps
// reqwest errors itself so it can name the endpoint; these are fallbacks.
impl From<reqwest::Error> for NoridError {
    fn from(err: reqwest::Error) -> Self {
        let endpoint = err
            .url()
            .map(|u| u.as_str().to_string())
            .unwrap_or_else(|| "rdap".to_string());
        if err.is_timeout() {
            Self::timeout(endpoint, "HTTP request", Duration::from_secs(0))
        } else if err.is_connect() {
            Self::network(endpoint, "connect", err.to_string())
        } else {
            Self::network(endpoint, "HTTP request", err.to_string())
        }
    }
}

impl From<serde_json::Error> for NoridError {
    fn from(err: serde_json::Error) -> Self {
        Self::ProtocolError {
            endpoint: "rdap".to_string(),
            message: format!("JSON parsing failed: {}", err),
            content: None,
        }
    }
}

impl From<std::io::Error> for NoridError {
    fn from(err: std::io::Error) -> Self {
        Self::network("socket", "I/O", err.to_string())
    }
}

impl From<url::ParseError> for NoridError {
    fn from(err: url::ParseError) -> Self {
        Self::config(format!("Invalid URL: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_context() {
        let err = NoridError::network("whois.norid.no:43", "connect", "connection refused");
        let text = err.to_string();
        assert!(text.contains("whois.norid.no:43"));
        assert!(text.contains("connect"));
        assert!(text.contains("connection refused"));
    }

    #[test]
    fn test_classification_helpers() {
        let timeout = NoridError::timeout("finger.norid.no:79", "read", Duration::from_secs(2));
        assert!(timeout.is_network());
        assert!(!timeout.is_rate_limited());

        let limited = NoridError::rate_limited("rdap.norid.no", "slow down", None);
        assert!(limited.is_rate_limited());
        assert_eq!(limited.status_code(), Some(429));

        let invalid = NoridError::invalid_input("sort", "not allowed");
        assert!(!invalid.is_network());
        assert_eq!(invalid.status_code(), None);
    }

    #[test]
    fn test_protocol_content_is_truncated() {
        let body = "x".repeat(1000);
        match NoridError::protocol_with_content("rdap", "bad body", &body) {
            NoridError::ProtocolError { content, .. } => {
                assert_eq!(content.map(|c| c.len()), Some(200));
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_rate_limited_display_with_retry() {
        let err =
            NoridError::rate_limited("rdap.norid.no", "Too Many Requests", Some(Duration::from_secs(60)));
        assert!(err.to_string().contains("retry after 60s"));
    }
}
