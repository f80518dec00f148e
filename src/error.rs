use serde_json::Value;
use thiserror::Error;

use crate::transport::RawResponse;

/// Broad classification of a [`CcexError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credentials or an unusable client configuration. Detected before any I/O.
    Configuration,
    /// The HTTP round trip itself failed.
    Transport,
    /// The response body could not be decoded.
    MalformedResponse,
    /// The exchange answered with its maintenance page.
    ExchangeUnavailable,
    /// The exchange decoded the call and refused it.
    ApiRejected,
}

/// SDK-specific errors
#[derive(Error, Debug)]
pub enum CcexError {
    #[error("Call '{call}' requires an API key and secret")]
    MissingCredentials { call: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to query C-CEX API at {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Failed to parse C-CEX response: {source}")]
    MalformedResponse {
        #[source]
        source: serde_json::Error,
        response: Box<RawResponse>,
    },

    #[error("C-CEX is unavailable: {message}")]
    ExchangeUnavailable { message: String },

    #[error("C-CEX API returned an error: {message}")]
    ApiRejected { message: String, body: Value },
}

impl CcexError {
    pub(crate) fn transport(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        CcexError::Transport {
            url: url.into(),
            source: source.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CcexError::MissingCredentials { .. } | CcexError::Config(_) => ErrorKind::Configuration,
            CcexError::Transport { .. } => ErrorKind::Transport,
            CcexError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            CcexError::ExchangeUnavailable { .. } => ErrorKind::ExchangeUnavailable,
            CcexError::ApiRejected { .. } => ErrorKind::ApiRejected,
        }
    }

    /// Whether repeating the same call later could plausibly succeed.
    ///
    /// The SDK never retries on its own; this is a hint for callers with a retry policy.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::Transport | ErrorKind::ExchangeUnavailable
        )
    }
}

pub type Result<T> = std::result::Result<T, CcexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let err = CcexError::MissingCredentials {
            call: "getbalances".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(!err.is_retryable());

        let err = CcexError::ApiRejected {
            message: "bad nonce".to_string(),
            body: serde_json::json!({"success": false, "message": "bad nonce"}),
        };
        assert_eq!(err.kind(), ErrorKind::ApiRejected);
        assert_eq!(err.to_string(), "C-CEX API returned an error: bad nonce");

        let err = CcexError::transport("https://c-cex.com/t/prices.json", "connection reset");
        assert_eq!(err.kind(), ErrorKind::Transport);
        assert!(err.is_retryable());
    }

    #[test]
    fn test_malformed_keeps_raw_response() {
        let source = serde_json::from_str::<Value>("not valid json").unwrap_err();
        let err = CcexError::MalformedResponse {
            source,
            response: Box::new(RawResponse::new(
                reqwest::StatusCode::OK,
                "not valid json",
            )),
        };
        assert_eq!(err.kind(), ErrorKind::MalformedResponse);
        match err {
            CcexError::MalformedResponse { response, .. } => {
                assert_eq!(response.body, "not valid json")
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
