//! Main CcexClient facade for the SDK.
//!
//! Owns the configuration, the optional credentials and the transport, and hands out
//! the three endpoint groups.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use secrecy::{ExposeSecret, Secret};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{CcexError, Result};
use crate::private::Private;
use crate::public::Public;
use crate::request::{self, CallDescriptor};
use crate::response::normalize;
use crate::tickers::Tickers;
use crate::transport::{HttpTransport, Transport, DEFAULT_USER_AGENT};

/// Production API root.
pub const DEFAULT_BASE_URL: &str = "https://c-cex.com/t";

/// API key and secret for private calls.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    api_secret: Secret<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: Secret::new(api_secret.into()),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn api_secret(&self) -> &Secret<String> {
        &self.api_secret
    }

    /// Both halves are non-empty.
    pub fn is_usable(&self) -> bool {
        !self.api_key.is_empty() && !self.api_secret.expose_secret().is_empty()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// Configuration for the C-CEX client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API root, e.g. "https://c-cex.com/t"
    pub base_url: String,
    pub credentials: Option<Credentials>,
    pub user_agent: String,
    /// Per-request timeout. `None` leaves reqwest's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            credentials: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Build a configuration from the environment.
    ///
    /// Reads `CCEX_API_URL`, `CCEX_API_KEY`, `CCEX_API_SECRET` and `CCEX_TIMEOUT_SECS`,
    /// each optional. Credentials are set only when both key and secret are present.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(base_url) = std::env::var("CCEX_API_URL") {
            config.base_url = base_url;
        }

        if let (Ok(key), Ok(secret)) = (
            std::env::var("CCEX_API_KEY"),
            std::env::var("CCEX_API_SECRET"),
        ) {
            config.credentials = Some(Credentials::new(key, secret));
        }

        if let Ok(secs) = std::env::var("CCEX_TIMEOUT_SECS") {
            let secs: u64 = secs.parse().map_err(|e| {
                CcexError::Config(format!("Invalid CCEX_TIMEOUT_SECS '{}': {}", secs, e))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Point the client at another API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the API key and secret used for private calls.
    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        self.credentials = Some(Credentials::new(api_key, api_secret));
        self
    }

    /// Set a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// The main C-CEX SDK client.
///
/// ```rust,no_run
/// # async fn run() -> ccex_api_sdk::Result<()> {
/// use ccex_api_sdk::{CcexClient, ClientConfig};
///
/// let client = CcexClient::new(ClientConfig::default())?;
/// let summaries = client.public().get_market_summaries().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct CcexClient {
    base_url: Url,
    credentials: Option<Credentials>,
    transport: Arc<dyn Transport>,
}

impl CcexClient {
    /// Create a client talking HTTP through its own reqwest connection pool.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config.user_agent, config.timeout)?;
        Self::with_transport(config, Arc::new(transport))
    }

    /// Create a client with a caller-supplied transport.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            CcexError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        let credentials = config.credentials.filter(Credentials::is_usable);

        info!(
            base_url = %base_url,
            authenticated = credentials.is_some(),
            "CcexClient initialized"
        );

        Ok(Self {
            base_url,
            credentials,
            transport,
        })
    }

    /// API root every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Whether private calls are available.
    pub fn has_credentials(&self) -> bool {
        self.credentials.is_some()
    }

    // =========================================================================
    // Endpoint groups
    // =========================================================================

    /// Static ticker resources.
    pub fn tickers(&self) -> Tickers<'_> {
        Tickers::new(self)
    }

    /// Unauthenticated market data.
    pub fn public(&self) -> Public<'_> {
        Public::new(self)
    }

    /// Account and trading calls.
    ///
    /// Fails with [`CcexError::MissingCredentials`] when the client was built without an
    /// API key and secret.
    pub fn private(&self) -> Result<Private<'_>> {
        match &self.credentials {
            Some(credentials) => Ok(Private::new(self, credentials)),
            None => Err(CcexError::MissingCredentials {
                call: "private".to_string(),
            }),
        }
    }

    // =========================================================================
    // Request pipeline
    // =========================================================================

    /// Build, send and normalize one call.
    pub(crate) async fn execute(&self, descriptor: CallDescriptor) -> Result<Value> {
        self.execute_with(descriptor, self.credentials.as_ref()).await
    }

    pub(crate) async fn execute_with(
        &self,
        descriptor: CallDescriptor,
        credentials: Option<&Credentials>,
    ) -> Result<Value> {
        let request = request::build(&self.base_url, &descriptor, credentials)?;
        let raw = self.transport.send(&request).await?;

        debug!(
            operation = descriptor.operation,
            status = %raw.status,
            "Normalizing C-CEX response"
        );

        normalize(raw, request.style)
    }
}

impl fmt::Debug for CcexClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CcexClient")
            .field("base_url", &self.base_url.as_str())
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://c-cex.com/t");
        assert_eq!(config.user_agent, "CCEX_API_WRAPPER");
        assert!(config.credentials.is_none());
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_credentials_debug_is_redacted() {
        let credentials = Credentials::new("my-key", "super-secret");
        let rendered = format!("{:?}", credentials);
        assert!(rendered.contains("my-key"));
        assert!(!rendered.contains("super-secret"));
    }

    #[test]
    fn test_credentials_usable() {
        assert!(Credentials::new("k", "s").is_usable());
        assert!(!Credentials::new("", "s").is_usable());
        assert!(!Credentials::new("k", "").is_usable());
    }

    #[test]
    fn test_private_requires_credentials() {
        let client = CcexClient::new(ClientConfig::default()).unwrap();
        assert!(!client.has_credentials());
        let err = client.private().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);

        let client =
            CcexClient::new(ClientConfig::default().with_credentials("key", "secret")).unwrap();
        assert!(client.has_credentials());
        assert!(client.private().is_ok());
    }

    #[test]
    fn test_empty_credentials_count_as_absent() {
        let client = CcexClient::new(ClientConfig::default().with_credentials("key", "")).unwrap();
        assert!(!client.has_credentials());
        assert!(client.private().is_err());
    }

    // Single test so the env vars are never touched concurrently.
    #[test]
    fn test_config_from_env() {
        const VARS: [&str; 4] = [
            "CCEX_API_URL",
            "CCEX_API_KEY",
            "CCEX_API_SECRET",
            "CCEX_TIMEOUT_SECS",
        ];
        for var in VARS {
            std::env::remove_var(var);
        }

        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.credentials.is_none());
        assert!(config.timeout.is_none());

        std::env::set_var("CCEX_API_KEY", "env-key");
        let config = ClientConfig::from_env().unwrap();
        assert!(config.credentials.is_none());

        std::env::set_var("CCEX_API_SECRET", "env-secret");
        std::env::set_var("CCEX_API_URL", "http://localhost:8080/t");
        std::env::set_var("CCEX_TIMEOUT_SECS", "15");
        let config = ClientConfig::from_env().unwrap();
        assert_eq!(config.base_url, "http://localhost:8080/t");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
        let credentials = config.credentials.unwrap();
        assert_eq!(credentials.api_key(), "env-key");
        assert_eq!(credentials.api_secret().expose_secret(), "env-secret");

        std::env::set_var("CCEX_TIMEOUT_SECS", "abc");
        let err = ClientConfig::from_env().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Configuration);
        assert!(err.to_string().contains("CCEX_TIMEOUT_SECS"));

        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    fn test_invalid_base_url() {
        let err = CcexClient::new(ClientConfig::default().with_base_url("not a url")).unwrap_err();
        assert!(matches!(err, CcexError::Config(_)));
    }
}
