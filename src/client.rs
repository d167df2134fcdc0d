//! High-level client — `Proxy6Client` with nested sub-client accessors.
//!
//! Each domain has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder and the accessor methods.

use crate::domain::account::client::AccountClient;
use crate::domain::catalog::client::CatalogClient;
use crate::domain::proxy::client::ProxyClient;
use crate::error::{SdkError, ValidationError};
use crate::http::{Proxy6Http, Transport};

#[cfg(feature = "http")]
use crate::http::{ReqwestTransport, RetryPolicy};
#[cfg(feature = "http")]
use std::time::Duration;

/// The primary entry point for the proxy6 SDK.
///
/// Provides nested sub-client accessors for each domain:
/// `client.account()`, `client.catalog()`, `client.proxies()`.
///
/// The client holds no per-call state. Sharing it across tasks is safe
/// whenever the transport is.
#[derive(Clone)]
pub struct Proxy6Client<T> {
    pub(crate) http: Proxy6Http<T>,
}

impl<T> std::fmt::Debug for Proxy6Client<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy6Client")
            .field("http", &self.http)
            .finish()
    }
}

#[cfg(feature = "http")]
impl Proxy6Client<ReqwestTransport> {
    /// Client for the public endpoint with default settings.
    pub fn new(api_key: &str) -> Result<Self, SdkError> {
        Proxy6ClientBuilder::new(api_key).build()
    }

    pub fn builder(api_key: &str) -> Proxy6ClientBuilder {
        Proxy6ClientBuilder::new(api_key)
    }
}

impl<T: Transport> Proxy6Client<T> {
    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn account(&self) -> AccountClient<'_, T> {
        AccountClient { client: self }
    }

    pub fn catalog(&self) -> CatalogClient<'_, T> {
        CatalogClient { client: self }
    }

    pub fn proxies(&self) -> ProxyClient<'_, T> {
        ProxyClient { client: self }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    pub fn transport(&self) -> &T {
        self.http.transport()
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct Proxy6ClientBuilder {
    api_key: String,
    base_url: String,
    #[cfg(feature = "http")]
    timeout: Duration,
    #[cfg(feature = "http")]
    default_headers: Vec<(String, String)>,
    #[cfg(feature = "http")]
    retry: RetryPolicy,
}

impl Proxy6ClientBuilder {
    pub fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            #[cfg(feature = "http")]
            timeout: Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS),
            #[cfg(feature = "http")]
            default_headers: Vec::new(),
            #[cfg(feature = "http")]
            retry: RetryPolicy::None,
        }
    }

    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Request timeout for the reqwest transport.
    #[cfg(feature = "http")]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add a header sent with every request by the reqwest transport.
    #[cfg(feature = "http")]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.default_headers.push((name.into(), value.into()));
        self
    }

    /// Retry policy for read-only calls. Defaults to [`RetryPolicy::None`].
    #[cfg(feature = "http")]
    pub fn retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    fn check_api_key(&self) -> Result<(), ValidationError> {
        if self.api_key.trim().is_empty() {
            return Err(ValidationError::EmptyApiKey);
        }
        Ok(())
    }

    /// Build on a pooled `reqwest::Client`.
    #[cfg(feature = "http")]
    pub fn build(self) -> Result<Proxy6Client<ReqwestTransport>, SdkError> {
        use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

        self.check_api_key()?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        for (name, value) in &self.default_headers {
            let header_name =
                HeaderName::try_from(name.as_str()).map_err(|e| ValidationError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| ValidationError::InvalidHeader {
                    name: name.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }

        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .pool_max_idle_per_host(10)
            .default_headers(headers)
            .build()
            .map_err(crate::error::HttpError::Reqwest)?;

        let transport = ReqwestTransport::new(client, self.retry.clone());
        self.build_with(transport)
    }

    /// Build on a caller-provided transport. Timeout, headers and retry
    /// settings are the transport's own business and are not applied.
    pub fn build_with<T: Transport>(self, transport: T) -> Result<Proxy6Client<T>, SdkError> {
        self.check_api_key()?;
        Ok(Proxy6Client {
            http: Proxy6Http::new(&self.base_url, &self.api_key, transport),
        })
    }
}

impl std::fmt::Debug for Proxy6ClientBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy6ClientBuilder")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}
