//! Transport seam.
//!
//! A [`Transport`] performs one HTTP GET and hands back the JSON body. It
//! knows nothing about the vendor envelope: non-2xx statuses, network
//! failures and unparseable bodies are all [`HttpError`]s, which the client
//! surfaces unchanged.

use crate::error::HttpError;
use crate::http::client::Method;
use crate::shared::QueryParams;
use serde_json::Value;
use std::future::Future;

/// One outgoing vendor call.
#[derive(Clone, Copy)]
pub struct Request<'a> {
    pub method: Method,
    /// Full method URL, API key included.
    pub url: &'a str,
    pub params: &'a QueryParams,
}

/// Performs HTTP GETs for the client.
///
/// Implementations must be safe to share if the client is shared across
/// tasks; the client itself holds no per-call state.
pub trait Transport: Send + Sync {
    fn get(&self, request: Request<'_>) -> impl Future<Output = Result<Value, HttpError>> + Send;
}

#[cfg(feature = "http")]
pub use self::reqwest_impl::ReqwestTransport;

#[cfg(feature = "http")]
mod reqwest_impl {
    use super::*;
    use crate::http::retry::{RetryConfig, RetryPolicy};
    use reqwest::Client;
    use std::time::Duration;

    /// [`Transport`] backed by a pooled `reqwest::Client`.
    ///
    /// Retries follow the configured [`RetryPolicy`], and only ever apply to
    /// read-only methods: a repeated `buy` or `prolong` would be charged twice.
    #[derive(Debug, Clone)]
    pub struct ReqwestTransport {
        client: Client,
        retry: RetryPolicy,
    }

    impl ReqwestTransport {
        pub fn new(client: Client, retry: RetryPolicy) -> Self {
            Self { client, retry }
        }

        pub fn retry_policy(&self) -> &RetryPolicy {
            &self.retry
        }

        async fn request_with_retry(&self, request: Request<'_>) -> Result<Value, HttpError> {
            let config = match (&self.retry, request.method.is_read_only()) {
                (RetryPolicy::None, _) | (_, false) => {
                    return self.do_request(&request).await;
                }
                (RetryPolicy::Idempotent, true) => RetryConfig::idempotent(),
                (RetryPolicy::Custom(c), true) => c.clone(),
            };

            let mut last_error = None;

            for attempt in 0..=config.max_retries {
                match self.do_request(&request).await {
                    Ok(body) => return Ok(body),
                    Err(e) => {
                        let should_retry = match &e {
                            HttpError::ServerError { status, .. } => {
                                config.retryable_statuses.contains(status)
                            }
                            HttpError::RateLimited => config.retryable_statuses.contains(&429),
                            HttpError::Reqwest(re) => {
                                re.is_connect() || re.is_timeout() || re.is_request()
                            }
                            _ => false,
                        };

                        if should_retry && attempt < config.max_retries {
                            let delay = config.delay_for_attempt(attempt);
                            tracing::debug!(
                                method = %request.method,
                                attempt = attempt + 1,
                                max = config.max_retries,
                                delay_ms = delay.as_millis() as u64,
                                error = %e,
                                "Retrying proxy6 request"
                            );
                            futures_timer::Delay::new(delay).await;
                            last_error = Some(e);
                        } else {
                            return Err(e);
                        }
                    }
                }
            }

            Err(HttpError::MaxRetriesExceeded {
                attempts: config.max_retries + 1,
                last_error: last_error
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| "unknown".to_string()),
            })
        }

        async fn do_request(&self, request: &Request<'_>) -> Result<Value, HttpError> {
            let resp = self
                .client
                .get(request.url)
                .query(request.params)
                .send()
                .await
                .map_err(|e| HttpError::Reqwest(e.without_url()))?;
            let status = resp.status();
            let body_text = resp
                .text()
                .await
                .map_err(|e| HttpError::Reqwest(e.without_url()))?;

            if status.is_success() {
                return serde_json::from_str(&body_text)
                    .map_err(|e| HttpError::InvalidBody(e.to_string()));
            }

            let status_code = status.as_u16();
            match status_code {
                401 | 403 => Err(HttpError::Unauthorized),
                404 => Err(HttpError::NotFound(body_text)),
                429 => Err(HttpError::RateLimited),
                400..=499 => Err(HttpError::BadRequest(body_text)),
                _ => Err(HttpError::ServerError {
                    status: status_code,
                    body: body_text,
                }),
            }
        }
    }

    impl Default for ReqwestTransport {
        fn default() -> Self {
            let client = Client::builder()
                .timeout(Duration::from_secs(crate::network::DEFAULT_TIMEOUT_SECS))
                .pool_max_idle_per_host(10)
                .build()
                .unwrap_or_default();
            Self::new(client, RetryPolicy::None)
        }
    }

    impl Transport for ReqwestTransport {
        async fn get(&self, request: Request<'_>) -> Result<Value, HttpError> {
            self.request_with_retry(request).await
        }
    }
}
