//! Low-level vendor caller — `Proxy6Http`.
//!
//! Turns a [`Method`] plus [`QueryParams`] into a transport request against
//! `{base_url}/api/{api_key}/{method}` and opens the response envelope.
//! Decoding the method-specific payload happens in the domain sub-clients.

use crate::error::SdkError;
use crate::http::envelope::Envelope;
use crate::http::transport::{Request, Transport};
use crate::shared::QueryParams;

/// Vendor API methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Bare API root; returns only the account fields.
    Account,
    GetCountry,
    GetCount,
    GetPrice,
    GetProxy,
    Buy,
    Prolong,
    SetType,
    SetDescr,
    Delete,
    Check,
}

impl Method {
    /// Path segment after the API key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Account => "",
            Method::GetCountry => "getcountry",
            Method::GetCount => "getcount",
            Method::GetPrice => "getprice",
            Method::GetProxy => "getproxy",
            Method::Buy => "buy",
            Method::Prolong => "prolong",
            Method::SetType => "settype",
            Method::SetDescr => "setdescr",
            Method::Delete => "delete",
            Method::Check => "check",
        }
    }

    /// Whether repeating the call cannot charge, create or change anything.
    /// Transports must only retry these.
    pub fn is_read_only(&self) -> bool {
        matches!(
            self,
            Method::Account
                | Method::GetCountry
                | Method::GetCount
                | Method::GetPrice
                | Method::GetProxy
                | Method::Check
        )
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Method::Account => write!(f, "(account)"),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

/// Vendor caller bound to one API key.
#[derive(Clone)]
pub struct Proxy6Http<T> {
    base_url: String,
    api_key: String,
    transport: T,
}

impl<T: Transport> Proxy6Http<T> {
    pub fn new(base_url: &str, api_key: &str, transport: T) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Full URL of `method`. Contains the API key; never log it.
    pub fn method_url(&self, method: Method) -> String {
        format!(
            "{}/api/{}/{}",
            self.base_url,
            urlencoding::encode(&self.api_key),
            method.as_str()
        )
    }

    /// Issue one vendor call and open its envelope.
    ///
    /// Transport failures are returned as-is; `status: "no"` responses come
    /// back classified (see [`Envelope::open`]).
    pub async fn call(&self, method: Method, params: &QueryParams) -> Result<Envelope, SdkError> {
        tracing::debug!(
            method = %method,
            query = %params.to_query_string(),
            "proxy6 request"
        );

        let url = self.method_url(method);
        let body = self
            .transport
            .get(Request {
                method,
                url: &url,
                params,
            })
            .await?;

        Envelope::open(body)
    }
}

impl<T> std::fmt::Debug for Proxy6Http<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Proxy6Http")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HttpError;
    use serde_json::Value;

    struct Unreachable;

    impl Transport for Unreachable {
        async fn get(&self, _request: Request<'_>) -> Result<Value, HttpError> {
            Err(HttpError::Unauthorized)
        }
    }

    #[test]
    fn test_method_url_layout() {
        let http = Proxy6Http::new("https://proxy6.net/", "1e339044", Unreachable);
        assert_eq!(
            http.method_url(Method::GetPrice),
            "https://proxy6.net/api/1e339044/getprice"
        );
        assert_eq!(http.method_url(Method::Account), "https://proxy6.net/api/1e339044/");
    }

    #[test]
    fn test_api_key_is_path_encoded_and_redacted() {
        let http = Proxy6Http::new("https://proxy6.net", "a/b c", Unreachable);
        assert_eq!(http.method_url(Method::Check), "https://proxy6.net/api/a%2Fb%20c/check");
        assert!(!format!("{:?}", http).contains("a/b c"));
    }

    #[test]
    fn test_read_only_methods() {
        assert!(Method::GetProxy.is_read_only());
        assert!(Method::Check.is_read_only());
        assert!(!Method::Buy.is_read_only());
        assert!(!Method::Prolong.is_read_only());
        assert!(!Method::Delete.is_read_only());
    }
}
