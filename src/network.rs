//! Network constants for the proxy6 API.

/// Default API host. Requests go to `{DEFAULT_API_URL}/api/{api_key}/{method}`.
pub const DEFAULT_API_URL: &str = "https://proxy6.net";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
