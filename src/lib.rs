//! # proxy6 SDK
//!
//! Typed Rust client for the proxy6.net reseller API.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, field codecs, domain models and per-method
//!    response decoding (no I/O)
//! 2. **HTTP** — `Proxy6Http`: method URLs, envelope unwrapping, error
//!    classification, and the `Transport` seam (reqwest by default)
//! 3. **High-Level Client** — `Proxy6Client` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use proxy6::prelude::*;
//!
//! let client = Proxy6Client::new("your-api-key")?;
//!
//! let account = client.account().get().await?;
//! let quote = client.catalog().price(&PriceParams::new(10, 30)).await?;
//! let proxies = client
//!     .proxies()
//!     .list(&ProxyListParams::new().with_state(ProxyState::Active))
//!     .await?;
//! let extended = client
//!     .proxies()
//!     .prolong(&ProlongParams::new(proxies, 7))
//!     .await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes, field codecs and query encoding.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, conversions, params.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// Vendor method dispatch, envelope handling and transports.
pub mod http;

// ── Layer 3: High-Level Client ───────────────────────────────────────────────

/// `Proxy6Client` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::ProxyId;

    // Domain types
    pub use crate::domain::account::Account;
    pub use crate::domain::catalog::{CountParams, CountriesParams, PriceInformation, PriceParams};
    pub use crate::domain::proxy::{
        BuyParams, ProlongParams, Prolongation, Proxy, ProxyListParams, ProxyState, ProxyType,
        ProxyVersion, Purchase, SetDescriptionParams, SetTypeParams,
    };

    // Errors
    pub use crate::error::{
        DecodeError, HttpError, IntegrityError, SdkError, SdkResult, ValidationError, VendorError,
    };

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP
    pub use crate::http::{Method, Request, Transport};
    #[cfg(feature = "http")]
    pub use crate::http::{ReqwestTransport, RetryConfig, RetryPolicy};

    // Client + sub-clients
    pub use crate::client::{Proxy6Client, Proxy6ClientBuilder};
    pub use crate::domain::account::client::AccountClient;
    pub use crate::domain::catalog::client::CatalogClient;
    pub use crate::domain::proxy::client::ProxyClient;
}
