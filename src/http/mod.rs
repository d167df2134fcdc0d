//! HTTP layer — vendor method dispatch, envelope unwrapping, transports.

pub mod client;
pub mod envelope;
#[cfg(feature = "http")]
pub mod retry;
pub mod transport;

pub use client::{Method, Proxy6Http};
pub use envelope::Envelope;
#[cfg(feature = "http")]
pub use retry::{RetryConfig, RetryPolicy};
#[cfg(feature = "http")]
pub use transport::ReqwestTransport;
pub use transport::{Request, Transport};
