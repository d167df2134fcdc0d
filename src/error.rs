//! Unified SDK error types.
//!
//! Failures fall into five disjoint kinds, each with its own enum:
//! transport ([`HttpError`]), vendor business errors ([`VendorError`]),
//! protocol integrity violations ([`IntegrityError`]), decoding failures
//! ([`DecodeError`]) and client-side validation ([`ValidationError`]).

use crate::shared::ProxyId;
use lazy_static::lazy_static;
use std::collections::HashMap;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Vendor error: {0}")]
    Vendor(#[from] VendorError),

    #[error("Protocol integrity error: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("Decoding error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// Result alias used throughout the SDK.
pub type SdkResult<T> = Result<T, SdkError>;

// ─── Transport ───────────────────────────────────────────────────────────────

/// HTTP-layer errors. Propagated unchanged from the transport.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Response body is not valid JSON: {0}")]
    InvalidBody(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

// ─── Vendor business errors ──────────────────────────────────────────────────

/// A `status: "no"` response, classified by `error_id`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VendorError {
    /// Wrong proxy quantity, wrong amount or no quantity given.
    #[error("wrong proxy count (code 200): {message}")]
    Count { message: String },

    /// Zero or insufficient balance on the account.
    #[error("insufficient balance (code 400): {message}")]
    NoMoney { message: String },

    /// Any code without a dedicated variant.
    #[error("{message} (code {code})")]
    Unknown { code: u32, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnownError {
    Count,
    NoMoney,
}

struct RegistryEntry {
    kind: KnownError,
    message: &'static str,
}

lazy_static! {
    static ref REGISTRY: HashMap<u32, RegistryEntry> = {
        let mut m = HashMap::new();
        m.insert(
            200,
            RegistryEntry {
                kind: KnownError::Count,
                message: "Error count",
            },
        );
        m.insert(
            400,
            RegistryEntry {
                kind: KnownError::NoMoney,
                message: "Error no money",
            },
        );
        m
    };
}

impl VendorError {
    /// Map an `(error_id, error)` pair onto a variant.
    ///
    /// A registered code whose message differs from the registered text means
    /// the vendor changed what the code stands for, so it is reported as an
    /// [`IntegrityError::ErrorMessageMismatch`] instead of a business error.
    pub fn classify(code: u32, message: &str) -> Result<VendorError, IntegrityError> {
        let Some(entry) = REGISTRY.get(&code) else {
            tracing::warn!(code, vendor_message = message, "Unregistered vendor error code");
            return Ok(VendorError::Unknown {
                code,
                message: message.to_string(),
            });
        };

        if entry.message != message {
            return Err(IntegrityError::ErrorMessageMismatch {
                code,
                expected: entry.message,
                actual: message.to_string(),
            });
        }

        let message = message.to_string();
        Ok(match entry.kind {
            KnownError::Count => VendorError::Count { message },
            KnownError::NoMoney => VendorError::NoMoney { message },
        })
    }

    /// The vendor's numeric error code.
    pub fn code(&self) -> u32 {
        match self {
            VendorError::Count { .. } => 200,
            VendorError::NoMoney { .. } => 400,
            VendorError::Unknown { code, .. } => *code,
        }
    }

    /// The vendor's message, unmodified.
    pub fn message(&self) -> &str {
        match self {
            VendorError::Count { message }
            | VendorError::NoMoney { message }
            | VendorError::Unknown { message, .. } => message,
        }
    }
}

// ─── Protocol integrity ──────────────────────────────────────────────────────

/// The vendor response breaks an invariant the client relies on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("list_count is {expected} but list holds {actual} entries")]
    ListCountMismatch { expected: usize, actual: usize },

    #[error("purchase reports count {expected} but lists {actual} proxies")]
    PurchaseCountMismatch { expected: usize, actual: usize },

    #[error("requested proxy {requested} but response echoes {echoed}")]
    ProxyIdMismatch { requested: ProxyId, echoed: ProxyId },

    #[error("prolongation references proxy {0} which was not submitted")]
    UnknownProlongedProxy(ProxyId),

    #[error("prolongation entry keyed {key} carries id {id}")]
    ProlongKeyMismatch { key: String, id: ProxyId },

    #[error("error code {code} expected message {expected:?}, got {actual:?}")]
    ErrorMessageMismatch {
        code: u32,
        expected: &'static str,
        actual: String,
    },

    #[error("unexpected envelope status {0:?}")]
    UnexpectedStatus(String),
}

// ─── Decoding ────────────────────────────────────────────────────────────────

/// A required field is missing or carries a value the codec rejects.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("missing field `{0}`")]
    MissingField(String),

    #[error("malformed field `{field}` ({value}): {reason}")]
    MalformedField {
        field: String,
        value: String,
        reason: String,
    },

    #[error("unknown {kind} value {value} in field `{field}`")]
    UnknownEnumValue {
        field: String,
        kind: &'static str,
        value: String,
    },

    #[error("expected a JSON object for `{0}`")]
    NotAnObject(String),
}

impl DecodeError {
    pub(crate) fn malformed(
        field: &str,
        value: &serde_json::Value,
        reason: impl ToString,
    ) -> Self {
        DecodeError::MalformedField {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

// ─── Client-side validation ──────────────────────────────────────────────────

/// An input constraint violated before any request is sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("`{field}` must be at most {max} characters, got {len}")]
    DescriptionTooLong {
        field: &'static str,
        max: usize,
        len: usize,
    },

    #[error("at least one proxy is required")]
    EmptyProxySet,

    #[error("setting a description requires proxy ids or the old description")]
    MissingDescriptionTarget,

    #[error("API key cannot be empty")]
    EmptyApiKey,

    #[error("invalid header {name:?}: {reason}")]
    InvalidHeader { name: String, reason: String },
}
