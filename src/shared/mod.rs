//! Shared newtypes and the field codec used across all domain modules.
//!
//! The vendor encodes almost every scalar as a string (`"15"`, `"48.80"`,
//! `"1"`), but not consistently, so decoding goes through [`codec`] rather
//! than derived `Deserialize` impls.

pub mod codec;
pub mod query;

pub use codec::{FieldDecode, Record, VendorEnum};
pub use query::QueryParams;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ─── ProxyId ─────────────────────────────────────────────────────────────────

/// Vendor-assigned proxy identifier, unique within an account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProxyId(u64);

impl ProxyId {
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ProxyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProxyId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl FromStr for ProxyId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProxyId)
    }
}

/// Encode a set of ids the way the vendor expects list parameters:
/// comma-joined decimals, no brackets, no repeated keys.
pub fn join_ids<I>(ids: I) -> String
where
    I: IntoIterator<Item = ProxyId>,
{
    ids.into_iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
