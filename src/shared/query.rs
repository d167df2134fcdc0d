//! Outgoing query parameters.
//!
//! The vendor takes every argument as a flat `name=value` pair: enums as
//! their vendor scalar, id sets comma-joined, flags by presence. Absent
//! optional arguments are left out of the map entirely.

use crate::shared::{join_ids, ProxyId, VendorEnum};
use serde::Serialize;

/// Ordered `name → value` mapping sent with a vendor call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name`, replacing any earlier value.
    pub fn insert(&mut self, name: &'static str, value: impl ToString) -> &mut Self {
        let value = value.to_string();
        match self.0.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
        self
    }

    /// Set `name` only when `value` is present.
    pub fn insert_opt<V: ToString>(&mut self, name: &'static str, value: Option<V>) -> &mut Self {
        if let Some(v) = value {
            self.insert(name, v);
        }
        self
    }

    pub fn insert_enum<E: VendorEnum>(&mut self, name: &'static str, value: E) -> &mut Self {
        self.insert(name, value.vendor_value())
    }

    pub fn insert_enum_opt<E: VendorEnum>(
        &mut self,
        name: &'static str,
        value: Option<E>,
    ) -> &mut Self {
        self.insert_opt(name, value.map(|v| v.vendor_value()))
    }

    pub fn insert_ids<I>(&mut self, name: &'static str, ids: I) -> &mut Self
    where
        I: IntoIterator<Item = ProxyId>,
    {
        self.insert(name, join_ids(ids))
    }

    /// Presence flag: sent as `1` when set, omitted otherwise.
    pub fn insert_flag(&mut self, name: &'static str, set: bool) -> &mut Self {
        if set {
            self.insert(name, "1");
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// `application/x-www-form-urlencoded` rendering, as sent on the wire.
    pub fn to_query_string(&self) -> String {
        serde_urlencoded::to_string(&self.0).unwrap_or_default()
    }
}
