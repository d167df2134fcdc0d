//! Wire types for proxy responses.
//!
//! The vendor's `list` field changes shape between methods:
//! - `getproxy` / `buy` with `nokey`: an array of full proxy records
//!   (without `nokey`: an object keyed by id, values are full records)
//! - `buy`: records lack `country` and `descr`; both sit at the top level
//! - `prolong`: an object keyed by id whose values hold only `id` and `date_end`

use crate::domain::catalog::wire::PriceResponse;
use crate::domain::proxy::{ProxyType, ProxyVersion};
use crate::error::DecodeError;
use crate::shared::{ProxyId, Record};
use chrono::NaiveDateTime;
use serde_json::{Map, Value};
use std::net::IpAddr;

// ─── ProxyRecord ─────────────────────────────────────────────────────────────

/// One full proxy record. Vendor names: `pass`, `date`, `date_end`, `descr`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyRecord {
    pub id: ProxyId,
    pub ip: IpAddr,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub version: ProxyVersion,
    pub proxy_type: ProxyType,
    pub country: String,
    pub date: NaiveDateTime,
    pub date_end: NaiveDateTime,
    pub descr: String,
    pub active: bool,
}

impl TryFrom<Record<'_>> for ProxyRecord {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        Ok(ProxyRecord {
            id: record.required("id")?,
            ip: record.required("ip")?,
            host: record.required("host")?,
            port: record.required("port")?,
            user: record.required("user")?,
            pass: record.required("pass")?,
            version: record.required("version")?,
            proxy_type: record.required("type")?,
            country: record.required("country")?,
            date: record.required("date")?,
            date_end: record.required("date_end")?,
            descr: record.optional("descr")?.unwrap_or_default(),
            active: record.required("active")?,
        })
    }
}

/// Entries of a `list` field, in response order.
///
/// Arrays are taken as-is. Objects keyed by id are ordered by numeric key,
/// so the result does not depend on JSON map ordering.
fn list_entries<'a>(list: &'a Value) -> Result<Vec<(Option<&'a str>, &'a Value)>, DecodeError> {
    match list {
        Value::Array(items) => Ok(items.iter().map(|v| (None, v)).collect()),
        Value::Object(map) => {
            let mut entries = map
                .iter()
                .map(|(k, v)| -> Result<_, DecodeError> {
                    let id = k
                        .parse::<ProxyId>()
                        .map_err(|e| DecodeError::malformed("list", &Value::String(k.clone()), e))?;
                    Ok((id, k.as_str(), v))
                })
                .collect::<Result<Vec<_>, _>>()?;
            entries.sort_by_key(|(id, _, _)| *id);
            Ok(entries.into_iter().map(|(_, k, v)| (Some(k), v)).collect())
        }
        other => Err(DecodeError::malformed("list", other, "expected an array or object")),
    }
}

/// `list` may be omitted when there is nothing to list.
fn optional_list<'a>(record: &Record<'a>) -> Result<Vec<(Option<&'a str>, &'a Value)>, DecodeError> {
    match record.get("list") {
        Some(list) => list_entries(list),
        None => Ok(Vec::new()),
    }
}

fn decode_records<'a, I>(entries: I) -> Result<Vec<ProxyRecord>, DecodeError>
where
    I: IntoIterator<Item = &'a Value>,
{
    entries
        .into_iter()
        .map(|entry| ProxyRecord::try_from(Record::new("list entry", entry)?))
        .collect()
}

// ─── getproxy ────────────────────────────────────────────────────────────────

/// `getproxy`: `list_count` plus the records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyListResponse {
    pub list_count: usize,
    pub list: Vec<ProxyRecord>,
}

impl TryFrom<Record<'_>> for ProxyListResponse {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        let list_count: u64 = record.required("list_count")?;
        let entries = optional_list(&record)?;
        Ok(ProxyListResponse {
            list_count: list_count as usize,
            list: decode_records(entries.into_iter().map(|(_, v)| v))?,
        })
    }
}

// ─── buy ─────────────────────────────────────────────────────────────────────

/// `buy`: price block, top-level `country`/`descr`, and the new records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseResponse {
    pub price: PriceResponse,
    pub country: String,
    pub descr: String,
    pub list: Vec<ProxyRecord>,
}

/// Copy the purchase-level `country` and `descr` into a record that lacks them.
fn inject_purchase_fields(entry: &Value, country: &str, descr: &str) -> Result<Value, DecodeError> {
    let mut map: Map<String, Value> = entry
        .as_object()
        .cloned()
        .ok_or_else(|| DecodeError::NotAnObject("list entry".to_string()))?;
    for (field, value) in [("country", country), ("descr", descr)] {
        match map.get(field) {
            Some(existing) if !existing.is_null() => {}
            _ => {
                map.insert(field.to_string(), Value::String(value.to_string()));
            }
        }
    }
    Ok(Value::Object(map))
}

impl TryFrom<Record<'_>> for PurchaseResponse {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        let price = PriceResponse::try_from(record)?;
        let country: String = record.required("country")?;
        let descr: String = record.optional("descr")?.unwrap_or_default();

        let completed = optional_list(&record)?
            .into_iter()
            .map(|(_, entry)| inject_purchase_fields(entry, &country, &descr))
            .collect::<Result<Vec<_>, _>>()?;
        let list = decode_records(completed.iter())?;

        Ok(PurchaseResponse {
            price,
            country,
            descr,
            list,
        })
    }
}

// ─── prolong ─────────────────────────────────────────────────────────────────

/// One entry of a `prolong` response: a delta, not a proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProlongedEntry {
    /// The map key, or the embedded id for array-shaped lists.
    pub key: ProxyId,
    /// The raw key text, kept for error reporting.
    pub key_text: String,
    /// Embedded `id`, when the vendor sends one.
    pub id: Option<ProxyId>,
    pub date_end: NaiveDateTime,
}

/// `prolong`: price block plus one delta per extended proxy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProlongResponse {
    pub price: PriceResponse,
    pub list: Vec<ProlongedEntry>,
}

impl TryFrom<Record<'_>> for ProlongResponse {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        let price = PriceResponse::try_from(record)?;

        let list = optional_list(&record)?
            .into_iter()
            .map(|(key, entry)| -> Result<ProlongedEntry, DecodeError> {
                let entry = Record::new("list entry", entry)?;
                let id: Option<ProxyId> = entry.optional("id")?;
                let (key, key_text) = match (key, id) {
                    (Some(text), _) => (
                        text.parse::<ProxyId>()
                            .map_err(|e| DecodeError::malformed("list", &Value::from(text), e))?,
                        text.to_string(),
                    ),
                    (None, Some(id)) => (id, id.to_string()),
                    (None, None) => return Err(DecodeError::MissingField("id".to_string())),
                };
                Ok(ProlongedEntry {
                    key,
                    key_text,
                    id,
                    date_end: entry.required("date_end")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ProlongResponse { price, list })
    }
}

// ─── check ───────────────────────────────────────────────────────────────────

/// `check`: the echoed id and its validity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckResponse {
    pub proxy_id: ProxyId,
    pub proxy_status: bool,
}

impl TryFrom<Record<'_>> for CheckResponse {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        Ok(CheckResponse {
            proxy_id: record.required("proxy_id")?,
            proxy_status: record.required("proxy_status")?,
        })
    }
}

