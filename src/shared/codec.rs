//! Field codec: vendor scalars ⇄ typed values.
//!
//! Vendor payloads mix JSON types freely: ids arrive as `"15"` or `15`,
//! flags as `"1"` or `true`, prices as `"48.80"` or `6.3`. Every decoder
//! here accepts each representation the vendor is known to send and
//! rejects everything else with a [`DecodeError`]. Nothing defaults.

use crate::error::DecodeError;
use crate::shared::ProxyId;
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde_json::{Map, Value};
use std::net::IpAddr;
use std::str::FromStr;

/// Vendor timestamp layout. Local time, no zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// ─── FieldDecode ─────────────────────────────────────────────────────────────

/// Decode one vendor field value.
pub trait FieldDecode: Sized {
    fn decode(field: &str, value: &Value) -> Result<Self, DecodeError>;
}

impl FieldDecode for String {
    fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => Ok(s.clone()),
            Value::Number(n) => Ok(n.to_string()),
            other => Err(DecodeError::malformed(field, other, "expected a string")),
        }
    }
}

fn decode_unsigned(field: &str, value: &Value) -> Result<u64, DecodeError> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .ok_or_else(|| DecodeError::malformed(field, value, "expected a non-negative integer")),
        Value::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| DecodeError::malformed(field, value, e)),
        other => Err(DecodeError::malformed(field, other, "expected an integer")),
    }
}

macro_rules! impl_unsigned_decode {
    ($($ty:ty),*) => {
        $(
            impl FieldDecode for $ty {
                fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
                    let n = decode_unsigned(field, value)?;
                    <$ty>::try_from(n).map_err(|e| DecodeError::malformed(field, value, e))
                }
            }
        )*
    };
}

impl_unsigned_decode!(u16, u32, u64);

impl FieldDecode for ProxyId {
    fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        decode_unsigned(field, value).map(ProxyId::new)
    }
}

impl FieldDecode for bool {
    fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::Bool(b) => Ok(*b),
            Value::String(s) => match s.as_str() {
                "1" => Ok(true),
                "0" => Ok(false),
                _ => Err(DecodeError::malformed(field, value, "expected \"1\" or \"0\"")),
            },
            Value::Number(n) => match n.as_u64() {
                Some(1) => Ok(true),
                Some(0) => Ok(false),
                _ => Err(DecodeError::malformed(field, value, "expected 1 or 0")),
            },
            other => Err(DecodeError::malformed(field, other, "expected a boolean")),
        }
    }
}

impl FieldDecode for IpAddr {
    fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => {
                IpAddr::from_str(s).map_err(|e| DecodeError::malformed(field, value, e))
            }
            other => Err(DecodeError::malformed(field, other, "expected an IP address string")),
        }
    }
}

/// Decimals are parsed from their textual form, never through `f64`.
/// JSON numbers are re-read from their literal (`6.3` stays exactly `6.3`).
impl FieldDecode for Decimal {
    fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        let text = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            other => return Err(DecodeError::malformed(field, other, "expected a decimal")),
        };
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .map_err(|e| DecodeError::malformed(field, value, e))
    }
}

impl FieldDecode for NaiveDateTime {
    fn decode(field: &str, value: &Value) -> Result<Self, DecodeError> {
        match value {
            Value::String(s) => NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
                .map_err(|e| DecodeError::malformed(field, value, e)),
            other => Err(DecodeError::malformed(field, other, "expected a timestamp string")),
        }
    }
}

// ─── VendorEnum ──────────────────────────────────────────────────────────────

/// An enum with an explicit table of vendor scalars.
///
/// `vendor_value` is the exact text sent on the wire; decoding compares the
/// textual form of the incoming scalar (string or number) against it.
pub trait VendorEnum: Sized + Copy + 'static {
    /// Name used in [`DecodeError::UnknownEnumValue`].
    const KIND: &'static str;

    /// Every variant, in declaration order.
    const VARIANTS: &'static [Self];

    fn vendor_value(&self) -> &'static str;

    fn from_vendor(value: &Value) -> Option<Self> {
        let raw = match value {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            _ => return None,
        };
        Self::VARIANTS
            .iter()
            .copied()
            .find(|v| v.vendor_value() == raw)
    }
}

/// Shared [`FieldDecode`] body for [`VendorEnum`] types.
pub fn decode_enum<T: VendorEnum>(field: &str, value: &Value) -> Result<T, DecodeError> {
    T::from_vendor(value).ok_or_else(|| DecodeError::UnknownEnumValue {
        field: field.to_string(),
        kind: T::KIND,
        value: value.to_string(),
    })
}

// ─── Record ──────────────────────────────────────────────────────────────────

/// Read-only view over one flat vendor JSON object.
///
/// Unknown keys are never inspected, so additional vendor fields pass
/// through silently.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> Record<'a> {
    /// Wrap `value`, which must be a JSON object. `what` names it in errors.
    pub fn new(what: &str, value: &'a Value) -> Result<Self, DecodeError> {
        value
            .as_object()
            .map(|map| Self { map })
            .ok_or_else(|| DecodeError::NotAnObject(what.to_string()))
    }

    pub fn from_map(map: &'a Map<String, Value>) -> Self {
        Self { map }
    }

    /// Raw access; `null` counts as absent.
    pub fn get(&self, field: &str) -> Option<&'a Value> {
        self.map.get(field).filter(|v| !v.is_null())
    }

    pub fn required<T: FieldDecode>(&self, field: &str) -> Result<T, DecodeError> {
        let value = self
            .get(field)
            .ok_or_else(|| DecodeError::MissingField(field.to_string()))?;
        T::decode(field, value)
    }

    pub fn optional<T: FieldDecode>(&self, field: &str) -> Result<Option<T>, DecodeError> {
        self.get(field).map(|v| T::decode(field, v)).transpose()
    }
}
