//! Wire types for catalog responses.
//!
//! Each type names exactly the fields its vendor method must return; the
//! account fields every response carries are handled by the envelope.

use crate::error::DecodeError;
use crate::shared::{FieldDecode, Record};
use rust_decimal::Decimal;

/// `getcountry`: `list` is a plain array of ISO2 codes.
#[derive(Debug, Clone, PartialEq)]
pub struct CountriesResponse {
    pub list: Vec<String>,
}

impl TryFrom<Record<'_>> for CountriesResponse {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        let raw = record
            .get("list")
            .ok_or_else(|| DecodeError::MissingField("list".to_string()))?;
        let items = raw
            .as_array()
            .ok_or_else(|| DecodeError::malformed("list", raw, "expected an array"))?;
        let list = items
            .iter()
            .map(|item| String::decode("list", item))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { list })
    }
}

/// `getcount`, `setdescr`, `delete`: a bare `count`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountResponse {
    pub count: u32,
}

impl TryFrom<Record<'_>> for CountResponse {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            count: record.required("count")?,
        })
    }
}

/// Price block shared by `getprice`, `buy` and `prolong`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceResponse {
    pub price: Decimal,
    pub price_single: Decimal,
    pub period: u32,
    pub count: u32,
}

impl TryFrom<Record<'_>> for PriceResponse {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        Ok(Self {
            price: record.required("price")?,
            price_single: record.required("price_single")?,
            period: record.required("period")?,
            count: record.required("count")?,
        })
    }
}
