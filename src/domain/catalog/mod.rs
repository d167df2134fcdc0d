//! Catalog domain — countries on offer, availability and price quotes.

pub mod client;
mod convert;
pub mod params;
pub mod wire;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use params::{CountParams, CountriesParams, PriceParams};

/// A price quote, or the amount actually charged for a purchase/prolongation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceInformation {
    /// Total for `count` proxies over `period` days.
    pub price: Decimal,
    /// Price of one proxy over `period` days.
    pub price_single: Decimal,
    /// Days.
    pub period: u32,
    pub count: u32,
    pub currency: String,
}
