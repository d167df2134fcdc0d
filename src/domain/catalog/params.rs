//! Request parameters for catalog queries.

use crate::domain::proxy::ProxyVersion;
use crate::shared::QueryParams;

/// Parameters for `getcountry`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountriesParams {
    pub version: Option<ProxyVersion>,
}

impl CountriesParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: ProxyVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert_enum_opt("version", self.version);
        q
    }
}

/// Parameters for `getcount`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountParams {
    pub country: String,
    pub version: Option<ProxyVersion>,
}

impl CountParams {
    pub fn new(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            version: None,
        }
    }

    pub fn with_version(mut self, version: ProxyVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("country", &self.country)
            .insert_enum_opt("version", self.version);
        q
    }
}

/// Parameters for `getprice`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceParams {
    pub count: u32,
    /// Days.
    pub period: u32,
    pub version: Option<ProxyVersion>,
}

impl PriceParams {
    pub fn new(count: u32, period: u32) -> Self {
        Self {
            count,
            period,
            version: None,
        }
    }

    pub fn with_version(mut self, version: ProxyVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("count", self.count)
            .insert("period", self.period)
            .insert_enum_opt("version", self.version);
        q
    }
}
