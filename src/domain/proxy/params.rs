//! Request parameters for proxy operations.
//!
//! `to_query` runs every client-side check, so an invalid call fails before
//! anything reaches the transport.

use super::{Proxy, ProxyState, ProxyType, ProxyVersion, MAX_DESCRIPTION_LEN};
use crate::error::ValidationError;
use crate::shared::{ProxyId, QueryParams};

/// Reject descriptions the vendor would not store.
pub(crate) fn check_description(field: &'static str, value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong {
            field,
            max: MAX_DESCRIPTION_LEN,
            len,
        });
    }
    Ok(())
}

pub(crate) fn check_ids(ids: &[ProxyId]) -> Result<(), ValidationError> {
    if ids.is_empty() {
        return Err(ValidationError::EmptyProxySet);
    }
    Ok(())
}

// ─── getproxy ────────────────────────────────────────────────────────────────

/// Parameters for `getproxy`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProxyListParams {
    pub state: Option<ProxyState>,
    pub description: Option<String>,
}

impl ProxyListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: ProxyState) -> Self {
        self.state = Some(state);
        self
    }

    /// Only proxies carrying exactly this description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn to_query(&self) -> Result<QueryParams, ValidationError> {
        if let Some(descr) = &self.description {
            check_description("descr", descr)?;
        }
        let mut q = QueryParams::new();
        q.insert_enum_opt("state", self.state)
            .insert_opt("descr", self.description.as_deref())
            .insert_flag("nokey", true);
        Ok(q)
    }
}

// ─── buy ─────────────────────────────────────────────────────────────────────

/// Parameters for `buy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuyParams {
    pub count: u32,
    /// Days.
    pub period: u32,
    /// ISO 3166-1 alpha-2.
    pub country: String,
    pub version: Option<ProxyVersion>,
    pub proxy_type: Option<ProxyType>,
    pub description: Option<String>,
    /// Let the vendor extend the proxies from the balance when they expire.
    pub auto_prolong: bool,
}

impl BuyParams {
    pub fn new(count: u32, period: u32, country: impl Into<String>) -> Self {
        Self {
            count,
            period,
            country: country.into(),
            version: None,
            proxy_type: None,
            description: None,
            auto_prolong: false,
        }
    }

    pub fn with_version(mut self, version: ProxyVersion) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_type(mut self, proxy_type: ProxyType) -> Self {
        self.proxy_type = Some(proxy_type);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_auto_prolong(mut self, auto_prolong: bool) -> Self {
        self.auto_prolong = auto_prolong;
        self
    }

    pub fn to_query(&self) -> Result<QueryParams, ValidationError> {
        if let Some(descr) = &self.description {
            check_description("descr", descr)?;
        }
        let mut q = QueryParams::new();
        q.insert("count", self.count)
            .insert("period", self.period)
            .insert("country", &self.country)
            .insert_enum_opt("version", self.version)
            .insert_enum_opt("type", self.proxy_type)
            .insert_opt("descr", self.description.as_deref())
            .insert_flag("auto_prolong", self.auto_prolong)
            .insert_flag("nokey", true);
        Ok(q)
    }
}

// ─── prolong ─────────────────────────────────────────────────────────────────

/// Parameters for `prolong`.
///
/// Takes whole proxies rather than ids: the response only carries new expiry
/// dates, which are merged back into these records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProlongParams {
    pub proxies: Vec<Proxy>,
    /// Days.
    pub period: u32,
}

impl ProlongParams {
    pub fn new(proxies: impl IntoIterator<Item = Proxy>, period: u32) -> Self {
        Self {
            proxies: proxies.into_iter().collect(),
            period,
        }
    }

    pub fn ids(&self) -> Vec<ProxyId> {
        self.proxies.iter().map(|p| p.id).collect()
    }

    pub fn to_query(&self) -> Result<QueryParams, ValidationError> {
        let ids = self.ids();
        check_ids(&ids)?;
        let mut q = QueryParams::new();
        q.insert("period", self.period).insert_ids("ids", ids);
        Ok(q)
    }
}

// ─── settype ─────────────────────────────────────────────────────────────────

/// Parameters for `settype`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetTypeParams {
    pub ids: Vec<ProxyId>,
    pub proxy_type: ProxyType,
}

impl SetTypeParams {
    pub fn new(ids: impl IntoIterator<Item = ProxyId>, proxy_type: ProxyType) -> Self {
        Self {
            ids: ids.into_iter().collect(),
            proxy_type,
        }
    }

    pub fn to_query(&self) -> Result<QueryParams, ValidationError> {
        check_ids(&self.ids)?;
        let mut q = QueryParams::new();
        q.insert_ids("ids", self.ids.iter().copied())
            .insert_enum("type", self.proxy_type);
        Ok(q)
    }
}

// ─── setdescr ────────────────────────────────────────────────────────────────

/// Parameters for `setdescr`.
///
/// Targets proxies by id, by their current description, or both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetDescriptionParams {
    pub new: String,
    pub old: Option<String>,
    pub ids: Option<Vec<ProxyId>>,
}

impl SetDescriptionParams {
    pub fn new(new: impl Into<String>) -> Self {
        Self {
            new: new.into(),
            old: None,
            ids: None,
        }
    }

    pub fn with_ids(mut self, ids: impl IntoIterator<Item = ProxyId>) -> Self {
        self.ids = Some(ids.into_iter().collect());
        self
    }

    pub fn with_old(mut self, old: impl Into<String>) -> Self {
        self.old = Some(old.into());
        self
    }

    pub fn to_query(&self) -> Result<QueryParams, ValidationError> {
        check_description("new", &self.new)?;
        if let Some(old) = &self.old {
            check_description("old", old)?;
        }
        match (&self.ids, &self.old) {
            (None, None) => return Err(ValidationError::MissingDescriptionTarget),
            (Some(ids), _) => check_ids(ids)?,
            (None, Some(_)) => {}
        }

        let mut q = QueryParams::new();
        if let Some(ids) = &self.ids {
            q.insert_ids("ids", ids.iter().copied());
        }
        q.insert_opt("old", self.old.as_deref())
            .insert("new", &self.new);
        Ok(q)
    }
}
