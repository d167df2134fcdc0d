//! Conversions: proxy wire types → domain types, plus prolongation reconciliation.

use super::wire::{ProlongResponse, ProlongedEntry, ProxyListResponse, ProxyRecord, PurchaseResponse};
use super::{Prolongation, Proxy, Purchase};
use crate::domain::catalog::PriceInformation;
use crate::error::IntegrityError;
use crate::shared::ProxyId;
use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};

impl From<ProxyRecord> for Proxy {
    fn from(r: ProxyRecord) -> Self {
        Proxy {
            id: r.id,
            ip: r.ip,
            host: r.host,
            port: r.port,
            user: r.user,
            password: r.pass,
            version: r.version,
            proxy_type: r.proxy_type,
            country: r.country,
            purchased_at: r.date,
            expires_at: r.date_end,
            active: r.active,
            description: r.descr,
        }
    }
}

impl ProxyListResponse {
    /// Proxies in response order, once `list_count` is confirmed.
    pub fn into_proxies(self) -> Result<Vec<Proxy>, IntegrityError> {
        if self.list.len() != self.list_count {
            return Err(IntegrityError::ListCountMismatch {
                expected: self.list_count,
                actual: self.list.len(),
            });
        }
        Ok(self.list.into_iter().map(Proxy::from).collect())
    }
}

impl TryFrom<(PurchaseResponse, String)> for Purchase {
    type Error = IntegrityError;

    fn try_from((resp, currency): (PurchaseResponse, String)) -> Result<Self, Self::Error> {
        let expected = resp.price.count as usize;
        if resp.list.len() != expected {
            return Err(IntegrityError::PurchaseCountMismatch {
                expected,
                actual: resp.list.len(),
            });
        }
        Ok(Purchase {
            price: PriceInformation::from((resp.price, currency)),
            proxies: resp.list.into_iter().map(Proxy::from).collect(),
        })
    }
}

/// Merge `prolong` deltas into the proxies that were submitted.
///
/// Every delta must name a submitted proxy. Submitted proxies without a
/// delta were not extended and are left out. The result follows submission
/// order, each proxy appearing once, with only `expires_at` changed.
pub fn reconcile_prolongation(
    submitted: &[Proxy],
    entries: &[ProlongedEntry],
) -> Result<Vec<Proxy>, IntegrityError> {
    let known: HashSet<ProxyId> = submitted.iter().map(|p| p.id).collect();
    let mut expiries: HashMap<ProxyId, NaiveDateTime> = HashMap::with_capacity(entries.len());

    for entry in entries {
        if let Some(id) = entry.id {
            if id != entry.key {
                return Err(IntegrityError::ProlongKeyMismatch {
                    key: entry.key_text.clone(),
                    id,
                });
            }
        }
        if !known.contains(&entry.key) {
            return Err(IntegrityError::UnknownProlongedProxy(entry.key));
        }
        expiries.insert(entry.key, entry.date_end);
    }

    let mut seen = HashSet::with_capacity(expiries.len());
    Ok(submitted
        .iter()
        .filter(|p| seen.insert(p.id))
        .filter_map(|p| expiries.get(&p.id).map(|date_end| p.with_expiry(*date_end)))
        .collect())
}

impl TryFrom<(ProlongResponse, String, &[Proxy])> for Prolongation {
    type Error = IntegrityError;

    fn try_from(
        (resp, currency, submitted): (ProlongResponse, String, &[Proxy]),
    ) -> Result<Self, Self::Error> {
        let proxies = reconcile_prolongation(submitted, &resp.list)?;
        Ok(Prolongation {
            price: PriceInformation::from((resp.price, currency)),
            proxies,
        })
    }
}
