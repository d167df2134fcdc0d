//! Proxies sub-client — list, buy, prolong, modify, delete, check.
//!
//! `buy` and `prolong` charge the account balance. Neither is retried by the
//! transport, whatever its retry policy.

use crate::client::Proxy6Client;
use crate::domain::catalog::wire::CountResponse;
use crate::domain::proxy::params::{check_description, check_ids};
use crate::domain::proxy::wire::{CheckResponse, ProlongResponse, ProxyListResponse, PurchaseResponse};
use crate::domain::proxy::{
    BuyParams, Prolongation, ProlongParams, Proxy, ProxyListParams, Purchase,
    SetDescriptionParams, SetTypeParams,
};
use crate::error::{IntegrityError, SdkError};
use crate::http::{Method, Transport};
use crate::shared::{ProxyId, QueryParams};

pub struct ProxyClient<'a, T> {
    pub(crate) client: &'a Proxy6Client<T>,
}

/// Surface a broken response invariant, leaving a trace of which call broke it.
fn integrity(method: Method, err: IntegrityError) -> SdkError {
    tracing::warn!(method = %method, error = %err, "proxy6 response failed integrity check");
    err.into()
}

impl<'a, T: Transport> ProxyClient<'a, T> {
    /// Proxies on the account, in vendor order.
    pub async fn list(&self, params: &ProxyListParams) -> Result<Vec<Proxy>, SdkError> {
        let query = params.to_query()?;
        let envelope = self.client.http.call(Method::GetProxy, &query).await?;
        ProxyListResponse::try_from(envelope.record())?
            .into_proxies()
            .map_err(|e| integrity(Method::GetProxy, e))
    }

    /// Buy new proxies. Charges the balance.
    pub async fn buy(&self, params: &BuyParams) -> Result<Purchase, SdkError> {
        let query = params.to_query()?;
        let envelope = self.client.http.call(Method::Buy, &query).await?;
        let wire = PurchaseResponse::try_from(envelope.record())?;
        Purchase::try_from((wire, envelope.currency().to_string()))
            .map_err(|e| integrity(Method::Buy, e))
    }

    /// Extend proxies by `period` days. Charges the balance.
    ///
    /// The returned proxies are the submitted ones the vendor actually
    /// extended, with their new expiry. Proxies left out were not extended.
    pub async fn prolong(&self, params: &ProlongParams) -> Result<Prolongation, SdkError> {
        let query = params.to_query()?;
        let envelope = self.client.http.call(Method::Prolong, &query).await?;
        let wire = ProlongResponse::try_from(envelope.record())?;
        Prolongation::try_from((
            wire,
            envelope.currency().to_string(),
            params.proxies.as_slice(),
        ))
        .map_err(|e| integrity(Method::Prolong, e))
    }

    /// Switch proxies between HTTP and SOCKS5. The vendor reports no count;
    /// re-fetch with [`list`](Self::list) to observe the change.
    pub async fn set_type(&self, params: &SetTypeParams) -> Result<(), SdkError> {
        let query = params.to_query()?;
        self.client.http.call(Method::SetType, &query).await?;
        Ok(())
    }

    /// Replace descriptions. Returns how many proxies were updated.
    pub async fn set_description(&self, params: &SetDescriptionParams) -> Result<u32, SdkError> {
        let query = params.to_query()?;
        let envelope = self.client.http.call(Method::SetDescr, &query).await?;
        Ok(CountResponse::try_from(envelope.record())?.count)
    }

    /// Delete proxies by id. Returns how many were deleted.
    pub async fn delete(&self, ids: &[ProxyId]) -> Result<u32, SdkError> {
        check_ids(ids)?;
        let mut query = QueryParams::new();
        query.insert_ids("ids", ids.iter().copied());
        let envelope = self.client.http.call(Method::Delete, &query).await?;
        Ok(CountResponse::try_from(envelope.record())?.count)
    }

    /// Delete every proxy carrying `description`. Returns how many were deleted.
    pub async fn delete_by_description(&self, description: &str) -> Result<u32, SdkError> {
        check_description("descr", description)?;
        let mut query = QueryParams::new();
        query.insert("descr", description);
        let envelope = self.client.http.call(Method::Delete, &query).await?;
        Ok(CountResponse::try_from(envelope.record())?.count)
    }

    /// Whether the vendor considers the proxy working.
    pub async fn check(&self, id: ProxyId) -> Result<bool, SdkError> {
        let mut query = QueryParams::new();
        query.insert("ids", id);
        let envelope = self.client.http.call(Method::Check, &query).await?;
        let wire = CheckResponse::try_from(envelope.record())?;
        if wire.proxy_id != id {
            return Err(integrity(
                Method::Check,
                IntegrityError::ProxyIdMismatch {
                    requested: id,
                    echoed: wire.proxy_id,
                },
            ));
        }
        Ok(wire.proxy_status)
    }
}
