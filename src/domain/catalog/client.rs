//! Catalog sub-client — countries, availability, price quotes.

use crate::client::Proxy6Client;
use crate::domain::catalog::wire::{CountResponse, CountriesResponse, PriceResponse};
use crate::domain::catalog::{CountParams, CountriesParams, PriceInformation, PriceParams};
use crate::error::SdkError;
use crate::http::{Method, Transport};

pub struct CatalogClient<'a, T> {
    pub(crate) client: &'a Proxy6Client<T>,
}

impl<'a, T: Transport> CatalogClient<'a, T> {
    /// ISO2 codes of the countries proxies can be bought in.
    pub async fn countries(&self, params: &CountriesParams) -> Result<Vec<String>, SdkError> {
        let envelope = self
            .client
            .http
            .call(Method::GetCountry, &params.to_query())
            .await?;
        Ok(CountriesResponse::try_from(envelope.record())?.list)
    }

    /// Proxies currently available in one country.
    pub async fn count(&self, params: &CountParams) -> Result<u32, SdkError> {
        let envelope = self
            .client
            .http
            .call(Method::GetCount, &params.to_query())
            .await?;
        Ok(CountResponse::try_from(envelope.record())?.count)
    }

    /// Quote for `count` proxies over `period` days. Nothing is charged.
    pub async fn price(&self, params: &PriceParams) -> Result<PriceInformation, SdkError> {
        let envelope = self
            .client
            .http
            .call(Method::GetPrice, &params.to_query())
            .await?;
        let wire = PriceResponse::try_from(envelope.record())?;
        Ok(PriceInformation::from((wire, envelope.currency().to_string())))
    }
}
