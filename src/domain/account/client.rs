//! Account sub-client.

use crate::client::Proxy6Client;
use crate::domain::account::Account;
use crate::error::SdkError;
use crate::http::{Method, Transport};
use crate::shared::QueryParams;

pub struct AccountClient<'a, T> {
    pub(crate) client: &'a Proxy6Client<T>,
}

impl<'a, T: Transport> AccountClient<'a, T> {
    /// Current user id, balance and currency.
    pub async fn get(&self) -> Result<Account, SdkError> {
        let envelope = self
            .client
            .http
            .call(Method::Account, &QueryParams::new())
            .await?;
        Ok(envelope.account)
    }
}
