//! Account domain — the balance snapshot every response carries.

pub mod client;
mod convert;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Account snapshot as of the response that carried it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub user_id: u64,
    pub balance: Decimal,
    pub currency: String,
}
