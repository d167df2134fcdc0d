//! Conversion: envelope account fields → Account.

use super::Account;
use crate::error::DecodeError;
use crate::shared::Record;

impl TryFrom<Record<'_>> for Account {
    type Error = DecodeError;

    fn try_from(record: Record<'_>) -> Result<Self, Self::Error> {
        Ok(Account {
            user_id: record.required("user_id")?,
            balance: record.required("balance")?,
            currency: record.required("currency")?,
        })
    }
}
