//! Response envelope.
//!
//! Every vendor response is one JSON object with a `status` discriminator.
//! `"yes"` responses carry the account fields next to the method payload;
//! `"no"` responses carry `error_id` and `error`, which go through
//! [`VendorError::classify`].

use crate::domain::account::Account;
use crate::error::{DecodeError, IntegrityError, SdkError, VendorError};
use crate::shared::Record;
use serde_json::{Map, Value};

const ACCOUNT_FIELDS: [&str; 3] = ["user_id", "balance", "currency"];

/// A successful response: the account snapshot plus the method payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub account: Account,
    payload: Map<String, Value>,
}

impl Envelope {
    /// Validate the envelope of a raw response body.
    pub fn open(body: Value) -> Result<Self, SdkError> {
        let Value::Object(mut payload) = body else {
            return Err(DecodeError::NotAnObject("response".to_string()).into());
        };

        let record = Record::from_map(&payload);
        let status: String = record.required("status")?;
        match status.as_str() {
            "yes" => {}
            "no" => return Err(Self::failure(record)),
            other => {
                tracing::warn!(status = other, "Unexpected envelope status");
                return Err(IntegrityError::UnexpectedStatus(other.to_string()).into());
            }
        }

        let account = Account::try_from(record)?;
        payload.remove("status");
        for field in ACCOUNT_FIELDS {
            payload.remove(field);
        }

        Ok(Self { account, payload })
    }

    fn failure(record: Record<'_>) -> SdkError {
        let code: u32 = match record.required("error_id") {
            Ok(code) => code,
            Err(e) => return e.into(),
        };
        let message: String = match record.required("error") {
            Ok(message) => message,
            Err(e) => return e.into(),
        };

        match VendorError::classify(code, &message) {
            Ok(vendor) => vendor.into(),
            Err(integrity) => {
                tracing::warn!(error = %integrity, "Vendor error code changed meaning");
                integrity.into()
            }
        }
    }

    /// The method payload, with `status` and the account fields removed.
    pub fn record(&self) -> Record<'_> {
        Record::from_map(&self.payload)
    }

    pub fn currency(&self) -> &str {
        &self.account.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    #[test]
    fn test_open_success_strips_envelope_fields() {
        let envelope = Envelope::open(json!({
            "status": "yes",
            "user_id": "1",
            "balance": "48.80",
            "currency": "RUB",
            "result": 3,
        }))
        .unwrap();

        assert_eq!(envelope.account.user_id, 1);
        assert_eq!(envelope.account.balance, Decimal::new(4880, 2));
        assert_eq!(envelope.currency(), "RUB");
        assert!(envelope.record().get("status").is_none());
        assert!(envelope.record().get("balance").is_none());
        assert_eq!(envelope.record().required::<u32>("result").unwrap(), 3);
    }

    #[test]
    fn test_open_failure_is_classified() {
        let err = Envelope::open(json!({
            "status": "no",
            "error_id": 400,
            "error": "Error no money",
        }))
        .unwrap_err();
        assert!(matches!(err, SdkError::Vendor(VendorError::NoMoney { .. })));

        let err = Envelope::open(json!({
            "status": "no",
            "error_id": "123",
            "error": "Lorem ipsum",
        }))
        .unwrap_err();
        match err {
            SdkError::Vendor(VendorError::Unknown { code, message }) => {
                assert_eq!(code, 123);
                assert_eq!(message, "Lorem ipsum");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_open_failure_with_changed_message() {
        let err = Envelope::open(json!({
            "status": "no",
            "error_id": 200,
            "error": "Error period",
        }))
        .unwrap_err();
        assert!(matches!(
            err,
            SdkError::Integrity(IntegrityError::ErrorMessageMismatch { code: 200, .. })
        ));
    }

    #[test]
    fn test_open_rejects_malformed_envelopes() {
        assert!(matches!(
            Envelope::open(json!([1, 2, 3])),
            Err(SdkError::Decode(DecodeError::NotAnObject(_)))
        ));
        assert!(matches!(
            Envelope::open(json!({"user_id": "1"})),
            Err(SdkError::Decode(DecodeError::MissingField(f))) if f == "status"
        ));
        assert!(matches!(
            Envelope::open(json!({"status": "maybe"})),
            Err(SdkError::Integrity(IntegrityError::UnexpectedStatus(_)))
        ));
        assert!(matches!(
            Envelope::open(json!({"status": "yes", "user_id": "1", "currency": "RUB"})),
            Err(SdkError::Decode(DecodeError::MissingField(f))) if f == "balance"
        ));
        assert!(matches!(
            Envelope::open(json!({"status": "no", "error": "Error count"})),
            Err(SdkError::Decode(DecodeError::MissingField(f))) if f == "error_id"
        ));
    }
}
