//! Payments received for invoices.
//!
//! `amount` keeps the wire precision of the JSON number as an `f64`.

use crate::macros::record_transformer;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

#[derive(Deserialize)]
struct PaymentWire {
    id: u64,
    invoice_id: Option<u64>,
    amount: Option<f64>,
    currency: Option<String>,
    paid_at: Option<DateTime<Utc>>,
    method: Option<String>,
}

impl From<PaymentWire> for Payment {
    fn from(wire: PaymentWire) -> Self {
        Self {
            id: wire.id,
            invoice_id: wire.invoice_id,
            amount: wire.amount,
            currency: wire.currency,
            paid_at: wire.paid_at,
            method: wire.method,
        }
    }
}

record_transformer!(
    PaymentTransformer,
    "payment",
    PaymentWire => Payment,
    transform_payment_response
);

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn parses_rfc3339_timestamps() {
        let payment = transform_payment_response(&json!({
            "id": 5,
            "invoice_id": 9,
            "amount": 120.5,
            "paid_at": "2024-03-15T10:30:00Z"
        }))
        .unwrap();
        assert_eq!(
            payment.paid_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 15, 10, 30, 0).unwrap())
        );
        assert_eq!(payment.invoice_id, Some(9));
    }
}
