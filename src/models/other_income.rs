//! Income that is not tied to an invoice.

use crate::macros::record_transformer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherIncome {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

#[derive(Deserialize)]
struct OtherIncomeWire {
    id: u64,
    description: Option<String>,
    amount: Option<f64>,
    currency: Option<String>,
    date: Option<NaiveDate>,
}

impl From<OtherIncomeWire> for OtherIncome {
    fn from(wire: OtherIncomeWire) -> Self {
        Self {
            id: wire.id,
            description: wire.description,
            amount: wire.amount,
            currency: wire.currency,
            date: wire.date,
        }
    }
}

record_transformer!(
    OtherIncomeTransformer,
    "other_income",
    OtherIncomeWire => OtherIncome,
    transform_other_income_response
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_other_income_fields() {
        let income = transform_other_income_response(&json!({
            "id": 8,
            "description": "Workshop fee",
            "amount": 250.0,
            "currency": "EUR",
            "date": "2024-05-02"
        }))
        .unwrap();
        assert_eq!(income.date, NaiveDate::from_ymd_opt(2024, 5, 2));
        assert_eq!(serde_json::to_value(&income).unwrap()["currency"], "EUR");
    }
}
