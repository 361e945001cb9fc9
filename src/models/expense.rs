//! Expenses booked against clients or projects.
//!
//! `amount` keeps the wire precision of the JSON number as an `f64`.

use crate::macros::record_transformer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
}

#[derive(Deserialize)]
struct ExpenseWire {
    id: u64,
    description: Option<String>,
    amount: Option<f64>,
    currency: Option<String>,
    date: Option<NaiveDate>,
    category: Option<String>,
    client_id: Option<u64>,
    project_id: Option<u64>,
}

impl From<ExpenseWire> for Expense {
    fn from(wire: ExpenseWire) -> Self {
        Self {
            id: wire.id,
            description: wire.description,
            amount: wire.amount,
            currency: wire.currency,
            date: wire.date,
            category: wire.category,
            client_id: wire.client_id,
            project_id: wire.project_id,
        }
    }
}

record_transformer!(
    ExpenseTransformer,
    "expense",
    ExpenseWire => Expense,
    transform_expense_response
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_expense_fields() {
        let expense = transform_expense_response(&json!({
            "id": 6,
            "amount": 12.5,
            "date": "2024-02-29",
            "project_id": 2
        }))
        .unwrap();
        assert_eq!(expense.date, NaiveDate::from_ymd_opt(2024, 2, 29));
        let out = serde_json::to_value(&expense).unwrap();
        assert_eq!(out["projectId"], 2);
        assert!(out.get("clientId").is_none());
    }
}
