//! Invoices and their nested line items.
//!
//! `total` is an `f64` read straight from the JSON number on the wire; no rounding or
//! currency arithmetic happens here.

use crate::error::Result;
use crate::transformers::response::expect_object;
use crate::transformers::{ResponseTransformer, transform_nested_list, transform_record};
use crate::types::{Nullable, RawRecord};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::item::{Item, transform_item_response};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub items: Nullable<Vec<Item>>,
}

impl Invoice {
    /// Whether the invoice is past its due date on `today`.
    pub fn is_overdue_on(&self, today: NaiveDate) -> bool {
        self.due_date.is_some_and(|due| due < today) && self.status.as_deref() != Some("paid")
    }
}

#[derive(Deserialize)]
struct InvoiceWire {
    id: u64,
    number: Option<String>,
    client_id: Option<u64>,
    status: Option<String>,
    issue_date: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
    currency: Option<String>,
    total: Option<f64>,
}

/// Transformer for invoices, including their nested items.
#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceTransformer;

impl ResponseTransformer for InvoiceTransformer {
    type Output = Invoice;

    fn entity(&self) -> &'static str {
        "invoice"
    }

    fn transform(&self, raw: &RawRecord) -> Result<Invoice> {
        let object = expect_object(self.entity(), raw)?;
        let wire = transform_record::<InvoiceWire, InvoiceWire>(self.entity(), raw)?;
        let items = transform_nested_list(self.entity(), object, "items", transform_item_response)?;

        Ok(Invoice {
            id: wire.id,
            number: wire.number,
            client_id: wire.client_id,
            status: wire.status,
            issue_date: wire.issue_date,
            due_date: wire.due_date,
            currency: wire.currency,
            total: wire.total,
            items,
        })
    }
}

/// Transform a raw invoice record into an [`Invoice`].
pub fn transform_invoice_response(raw: &RawRecord) -> Result<Invoice> {
    InvoiceTransformer.transform(raw)
}
