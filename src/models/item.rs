//! Invoice line items.
//!
//! Prices, quantities and totals are `f64` values with the precision of the JSON numbers on
//! the wire. Totals are reported by the API, not recomputed.

use crate::macros::record_transformer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}

#[derive(Deserialize)]
struct ItemWire {
    id: Option<u64>,
    description: Option<String>,
    quantity: Option<f64>,
    unit_price: Option<f64>,
    vat_rate: Option<f64>,
    total: Option<f64>,
}

impl From<ItemWire> for Item {
    fn from(wire: ItemWire) -> Self {
        Self {
            id: wire.id,
            description: wire.description,
            quantity: wire.quantity,
            unit_price: wire.unit_price,
            vat_rate: wire.vat_rate,
            total: wire.total,
        }
    }
}

record_transformer!(
    ItemTransformer,
    "item",
    ItemWire => Item,
    transform_item_response
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_item_fields() {
        let item = transform_item_response(&json!({
            "description": "Hosting",
            "quantity": 3.0,
            "unit_price": 10.0,
            "total": 30.0
        }))
        .unwrap();
        assert_eq!(item.id, None);
        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({ "description": "Hosting", "quantity": 3.0, "unitPrice": 10.0, "total": 30.0 })
        );
    }

    #[test]
    fn item_list_keeps_order() {
        use crate::transformers::ResponseTransformer;

        let items = ItemTransformer
            .transform_list(&json!([{ "description": "b" }, { "description": "a" }]))
            .unwrap();
        let names: Vec<_> = items.iter().map(|i| i.description.as_deref()).collect();
        assert_eq!(names, vec![Some("b"), Some("a")]);
    }
}
