//! Billable services offered to clients.

use crate::macros::record_transformer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_rate: Option<f64>,
}

#[derive(Deserialize)]
struct ServiceWire {
    id: u64,
    name: Option<String>,
    description: Option<String>,
    unit_price: Option<f64>,
    vat_rate: Option<f64>,
}

impl From<ServiceWire> for Service {
    fn from(wire: ServiceWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            description: wire.description,
            unit_price: wire.unit_price,
            vat_rate: wire.vat_rate,
        }
    }
}

record_transformer!(
    ServiceTransformer,
    "service",
    ServiceWire => Service,
    transform_service_response
);
