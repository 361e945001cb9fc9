//! Project-specific rates for a service.

use crate::macros::record_transformer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRate {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

#[derive(Deserialize)]
struct ServiceRateWire {
    id: u64,
    service_id: Option<u64>,
    project_id: Option<u64>,
    rate: Option<f64>,
    currency: Option<String>,
}

impl From<ServiceRateWire> for ServiceRate {
    fn from(wire: ServiceRateWire) -> Self {
        Self {
            id: wire.id,
            service_id: wire.service_id,
            project_id: wire.project_id,
            rate: wire.rate,
            currency: wire.currency,
        }
    }
}

record_transformer!(
    ServiceRateTransformer,
    "service_rate",
    ServiceRateWire => ServiceRate,
    transform_service_rate_response
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_service_rate_fields() {
        let rate = transform_service_rate_response(&json!({
            "id": 4,
            "service_id": 5,
            "project_id": 2,
            "rate": 80.0
        }))
        .unwrap();
        let out = serde_json::to_value(&rate).unwrap();
        assert_eq!(out["serviceId"], 5);
        assert_eq!(out["projectId"], 2);
    }
}
