//! Projects that time and expenses are booked on.

use crate::macros::record_transformer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<u64>,
    /// Identifier of the [`ProjectGroup`](super::ProjectGroup) the project belongs to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_rate: Option<f64>,
}

#[derive(Deserialize)]
struct ProjectWire {
    id: u64,
    name: Option<String>,
    client_id: Option<u64>,
    project_group_id: Option<String>,
    active: Option<bool>,
    budget: Option<f64>,
    hourly_rate: Option<f64>,
}

impl From<ProjectWire> for Project {
    fn from(wire: ProjectWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            client_id: wire.client_id,
            project_group_id: wire.project_group_id,
            active: wire.active,
            budget: wire.budget,
            hourly_rate: wire.hourly_rate,
        }
    }
}

record_transformer!(
    ProjectTransformer,
    "project",
    ProjectWire => Project,
    transform_project_response
);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renames_project_fields() {
        let project = transform_project_response(&json!({
            "id": 2,
            "project_group_id": "g1",
            "hourly_rate": 95.0
        }))
        .unwrap();
        let out = serde_json::to_value(&project).unwrap();
        assert_eq!(out["projectGroupId"], "g1");
        assert_eq!(out["hourlyRate"], 95.0);
    }
}
