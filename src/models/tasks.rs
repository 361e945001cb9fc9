//! Tasks within a project.

use crate::macros::record_transformer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_minutes: Option<u32>,
}

#[derive(Deserialize)]
struct TaskWire {
    id: u64,
    name: Option<String>,
    project_id: Option<u64>,
    completed: Option<bool>,
    estimated_minutes: Option<u32>,
}

impl From<TaskWire> for Task {
    fn from(wire: TaskWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            project_id: wire.project_id,
            completed: wire.completed,
            estimated_minutes: wire.estimated_minutes,
        }
    }
}

record_transformer!(
    TaskTransformer,
    "task",
    TaskWire => Task,
    transform_task_response
);
