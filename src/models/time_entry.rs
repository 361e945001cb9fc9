//! Tracked time.

use crate::macros::record_transformer;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minutes: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable: Option<bool>,
}

impl TimeEntry {
    /// Tracked time in hours.
    pub fn hours(&self) -> Option<f64> {
        self.minutes.map(|m| f64::from(m) / 60.0)
    }
}

#[derive(Deserialize)]
struct TimeEntryWire {
    id: u64,
    project_id: Option<u64>,
    task_id: Option<u64>,
    user_id: Option<u64>,
    description: Option<String>,
    minutes: Option<u32>,
    date: Option<NaiveDate>,
    billable: Option<bool>,
}

impl From<TimeEntryWire> for TimeEntry {
    fn from(wire: TimeEntryWire) -> Self {
        Self {
            id: wire.id,
            project_id: wire.project_id,
            task_id: wire.task_id,
            user_id: wire.user_id,
            description: wire.description,
            minutes: wire.minutes,
            date: wire.date,
            billable: wire.billable,
        }
    }
}

record_transformer!(
    TimeEntryTransformer,
    "time_entry",
    TimeEntryWire => TimeEntry,
    transform_time_entry_response
);
