//! Project groups and their members.

use crate::error::Result;
use crate::macros::record_transformer;
use crate::transformers::response::expect_object;
use crate::transformers::{ResponseTransformer, transform_nested_list, transform_record};
use crate::types::{Nullable, RawRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A group of people sharing access to a set of projects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroup {
    pub id: String,
    /// Absent or `null` exactly when the payload omitted or nulled the field.
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub members: Nullable<Vec<ProjectGroupMember>>,
}

/// Role of a member inside a project group. `owner` is the only role the API reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectGroupRole {
    Owner,
}

impl ProjectGroupRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
        }
    }
}

impl fmt::Display for ProjectGroupRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A person in a project group.
///
/// Fields are copied from the wire record as-is: a key missing on the wire is
/// [`Nullable::Absent`] and omitted again on output, a `null` stays `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectGroupMember {
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub first_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub last_name: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub role: Nullable<ProjectGroupRole>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub identity_id: Nullable<u64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub active: Nullable<bool>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub company: Nullable<String>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub id: Nullable<u64>,
    #[serde(default, skip_serializing_if = "Nullable::is_absent")]
    pub email: Nullable<String>,
}

#[derive(Deserialize)]
struct ProjectGroupWire {
    id: String,
}

#[derive(Deserialize)]
struct ProjectGroupMemberWire {
    #[serde(default)]
    first_name: Nullable<String>,
    #[serde(default)]
    last_name: Nullable<String>,
    #[serde(default)]
    role: Nullable<ProjectGroupRole>,
    #[serde(default)]
    identity_id: Nullable<u64>,
    #[serde(default)]
    active: Nullable<bool>,
    #[serde(default)]
    company: Nullable<String>,
    #[serde(default)]
    id: Nullable<u64>,
    #[serde(default)]
    email: Nullable<String>,
}

impl From<ProjectGroupMemberWire> for ProjectGroupMember {
    fn from(wire: ProjectGroupMemberWire) -> Self {
        Self {
            first_name: wire.first_name,
            last_name: wire.last_name,
            role: wire.role,
            identity_id: wire.identity_id,
            active: wire.active,
            company: wire.company,
            id: wire.id,
            email: wire.email,
        }
    }
}

record_transformer!(
    /// Transformer for a single project group member.
    ProjectGroupMemberTransformer,
    "project_group_member",
    ProjectGroupMemberWire => ProjectGroupMember,
    transform_project_group_member_response
);

/// Transformer for project groups, including their nested members.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectGroupTransformer;

impl ResponseTransformer for ProjectGroupTransformer {
    type Output = ProjectGroup;

    fn entity(&self) -> &'static str {
        "project_group"
    }

    fn transform(&self, raw: &RawRecord) -> Result<ProjectGroup> {
        let object = expect_object(self.entity(), raw)?;
        let ProjectGroupWire { id } =
            transform_record::<ProjectGroupWire, ProjectGroupWire>(self.entity(), raw)?;
        let members = transform_nested_list(
            self.entity(),
            object,
            "members",
            transform_project_group_member_response,
        )?;

        tracing::debug!(
            entity = self.entity(),
            id = %id,
            members = ?members.as_option().map(Vec::len),
            "transformed project group"
        );
        Ok(ProjectGroup { id, members })
    }
}

/// Transform a raw project group record into a [`ProjectGroup`].
pub fn transform_project_group_response(raw: &RawRecord) -> Result<ProjectGroup> {
    ProjectGroupTransformer.transform(raw)
}
