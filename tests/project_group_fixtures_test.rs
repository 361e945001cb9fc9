//! Fixture tests for project group responses.

use invoicing_models::models::{ProjectGroup, ProjectGroupRole};
use invoicing_models::{Nullable, transform_project_group_response};
use serde_json::{Value, json};
use std::path::Path;

fn fixtures_dir() -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("project_group")
}

fn read_json(path: impl AsRef<Path>) -> Value {
    let text = std::fs::read_to_string(path).expect("read fixture json");
    serde_json::from_str(&text).expect("parse fixture json")
}

fn transform_fixture(name: &str) -> ProjectGroup {
    let raw = read_json(fixtures_dir().join(name));
    transform_project_group_response(&raw).expect("transform response")
}

#[test]
fn members_are_renamed_in_order() {
    let group = transform_fixture("with-members.1.json");
    assert_eq!(group.id, "pg_7f3a");

    let members = group.members.as_option().expect("members present");
    assert_eq!(members.len(), 3);
    let ids: Vec<_> = members.iter().map(|m| m.id.as_option().copied()).collect();
    assert_eq!(ids, vec![Some(42), Some(43), Some(44)]);
    assert!(
        members
            .iter()
            .all(|m| m.role == Nullable::Present(ProjectGroupRole::Owner))
    );
    assert_eq!(members[1].active, Nullable::Present(false));
}

#[test]
fn first_member_serializes_to_camel_case() {
    let group = transform_fixture("with-members.1.json");
    let out = serde_json::to_value(&group).unwrap();
    assert_eq!(
        out["members"][0],
        json!({
            "firstName": "Ann",
            "lastName": "Lee",
            "role": "owner",
            "identityId": 7,
            "active": true,
            "company": "Acme",
            "id": 42,
            "email": "a@x.com"
        })
    );
}

#[test]
fn missing_member_fields_stay_missing() {
    let group = transform_fixture("with-members.1.json");
    let members = group.members.into_option().unwrap();
    let third = &members[2];
    assert!(third.first_name.is_absent());
    assert!(third.company.is_absent());
    assert_eq!(third.last_name.as_deref(), Some("Okafor"));

    let out = serde_json::to_value(third).unwrap();
    assert!(out.get("firstName").is_none());
    assert!(out.get("company").is_none());
}

#[test]
fn unknown_wire_fields_are_dropped() {
    let group = transform_fixture("with-members.1.json");
    let out = serde_json::to_value(&group).unwrap();
    assert!(out.get("name").is_none());
}

#[test]
fn null_members_pass_through() {
    let group = transform_fixture("null-members.1.json");
    assert_eq!(group.members, Nullable::Null);
    assert_eq!(
        serde_json::to_value(&group).unwrap(),
        json!({ "id": "g1", "members": null })
    );
}

#[test]
fn omitted_members_pass_through() {
    let group = transform_fixture("no-members.1.json");
    assert_eq!(group.members, Nullable::Absent);
    assert_eq!(serde_json::to_value(&group).unwrap(), json!({ "id": "g2" }));
}

#[test]
fn non_object_records_fail() {
    for raw in [Value::Null, json!("g1"), json!(["g1"]), json!(7)] {
        let err = transform_project_group_response(&raw).unwrap_err();
        assert!(err.is_malformed_input(), "{raw} should be malformed input");
    }
}

#[test]
fn transforms_are_independent() {
    let raw = read_json(fixtures_dir().join("with-members.1.json"));
    let first = transform_project_group_response(&raw).unwrap();
    let second = transform_project_group_response(&raw).unwrap();
    assert_eq!(first, second);
}
