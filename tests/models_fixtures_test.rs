//! Tests for the model index and the shared transform convention.

use invoicing_models::ResponseTransformer;
use invoicing_models::models::pagination::transform_paginated_response;
use invoicing_models::models::project_group::{
    ProjectGroupTransformer, transform_project_group_response,
};
use invoicing_models::models::{self, Tasks};
use serde_json::{Value, json};
use std::path::Path;

fn read_fixture(parts: &[&str]) -> Value {
    let mut path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures");
    for part in parts {
        path = path.join(part);
    }
    let text = std::fs::read_to_string(path).expect("read fixture json");
    serde_json::from_str(&text).expect("parse fixture json")
}

#[test]
fn paginated_project_groups() {
    let raw = read_fixture(&["paginated", "project-groups.1.json"]);
    let page = transform_paginated_response(&raw, transform_project_group_response)
        .expect("transform page");

    assert_eq!(page.data.len(), 3);
    assert!(page.data[0].members.is_null());
    assert!(page.data[1].members.is_absent());
    assert_eq!(page.data[2].members.as_option().map(Vec::len), Some(1));

    let pagination = page.pagination.as_ref().expect("pagination");
    assert_eq!(pagination.per_page, Some(3));
    assert_eq!(pagination.total_pages, Some(3));

    let out = serde_json::to_value(&page).unwrap();
    assert_eq!(out["pagination"]["perPage"], 3);
    assert_eq!(out["data"][2]["members"][0]["identityId"], 7);
}

#[test]
fn transformer_list_matches_free_function() {
    let raw = read_fixture(&["paginated", "project-groups.1.json"]);
    let via_trait = ProjectGroupTransformer.transform_list(&raw["data"]).unwrap();
    let via_fn: Vec<_> = raw["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| transform_project_group_response(g).unwrap())
        .collect();
    assert_eq!(via_trait, via_fn);
}

#[test]
fn sibling_entities_follow_the_convention() {
    let client: models::Client = models::client::transform_client_response(&json!({
        "id": 1,
        "name": "Acme",
        "vat_number": "NL123456789B01"
    }))
    .unwrap();
    assert_eq!(
        serde_json::to_value(&client).unwrap(),
        json!({ "id": 1, "name": "Acme", "vatNumber": "NL123456789B01" })
    );

    let project: models::Project = models::project::transform_project_response(&json!({
        "id": 2,
        "project_group_id": "g1",
        "hourly_rate": 95.0
    }))
    .unwrap();
    assert_eq!(project.project_group_id.as_deref(), Some("g1"));

    let task: Tasks = models::tasks::transform_task_response(&json!({
        "id": 3,
        "estimated_minutes": 120
    }))
    .unwrap();
    assert_eq!(serde_json::to_value(&task).unwrap()["estimatedMinutes"], 120);

    let rate: models::ServiceRate = models::service_rate::transform_service_rate_response(&json!({
        "id": 4,
        "service_id": 5,
        "rate": 80.0,
        "currency": "EUR"
    }))
    .unwrap();
    assert_eq!(rate.service_id, Some(5));

    let expense: models::Expense = models::expense::transform_expense_response(&json!({
        "id": 6,
        "amount": 12.5,
        "date": "2024-02-29"
    }))
    .unwrap();
    assert_eq!(serde_json::to_value(&expense).unwrap()["date"], "2024-02-29");

    let error: models::Error = models::api_error::transform_error_response(&json!({
        "code": "invalid_request",
        "message": "Missing id"
    }))
    .unwrap();
    assert_eq!(error.to_string(), "invalid_request: Missing id");
}

#[test]
fn sibling_entities_reject_null_records() {
    assert!(
        models::user::transform_user_response(&Value::Null)
            .unwrap_err()
            .is_malformed_input()
    );
    assert!(
        models::invoice::transform_invoice_response(&Value::Null)
            .unwrap_err()
            .is_malformed_input()
    );
    assert!(
        models::other_income::transform_other_income_response(&json!([]))
            .unwrap_err()
            .is_malformed_input()
    );
}
