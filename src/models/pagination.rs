//! Pagination metadata and paginated list envelopes.
//!
//! List endpoints answer with `{ "data": [...], "pagination": {...} }`. Walking through
//! pages is left to the caller; this module only reads one page.

use crate::error::{ModelError, Result};
use crate::macros::record_transformer;
use crate::transformers::response::expect_object;
use crate::transformers::transform_list;
use crate::types::RawRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
}

#[derive(Deserialize)]
struct PaginationWire {
    page: Option<u64>,
    per_page: Option<u64>,
    total: Option<u64>,
    total_pages: Option<u64>,
}

impl From<PaginationWire> for Pagination {
    fn from(wire: PaginationWire) -> Self {
        Self {
            page: wire.page,
            per_page: wire.per_page,
            total: wire.total,
            total_pages: wire.total_pages,
        }
    }
}

record_transformer!(
    PaginationTransformer,
    "pagination",
    PaginationWire => Pagination,
    transform_pagination_response
);

/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// Transform a paginated envelope, applying `item` to every element of `data` in order.
pub fn transform_paginated_response<T, F>(raw: &RawRecord, item: F) -> Result<Paginated<T>>
where
    F: FnMut(&RawRecord) -> Result<T>,
{
    let object = expect_object("paginated", raw)?;
    let data = match object.get("data") {
        Some(data) => transform_list("paginated", data, item)?,
        None => return Err(ModelError::malformed("paginated", "missing `data` list")),
    };
    let pagination = match object.get("pagination") {
        None | Some(RawRecord::Null) => None,
        Some(value) => Some(transform_pagination_response(value)?),
    };
    Ok(Paginated { data, pagination })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project_group::transform_project_group_response;
    use serde_json::json;

    #[test]
    fn transforms_each_item_and_metadata() {
        let page = transform_paginated_response(
            &json!({
                "data": [{ "id": "g1" }, { "id": "g2", "members": null }],
                "pagination": { "page": 1, "per_page": 2, "total": 3, "total_pages": 2 }
            }),
            transform_project_group_response,
        )
        .unwrap();

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[1].id, "g2");
        assert_eq!(
            page.pagination,
            Some(Pagination {
                page: Some(1),
                per_page: Some(2),
                total: Some(3),
                total_pages: Some(2),
            })
        );
    }

    #[test]
    fn missing_data_is_malformed_input() {
        let err = transform_paginated_response(&json!({ "pagination": null }), |raw| {
            transform_project_group_response(raw)
        })
        .unwrap_err();
        assert!(err.is_malformed_input());
    }
}
