//! invoicing-models
//!
//! Data models for a client of an accounting and invoicing API (projects, project groups,
//! clients, invoices, expenses, payments and so on).
//!
//! The API answers with loosely typed snake_case JSON. Each entity has a
//! `transform_<entity>_response` function that reads such a raw record and returns the
//! camelCase domain record, recursing into nested collections:
//!
//! ```rust,ignore
//! use invoicing_models::models::project_group::transform_project_group_response;
//!
//! let raw = serde_json::json!({ "id": "g1", "members": null });
//! let group = transform_project_group_response(&raw)?;
//! assert!(group.members.is_null());
//! ```
//!
//! Network transport, authentication and pagination traversal are left to the caller.
#![deny(unsafe_code)]

mod macros;

pub mod error;
pub mod models;
pub mod observability;
pub mod telemetry;
pub mod transformers;
pub mod types;

pub use error::{ModelError, Result};
pub use models::project_group::{
    transform_project_group_member_response, transform_project_group_response,
};
pub use transformers::ResponseTransformer;
pub use types::{Nullable, RawRecord};
