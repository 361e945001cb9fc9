//! Domain models
//!
//! One module per API entity. Each defines the camelCase domain record, a private
//! snake_case wire record, and a `transform_<entity>_response` entry point. The types are
//! re-exported here under their entity names.

pub mod api_error;
pub mod client;
pub mod expense;
pub mod invoice;
pub mod item;
pub mod other_income;
pub mod pagination;
pub mod payment;
pub mod project;
pub mod project_group;
pub mod service;
pub mod service_rate;
pub mod tasks;
pub mod time_entry;
pub mod user;

pub use api_error::ApiError as Error;
pub use client::Client;
pub use expense::Expense;
pub use invoice::Invoice;
pub use item::Item;
pub use other_income::OtherIncome;
pub use pagination::{Paginated, Pagination};
pub use payment::Payment;
pub use project::Project;
pub use project_group::{ProjectGroup, ProjectGroupMember, ProjectGroupRole};
pub use service::Service;
pub use service_rate::ServiceRate;
pub use tasks::Task as Tasks;
pub use time_entry::TimeEntry;
pub use user::User;
