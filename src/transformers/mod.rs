//! Transformers layer
//!
//! Every entity follows one convention: a snake_case wire record is read from a raw JSON
//! value and renamed into a camelCase domain record, recursing into nested collections.

pub mod response;

pub use response::{ResponseTransformer, transform_list, transform_nested_list, transform_record};
