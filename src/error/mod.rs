//! Error handling types for invoicing-models.
//!
//! This module is intentionally dependency-light: the only failure a transformer can
//! report is a payload that does not have the shape of the entity being read.

mod conversions;
pub mod types;

pub use types::*;
