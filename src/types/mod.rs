//! Shared building blocks for wire and domain records.
//!
//! - **`raw`** - the untyped wire record accepted by every transformer
//! - **`nullable`** - three-state field for optional *and* nullable wire values

pub mod nullable;
pub mod raw;

pub use nullable::*;
pub use raw::*;
