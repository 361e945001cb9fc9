//! Response transformation
//!
//! Converts raw API records into domain records.

use crate::error::{ModelError, Result};
use crate::observability;
use crate::types::{Nullable, RawObject, RawRecord, describe_kind};
use serde::Deserialize;

/// Transform raw wire records of one entity into domain records.
pub trait ResponseTransformer: Send + Sync {
    /// Domain record produced by this transformer
    type Output;

    /// Entity name used in logs and errors
    fn entity(&self) -> &'static str;

    /// Transform one raw record
    fn transform(&self, raw: &RawRecord) -> Result<Self::Output>;

    /// Transform a raw list of records, preserving order
    fn transform_list(&self, raw: &RawRecord) -> Result<Vec<Self::Output>> {
        transform_list(self.entity(), raw, |item| self.transform(item))
    }
}

/// Borrow `raw` as an object, or report it as malformed input for `entity`.
pub(crate) fn expect_object<'a>(
    entity: &'static str,
    raw: &'a RawRecord,
) -> Result<&'a RawObject> {
    raw.as_object().ok_or_else(|| {
        ModelError::malformed(
            entity,
            format!("expected an object, got {}", describe_kind(raw)),
        )
    })
}

fn trace_payload(entity: &'static str, raw: &RawRecord) {
    if observability::get_log_payloads() {
        tracing::trace!(
            entity,
            payload = %observability::format_json_for_logging(raw),
            "raw payload"
        );
    }
}

/// Read `raw` as the wire shape `W` and convert it into the domain record `D`.
///
/// Fields are not coerced: a wire value of the wrong type is a [`ModelError::ParseError`],
/// a missing optional field stays missing.
pub fn transform_record<'a, W, D>(entity: &'static str, raw: &'a RawRecord) -> Result<D>
where
    W: Deserialize<'a>,
    D: From<W>,
{
    expect_object(entity, raw)?;
    trace_payload(entity, raw);

    let wire = W::deserialize(raw)
        .map_err(|e| ModelError::ParseError(format!("Invalid {entity} record: {e}")))?;
    tracing::debug!(entity, "transformed record");
    Ok(D::from(wire))
}

/// Apply `f` to every element of a raw list, preserving order and length.
pub fn transform_list<T, F>(entity: &'static str, raw: &RawRecord, f: F) -> Result<Vec<T>>
where
    F: FnMut(&RawRecord) -> Result<T>,
{
    let items = raw.as_array().ok_or_else(|| {
        ModelError::malformed(entity, format!("expected a list, got {}", describe_kind(raw)))
    })?;
    let out = items.iter().map(f).collect::<Result<Vec<T>>>()?;
    tracing::debug!(entity, items = out.len(), "transformed list");
    Ok(out)
}

/// Transform the nested collection stored under `key` of a raw object.
///
/// An absent key stays [`Nullable::Absent`] and `null` stays [`Nullable::Null`]; neither is
/// turned into an empty list. Any other non-list value is malformed input.
pub fn transform_nested_list<T, F>(
    entity: &'static str,
    object: &RawObject,
    key: &str,
    f: F,
) -> Result<Nullable<Vec<T>>>
where
    F: FnMut(&RawRecord) -> Result<T>,
{
    match object.get(key) {
        None => Ok(Nullable::Absent),
        Some(RawRecord::Null) => Ok(Nullable::Null),
        Some(value) => transform_list(entity, value, f).map(Nullable::Present),
    }
}
