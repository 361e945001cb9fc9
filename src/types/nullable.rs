//! Optional-and-nullable field values.
//!
//! The API distinguishes a field that was left out of a payload from one that was sent as
//! `null`. Both are passed through transformation untouched, so the domain side keeps the
//! distinction instead of collapsing it into `Option`.
//!
//! Use with `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`: a missing
//! field deserializes to `Absent` and is omitted again on output, `null` round-trips as
//! `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::Deref;

/// A field that may be absent, explicitly `null`, or carry a value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Nullable<T> {
    /// The key was not present in the payload.
    #[default]
    Absent,
    /// The key was present with a `null` value.
    Null,
    /// The key was present with a value.
    Present(T),
}

impl<T> Nullable<T> {
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn is_present(&self) -> bool {
        matches!(self, Self::Present(_))
    }

    /// Borrow the value, treating absent and null alike.
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Borrow the dereferenced value, treating absent and null alike.
    pub fn as_deref(&self) -> Option<&T::Target>
    where
        T: Deref,
    {
        self.as_option().map(Deref::deref)
    }

    /// Consume into an `Option`, treating absent and null alike.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Present(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Map the present value, keeping absent and null as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Present(value) => Nullable::Present(f(value)),
        }
    }

    /// Fallible variant of [`Nullable::map`].
    pub fn try_map<U, E, F>(self, f: F) -> Result<Nullable<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        Ok(match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Present(value) => Nullable::Present(f(value)?),
        })
    }

    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Present(value) => Nullable::Present(value),
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Present)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Present(value) => value.serialize(serializer),
            // Absent is normally skipped by the container; if not, it degrades to null.
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}
