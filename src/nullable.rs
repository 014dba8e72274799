//! Tri-state wrapper for fields that distinguish "absent" from "null".
//!
//! Pair it with `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`
//! so an absent key stays absent on the wire while an explicit null is
//! written back as `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Optional field that remembers whether it was set to `null`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Nullable<T> {
    /// Key not present; omitted on encode.
    Absent,
    /// Key present with a JSON `null`.
    Null,
    /// Key present with a value.
    Value(T),
}

impl<T> Nullable<T> {
    pub fn new(value: T) -> Self {
        Nullable::Value(value)
    }

    /// Returns the value when one is held.
    pub fn get(&self) -> Option<&T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }

    /// `true` for both an explicit null and a value.
    pub fn is_set(&self) -> bool {
        !self.is_absent()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Nullable::Null)
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Nullable::Absent)
    }

    pub fn set(&mut self, value: T) {
        *self = Nullable::Value(value);
    }

    pub fn set_null(&mut self) {
        *self = Nullable::Null;
    }

    pub fn unset(&mut self) {
        *self = Nullable::Absent;
    }

    pub fn as_ref(&self) -> Nullable<&T> {
        match self {
            Nullable::Absent => Nullable::Absent,
            Nullable::Null => Nullable::Null,
            Nullable::Value(value) => Nullable::Value(value),
        }
    }

    /// Collapses null and absent into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Nullable::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Default + Clone> Nullable<T> {
    /// Returns the held value or the type's zero value.
    pub fn get_or_default(&self) -> T {
        self.get().cloned().unwrap_or_default()
    }
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Nullable::Absent
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Nullable::Value(value),
            None => Nullable::Null,
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Nullable::Value(value) => value.serialize(serializer),
            Nullable::Null | Nullable::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only reached when the key is present; `#[serde(default)]` covers absence.
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}
