//! Lookup-or-fail.
//!
//! Every read, update and delete starts by resolving a key to exactly one
//! row. Storage hands back `Option<T>`; [`require`] turns an absent row into
//! a typed [`CoreError::NotFound`] so callers can propagate it with `?`.

use crate::error::CoreError;
use crate::types::DbId;

/// The key a lookup was made with, used to build the not-found message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LookupKey {
    pub entity: &'static str,
    pub field: &'static str,
    pub value: i64,
}

impl LookupKey {
    /// Device by surrogate primary key.
    pub fn device_id(id: DbId) -> Self {
        Self {
            entity: "Device",
            field: "id",
            value: id,
        }
    }

    /// Device by the caller-supplied `deviceId`.
    pub fn device_device_id(device_id: i64) -> Self {
        Self {
            entity: "Device",
            field: "deviceId",
            value: device_id,
        }
    }
}

impl From<LookupKey> for CoreError {
    fn from(key: LookupKey) -> Self {
        CoreError::NotFound {
            entity: key.entity,
            field: key.field,
            value: key.value,
        }
    }
}

/// Unwrap a looked-up row or fail with `NotFound` for `key`.
pub fn require<T>(row: Option<T>, key: LookupKey) -> Result<T, CoreError> {
    row.ok_or_else(|| key.into())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn present_row_is_returned() {
        assert_eq!(require(Some(5), LookupKey::device_id(1)).unwrap(), 5);
    }

    #[test]
    fn missing_row_by_id() {
        let err = require::<()>(None, LookupKey::device_id(999)).unwrap_err();
        assert_matches!(
            err,
            CoreError::NotFound {
                entity: "Device",
                field: "id",
                value: 999
            }
        );
        assert_eq!(err.to_string(), "Device with id 999 not found");
    }

    #[test]
    fn missing_row_by_device_id() {
        let err = require::<()>(None, LookupKey::device_device_id(101)).unwrap_err();
        assert_eq!(err.to_string(), "Device with deviceId 101 not found");
    }
}
