//! Device status enumeration and request payloads.
//!
//! Requests carry `status` as a raw string so that an unknown value surfaces
//! as a field-level validation error instead of a JSON decoding failure.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{CoreError, FieldError};
use crate::validation::validate_request;

// ---------------------------------------------------------------------------
// Device status
// ---------------------------------------------------------------------------

/// Status ID type matching SMALLINT in the `device_statuses` lookup table.
pub type StatusId = i16;

/// Closed set of device states.
///
/// Discriminants match the seed rows in the `device_statuses` table.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeviceStatus {
    Active = 1,
    Inactive = 2,
    Blocked = 3,
}

impl DeviceStatus {
    pub const ALL: [DeviceStatus; 3] = [Self::Active, Self::Inactive, Self::Blocked];

    /// Parse a wire/status name. Matching is exact (`"active"` is rejected).
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "Invalid device status '{s}'. Must be one of: {}",
                    Self::ALL.map(Self::as_str).join(", ")
                ))
            })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Blocked => "BLOCKED",
        }
    }

    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Map a stored status ID back to the enumeration.
    pub fn from_id(id: StatusId) -> Result<Self, CoreError> {
        Self::ALL
            .into_iter()
            .find(|status| status.id() == id)
            .ok_or_else(|| CoreError::Internal(format!("Unknown device status id {id}")))
    }
}

impl std::fmt::Display for DeviceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Request payloads
// ---------------------------------------------------------------------------

/// At least one non-whitespace character.
static NOT_BLANK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S").expect("NOT_BLANK is a valid pattern"));

/// Body of `POST /devices` and `PUT /devices/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DeviceRequest {
    #[validate(required(message = "Device id is required"))]
    pub device_id: Option<i64>,

    #[validate(
        required(message = "Device name is required"),
        regex(path = *NOT_BLANK, message = "Device name is required")
    )]
    pub device_name: Option<String>,

    #[validate(
        required(message = "Status is required"),
        regex(path = *NOT_BLANK, message = "Status is required")
    )]
    pub status: Option<String>,
}

/// Body of `PATCH /devices/{id}`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct DeviceStatusRequest {
    #[validate(
        required(message = "Status is required"),
        regex(path = *NOT_BLANK, message = "Status is required")
    )]
    pub status: Option<String>,
}

/// The mutable fields of a device after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceFields {
    pub device_id: i64,
    pub device_name: String,
    pub status: DeviceStatus,
}

impl DeviceRequest {
    /// Validate the payload and resolve `status` to a [`DeviceStatus`].
    pub fn into_fields(self) -> Result<DeviceFields, CoreError> {
        validate_request(&self)?;

        let device_id = self
            .device_id
            .ok_or_else(|| missing("deviceId", "Device id is required"))?;
        let device_name = self
            .device_name
            .ok_or_else(|| missing("deviceName", "Device name is required"))?;
        let status = parse_status_field(self.status.as_deref())?;

        Ok(DeviceFields {
            device_id,
            device_name,
            status,
        })
    }
}

impl DeviceStatusRequest {
    /// Validate the payload and resolve `status` to a [`DeviceStatus`].
    pub fn into_status(self) -> Result<DeviceStatus, CoreError> {
        validate_request(&self)?;
        parse_status_field(self.status.as_deref())
    }
}

fn parse_status_field(raw: Option<&str>) -> Result<DeviceStatus, CoreError> {
    let raw = raw.ok_or_else(|| missing("status", "Status is required"))?;
    DeviceStatus::parse(raw).map_err(|err| match err {
        CoreError::Validation(message) => missing("status", &message),
        other => other,
    })
}

fn missing(field: &str, message: &str) -> CoreError {
    CoreError::InvalidFields(vec![FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }])
}
