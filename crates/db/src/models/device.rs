//! Device row and its external representation.

use mdm_core::device::{DeviceStatus, StatusId};
use mdm_core::error::CoreError;
use mdm_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `devices` table.
#[derive(Debug, Clone, FromRow)]
pub struct DeviceRow {
    pub id: DbId,
    pub device_id: i64,
    pub device_name: String,
    pub status_id: StatusId,
    pub created_at: Timestamp,
}

/// Device as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub id: DbId,
    pub device_id: i64,
    pub device_name: String,
    pub status: DeviceStatus,
    pub created_at: Timestamp,
}

impl TryFrom<DeviceRow> for Device {
    type Error = CoreError;

    fn try_from(row: DeviceRow) -> Result<Self, Self::Error> {
        Ok(Device {
            id: row.id,
            device_id: row.device_id,
            device_name: row.device_name,
            status: DeviceStatus::from_id(row.status_id)?,
            created_at: row.created_at,
        })
    }
}
