//! Repository for the `devices` table.

use mdm_core::device::{DeviceFields, DeviceStatus};
use mdm_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::device::DeviceRow;

/// Column list for `devices` queries.
const COLUMNS: &str = "id, device_id, device_name, status_id, created_at";

/// Provides data access for devices.
pub struct DeviceRepo;

impl DeviceRepo {
    /// List every device in primary-key order.
    pub async fn list<'e, E>(executor: E) -> Result<Vec<DeviceRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM devices ORDER BY id");
        sqlx::query_as::<_, DeviceRow>(&query)
            .fetch_all(executor)
            .await
    }

    /// Find a device by its surrogate ID.
    pub async fn find_by_id<'e, E>(executor: E, id: DbId) -> Result<Option<DeviceRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM devices WHERE id = $1");
        sqlx::query_as::<_, DeviceRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a device by its surrogate ID and lock the row until the
    /// surrounding transaction ends.
    ///
    /// Only meaningful inside a transaction.
    pub async fn find_by_id_for_update<'e, E>(
        executor: E,
        id: DbId,
    ) -> Result<Option<DeviceRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("SELECT {COLUMNS} FROM devices WHERE id = $1 FOR UPDATE");
        sqlx::query_as::<_, DeviceRow>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }

    /// Find a device by the caller-supplied `device_id`.
    ///
    /// `device_id` is not unique; when several rows share it the one with the
    /// lowest surrogate ID is returned.
    pub async fn find_by_device_id<'e, E>(
        executor: E,
        device_id: i64,
    ) -> Result<Option<DeviceRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query =
            format!("SELECT {COLUMNS} FROM devices WHERE device_id = $1 ORDER BY id LIMIT 1");
        sqlx::query_as::<_, DeviceRow>(&query)
            .bind(device_id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a new device. `id` and `created_at` are assigned by the database.
    pub async fn create<'e, E>(executor: E, fields: &DeviceFields) -> Result<DeviceRow, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "INSERT INTO devices (device_id, device_name, status_id) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeviceRow>(&query)
            .bind(fields.device_id)
            .bind(&fields.device_name)
            .bind(fields.status.id())
            .fetch_one(executor)
            .await
    }

    /// Overwrite the mutable fields of a device. `id` and `created_at` are
    /// never touched.
    ///
    /// Returns `None` if no device has the given ID.
    pub async fn update<'e, E>(
        executor: E,
        id: DbId,
        fields: &DeviceFields,
    ) -> Result<Option<DeviceRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE devices SET \
                 device_id = $2, \
                 device_name = $3, \
                 status_id = $4 \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DeviceRow>(&query)
            .bind(id)
            .bind(fields.device_id)
            .bind(&fields.device_name)
            .bind(fields.status.id())
            .fetch_optional(executor)
            .await
    }

    /// Change only the status of a device.
    ///
    /// Returns `None` if no device has the given ID.
    pub async fn update_status<'e, E>(
        executor: E,
        id: DbId,
        status: DeviceStatus,
    ) -> Result<Option<DeviceRow>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!("UPDATE devices SET status_id = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, DeviceRow>(&query)
            .bind(id)
            .bind(status.id())
            .fetch_optional(executor)
            .await
    }

    /// Delete a device by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete<'e, E>(executor: E, id: DbId) -> Result<bool, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let result = sqlx::query("DELETE FROM devices WHERE id = $1")
            .bind(id)
            .execute(executor)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
