//! Device operations.
//!
//! Handlers stay thin: they extract, call in here, and wrap the result.
//! Payload shape (required and not-blank fields) is checked before the
//! database is touched; `status` is resolved only after the target row is
//! known to exist, so a missing id wins over an unknown status. Mutations of
//! an existing row lock it (`FOR UPDATE`) inside one transaction, so the
//! existence check and the write cannot interleave with a concurrent delete.

use mdm_core::device::{DeviceRequest, DeviceStatusRequest};
use mdm_core::lookup::{require, LookupKey};
use mdm_core::types::DbId;
use mdm_core::validation::validate_request;
use mdm_db::models::device::Device;
use mdm_db::repositories::DeviceRepo;
use sqlx::PgPool;

use crate::error::AppResult;

/// Stateless device service; every method takes the pool explicitly.
pub struct DeviceService;

impl DeviceService {
    /// All devices in storage order.
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Device>> {
        let rows = DeviceRepo::list(pool).await?;
        let devices = rows
            .into_iter()
            .map(Device::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(devices)
    }

    pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<Device> {
        let row = require(
            DeviceRepo::find_by_id(pool, id).await?,
            LookupKey::device_id(id),
        )?;
        Ok(Device::try_from(row)?)
    }

    pub async fn get_by_device_id(pool: &PgPool, device_id: i64) -> AppResult<Device> {
        let row = require(
            DeviceRepo::find_by_device_id(pool, device_id).await?,
            LookupKey::device_device_id(device_id),
        )?;
        Ok(Device::try_from(row)?)
    }

    pub async fn create(pool: &PgPool, request: DeviceRequest) -> AppResult<Device> {
        let fields = request.into_fields()?;
        let row = DeviceRepo::create(pool, &fields).await?;
        let device = Device::try_from(row)?;

        tracing::info!(
            id = device.id,
            device_id = device.device_id,
            status = %device.status,
            "Device created",
        );

        Ok(device)
    }

    /// Replace `deviceId`, `deviceName` and `status`; `id` and `createdAt`
    /// are left untouched.
    pub async fn update(pool: &PgPool, id: DbId, request: DeviceRequest) -> AppResult<Device> {
        validate_request(&request)?;
        let key = LookupKey::device_id(id);

        let mut tx = pool.begin().await?;
        require(DeviceRepo::find_by_id_for_update(&mut *tx, id).await?, key)?;
        let fields = request.into_fields()?;
        let row = require(DeviceRepo::update(&mut *tx, id, &fields).await?, key)?;
        tx.commit().await?;

        let device = Device::try_from(row)?;

        tracing::info!(
            id,
            device_id = device.device_id,
            device_name = %device.device_name,
            status = %device.status,
            "Device updated",
        );

        Ok(device)
    }

    /// Change only the status of a device.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        request: DeviceStatusRequest,
    ) -> AppResult<Device> {
        validate_request(&request)?;
        let key = LookupKey::device_id(id);

        let mut tx = pool.begin().await?;
        require(DeviceRepo::find_by_id_for_update(&mut *tx, id).await?, key)?;
        let status = request.into_status()?;
        let row = require(DeviceRepo::update_status(&mut *tx, id, status).await?, key)?;
        tx.commit().await?;

        tracing::info!(id, %status, "Device status updated");

        Ok(Device::try_from(row)?)
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<()> {
        let key = LookupKey::device_id(id);

        let mut tx = pool.begin().await?;
        require(DeviceRepo::find_by_id_for_update(&mut *tx, id).await?, key)?;
        DeviceRepo::delete(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!(id, "Device deleted");

        Ok(())
    }
}
