//! Service layer between handlers and repositories.

pub mod device_service;

pub use device_service::DeviceService;
