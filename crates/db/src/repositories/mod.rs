//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods.
//! Methods take any `PgExecutor`, so they run equally against the pool or
//! inside a caller-owned transaction (`&mut *tx`).

pub mod device_repo;

pub use device_repo::DeviceRepo;
