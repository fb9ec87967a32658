//! Domain types for the device registry.
//!
//! Nothing in here knows about HTTP or SQL. The `db` and `api` crates build
//! on these types.

pub mod device;
pub mod error;
pub mod lookup;
pub mod types;
pub mod validation;
