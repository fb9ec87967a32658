//! Row structs and their API representations.

pub mod device;
