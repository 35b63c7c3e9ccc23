//! Data models representing database entities and API wire types.

/// Payment collection transaction model
pub mod transaction;
