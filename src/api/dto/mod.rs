//! Request and response DTOs for the HTTP surface.
//!
//! Wire field names are camelCase to match the public API contract.

pub mod health;
pub mod shorten;
pub mod stats;
